pub mod post;
pub mod profile;
pub mod user;
pub mod validation;

pub use post::{Comment, Like, LikeError, Post};
pub use profile::{Education, Experience, Profile, SocialLinks};
pub use user::User;

pub mod aliases {
    pub type UserId = uuid::Uuid;
    pub type PostId = uuid::Uuid;
    pub type CommentId = uuid::Uuid;
    pub type ExperienceId = uuid::Uuid;
    pub type EducationId = uuid::Uuid;
}
