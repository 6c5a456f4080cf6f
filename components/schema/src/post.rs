//! Feed documents.
//!
//! A post owns two embedded sequences, likes and comments, both ordered
//! most-recent-first. All mutation here is pure; persistence rewrites the
//! whole sequence under the parent document, so two concurrent writers to
//! the same post are last-write-wins at the document level.

use chrono::{DateTime, Utc};

use crate::aliases::{CommentId, PostId, UserId};

/// A single like, keyed by the liking user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Like {
    pub user: UserId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user: UserId,
    pub text: String,

    /// Author name/avatar snapshot taken at comment time, deliberately not
    /// kept in sync with later user edits.
    pub name: String,
    pub avatar: String,

    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user: UserId,
    pub text: String,

    /// Author snapshot at creation time.
    pub name: String,
    pub avatar: String,

    #[serde(default)]
    pub likes: Vec<Like>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LikeError {
    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not been liked")]
    NotLiked,
}

impl Post {
    pub fn new(user: UserId, text: String, name: String, avatar: String) -> Post {
        Post {
            id: PostId::new_v4(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn liked_by(&self, user: UserId) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }

    /// Registers a like, at most one per user per post.
    pub fn like(&mut self, user: UserId) -> Result<(), LikeError> {
        if self.liked_by(user) {
            return Err(LikeError::AlreadyLiked);
        }

        self.likes.insert(0, Like { user });
        Ok(())
    }

    /// Removes an existing like; liking must have happened first.
    pub fn unlike(&mut self, user: UserId) -> Result<(), LikeError> {
        let Some(idx) = self.likes.iter().position(|like| like.user == user) else {
            return Err(LikeError::NotLiked);
        };

        self.likes.remove(idx);
        Ok(())
    }

    /// Prepends a comment and returns its generated id.
    pub fn add_comment(&mut self, user: UserId, text: String, name: String, avatar: String) -> CommentId {
        let comment = Comment {
            id: CommentId::new_v4(),
            user,
            text,
            name,
            avatar,
            date: Utc::now(),
        };

        let id = comment.id;
        self.comments.insert(0, comment);
        id
    }

    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub fn edit_comment(&mut self, id: CommentId, text: String) -> bool {
        match self.comments.iter_mut().find(|comment| comment.id == id) {
            Some(comment) => {
                comment.text = text;
                true
            }
            None => false,
        }
    }

    /// Splices out a comment by id; absent ids leave the sequence untouched.
    pub fn remove_comment(&mut self, id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|comment| comment.id != id);
        self.comments.len() != before
    }

    /// Comments may be deleted by their own author or by the post's owner.
    pub fn comment_deletable_by(&self, comment: &Comment, user: UserId) -> bool {
        comment.user == user || self.user == user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(owner: UserId) -> Post {
        Post::new(
            owner,
            "hello".to_owned(),
            "A".to_owned(),
            "https://example.com/a".to_owned(),
        )
    }

    #[test]
    fn new_posts_have_empty_sequences() {
        let p = post(UserId::new_v4());

        assert!(p.likes.is_empty());
        assert!(p.comments.is_empty());
    }

    #[test]
    fn double_like_is_rejected() {
        let mut p = post(UserId::new_v4());
        let liker = UserId::new_v4();

        p.like(liker).unwrap();
        assert_eq!(p.likes.len(), 1);
        assert_eq!(p.likes[0].user, liker);

        assert_eq!(p.like(liker), Err(LikeError::AlreadyLiked));
        assert_eq!(p.likes.len(), 1);
    }

    #[test]
    fn unlike_requires_a_prior_like() {
        let mut p = post(UserId::new_v4());

        assert_eq!(p.unlike(UserId::new_v4()), Err(LikeError::NotLiked));
    }

    #[test]
    fn like_then_unlike_restores_the_count() {
        let mut p = post(UserId::new_v4());
        let bystander = UserId::new_v4();
        let liker = UserId::new_v4();

        p.like(bystander).unwrap();

        p.like(liker).unwrap();
        p.unlike(liker).unwrap();

        assert_eq!(p.likes.len(), 1);
        assert!(p.liked_by(bystander));
        assert!(!p.liked_by(liker));
    }

    #[test]
    fn likes_and_comments_are_most_recent_first() {
        let mut p = post(UserId::new_v4());
        let first = UserId::new_v4();
        let second = UserId::new_v4();

        p.like(first).unwrap();
        p.like(second).unwrap();
        assert_eq!(p.likes[0].user, second);

        p.add_comment(first, "one".to_owned(), "F".to_owned(), String::new());
        p.add_comment(second, "two".to_owned(), "S".to_owned(), String::new());
        assert_eq!(p.comments[0].text, "two");
        assert_eq!(p.comments[1].text, "one");
    }

    #[test]
    fn comment_removal_by_id() {
        let mut p = post(UserId::new_v4());
        let commenter = UserId::new_v4();

        let keep = p.add_comment(commenter, "keep".to_owned(), "C".to_owned(), String::new());
        let gone = p.add_comment(commenter, "gone".to_owned(), "C".to_owned(), String::new());

        assert!(p.remove_comment(gone));
        assert_eq!(p.comments.len(), 1);
        assert_eq!(p.comments[0].id, keep);

        // absent id is a no-op
        assert!(!p.remove_comment(gone));
        assert_eq!(p.comments.len(), 1);
    }

    #[test]
    fn comment_deletion_permits_author_and_post_owner_only() {
        let owner = UserId::new_v4();
        let commenter = UserId::new_v4();
        let stranger = UserId::new_v4();

        let mut p = post(owner);
        let id = p.add_comment(commenter, "hi".to_owned(), "C".to_owned(), String::new());
        let comment = p.comment(id).unwrap().clone();

        assert!(p.comment_deletable_by(&comment, commenter));
        assert!(p.comment_deletable_by(&comment, owner));
        assert!(!p.comment_deletable_by(&comment, stranger));
    }
}
