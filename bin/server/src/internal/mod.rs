pub mod avatar;
pub mod login;
pub mod password;
