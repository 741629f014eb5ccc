mod entity;
mod user_id;

pub use entity::{User, MAX_USERNAME_LEN};
pub use user_id::UserId;

pub(crate) use entity::validate_username;
