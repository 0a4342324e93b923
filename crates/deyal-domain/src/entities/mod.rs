//! Domain entities.

mod mission_info;
mod notification;
mod user;

pub use mission_info::*;
pub use notification::*;
pub use user::*;
