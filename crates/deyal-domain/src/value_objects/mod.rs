//! Domain value objects.

mod email;
mod rating;
mod request_type;

pub use email::*;
pub use rating::*;
pub use request_type::*;
