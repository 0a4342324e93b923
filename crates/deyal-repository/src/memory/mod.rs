//! In-memory user store.

mod seed;
mod user_store;

pub use seed::*;
pub use user_store::*;
