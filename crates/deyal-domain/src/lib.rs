//! # Deyal Domain
//!
//! The `User` aggregate with its mission bookkeeping, ratings and
//! notifications, the request kinds that mutate it, and the pure reputation
//! function.

pub mod entities;
pub mod reputation;
pub mod transitions;
pub mod value_objects;

pub use entities::*;
pub use reputation::*;
pub use transitions::*;
pub use value_objects::*;
