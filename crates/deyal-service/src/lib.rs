//! # Deyal Service
//!
//! User management: lookups, email checks, mission bookkeeping, ratings and
//! notifications, wired together with shaku.

pub mod di;
pub mod r#impl;
pub mod user_service;

pub use di::*;
pub use r#impl::*;
pub use user_service::*;
