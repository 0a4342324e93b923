//! # Deyal Repository
//!
//! Persistence boundary of the user manager.
//!
//! ```text
//! UserService
//!   ↓  Arc<dyn UserStore>   (store interface)
//! InMemoryUserStore         (reference implementation)
//! ```
//!
//! Every write goes through optimistic versioning: a save carrying a stale
//! [`User::version`](deyal_domain::User) is rejected with
//! [`DeyalError::ConcurrentModification`](deyal_core::DeyalError).

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
