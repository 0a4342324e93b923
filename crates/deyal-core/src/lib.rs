//! # Deyal Core
//!
//! Core types, traits, and error definitions shared by every layer of the
//! Deyal user manager.

pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
