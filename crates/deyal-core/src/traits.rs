//! Core traits shared across layers.

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;
}

/// Trait for entities guarded by an optimistic-concurrency token.
///
/// Stores compare the version of an incoming entity with the stored one and
/// bump it on every successful write.
pub trait Versioned {
    /// Returns the version the entity was loaded at.
    fn version(&self) -> u64;

    /// Sets the version after a successful write.
    fn set_version(&mut self, version: u64);
}
