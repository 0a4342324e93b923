//! Dependency injection module using Shaku.
//!
//! `UserManagerModule` wires the in-memory user store, the email syntax
//! checker and the user service into a single container.

use crate::r#impl::{UserServiceImpl, UserServiceImplParameters};
use crate::user_service::UserService;
use deyal_config::AppConfig;
use deyal_core::DeyalResult;
use deyal_domain::{EmailSyntaxChecker, ValidatorEmailChecker};
use deyal_repository::{
    index_users, load_seed_users, InMemoryUserStore, InMemoryUserStoreParameters, UserStore,
};
use shaku::{module, HasComponent};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

module! {
    pub UserManagerModule {
        components = [
            InMemoryUserStore,
            ValidatorEmailChecker,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the user manager module from application configuration.
///
/// The store is preloaded from `store.seed_path` when one is configured.
pub async fn build_user_manager_module(config: &AppConfig) -> DeyalResult<Arc<UserManagerModule>> {
    let seed_users = match config.store.seed_path.as_deref() {
        Some(path) => load_seed_users(path).await?,
        None => Vec::new(),
    };

    info!(
        "Building user manager module with {} seed users, reputation weights {}/{}",
        seed_users.len(),
        config.reputation.client_weight,
        config.reputation.contractor_weight
    );

    let module = UserManagerModule::builder()
        .with_component_parameters::<InMemoryUserStore>(InMemoryUserStoreParameters {
            users: RwLock::new(index_users(seed_users)),
        })
        .with_component_parameters::<UserServiceImpl>(UserServiceImplParameters {
            reputation_policy: config.reputation,
        })
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving the user manager's components.
pub trait UserManagerResolver {
    /// Resolves the user service from the module.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the user store from the module.
    fn user_store(&self) -> Arc<dyn UserStore>;

    /// Resolves the email syntax checker from the module.
    fn email_checker(&self) -> Arc<dyn EmailSyntaxChecker>;
}

impl UserManagerResolver for UserManagerModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn user_store(&self) -> Arc<dyn UserStore> {
        self.resolve()
    }

    fn email_checker(&self) -> Arc<dyn EmailSyntaxChecker> {
        self.resolve()
    }
}
