//! User service implementation.

use crate::user_service::UserService;
use async_trait::async_trait;
use deyal_core::{DeyalError, DeyalResult, MissionId, UserId};
use deyal_domain::{
    EmailSyntaxChecker, MissionTransition, Notification, RatingTransition, ReputationPolicy, User,
};
use deyal_repository::UserStore;
use shaku::Component;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// User service backed by a [`UserStore`].
///
/// Mutations are read-modify-write over the whole user record. A write that
/// loses a race surfaces the store's `ConcurrentModification` error.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_store: Arc<dyn UserStore>,
    #[shaku(inject)]
    email_checker: Arc<dyn EmailSyntaxChecker>,
    reputation_policy: ReputationPolicy,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        email_checker: Arc<dyn EmailSyntaxChecker>,
        reputation_policy: ReputationPolicy,
    ) -> Self {
        Self {
            user_store,
            email_checker,
            reputation_policy,
        }
    }

    async fn load_user(&self, id: UserId) -> DeyalResult<User> {
        self.user_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DeyalError::not_found("User", id))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn find_all_users(&self) -> DeyalResult<Vec<User>> {
        debug!("Listing all users");
        self.user_store.find_all().await
    }

    async fn delete_user(&self, user: &User) -> DeyalResult<bool> {
        debug!("Deleting user: {}", user.id);

        let removed = self.user_store.delete(user.id).await?;
        if removed {
            info!("User deleted: {}", user.id);
        }
        Ok(removed)
    }

    async fn insert_user(&self, user: &User) -> DeyalResult<User> {
        debug!("Inserting user: {}", user.id);

        let stored = self.user_store.insert(user).await?;
        info!("User inserted: {}", stored.id);
        Ok(stored)
    }

    async fn update_user(&self, user: &User) -> DeyalResult<User> {
        debug!("Updating user: {}", user.id);

        let stored = self.user_store.save(user).await?;
        info!("User updated: {}", stored.id);
        Ok(stored)
    }

    async fn retrieve_user_by_email(&self, email: &str) -> DeyalResult<User> {
        debug!("Getting user by email: {}", email);

        self.user_store
            .find_by_email(email)
            .await?
            .ok_or_else(|| DeyalError::EmailNotFound(email.to_string()))
    }

    async fn retrieve_user_by_id(&self, id: UserId) -> DeyalResult<User> {
        debug!("Getting user: {}", id);
        self.load_user(id).await
    }

    async fn validate_email(&self, email: &str) -> DeyalResult<()> {
        debug!("Validating email: {}", email);

        if !self.email_checker.is_valid(email) {
            return Err(DeyalError::InvalidEmail(email.to_string()));
        }

        if self.user_store.find_by_email(email).await?.is_some() {
            return Err(DeyalError::EmailExists(email.to_string()));
        }

        Ok(())
    }

    async fn user_name_map(&self) -> DeyalResult<HashMap<UserId, String>> {
        debug!("Building user name map");

        let users = self.user_store.find_all().await?;
        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }

    async fn add_mission_to_user(
        &self,
        user_id: UserId,
        mission_id: &MissionId,
        transition: MissionTransition,
    ) -> DeyalResult<()> {
        debug!("Adding mission {} to user {}: {:?}", mission_id, user_id, transition);

        let mut user = self.load_user(user_id).await?;

        if !user.apply_mission(transition, mission_id) {
            debug!("Mission {} already registered for user {}", mission_id, user_id);
            return Ok(());
        }

        self.user_store.save(&user).await?;

        info!("Mission {} recorded for user {}: {:?}", mission_id, user_id, transition);
        Ok(())
    }

    async fn change_rating(&self, user_id: UserId, transition: RatingTransition) -> DeyalResult<()> {
        debug!("Changing rating of user {}: {:?}", user_id, transition);

        let mut user = self.load_user(user_id).await?;
        user.apply_rating(transition, &self.reputation_policy);

        let saved = self.user_store.save(&user).await?;

        info!("Rating changed for user {}, reputation now {}", user_id, saved.reputation);
        Ok(())
    }

    async fn add_notification_to_user(
        &self,
        user_id: UserId,
        message: &str,
        mission_id: Option<MissionId>,
    ) -> DeyalResult<()> {
        debug!("Adding notification to user {}", user_id);

        let mut user = self.load_user(user_id).await?;
        user.push_notification(Notification::new(message, mission_id));

        self.user_store.save(&user).await?;

        info!("Notification added for user {}", user_id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl")
            .field("reputation_policy", &self.reputation_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deyal_domain::{Email, Rating, ValidatorEmailChecker, RATING_INITIAL};
    use deyal_repository::InMemoryUserStore;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Store {}

        #[async_trait]
        impl UserStore for Store {
            async fn find_all(&self) -> DeyalResult<Vec<User>>;
            async fn find_by_id(&self, id: UserId) -> DeyalResult<Option<User>>;
            async fn find_by_email(&self, email: &str) -> DeyalResult<Option<User>>;
            async fn insert(&self, user: &User) -> DeyalResult<User>;
            async fn save(&self, user: &User) -> DeyalResult<User>;
            async fn delete(&self, id: UserId) -> DeyalResult<bool>;
        }
    }

    fn create_test_user(username: &str, email: &str) -> User {
        User::new(username, Email::new_unchecked(email))
    }

    fn service_with(users: Vec<User>) -> (UserServiceImpl, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::with_users(users));
        let service = UserServiceImpl::new(
            store.clone(),
            Arc::new(ValidatorEmailChecker::new()),
            ReputationPolicy::default(),
        );
        (service, store)
    }

    fn service_with_mock(store: MockStore) -> UserServiceImpl {
        UserServiceImpl::new(
            Arc::new(store),
            Arc::new(ValidatorEmailChecker::new()),
            ReputationPolicy::default(),
        )
    }

    #[tokio::test]
    async fn test_retrieve_user_by_email() {
        let user = create_test_user("alice", "alice@example.com");
        let (service, _) = service_with(vec![user.clone()]);

        let found = service.retrieve_user_by_email("Alice@Example.com").await.unwrap();
        assert_eq!(found.id, user.id);

        let err = service.retrieve_user_by_email("bob@example.com").await.unwrap_err();
        assert!(matches!(err, DeyalError::EmailNotFound(ref e) if e == "bob@example.com"));
    }

    #[tokio::test]
    async fn test_retrieve_user_by_id() {
        let user = create_test_user("alice", "alice@example.com");
        let (service, _) = service_with(vec![user.clone()]);

        assert_eq!(service.retrieve_user_by_id(user.id).await.unwrap().username, "alice");

        let err = service.retrieve_user_by_id(UserId::new()).await.unwrap_err();
        assert!(matches!(err, DeyalError::NotFound { resource_type: "User", .. }));
    }

    #[tokio::test]
    async fn test_validate_email_rejects_bad_syntax_first() {
        let (service, _) = service_with(vec![]);
        let err = service.validate_email("not-an-email").await.unwrap_err();
        assert!(matches!(err, DeyalError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_validate_email_registered() {
        let (service, _) = service_with(vec![create_test_user("a", "a@b.com")]);
        let err = service.validate_email("a@b.com").await.unwrap_err();
        assert!(matches!(err, DeyalError::EmailExists(_)));
    }

    #[tokio::test]
    async fn test_validate_email_available() {
        let (service, _) = service_with(vec![create_test_user("a", "a@b.com")]);
        assert!(service.validate_email("new@b.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_user_name_map() {
        let alice = create_test_user("alice", "alice@example.com");
        let bob = create_test_user("bob", "bob@example.com");
        let (service, _) = service_with(vec![alice.clone(), bob.clone()]);

        let names = service.user_name_map().await.unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[&alice.id], "alice");
        assert_eq!(names[&bob.id], "bob");
    }

    #[tokio::test]
    async fn test_insert_update_delete_pass_through() {
        let (service, store) = service_with(vec![]);
        let user = create_test_user("alice", "alice@example.com");

        let mut stored = service.insert_user(&user).await.unwrap();
        stored.username = "alicia".to_string();
        service.update_user(&stored).await.unwrap();
        assert_eq!(service.retrieve_user_by_id(user.id).await.unwrap().username, "alicia");

        assert!(service.delete_user(&stored).await.unwrap());
        assert!(store.is_empty().await);
        assert!(service.find_all_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_mission_twice_registers_once() {
        let user = create_test_user("alice", "alice@example.com");
        let (service, store) = service_with(vec![user.clone()]);
        let mission = MissionId::new("m-1");

        service.add_mission_to_user(user.id, &mission, MissionTransition::Create).await.unwrap();
        service.add_mission_to_user(user.id, &mission, MissionTransition::Create).await.unwrap();

        let stored = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.mission_info.created, vec![mission]);
        // The guarded second call did not write.
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_ongoing_then_completed() {
        let user = create_test_user("alice", "alice@example.com");
        let (service, _) = service_with(vec![user.clone()]);
        let mission = MissionId::new("m-1");

        service.add_mission_to_user(user.id, &mission, MissionTransition::Ongoing).await.unwrap();
        service.add_mission_to_user(user.id, &mission, MissionTransition::Completed).await.unwrap();

        let stored = service.retrieve_user_by_id(user.id).await.unwrap();
        assert!(stored.mission_info.ongoing.is_empty());
        assert_eq!(stored.mission_info.completed, vec![mission]);
    }

    #[tokio::test]
    async fn test_ongoing_then_failed() {
        let user = create_test_user("alice", "alice@example.com");
        let (service, _) = service_with(vec![user.clone()]);
        let mission = MissionId::new("m-1");

        service.add_mission_to_user(user.id, &mission, MissionTransition::Ongoing).await.unwrap();
        service.add_mission_to_user(user.id, &mission, MissionTransition::Failed).await.unwrap();
        // Terminal missions ignore later changes.
        service.add_mission_to_user(user.id, &mission, MissionTransition::Completed).await.unwrap();

        let stored = service.retrieve_user_by_id(user.id).await.unwrap();
        assert!(stored.mission_info.ongoing.is_empty());
        assert!(stored.mission_info.completed.is_empty());
        assert_eq!(stored.mission_info.failed, vec![mission]);
    }

    #[tokio::test]
    async fn test_add_mission_unknown_user() {
        let (service, _) = service_with(vec![]);
        let err = service
            .add_mission_to_user(UserId::new(), &MissionId::new("m-1"), MissionTransition::Create)
            .await
            .unwrap_err();
        assert!(matches!(err, DeyalError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_decrease_more_equals_three_decreases() {
        let first = create_test_user("alice", "alice@example.com");
        let second = create_test_user("bob", "bob@example.com");
        let (service, _) = service_with(vec![first.clone(), second.clone()]);

        service.change_rating(first.id, RatingTransition::ClientDecreaseMore).await.unwrap();
        for _ in 0..3 {
            service.change_rating(second.id, RatingTransition::ClientDecrease).await.unwrap();
        }

        let first = service.retrieve_user_by_id(first.id).await.unwrap();
        let second = service.retrieve_user_by_id(second.id).await.unwrap();
        assert_eq!(first.mission_info.client_rating, second.mission_info.client_rating);
        assert_eq!(first.mission_info.client_rating, Rating::new(RATING_INITIAL - 3));
        assert_eq!(first.reputation, second.reputation);
    }

    #[tokio::test]
    async fn test_change_rating_updates_reputation() {
        let user = create_test_user("alice", "alice@example.com");
        let (service, _) = service_with(vec![user.clone()]);

        service.change_rating(user.id, RatingTransition::ContractorIncrease).await.unwrap();
        service.change_rating(user.id, RatingTransition::ContractorIncrease).await.unwrap();

        let stored = service.retrieve_user_by_id(user.id).await.unwrap();
        assert_eq!(stored.mission_info.contractor_rating.value(), 7);
        assert_eq!(stored.reputation, 60);
    }

    #[tokio::test]
    async fn test_notifications_append_in_order() {
        let user = create_test_user("alice", "alice@example.com");
        let (service, _) = service_with(vec![user.clone()]);
        let mission = MissionId::new("m-1");

        service
            .add_notification_to_user(user.id, "first", Some(mission.clone()))
            .await
            .unwrap();
        service.add_notification_to_user(user.id, "second", None).await.unwrap();

        let stored = service.retrieve_user_by_id(user.id).await.unwrap();
        let messages: Vec<_> = stored.notifications.iter().map(Notification::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(stored.notifications[0].mission_id(), Some(&mission));
        assert!(stored.notifications[1].mission_id().is_none());
    }

    #[tokio::test]
    async fn test_lookup_failure_aborts_before_save() {
        let mut store = MockStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_save().never();

        let service = service_with_mock(store);
        let err = service
            .add_notification_to_user(UserId::new(), "hello", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DeyalError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_save_conflict_propagates() {
        let user = create_test_user("alice", "alice@example.com");
        let user_id = user.id;

        let mut store = MockStore::new();
        store
            .expect_find_by_id()
            .with(eq(user_id))
            .returning(move |_| Ok(Some(user.clone())));
        store.expect_save().times(1).returning(move |u| {
            Err(DeyalError::ConcurrentModification {
                id: u.id.to_string(),
                expected: u.version,
                actual: u.version + 1,
            })
        });

        let service = service_with_mock(store);
        let err = service
            .change_rating(user_id, RatingTransition::ClientIncrease)
            .await
            .unwrap_err();
        assert!(err.is_retriable());
    }

    #[tokio::test]
    async fn test_store_error_propagates_unchanged() {
        let mut store = MockStore::new();
        store
            .expect_find_all()
            .returning(|| Err(DeyalError::internal("store unavailable")));

        let service = service_with_mock(store);
        let err = service.user_name_map().await.unwrap_err();
        assert!(matches!(err, DeyalError::Internal(ref msg) if msg == "store unavailable"));
    }

    #[tokio::test]
    async fn test_validate_email_skips_store_for_bad_syntax() {
        let mut store = MockStore::new();
        store.expect_find_by_email().never();

        let service = service_with_mock(store);
        assert!(matches!(
            service.validate_email("nope").await,
            Err(DeyalError::InvalidEmail(_))
        ));
    }
}
