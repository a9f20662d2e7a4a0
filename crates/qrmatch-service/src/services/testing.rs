//! In-memory repository fakes for service tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use qrmatch_common::hash_password;
use qrmatch_core::entities::{AccessToken, Notification, User, UserMatch};
use qrmatch_core::error::DomainError;
use qrmatch_core::traits::{
    AccessTokenRepository, MatchRepository, NotificationRepository, RepoResult, UserRepository,
};
use qrmatch_core::{Snowflake, SnowflakeGenerator};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: HashMap<Snowflake, (User, String)>,
    tokens: Vec<AccessToken>,
    matches: Vec<UserMatch>,
    notifications: Vec<Notification>,
    fail_notification_writes: bool,
}

/// One store backing all four repository traits, so a "transaction" is one lock
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    ids: SnowflakeGenerator,
}

impl InMemoryStore {
    pub fn seed_user(&self, email: &str, password: &str) -> User {
        let user = User::new(
            self.ids.generate(),
            "Test".to_string(),
            "User".to_string(),
            email.to_string(),
            "0600000000".to_string(),
        );
        let hash = hash_password(password).unwrap();
        self.state.lock().users.insert(user.id, (user.clone(), hash));
        user
    }

    /// Make every following notification insert fail
    pub fn fail_notification_writes(&self) {
        self.state.lock().fail_notification_writes = true;
    }

    pub fn match_count(&self) -> usize {
        self.state.lock().matches.len()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.state.lock().notifications.clone()
    }

    pub fn tokens(&self) -> Vec<AccessToken> {
        self.state.lock().tokens.clone()
    }

    pub fn expire_tokens_of(&self, user_id: Snowflake) {
        let past = Utc::now() - chrono::Duration::seconds(1);
        for token in &mut self.state.lock().tokens {
            if token.user_id == user_id {
                token.expires_at = past;
            }
        }
    }
}

fn newest_first<T, F>(mut items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> Snowflake,
{
    items.sort_by_key(|item| std::cmp::Reverse(key(item)));
    items
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        let state = self.state.lock();
        Ok(ids
            .iter()
            .filter_map(|id| state.users.get(id).map(|(u, _)| u.clone()))
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.values().any(|(u, _)| u.email == email))
    }

    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        Ok(self.state.lock().users.contains_key(&id))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.users.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        state
            .users
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self.state.lock().users.get(&id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl AccessTokenRepository for InMemoryStore {
    async fn create(&self, token: &AccessToken) -> RepoResult<()> {
        self.state.lock().tokens.push(token.clone());
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<AccessToken>> {
        Ok(self
            .state
            .lock()
            .tokens
            .iter()
            .find(|t| t.token_hash == token_hash)
            .cloned())
    }

    async fn touch(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()> {
        if let Some(token) = self.state.lock().tokens.iter_mut().find(|t| t.id == id) {
            token.last_used_at = Some(at);
        }
        Ok(())
    }

    async fn delete_by_hash(&self, token_hash: &str) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let before = state.tokens.len();
        state.tokens.retain(|t| t.token_hash != token_hash);
        Ok(state.tokens.len() < before)
    }

    async fn delete_expired_for_user(
        &self,
        user_id: Snowflake,
        now: DateTime<Utc>,
    ) -> RepoResult<u64> {
        let mut state = self.state.lock();
        let before = state.tokens.len();
        state
            .tokens
            .retain(|t| !(t.user_id == user_id && t.is_expired_at(now)));
        Ok((before - state.tokens.len()) as u64)
    }
}

#[async_trait]
impl MatchRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<UserMatch>> {
        Ok(self.state.lock().matches.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_scanner(&self, user_id: Snowflake) -> RepoResult<Vec<UserMatch>> {
        let found = self
            .state
            .lock()
            .matches
            .iter()
            .filter(|m| m.scanner_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(found, |m| m.id))
    }

    async fn find_by_scanned(&self, user_id: Snowflake) -> RepoResult<Vec<UserMatch>> {
        let found = self
            .state
            .lock()
            .matches
            .iter()
            .filter(|m| m.scanned_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(found, |m| m.id))
    }

    async fn create_with_notification(
        &self,
        user_match: &UserMatch,
        notification: &Notification,
    ) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.fail_notification_writes {
            return Err(DomainError::DatabaseError("notification insert failed".into()));
        }
        state.matches.push(user_match.clone());
        state.notifications.push(notification.clone());
        Ok(())
    }

    async fn accept_with_notification(
        &self,
        match_id: Snowflake,
        recipient_id: Snowflake,
        notification_id: Snowflake,
    ) -> RepoResult<Option<(UserMatch, Notification)>> {
        let mut state = self.state.lock();
        if state.fail_notification_writes {
            return Err(DomainError::DatabaseError("notification insert failed".into()));
        }

        let Some(m) = state
            .matches
            .iter_mut()
            .find(|m| m.id == match_id && m.scanned_id == recipient_id)
        else {
            return Ok(None);
        };

        m.accept();
        let updated = m.clone();
        let notification = Notification::acceptance(notification_id, &updated);
        state.notifications.push(notification.clone());
        Ok(Some((updated, notification)))
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn find_for_user(&self, user_id: Snowflake) -> RepoResult<Vec<Notification>> {
        let found = self
            .state
            .lock()
            .notifications
            .iter()
            .filter(|n| n.involves(user_id))
            .cloned()
            .collect();
        Ok(newest_first(found, |n| n.id))
    }

    async fn mark_read(
        &self,
        id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Notification>> {
        let mut state = self.state.lock();
        Ok(state
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.involves(user_id))
            .map(|n| {
                n.mark_read();
                n.clone()
            }))
    }

    async fn count_unread_addressed_to(&self, user_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .state
            .lock()
            .notifications
            .iter()
            .filter(|n| !n.read && n.is_addressed_to(user_id))
            .count() as i64)
    }
}

/// Service context over a fresh in-memory store
pub fn context() -> (ServiceContext, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .token_repo(store.clone())
        .match_repo(store.clone())
        .notification_repo(store.clone())
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(7)))
        .build()
        .unwrap();
    (ctx, store)
}
