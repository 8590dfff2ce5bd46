//! Bearer credential holder shared between the auth state and the HTTP client.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Where the active bearer token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Provider(String),
    Demo(String),
}

impl Credential {
    pub fn token(&self) -> &str {
        match self {
            Credential::Provider(token) | Credential::Demo(token) => token,
        }
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token())
    }
}

#[derive(Debug, Default)]
struct Slots {
    provider: Option<String>,
    demo: Option<String>,
}

/// Current credential, injected into [`crate::api::ApiClient`] at construction.
///
/// Cloning shares the same slots. The provider token takes precedence over the
/// demo token whenever both are set.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    slots: Arc<RwLock<Slots>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_provider(&self, token: impl Into<String>) {
        self.write().provider = Some(token.into());
    }

    pub fn set_demo(&self, token: impl Into<String>) {
        self.write().demo = Some(token.into());
    }

    pub fn clear_provider(&self) {
        self.write().provider = None;
    }

    pub fn clear_demo(&self) {
        self.write().demo = None;
    }

    pub fn clear(&self) {
        let mut slots = self.write();
        slots.provider = None;
        slots.demo = None;
    }

    /// The credential to attach to the next request, if any.
    pub fn current(&self) -> Option<Credential> {
        let slots = self.read();
        slots
            .provider
            .clone()
            .map(Credential::Provider)
            .or_else(|| slots.demo.clone().map(Credential::Demo))
    }

    fn read(&self) -> RwLockReadGuard<'_, Slots> {
        self.slots.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slots> {
        self.slots.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_credential() {
        assert_eq!(CredentialStore::new().current(), None);
    }

    #[test]
    fn test_provider_takes_precedence() {
        let store = CredentialStore::new();
        store.set_demo("demo-token");
        assert_eq!(store.current(), Some(Credential::Demo("demo-token".into())));

        store.set_provider("provider-token");
        assert_eq!(
            store.current(),
            Some(Credential::Provider("provider-token".into()))
        );

        store.clear_provider();
        assert_eq!(store.current(), Some(Credential::Demo("demo-token".into())));
    }

    #[test]
    fn test_clones_share_state() {
        let store = CredentialStore::new();
        let held_by_client = store.clone();
        store.set_demo("abc");
        assert_eq!(
            held_by_client.current().map(|c| c.header_value()),
            Some("Bearer abc".to_string())
        );
        store.clear();
        assert_eq!(held_by_client.current(), None);
    }
}
