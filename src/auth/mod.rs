//! Session handling for provider and demo sign-ins.
//!
//! [`AuthState`] owns both session kinds, keeps the shared [`CredentialStore`]
//! in step with them, and resolves the current [`Identity`].

mod credentials;
mod identity;
mod session;

pub use credentials::*;
pub use identity::*;
pub use session::*;

use crate::errors::ClientResult;

/// Sessions for the current viewer and the credential holder they drive.
#[derive(Debug)]
pub struct AuthState {
    credentials: CredentialStore,
    store: SessionStore,
    provider: Option<ProviderSession>,
    demo: Option<DemoSession>,
}

impl AuthState {
    /// Create an empty state. Nothing is loaded from disk.
    pub fn new(credentials: CredentialStore, store: SessionStore) -> Self {
        Self {
            credentials,
            store,
            provider: None,
            demo: None,
        }
    }

    /// Restore the persisted demo session (if any) and apply an optional
    /// provider session on top.
    pub async fn restore(
        credentials: CredentialStore,
        store: SessionStore,
        provider: Option<ProviderSession>,
    ) -> ClientResult<Self> {
        let mut state = Self::new(credentials, store);

        if let Some(session) = state.store.load().await? {
            tracing::debug!("Restored demo session for user {}", session.user.id);
            state.credentials.set_demo(session.token.clone());
            state.demo = Some(session);
        }
        if let Some(session) = provider {
            state.start_provider(session);
        }

        Ok(state)
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn provider(&self) -> Option<&ProviderSession> {
        self.provider.as_ref()
    }

    pub fn demo(&self) -> Option<&DemoSession> {
        self.demo.as_ref()
    }

    /// The single identity views should render for.
    pub fn identity(&self) -> Identity {
        Identity::resolve(self.provider.as_ref(), self.demo.as_ref())
    }

    pub fn start_provider(&mut self, session: ProviderSession) {
        self.credentials.set_provider(session.access_token.clone());
        self.provider = Some(session);
    }

    /// Persist a demo session and make its token the demo credential.
    pub async fn start_demo(&mut self, session: DemoSession) -> ClientResult<()> {
        self.store.save(&session).await?;
        self.credentials.set_demo(session.token.clone());
        tracing::info!("Demo session started for user {}", session.user.id);
        self.demo = Some(session);
        Ok(())
    }

    /// End every session: forget the provider session, delete the stored demo
    /// session, and empty the credential holder.
    pub async fn logout(&mut self) -> ClientResult<()> {
        self.provider = None;
        self.demo = None;
        self.credentials.clear();
        self.store.clear().await?;
        tracing::info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;
    use tempfile::TempDir;

    fn demo_session() -> DemoSession {
        DemoSession {
            token: "demo-token".into(),
            user: UserRecord {
                id: 3,
                first_name: Some("Demo".into()),
                last_name: Some("User".into()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_demo_lifecycle() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let credentials = CredentialStore::new();
        let mut auth = AuthState::new(credentials.clone(), store.clone());

        assert_eq!(auth.identity(), Identity::Anonymous);

        auth.start_demo(demo_session()).await.unwrap();
        assert_eq!(auth.identity().display_name(), "Demo User");
        assert_eq!(credentials.current(), Some(Credential::Demo("demo-token".into())));
        assert!(store.load().await.unwrap().is_some());

        auth.logout().await.unwrap();
        assert_eq!(auth.identity(), Identity::Anonymous);
        assert_eq!(credentials.current(), None);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_picks_up_saved_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save(&demo_session()).await.unwrap();

        let credentials = CredentialStore::new();
        let auth = AuthState::restore(credentials.clone(), store, None)
            .await
            .unwrap();

        assert!(auth.identity().is_demo());
        assert_eq!(credentials.current(), Some(Credential::Demo("demo-token".into())));
    }

    #[tokio::test]
    async fn test_provider_overrides_restored_demo() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save(&demo_session()).await.unwrap();

        let provider = ProviderSession {
            access_token: "provider-token".into(),
            claims: ProviderClaims {
                sub: "auth0|1".into(),
                name: Some("Grace Hopper".into()),
                ..Default::default()
            },
        };
        let credentials = CredentialStore::new();
        let auth = AuthState::restore(credentials.clone(), store, Some(provider))
            .await
            .unwrap();

        assert_eq!(auth.identity().display_name(), "Grace Hopper");
        assert_eq!(
            credentials.current(),
            Some(Credential::Provider("provider-token".into()))
        );
    }
}
