use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::config::AuthConfig;

/// Session trait defining the interface for resolving the signed-in user.
///
/// Resolution either yields an account identifier or nothing; there is no
/// error path.
#[async_trait]
pub trait Session: Send + Sync + 'static {
    /// Resolve the current authenticated user's account identifier
    async fn current_user(&self) -> Option<String>;
}

/// Implementation of Session trait for Arc<T> where T implements Session
#[async_trait]
impl<T: Session + ?Sized> Session for Arc<T> {
    async fn current_user(&self) -> Option<String> {
        (**self).current_user().await
    }
}

/// Session backed by the account configured under `[auth]`.
///
/// The session is passed into the pipeline explicitly rather than looked
/// up ambiently.
pub struct StaticSession {
    user_id: Option<String>,
}

impl StaticSession {
    pub fn new(config: &AuthConfig) -> Self {
        StaticSession {
            user_id: config.user_id.clone(),
        }
    }
}

#[async_trait]
impl Session for StaticSession {
    async fn current_user(&self) -> Option<String> {
        match &self.user_id {
            Some(id) => {
                debug!("Resolved current user: {}", id);
                Some(id.clone())
            }
            None => {
                debug!("No authenticated user configured");
                None
            }
        }
    }
}
