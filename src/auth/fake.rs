use async_trait::async_trait;

use crate::auth::session::Session;

/// A fake implementation of the Session trait for testing
#[derive(Clone)]
pub struct FakeSession {
    user_id: Option<String>,
}

impl FakeSession {
    /// Create a session resolving to the given user
    pub fn with_user(user_id: &str) -> Self {
        FakeSession {
            user_id: Some(user_id.to_string()),
        }
    }

    /// Create a session with no signed-in user
    pub fn anonymous() -> Self {
        FakeSession { user_id: None }
    }
}

#[async_trait]
impl Session for FakeSession {
    async fn current_user(&self) -> Option<String> {
        self.user_id.clone()
    }
}
