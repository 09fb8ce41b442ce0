use std::{collections::HashSet, sync::Arc};

use fbgate_core::{RegistrationCheck, RegistrationConfig};

/// Registration check backed by a fixed allowlist of Facebook user ids.
#[derive(Clone)]
pub struct StaticRegistry(pub(crate) Arc<InnerStaticRegistry>);
pub struct InnerStaticRegistry {
    pub users: HashSet<String>,
}

impl StaticRegistry {
    pub fn new(config: &RegistrationConfig) -> Self {
        if config.users.is_empty() {
            tracing::warn!("registration allowlist is empty, every user will be forbidden");
        }
        Self(Arc::new(InnerStaticRegistry {
            users: config.users.clone(),
        }))
    }
}

impl RegistrationCheck for StaticRegistry {
    fn is_registered(&self, user_id: &str) -> bool {
        self.0.users.contains(user_id)
    }
}
