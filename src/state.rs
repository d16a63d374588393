use std::path::Path;
use std::sync::Arc;

use plantdesk_config::{CorsConfig, JwtConfig};
use plantdesk_store::{Store, StoreError};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<Store>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: Store, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            store: Arc::new(store),
            jwt_config,
            cors_config,
        }
    }
}

/// Builds the state from the environment, loading `seed` when given.
pub async fn init_app_state(seed: Option<&Path>) -> Result<AppState, StoreError> {
    let store = match seed {
        Some(path) => Store::load(path).await?,
        None => Store::new(),
    };

    Ok(AppState::new(
        store,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
