use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_setting, delete_setting, get_setting, get_settings, update_setting};

pub fn init_settings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings).post(create_setting))
        .route(
            "/{key}",
            get(get_setting).put(update_setting).delete(delete_setting),
        )
}
