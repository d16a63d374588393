use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_contractor, delete_contractor, get_contractor, get_contractors, update_contractor,
};

pub fn init_contractors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_contractors).post(create_contractor))
        .route(
            "/{id}",
            get(get_contractor)
                .put(update_contractor)
                .delete(delete_contractor),
        )
}
