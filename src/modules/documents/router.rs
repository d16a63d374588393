use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_document, delete_document, get_document, get_documents};

pub fn init_documents_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_documents).post(create_document))
        .route("/{id}", get(get_document).delete(delete_document))
}
