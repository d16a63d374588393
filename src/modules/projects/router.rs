use axum::{Router, routing::get};

use crate::modules::documents::controller::get_project_documents;
use crate::modules::media::controller::get_project_media;
use crate::state::AppState;

use super::controller::{create_project, delete_project, get_project, get_projects, update_project};

pub fn init_projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_projects).post(create_project))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/{id}/documents", get(get_project_documents))
        .route("/{id}/media", get(get_project_media))
}
