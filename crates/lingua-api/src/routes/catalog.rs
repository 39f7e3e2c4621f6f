//! Routes for the Curriculum Catalog bounded context.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use lingua_catalog::model::{LearningPath, NodeKind, QuizQuestion};
use lingua_core::error::DomainError;
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /nodes/{node_id}/questions.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    /// The resolved node.
    pub node_id: String,
    /// Ordered question sequence; empty when the node carries none.
    pub questions: Vec<QuizQuestion>,
}

/// Response body for GET /nodes/{node_id}/location.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    /// Owning path identifier.
    pub path_id: String,
    /// Owning section identifier.
    pub section_id: String,
    /// Owning unit identifier.
    pub unit_id: String,
    /// The node identifier.
    pub node_id: String,
    /// The node's lesson step kind.
    pub kind: NodeKind,
}

/// GET /paths
#[instrument(skip(state))]
async fn list_paths(State(state): State<AppState>) -> Json<Vec<LearningPath>> {
    Json(state.catalog.paths().to_vec())
}

/// GET /paths/{path_id}
#[instrument(skip(state))]
async fn get_path(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
) -> Result<Json<LearningPath>, ApiError> {
    let path = state.catalog.find_path(&path_id)?;
    Ok(Json(path.clone()))
}

/// GET /nodes/{node_id}/questions
#[instrument(skip(state))]
async fn node_questions(
    State(state): State<AppState>,
    Path(node_id): Path<String>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let node_id = require_id(&node_id)?;
    let questions = state.catalog.questions(node_id)?;
    Ok(Json(QuestionsResponse {
        node_id: node_id.to_owned(),
        questions: questions.to_vec(),
    }))
}

/// GET /nodes/{node_id}/location
#[instrument(skip(state))]
async fn node_location(
    State(state): State<AppState>,
    Path(node_id): Path<String>,
) -> Result<Json<LocationResponse>, ApiError> {
    let node_id = require_id(&node_id)?;
    let location = state.catalog.locate_node(node_id)?;
    Ok(Json(LocationResponse {
        path_id: location.path_id.to_owned(),
        section_id: location.section_id.to_owned(),
        unit_id: location.unit_id.to_owned(),
        node_id: location.node.id.clone(),
        kind: location.node.kind,
    }))
}

/// A blank identifier is a missing parameter, not a failed lookup.
fn require_id(raw: &str) -> Result<&str, DomainError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(DomainError::InvalidInput(
            "node identifier is required".to_owned(),
        ));
    }
    Ok(id)
}

/// Returns the router for the catalog context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/paths", get(list_paths))
        .route("/paths/{path_id}", get(get_path))
        .route("/nodes/{node_id}/questions", get(node_questions))
        .route("/nodes/{node_id}/location", get(node_location))
}
