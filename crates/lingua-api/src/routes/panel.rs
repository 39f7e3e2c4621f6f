//! Routes for the Right-Panel bounded context.

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use lingua_core::course::CourseContext;
use lingua_panel::{RightSection, compose};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Query parameters carrying the learner's course context. Absent fields
/// fall back to the configured default course.
#[derive(Debug, Default, Deserialize)]
pub struct PanelQuery {
    /// Course identifier from the profile store.
    pub course_id: Option<String>,
    /// Course display name from the profile store.
    pub course_name: Option<String>,
    /// Flag image URL from the profile store.
    pub flag_url: Option<String>,
}

/// GET /sections
#[instrument(skip(state))]
async fn sections(
    State(state): State<AppState>,
    Query(query): Query<PanelQuery>,
) -> Json<Vec<RightSection>> {
    let defaults = &state.default_course;
    let ctx = CourseContext {
        course_id: query.course_id.unwrap_or_else(|| defaults.course_id.clone()),
        course_name: query
            .course_name
            .unwrap_or_else(|| defaults.course_name.clone()),
        flag_url: query.flag_url.or_else(|| defaults.flag_url.clone()),
    };

    Json(compose(&state.base_sections, &ctx))
}

/// Returns the router for the panel context.
pub fn router() -> Router<AppState> {
    Router::new().route("/sections", get(sections))
}
