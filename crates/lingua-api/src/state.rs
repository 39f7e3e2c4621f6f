//! Shared application state.

use std::sync::Arc;

use lingua_catalog::Catalog;
use lingua_core::course::CourseContext;
use lingua_panel::RightSection;

/// Application state shared across all request handlers.
///
/// Everything here is immutable after startup; handlers only read it, so
/// concurrent requests need no synchronization.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The curriculum catalog, loaded once at startup.
    pub catalog: Arc<Catalog>,
    /// Static base configuration of right-panel sections.
    pub base_sections: Arc<Vec<RightSection>>,
    /// Course substituted when a request carries no profile context.
    pub default_course: CourseContext,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        base_sections: Vec<RightSection>,
        default_course: CourseContext,
    ) -> Self {
        Self {
            catalog,
            base_sections: Arc::new(base_sections),
            default_course,
        }
    }
}
