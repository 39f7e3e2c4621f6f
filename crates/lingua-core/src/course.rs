//! Course context consumed by right-panel composition.

use serde::{Deserialize, Serialize};

/// Course identifier substituted when no profile context is available.
pub const DEFAULT_COURSE_ID: &str = "id";

/// Course display name paired with [`DEFAULT_COURSE_ID`].
pub const DEFAULT_COURSE_NAME: &str = "Bahasa Indonesia";

/// The learner's currently selected course, sourced from an external
/// profile store. This core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContext {
    /// Course identifier (doubles as the language code on the panel).
    pub course_id: String,
    /// Course display name.
    pub course_name: String,
    /// Flag image URL, when the profile store provides one.
    pub flag_url: Option<String>,
}

impl CourseContext {
    /// Creates a context for the given course.
    #[must_use]
    pub fn new(course_id: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            flag_url: None,
        }
    }
}

impl Default for CourseContext {
    fn default() -> Self {
        Self::new(DEFAULT_COURSE_ID, DEFAULT_COURSE_NAME)
    }
}
