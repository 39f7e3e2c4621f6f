//! Curriculum content types.
//!
//! All identifiers are opaque strings; a node identifier carries no encoded
//! path/section/unit prefix, so lookup may never shortcut the search by
//! parsing it.

use lingua_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Top-level purchasable/learnable unit: one course's learning track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    /// Identifier, unique across the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in the smallest currency unit; 0 means free. Missing in the
    /// catalog file means free.
    #[serde(default)]
    pub price: u32,
    /// Ordered sections.
    pub sections: Vec<Section>,
}

impl LearningPath {
    /// True when the path costs nothing.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// A named grouping within a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Ordered units.
    pub units: Vec<Unit>,
}

/// A named grouping within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Ordered nodes.
    pub nodes: Vec<Node>,
}

/// What kind of lesson step a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A regular teaching lesson.
    Lesson,
    /// A checkpoint gating progression to the next section.
    Checkpoint,
    /// A narrated story exercise.
    Story,
    /// Untimed practice of earlier material.
    Practice,
}

/// The atomic lesson step. Node identifiers are unique across the entire
/// catalog, not just within their unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique system-wide.
    pub id: String,
    /// Lesson step kind.
    pub kind: NodeKind,
    /// Ordered quiz questions; empty for nodes without an exercise set.
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// Prompt content shown to the learner for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Prompt text.
    pub text: String,
    /// Optional illustration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Optional audio clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Prompt {
    /// Creates a text-only prompt.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: None,
            audio_url: None,
        }
    }
}

/// One multiple-choice question, owned by exactly one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Identifier.
    pub id: String,
    /// Prompt content.
    pub prompt: Prompt,
    /// Ordered answer options. Exactly one carries the correctness flag.
    pub options: Vec<AnswerOption>,
}

impl QuizQuestion {
    /// Returns the option flagged correct, if the question has one.
    #[must_use]
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.correct)
    }

    /// Resolves an option by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OptionNotFound` when no option matches.
    pub fn option(&self, option_id: &str) -> Result<&AnswerOption, DomainError> {
        self.options
            .iter()
            .find(|o| o.id == option_id)
            .ok_or_else(|| DomainError::OptionNotFound(option_id.to_owned()))
    }
}

/// One selectable answer, referenced by identifier when the learner picks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Identifier.
    pub id: String,
    /// Option text.
    pub text: String,
    /// Whether selecting this option answers the question correctly.
    pub correct: bool,
}
