//! Lingua — Curriculum Catalog bounded context.
//!
//! Owns the four-level content hierarchy (path → section → unit → node),
//! the quiz question model, and identifier-based lookup over the whole
//! catalog. The catalog is loaded once and immutable for the process
//! lifetime; every lookup is a pure read.

pub mod catalog;
pub mod model;
pub mod source;

pub use catalog::{Catalog, NodeLocation};
pub use model::{AnswerOption, LearningPath, Node, NodeKind, Prompt, QuizQuestion, Section, Unit};
pub use source::{CatalogSource, JsonFileSource};
