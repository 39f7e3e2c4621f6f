//! Lingua — Right-Panel bounded context.
//!
//! The secondary panel renders heterogeneous widgets alongside the main
//! content. This crate owns the tagged section model, the composition
//! service that overlays course context onto a static base configuration,
//! and the kind-dispatched renderer contract.

pub mod compose;
pub mod render;
pub mod section;

pub use compose::compose;
pub use render::{render_sections, SectionRenderer, TextRenderer};
pub use section::{
    FollowEntry, LanguageStats, Mission, Notification, Reaction, RightSection,
};
