//! Utility modules

pub mod follow;
pub mod trim;

pub use follow::{follow_input, ScrollBehavior, ScrollRequest};
pub use trim::{normalize, Trimmed};
