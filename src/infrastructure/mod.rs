//! Infrastructure layer - Implementations of domain traits and runtime plumbing

pub mod api_key;
pub mod assets;
pub mod logging;
pub mod observability;
