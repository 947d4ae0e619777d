//! Team domain module
//!
//! The static team profile served by the informational endpoints, and the
//! loader seam used to fetch member portraits.

mod entity;
mod loader;

pub use entity::{MemberImage, TeamMember, TeamProfile};
pub use loader::ImageLoader;

#[cfg(test)]
pub use loader::MockImageLoader;
