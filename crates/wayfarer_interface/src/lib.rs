//! Trait definitions for the Wayfarer concierge library.
//!
//! Backends implement [`WayfarerDriver`] plus whichever capability traits
//! they support; the orchestration layer depends only on these seams.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImageGeneration, JsonMode, VideoGeneration, WayfarerDriver};
pub use types::{GeneratedImage, GeneratedVideo};
