//! Domain logic for the SiteTrack construction project tracker.
//!
//! Pure types and computations with no database or HTTP dependency:
//! progress rollup rules, project statistics, breakdown statistics, and
//! the progress timeline builder.

pub mod error;
pub mod progress;
pub mod stats;
pub mod status;
pub mod timeline;
pub mod types;
