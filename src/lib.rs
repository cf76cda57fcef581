//! Flight-route simulation toolkit.
//!
//! Given a departure city, an arrival city, and an aircraft model, the
//! workspace computes great-circle distance, interpolates the track,
//! estimates flight-phase timings from static performance figures, and
//! drives a cooperative progress animation. This facade crate re-exports
//! the member crates so front-ends depend on a single package.

pub use route_core::{constants, time, units};

pub use route_anim as anim;
pub use route_config as catalog;
pub use route_export as export;
pub use route_geo as geo;
pub use route_plan as plan;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
