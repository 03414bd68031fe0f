//! Automated play for the lavender harvest engine.
//!
//! [`plan`] finds a traceable chain on a board and drives a session through
//! the same press/drag/release calls a presentation layer would make. The
//! headless runner, integration tests and benches use it as their player.

pub mod plan;

pub use lavender_harvest_core as core;
pub use lavender_harvest_types as types;

pub use plan::{apply_plan, plan_chain, trace_path, PlanError};
