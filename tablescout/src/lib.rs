//! Conversational restaurant scout.
//!
//! The crate wires seven workflow steps into a
//! [`tablescout_graph`] program: interview or history analysis, web search,
//! a validation/retry loop, a numbered menu, a page fetch with a soft
//! fallback, and the final recommendation. [`app::build_graph`] assembles
//! the graph; the binary in `main.rs` drives one session against the real
//! collaborators.

pub mod app;
pub mod clients;
pub mod config;
pub mod prompts;
pub mod routing;
pub mod state;
pub mod steps;
