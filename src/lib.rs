//! blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and hosts the pieces the
//! binary needs on top of them: environment configuration, log setup and
//! the frame-loop driver.

pub mod app;
pub mod config;
pub mod logging;

pub use blockfall_audio as audio;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use app::{App, KeyOutcome};
pub use config::Config;
