//! Command Line Interface (CLI) layer for volpos.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) for the module-offset report. It wires user-provided
//! options to the underlying library functionality exposed via
//! `volpos::api`.
//!
//! If you are embedding volpos into another application, prefer using the
//! high-level `volpos::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
