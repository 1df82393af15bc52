//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `verify.rs` — resolve → build → verify → render.
//! - `modes.rs` — catalog listing with install status.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod modes;
pub mod verify;

pub use modes::handle_modes;
pub use verify::handle_verify;
