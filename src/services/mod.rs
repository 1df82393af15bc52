//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `profile.rs` — profile loading, CLI/profile merge, request validation.
//! - `assets.rs` — manifest expansion and asset-set building per mode.
//! - `verify.rs` — per-file status and image size probing.
//! - `mount.rs` — platform manifest probes for the mount annotation.
//! - `report.rs` — report assembly and text/JSON sinks.
//! - `settings.rs` — optional TOML settings file.
//! - `paths.rs` — settings path and app root discovery.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod assets;
pub mod mount;
pub mod output;
pub mod paths;
pub mod profile;
pub mod report;
pub mod settings;
pub mod verify;
