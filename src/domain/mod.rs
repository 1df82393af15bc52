//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep request/manifest/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — request, manifest, expected-file and report structs.
//! - `catalog.rs` — built-in mode catalog (install folders + asset manifests).
//! - `errors.rs` — typed configuration errors.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod catalog;
pub mod errors;
pub mod models;
