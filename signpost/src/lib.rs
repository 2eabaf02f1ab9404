//! Expose Signpost's command layer for use in tests and the `xtask` helper.
//! The supported programmatic API lives in the `signpost-*` library crates.
pub mod cli;
pub mod commands;
