//! Browser-hosted WASM app for the cayley grid.
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without requiring wasm toolchains.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod ui_model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
