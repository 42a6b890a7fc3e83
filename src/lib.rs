//! Page enhancements for a static portfolio site.
//!
//! The controllers under [`components`] hold all of the behavior and only talk
//! to the page through the traits in [`dom`] and [`scheduler`], so they run the
//! same against the browser and against the in-memory fakes used in tests. The
//! browser bindings live in `web` and are only compiled for `wasm32`.

pub mod config;
pub mod dom;
pub mod error;
pub mod scheduler;

pub mod components {
    pub mod anchor;
    pub mod form_label;
    pub mod menu;
    pub mod navbar;
    pub mod parallax;
    pub mod reveal;
    pub mod typewriter;
}

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod testing;

pub use config::EnhanceConfig;
pub use error::{ConfigError, SetupError};
