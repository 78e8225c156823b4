//! Platform boundary
//!
//! The session knows nothing about schedulers or pages; this module is where
//! the browser's collaborators (render loop, classifier, countdown timer)
//! plug in.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::GameHandle;
