//! Platform abstraction layer
//!
//! Host bindings for the browser: a `Canvas` over the 2D rendering context.
//! Frame scheduling and input live in the binary.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebCanvas;
