//! WebAssembly bindings for the NES CPU core.
//!
//! Exposes a [`NesCpu`] handle to JavaScript for loading and stepping programs and for
//! inspecting registers and memory from a browser.

pub mod api;

pub use api::NesCpu;
