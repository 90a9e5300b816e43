//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode + orient** | `image` crate (`ImageDecoder::orientation`) |
//! | **Resize** | Lanczos3, width-capped, never upscaled |
//! | **Encode** | lossy WebP via the `webp` crate |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing render operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use params::{Quality, RenderParams, RenditionSpec};
pub use rust_backend::RustBackend;
