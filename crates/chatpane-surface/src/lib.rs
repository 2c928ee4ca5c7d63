//! Surface management for the embedded chat widget.
//!
//! A surface is the single visual region the chat widget renders into.
//! This crate provides:
//! - `SurfaceOptions` describing the mounted element (id, role, anchoring)
//! - `Surface`, the handle for the one mounted region
//! - `SurfaceManager` with idempotent create, resize, and detach
//! - `MountHost`, the trait boundary to the host framework's container

pub mod surface;

pub use surface::{MountHost, Surface, SurfaceManager, SurfaceOptions};
