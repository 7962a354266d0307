//! # effect_playback
//!
//! Playback coordinator for an external real-time particle-effect runtime,
//! embedded in a 2D host engine.
//!
//! The crate owns exactly three jobs:
//!
//! - **Lifetime and commands**: load effect definitions, spawn running
//!   instances, stop them, and query their liveness through opaque tokens
//!   ([`EffectAsset`], [`PlaybackHandle`]). The backend retires finished
//!   instances on its own, so handles are tokens plus a live query, never
//!   owning references.
//! - **Time**: the backend's simulation clock is quantized to fixed-rate
//!   frames (60 fps by default) while the host delivers variable
//!   delta-time; [`FrameClock`] buffers sub-frame time and flushes whole
//!   frames, at most one per update.
//! - **Coordinates and render state**: the host draws top-left-origin,
//!   y-down screen space with column-major matrices; the backend is a
//!   right-handed, y-up 3D renderer with row-vector matrices. All sign
//!   flips and index swaps live in [`effects::camera`], and the backend's
//!   render pass is wrapped so the host's bound shader program survives it.
//!
//! The particle engine itself — simulation, renderers, asset format — is a
//! black box injected through the traits in [`backend`]; the host's
//! filesystem, image decoding and GPU are injected through [`host`]. The
//! whole crate is single-threaded and cooperative: every operation runs on
//! the graphics/simulation thread that owns the backend.
//!
//! ## Example
//!
//! ```ignore
//! let mut fx = EffectCoordinator::new(config, host, backend, renderer)?;
//! let spark = fx.load_effect("fx/spark.efk")?;
//! let handle = fx.play(spark)?;
//!
//! // Each frame:
//! fx.update(dt);
//! fx.draw(Mat4::IDENTITY)?;
//! if !fx.exists(handle) {
//!     // instance finished and was retired by the backend
//! }
//! ```

/// Backend interface: the injected particle simulation manager and renderer.
pub mod backend;
/// Configuration system.
pub mod config;
/// Core functionality: errors shared across the crate.
pub mod core;
/// Coordinator, assets, handles, clock, camera conversion, loader bridge.
pub mod effects;
/// Host-engine collaborators: filesystem, image decoding, graphics device.
pub mod host;

pub use crate::config::CoordinatorConfig;
pub use crate::core::error::{EffectError, EffectResult};
pub use crate::effects::{EffectAsset, EffectCoordinator, FrameClock, PlaybackHandle};
pub use crate::host::HostContext;
