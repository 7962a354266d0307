//! Unified error handling for the playback coordinator.
//!
//! One error type crosses every seam of the crate: host collaborator
//! failures (filesystem, image decoding, GPU upload), backend rejections
//! and configuration problems all surface as [`EffectError`] so that the
//! binding layer above only has to convert a single type into the host's
//! error-reporting mechanism.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the effect-playback subsystem.
#[derive(Error, Debug)]
pub enum EffectError {
    /// A named resource could not be read by the host filesystem.
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: String },

    /// The bytes of an effect definition or referenced image were malformed.
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    /// Backend manager/renderer construction failed. Fatal to the whole
    /// subsystem, not recoverable per call.
    #[error("Backend initialization failed: {0}")]
    BackendInit(String),

    /// The backend rejected an effect asset (unloaded or unknown).
    #[error("Invalid effect asset: {0}")]
    InvalidAsset(String),

    /// An operation that depends on handle validity referenced a stale or
    /// unknown playback handle.
    #[error("Invalid playback handle")]
    InvalidHandle,

    /// Resource names are marshalled into a fixed-size buffer on the way to
    /// the backend; longer names must be rejected upstream.
    #[error("Resource name too long: {len} bytes (limit {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Failed to create texture: {0}")]
    TextureCreation(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type EffectResult<T> = Result<T, EffectError>;
