//! Core functionality shared by every module of the crate.

pub mod error;

pub use error::{EffectError, EffectResult};
