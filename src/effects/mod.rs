//! Effect playback: coordinator, assets, handles and the loader bridge.
//!
//! The flow mirrors the host's frame loop: load an [`EffectAsset`], spawn
//! instances with [`EffectCoordinator::play`], call
//! [`EffectCoordinator::update`] each tick and [`EffectCoordinator::draw`]
//! each frame. Handles returned by `play` are pure tokens; check liveness with
//! [`EffectCoordinator::exists`].

pub mod asset;
pub mod camera;
pub mod clock;
pub mod coordinator;
pub mod handle;
pub mod loader;

pub use asset::EffectAsset;
pub use clock::{FrameClock, SIMULATION_FPS};
pub use coordinator::EffectCoordinator;
pub use handle::PlaybackHandle;
pub use loader::{DefinitionLoaderBridge, TextureLoaderBridge};
