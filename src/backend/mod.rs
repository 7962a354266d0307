//! Abstraction over the external particle simulation/rendering backend.
//!
//! The real particle engine is an opaque third-party dependency; the
//! coordinator only ever talks to it through the traits defined here. This
//! keeps the simulation algorithm and the sprite/ribbon/ring/track/model
//! renderers entirely outside the crate and lets tests substitute a fake
//! backend that records calls.
//!
//! ## Conventions
//!
//! - The backend is right-handed 3D with a bottom-left-origin, y-up screen
//!   mapping. Matrices use a row-vector layout with the translation in the
//!   last row ([`BackendMatrix`]). Conversion from the host's conventions
//!   lives in [`crate::effects::camera`].
//! - The simulation clock is quantized to fixed-rate frames; `advance`
//!   takes a frame count, not seconds.
//! - Instance handles are small integer tokens. The backend retires an
//!   instance on its own once the effect finishes playing, so a token may
//!   go stale at any time; `exists` is the only source of truth.

use glam::Vec3;

use crate::core::error::EffectResult;

/// Token for one running effect instance inside the backend's instance pool.
pub type InstanceId = i32;

/// Token for one loaded effect definition.
pub type EffectId = u32;

/// Host GPU texture identifier, as reported by the graphics subsystem.
pub type TextureId = u64;

/// Host shader program identifier.
pub type ProgramId = u32;

/// 4x4 matrix in the backend's layout: row vectors, translation in row 3.
///
/// Note this is the transpose of the column-major layout the host (and
/// `glam`) uses; see [`crate::effects::camera::to_backend_matrix`] for the
/// index mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackendMatrix(pub [[f32; 4]; 4]);

impl BackendMatrix {
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
}

/// Pixel layout of textures handed to the backend.
///
/// This integration always uploads 4-channel RGBA; the variant exists so the
/// descriptor states the contract explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
}

/// Descriptor for a GPU texture created by the texture-loader bridge and
/// owned by the backend until the matching unload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// GPU texture identifier, or `None` when no texture was created.
    /// Unloading a descriptor without a texture is a no-op, not an error.
    pub texture: Option<TextureId>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Always `false` here; mip generation is out of scope for this
    /// integration.
    pub has_mipmaps: bool,
}

/// Loader capability for raw effect-definition bytes.
///
/// The backend invokes `load` synchronously while servicing an effect-create
/// request and calls `unload` with the same buffer when it is done with it.
/// Calls may nest with [`TextureLoader`] invocations and must not assume any
/// particular call frequency.
pub trait EffectDataLoader {
    /// Reads the entire named resource into an owned buffer.
    fn load(&mut self, name: &str) -> EffectResult<Vec<u8>>;

    /// Returns a buffer previously handed out by `load`. Ownership moves
    /// back here, so dropping it frees exactly what `load` allocated.
    fn unload(&mut self, data: Vec<u8>);
}

/// Loader capability for decoded GPU textures referenced by an effect.
pub trait TextureLoader {
    /// Decodes and uploads the named image resource.
    fn load(&mut self, name: &str) -> EffectResult<TextureData>;

    /// Releases the GPU texture recorded in the descriptor, if any.
    fn unload(&mut self, data: TextureData);
}

/// The backend's simulation manager: instance pool, loaders and clock.
///
/// Exclusively owned by the coordinator; no other component may hold a live
/// reference to it.
pub trait SimulationBackend {
    /// Registers the loader used for effect-definition bytes.
    fn set_effect_loader(&mut self, loader: Box<dyn EffectDataLoader>);

    /// Registers the loader used for textures referenced by effects.
    fn set_texture_loader(&mut self, loader: Box<dyn TextureLoader>);

    /// Parses the named effect definition through the registered loaders.
    ///
    /// A failed load leaves no partially constructed state behind: the
    /// backend discards the in-progress effect and the loader error
    /// propagates unchanged.
    fn create_effect(&mut self, name: &str) -> EffectResult<EffectId>;

    /// Releases a definition created by `create_effect`. Unknown ids are
    /// ignored.
    fn destroy_effect(&mut self, effect: EffectId);

    /// Spawns a new running instance of the effect at `position`.
    fn spawn(&mut self, effect: EffectId, position: Vec3) -> EffectResult<InstanceId>;

    /// Sets the per-instance render scale. Stale handles are ignored.
    fn set_instance_scale(&mut self, instance: InstanceId, x: f32, y: f32, z: f32);

    /// Requests termination of one instance. Idempotent; stale or finished
    /// handles are ignored.
    fn stop(&mut self, instance: InstanceId);

    /// Requests termination of every active instance.
    fn stop_all(&mut self);

    /// Live liveness query for an instance token.
    fn exists(&self, instance: InstanceId) -> bool;

    /// Advances the simulation clock by `frames` fixed-rate frames.
    fn advance(&mut self, frames: f32);

    /// Emits draw commands for every active instance into the renderer's
    /// open pass.
    fn draw_all(&mut self);

    /// Emits draw commands for a single instance into the open pass.
    fn draw_instance(&mut self, instance: InstanceId);
}

/// The backend's renderer: camera state and the begin/end render pass.
///
/// The pass object is not reentrant; the coordinator guarantees that
/// `begin_pass`/`end_pass` pairs never nest.
pub trait EffectRenderer {
    fn set_projection(&mut self, matrix: BackendMatrix);

    fn set_camera(&mut self, matrix: BackendMatrix);

    /// Opens the backend render pass. The pass is known to clobber the
    /// host's bound shader program; the coordinator restores it afterwards.
    fn begin_pass(&mut self) -> EffectResult<()>;

    fn end_pass(&mut self);
}
