//! Host-engine collaborators, specified at their interface boundary.
//!
//! The coordinator does not own a filesystem, an image decoder or a GPU; it
//! borrows all three from the host engine through the traits here. Default
//! adapters are provided for the filesystem ([`fs::DirResourceSource`]) and
//! image decoding ([`image::RgbaImageDecoder`]); the graphics device is
//! always host-supplied.
//!
//! Everything runs on the single graphics/simulation thread that owns the
//! backend, so the bundle uses `Rc`/`RefCell` rather than thread-safe
//! wrappers.

pub mod fs;
pub mod image;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Mat4;

use crate::backend::{ProgramId, TextureId};
use crate::core::error::EffectResult;

pub use self::fs::DirResourceSource;
pub use self::image::RgbaImageDecoder;

/// Read access to named resources (the host's virtual filesystem).
pub trait ResourceSource {
    /// Reads the whole resource into memory.
    fn read(&self, name: &str) -> EffectResult<Vec<u8>>;
}

/// A decoded image in the fixed 4-channel layout the backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Image decoding through the host's image subsystem.
pub trait ImageDecoder {
    /// Decodes `bytes` into RGBA8 pixels. `name` is only used for error
    /// reporting.
    fn decode(&self, name: &str, bytes: &[u8]) -> EffectResult<DecodedImage>;
}

/// The host graphics subsystem, as seen by the coordinator.
pub trait GraphicsDevice {
    /// Uploads a decoded image and returns the GPU texture identifier.
    fn upload_texture(&mut self, image: &DecodedImage) -> EffectResult<TextureId>;

    /// Deletes a texture previously returned by `upload_texture`.
    fn delete_texture(&mut self, texture: TextureId);

    /// Current viewport size in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// The host's current transform stack, column-major.
    fn current_transform(&self) -> Mat4;

    /// Submits any host draw commands still buffered, so they are not
    /// reordered relative to the effect pass.
    fn flush_pending_draws(&mut self);

    /// Identifier of the currently bound shader program.
    fn bound_program(&self) -> ProgramId;

    /// Rebinds a shader program saved with `bound_program`.
    fn bind_program(&mut self, program: ProgramId);
}

/// The three host collaborators bundled for injection.
///
/// Cloning is shallow; all clones refer to the same underlying subsystems.
#[derive(Clone)]
pub struct HostContext {
    pub resources: Rc<dyn ResourceSource>,
    pub images: Rc<dyn ImageDecoder>,
    pub graphics: Rc<RefCell<dyn GraphicsDevice>>,
}

impl HostContext {
    pub fn new(
        resources: Rc<dyn ResourceSource>,
        images: Rc<dyn ImageDecoder>,
        graphics: Rc<RefCell<dyn GraphicsDevice>>,
    ) -> Self {
        Self {
            resources,
            images,
            graphics,
        }
    }
}
