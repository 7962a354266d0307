//! Loader bridge between the backend and the host's resource subsystems.
//!
//! The backend pulls effect definitions and referenced textures through two
//! loader callbacks it invokes synchronously while servicing a create
//! request; a texture load may nest inside an effect-definition load. The
//! bridges here adapt those callbacks onto the host collaborators. They keep
//! no mutable state of their own, so nested invocations only contend on the
//! graphics device, which is borrowed for the duration of a single
//! upload/delete call.
//!
//! Any read or decode failure propagates out of the `play`/load path that
//! triggered it; the backend contract guarantees a failed load leaves no
//! partially constructed instance behind.

use crate::backend::{EffectDataLoader, PixelFormat, TextureData, TextureLoader};
use crate::core::error::{EffectError, EffectResult};
use crate::host::HostContext;

/// Rejects names that would overflow the fixed-size marshalling buffer used
/// for the backend's path-name conversion.
fn check_name(name: &str, max: usize) -> EffectResult<()> {
    if name.len() > max {
        return Err(EffectError::NameTooLong {
            len: name.len(),
            max,
        });
    }
    Ok(())
}

/// Loads raw effect-definition bytes for the backend.
pub struct DefinitionLoaderBridge {
    host: HostContext,
    max_name: usize,
}

impl DefinitionLoaderBridge {
    pub fn new(host: HostContext, max_name: usize) -> Self {
        Self { host, max_name }
    }
}

impl EffectDataLoader for DefinitionLoaderBridge {
    fn load(&mut self, name: &str) -> EffectResult<Vec<u8>> {
        check_name(name, self.max_name)?;
        let bytes = self.host.resources.read(name)?;
        log::debug!("loaded effect definition {name} ({} bytes)", bytes.len());
        Ok(bytes)
    }

    fn unload(&mut self, data: Vec<u8>) {
        // Ownership returns here; dropping frees exactly the buffer that
        // load() allocated.
        drop(data);
    }
}

/// Decodes and uploads textures referenced by an effect.
pub struct TextureLoaderBridge {
    host: HostContext,
    max_name: usize,
}

impl TextureLoaderBridge {
    pub fn new(host: HostContext, max_name: usize) -> Self {
        Self { host, max_name }
    }
}

impl TextureLoader for TextureLoaderBridge {
    fn load(&mut self, name: &str) -> EffectResult<TextureData> {
        check_name(name, self.max_name)?;
        let bytes = self.host.resources.read(name)?;
        let image = self.host.images.decode(name, &bytes)?;
        let texture = self.host.graphics.borrow_mut().upload_texture(&image)?;
        log::debug!(
            "uploaded effect texture {name} ({}x{})",
            image.width,
            image.height
        );
        Ok(TextureData {
            texture: Some(texture),
            width: image.width,
            height: image.height,
            format: PixelFormat::Rgba8,
            has_mipmaps: false,
        })
    }

    fn unload(&mut self, data: TextureData) {
        if let Some(texture) = data.texture {
            self.host.graphics.borrow_mut().delete_texture(texture);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TextureId;
    use crate::host::{DecodedImage, GraphicsDevice, ImageDecoder, ResourceSource};
    use glam::Mat4;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct MapSource(HashMap<String, Vec<u8>>);

    impl ResourceSource for MapSource {
        fn read(&self, name: &str) -> EffectResult<Vec<u8>> {
            self.0
                .get(name)
                .cloned()
                .ok_or_else(|| EffectError::ResourceNotFound {
                    path: name.to_string(),
                })
        }
    }

    /// Treats any resource as a 1x1 image.
    struct StubDecoder;

    impl ImageDecoder for StubDecoder {
        fn decode(&self, _name: &str, bytes: &[u8]) -> EffectResult<DecodedImage> {
            Ok(DecodedImage {
                width: 1,
                height: 1,
                pixels: bytes.to_vec(),
            })
        }
    }

    #[derive(Default)]
    struct CountingDevice {
        allocated: u32,
        freed: u32,
    }

    impl GraphicsDevice for CountingDevice {
        fn upload_texture(&mut self, _image: &DecodedImage) -> EffectResult<TextureId> {
            self.allocated += 1;
            Ok(u64::from(self.allocated))
        }

        fn delete_texture(&mut self, _texture: TextureId) {
            self.freed += 1;
        }

        fn viewport_size(&self) -> (u32, u32) {
            (640, 480)
        }

        fn current_transform(&self) -> Mat4 {
            Mat4::IDENTITY
        }

        fn flush_pending_draws(&mut self) {}

        fn bound_program(&self) -> u32 {
            0
        }

        fn bind_program(&mut self, _program: u32) {}
    }

    fn host_with(resources: HashMap<String, Vec<u8>>) -> (HostContext, Rc<RefCell<CountingDevice>>) {
        let device = Rc::new(RefCell::new(CountingDevice::default()));
        let host = HostContext::new(
            Rc::new(MapSource(resources)),
            Rc::new(StubDecoder),
            device.clone(),
        );
        (host, device)
    }

    #[test]
    fn test_texture_load_unload_balances_gpu_allocations() {
        let (host, device) = host_with(HashMap::from([(
            "glow.png".to_string(),
            vec![1, 2, 3, 4],
        )]));
        let mut bridge = TextureLoaderBridge::new(host, 255);

        let data = bridge.load("glow.png").unwrap();
        assert_eq!(data.format, PixelFormat::Rgba8);
        assert!(!data.has_mipmaps);
        assert!(data.texture.is_some());

        bridge.unload(data);
        let device = device.borrow();
        assert_eq!(device.allocated, device.freed);
        assert_eq!(device.allocated, 1);
    }

    #[test]
    fn test_unload_without_texture_is_a_no_op() {
        let (host, device) = host_with(HashMap::new());
        let mut bridge = TextureLoaderBridge::new(host, 255);
        bridge.unload(TextureData {
            texture: None,
            width: 0,
            height: 0,
            format: PixelFormat::Rgba8,
            has_mipmaps: false,
        });
        assert_eq!(device.borrow().freed, 0);
    }

    #[test]
    fn test_missing_resource_propagates() {
        let (host, _) = host_with(HashMap::new());
        let mut bridge = DefinitionLoaderBridge::new(host, 255);
        assert!(matches!(
            bridge.load("absent.efk"),
            Err(EffectError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_overlong_name_is_rejected_before_any_read() {
        let (host, device) = host_with(HashMap::new());
        let mut bridge = TextureLoaderBridge::new(host, 8);
        assert!(matches!(
            bridge.load("much_too_long_name.png"),
            Err(EffectError::NameTooLong { .. })
        ));
        assert_eq!(device.borrow().allocated, 0);
    }

    #[test]
    fn test_definition_round_trip_returns_owned_buffer() {
        let (host, _) = host_with(HashMap::from([(
            "spark.efk".to_string(),
            vec![0xEF, 0x4B],
        )]));
        let mut bridge = DefinitionLoaderBridge::new(host, 255);
        let data = bridge.load("spark.efk").unwrap();
        assert_eq!(data, vec![0xEF, 0x4B]);
        bridge.unload(data);
    }
}
