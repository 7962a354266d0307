//! Default image-decoding adapter built on the `image` crate.

use crate::core::error::{EffectError, EffectResult};

use super::{DecodedImage, ImageDecoder};

/// Decodes PNG/JPEG bytes into the RGBA8 layout the backend expects.
pub struct RgbaImageDecoder;

impl ImageDecoder for RgbaImageDecoder {
    fn decode(&self, name: &str, bytes: &[u8]) -> EffectResult<DecodedImage> {
        let decoded = image::load_from_memory(bytes).map_err(|e| EffectError::Decode {
            path: name.to_string(),
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        Ok(DecodedImage {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageOutputFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decodes_png_to_rgba8() {
        let bytes = png_bytes(3, 2);
        let decoded = RgbaImageDecoder.decode("dot.png", &bytes).unwrap();
        assert_eq!(decoded.width, 3);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&decoded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_garbage_bytes_are_decode_errors() {
        let err = RgbaImageDecoder.decode("bad.png", b"not an image");
        match err {
            Err(EffectError::Decode { path, .. }) => assert_eq!(path, "bad.png"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
