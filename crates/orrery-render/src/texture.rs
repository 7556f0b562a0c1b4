//! GPU texture upload for body surface maps.
//!
//! Textures are best-effort: when a surface map is unavailable or malformed
//! the caller falls back to [`white_texel`], and the body renders with its
//! material color alone.

/// Decoded RGBA8 pixel data ready for upload.
#[derive(Clone, Debug)]
pub struct TextureRgba {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Tightly packed RGBA8 bytes, row-major.
    pub pixels: Vec<u8>,
}

/// Errors that can occur during texture upload.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Pixel data length doesn't match the dimensions.
    #[error("texture data size ({actual}) does not match expected ({expected}) for {width}x{height}")]
    DataSizeMismatch {
        actual: usize,
        expected: usize,
        width: u32,
        height: u32,
    },

    /// Width or height is zero.
    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },
}

/// Expected byte length of a tightly packed RGBA8 image.
pub fn expected_byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

/// Upload an RGBA8 image as an sRGB texture and return its default view.
pub fn upload_rgba_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    data: &TextureRgba,
) -> Result<wgpu::TextureView, TextureError> {
    use wgpu::util::DeviceExt;

    if data.width == 0 || data.height == 0 {
        return Err(TextureError::ZeroDimensions {
            width: data.width,
            height: data.height,
        });
    }
    let expected = expected_byte_len(data.width, data.height);
    if data.pixels.len() != expected {
        return Err(TextureError::DataSizeMismatch {
            actual: data.pixels.len(),
            expected,
            width: data.width,
            height: data.height,
        });
    }

    let texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        &data.pixels,
    );

    Ok(texture.create_view(&wgpu::TextureViewDescriptor::default()))
}

/// A 1×1 white texture view, the fallback when no surface map is available.
pub fn white_texel(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    let data = TextureRgba {
        width: 1,
        height: 1,
        pixels: vec![255, 255, 255, 255],
    };
    upload_rgba_texture(device, queue, "white-texel", &data)
        .expect("1x1 white texel upload cannot fail validation")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_len_is_four_bytes_per_texel() {
        assert_eq!(expected_byte_len(1, 1), 4);
        assert_eq!(expected_byte_len(1280, 640), 1280 * 640 * 4);
    }

    #[test]
    fn test_mismatched_pixel_buffer_is_rejected_early() {
        let data = TextureRgba {
            width: 2,
            height: 2,
            pixels: vec![0; 7],
        };
        assert_ne!(data.pixels.len(), expected_byte_len(data.width, data.height));
    }
}
