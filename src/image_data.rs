use crate::error::{Error, Result};
use image::{RgbImage, RgbaImage};

/// Struct representing a packed RGBA image buffer.
///
/// Pixels are stored row-major in RGBA8 order: the pixel at index `i`
/// occupies bytes `[4i, 4i + 4)`.
#[derive(Debug, Clone)]
pub struct ImageData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageData {
    /// Creates a new `ImageData` instance.
    ///
    /// # Arguments
    /// * `width` - The width of the image in pixels.
    /// * `height` - The height of the image in pixels.
    /// * `data` - The packed RGBA bytes, of length `4 * width * height`.
    ///
    /// # Returns
    /// A new `ImageData` instance, or an error if the buffer length does not
    /// match the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(Error::ImageSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the width of the image data.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image data.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGBA bytes of the image data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl From<&RgbaImage> for ImageData {
    fn from(value: &RgbaImage) -> Self {
        let (width, height) = value.dimensions();
        Self {
            width,
            height,
            data: value.to_vec(),
        }
    }
}

impl From<&RgbImage> for ImageData {
    fn from(value: &RgbImage) -> Self {
        let (width, height) = value.dimensions();
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for pixel in value.chunks_exact(3) {
            data.extend_from_slice(pixel);
            data.push(u8::MAX);
        }
        Self {
            width,
            height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let image_data = ImageData::new(2, 1, vec![0; 8]).unwrap();
        assert_eq!(image_data.width(), 2);
        assert_eq!(image_data.height(), 1);
        assert_eq!(image_data.data().len(), 8);
    }

    #[test]
    fn test_new_empty() {
        let image_data = ImageData::new(0, 0, Vec::new()).unwrap();
        assert!(image_data.data().is_empty());
    }

    #[test]
    fn test_new_rejects_mismatched_buffer() {
        let result = ImageData::new(2, 2, vec![0; 15]);
        assert!(matches!(
            result,
            Err(Error::ImageSizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_from_rgba_image() {
        let image = RgbaImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let image_data = ImageData::from(&image);
        assert_eq!(image_data.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_rgb_image_expands_alpha() {
        let image = RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let image_data = ImageData::from(&image);
        assert_eq!(image_data.data(), &[1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
