use crate::error::{Result, ViewerError};
use image::{DynamicImage, RgbImage, RgbaImage};

/// Raster image of a rendered page: RGB samples, `stride` bytes per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    stride: usize,
    samples: Vec<u8>,
}

impl Pixmap {
    pub const BYTES_PER_PIXEL: usize = 3;

    pub fn new(width: u32, height: u32, stride: usize, samples: Vec<u8>) -> Result<Self> {
        let row_bytes = width as usize * Self::BYTES_PER_PIXEL;
        if stride < row_bytes {
            return Err(ViewerError::RenderFailed(format!(
                "stride {} shorter than row of {} bytes",
                stride, row_bytes
            )));
        }
        let required = stride * height as usize;
        if samples.len() < required {
            return Err(ViewerError::RenderFailed(format!(
                "pixel buffer holds {} bytes, {}x{} with stride {} needs {}",
                samples.len(),
                width,
                height,
                stride,
                required
            )));
        }

        Ok(Self {
            width,
            height,
            stride,
            samples,
        })
    }

    /// Builds a pixmap from tightly packed RGBA bytes, dropping alpha.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let image = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            ViewerError::RenderFailed(format!("RGBA buffer does not match {}x{}", width, height))
        })?;
        Ok(DynamicImage::ImageRgba8(image).to_rgb8().into())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let row_bytes = self.width as usize * Self::BYTES_PER_PIXEL;
        self.samples
            .chunks(self.stride.max(1))
            .take(self.height as usize)
            .map(move |row| &row[..row_bytes])
    }

    /// RGB bytes with row padding removed.
    pub fn packed_samples(&self) -> Vec<u8> {
        if self.stride == self.width as usize * Self::BYTES_PER_PIXEL {
            let len = self.stride * self.height as usize;
            return self.samples[..len].to_vec();
        }
        self.rows().flatten().copied().collect()
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgb(
            [self.width as usize, self.height as usize],
            &self.packed_samples(),
        )
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width as f32, self.height as f32)
    }
}

impl From<RgbImage> for Pixmap {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            stride: width as usize * Self::BYTES_PER_PIXEL,
            samples: image.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_stride() {
        let result = Pixmap::new(4, 1, 8, vec![0; 12]);
        assert!(matches!(result, Err(ViewerError::RenderFailed(_))));
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let result = Pixmap::new(2, 2, 6, vec![0; 11]);
        assert!(matches!(result, Err(ViewerError::RenderFailed(_))));
    }

    #[test]
    fn test_packed_samples_strip_row_padding() {
        // 2x2 image, rows padded to 8 bytes
        let samples = vec![
            1, 2, 3, 4, 5, 6, 0, 0, //
            7, 8, 9, 10, 11, 12, 0, 0,
        ];
        let pixmap = Pixmap::new(2, 2, 8, samples).expect("valid pixmap");
        assert_eq!(
            pixmap.packed_samples(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
    }

    #[test]
    fn test_from_rgba_drops_alpha() {
        let rgba = vec![10, 20, 30, 255, 40, 50, 60, 0];
        let pixmap = Pixmap::from_rgba(2, 1, rgba).expect("valid rgba");
        assert_eq!(pixmap.width(), 2);
        assert_eq!(pixmap.height(), 1);
        assert_eq!(pixmap.stride(), 6);
        assert_eq!(pixmap.samples(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_from_rgba_rejects_mismatched_buffer() {
        let result = Pixmap::from_rgba(3, 3, vec![0; 8]);
        assert!(result.is_err());
    }

    #[test]
    fn test_color_image_matches_dimensions() {
        let image = RgbImage::from_pixel(3, 2, image::Rgb([200, 100, 50]));
        let pixmap = Pixmap::from(image);
        let color_image = pixmap.to_color_image();
        assert_eq!(color_image.size, [3, 2]);
        assert_eq!(
            color_image.pixels[0],
            egui::Color32::from_rgb(200, 100, 50)
        );
    }

    #[test]
    fn test_rows_yield_height_rows() {
        let pixmap = Pixmap::from(RgbImage::new(5, 4));
        assert_eq!(pixmap.rows().count(), 4);
        assert!(pixmap.rows().all(|row| row.len() == 15));
    }
}
