use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::engine::host::PixelSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, u8::MAX])
    }
}

/// CPU framebuffer the host rasterizes points into.
///
/// Points are addressed with the origin at the bottom-left corner, the way the
/// demo's orthographic projection sets things up. Rows are stored top-down so
/// the raw buffer can be uploaded to a texture as-is.
pub struct Canvas {
    image: RgbaImage,
    point_size: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, point_size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgb::BLACK.to_rgba()),
            point_size: point_size.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    pub fn clear(&mut self, color: Rgb) {
        let rgba = color.to_rgba();
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Color at screen pixel `(x, y)`, origin bottom-left.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x, self.height() - 1 - y);
        Some(Rgb::new(r, g, b))
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("failed to write snapshot {}", path.display()))
    }
}

impl PixelSink for Canvas {
    /// Fills a `point_size` square centered on `(x, y)`, clipped to the canvas.
    fn point(&mut self, x: i32, y: i32, color: Rgb) {
        let size = i64::from(self.point_size);
        let half = size / 2;
        let width = i64::from(self.width());
        let height = i64::from(self.height());

        let left = (i64::from(x) - half).max(0);
        let right = (i64::from(x) - half + size).min(width);
        let bottom = (i64::from(y) - half).max(0);
        let top = (i64::from(y) - half + size).min(height);
        if left >= right || bottom >= top {
            return;
        }

        let rgba = color.to_rgba();
        for sy in bottom..top {
            let row = (height - 1 - sy) as u32;
            for sx in left..right {
                self.image.put_pixel(sx as u32, row, rgba);
            }
        }
    }
}
