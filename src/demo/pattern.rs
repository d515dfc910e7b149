use crate::demo::palette::{self, ColorCode, PALETTE_LEN};
use crate::engine::core::Resolution;
use crate::engine::host::PixelSink;

/// The indicator tick wraps to zero once it goes past this value.
pub const TICK_LIMIT: u32 = 20;

/// Draws the banding test pattern and the frame-rate indicator.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    resolution: Resolution,
    tick: u32,
}

impl FrameRenderer {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            tick: 0,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Plots logical pixel `(x, y)`. Coordinates are not checked against the canvas.
    pub fn plot<S: PixelSink + ?Sized>(&self, sink: &mut S, x: i32, y: i32, code: i32) {
        let (sx, sy) = self.resolution.to_screen(x, y);
        sink.point(sx, sy, palette::lookup(code));
    }

    pub fn clear_background<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        let background = ColorCode::Background as i32;
        for y in 0..self.resolution.height {
            for x in 0..self.resolution.width {
                self.plot(sink, x, y, background);
            }
        }
    }

    pub fn draw_test_pattern<S: PixelSink + ?Sized>(&mut self, sink: &mut S) {
        let mut code = 0;
        for y in 0..self.resolution.half_height() {
            for x in 0..self.resolution.half_width() {
                self.plot(sink, x, y, code);
                code += 1;
                if code >= PALETTE_LEN as i32 {
                    code = 0;
                }
            }
        }

        self.tick += 1;
        if self.tick > TICK_LIMIT {
            self.tick = 0;
        }
        self.plot(
            sink,
            self.resolution.half_width(),
            self.resolution.half_height() + self.tick as i32,
            ColorCode::Yellow as i32,
        );
        tracing::trace!(target: "demo", tick = self.tick, "test pattern drawn");
    }
}
