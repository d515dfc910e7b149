use crate::engine::canvas::{Canvas, Rgb};

/// Receives points in window coordinates, origin bottom-left.
pub trait PixelSink {
    fn point(&mut self, x: i32, y: i32, color: Rgb);
}

/// What an application sees of the window during a redraw.
pub trait FrameHost: PixelSink {
    /// Marks the current frame as complete and ready to present.
    fn swap_buffers(&mut self);
    /// Asks the host to schedule another redraw.
    fn post_redisplay(&mut self);
}

/// Callbacks the engine dispatches from its event loop.
pub trait App {
    fn name(&self) -> &str;

    fn display(&mut self, host: &mut dyn FrameHost);

    /// `x`/`y` are the cursor position in window pixels, origin top-left.
    fn key_down(&mut self, key: char, x: i32, y: i32);

    fn key_up(&mut self, key: char, x: i32, y: i32);
}

/// Frame host backed by the engine's canvas.
pub(crate) struct WindowHost<'a> {
    canvas: &'a mut Canvas,
    swapped: bool,
    redisplay: bool,
}

impl<'a> WindowHost<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas) -> Self {
        Self {
            canvas,
            swapped: false,
            redisplay: false,
        }
    }

    pub(crate) fn swapped(&self) -> bool {
        self.swapped
    }

    pub(crate) fn redisplay_requested(&self) -> bool {
        self.redisplay
    }
}

impl PixelSink for WindowHost<'_> {
    fn point(&mut self, x: i32, y: i32, color: Rgb) {
        self.canvas.point(x, y, color);
    }
}

impl FrameHost for WindowHost<'_> {
    fn swap_buffers(&mut self) {
        self.swapped = true;
    }

    fn post_redisplay(&mut self) {
        self.redisplay = true;
    }
}
