pub mod palette;
pub mod pattern;

pub use pattern::FrameRenderer;

use crate::engine::host::{App, FrameHost};

impl App for FrameRenderer {
    fn name(&self) -> &str {
        "Test Pattern"
    }

    fn display(&mut self, host: &mut dyn FrameHost) {
        self.clear_background(host);
        self.draw_test_pattern(host);
        host.swap_buffers();
        host.post_redisplay();
    }

    fn key_down(&mut self, _key: char, _x: i32, _y: i32) {}

    fn key_up(&mut self, _key: char, _x: i32, _y: i32) {}
}
