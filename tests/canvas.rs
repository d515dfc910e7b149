use pixplot::demo::FrameRenderer;
use pixplot::engine::canvas::{Canvas, Rgb};
use pixplot::engine::core::Resolution;
use pixplot::engine::host::{App, FrameHost, PixelSink};

const RED: Rgb = Rgb::new(255, 0, 0);

#[test]
fn test_point_fills_its_logical_cell() {
    let resolution = Resolution::default();
    let mut canvas = Canvas::new(
        resolution.window_width(),
        resolution.window_height(),
        resolution.scale as u32,
    );

    let (sx, sy) = resolution.to_screen(3, 5);
    canvas.point(sx, sy, RED);

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let inside = (12..16).contains(&x) && (20..24).contains(&y);
            let expected = if inside { RED } else { Rgb::BLACK };
            assert_eq!(canvas.pixel(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_point_origin_is_bottom_left() {
    let mut canvas = Canvas::new(8, 8, 2);
    canvas.point(1, 1, RED);

    assert_eq!(canvas.pixel(0, 0), Some(RED));
    assert_eq!(canvas.pixel(1, 1), Some(RED));
    assert_eq!(canvas.pixel(2, 2), Some(Rgb::BLACK));

    // Raw storage is top-down: the bottom row is the last one.
    let raw = canvas.as_raw();
    let bottom_row = (8 - 1) * 8 * 4;
    assert_eq!(&raw[bottom_row..bottom_row + 4], &[255, 0, 0, 255]);
    assert_eq!(&raw[..4], &[0, 0, 0, 255]);
}

#[test]
fn test_points_outside_canvas_are_clipped() {
    let mut canvas = Canvas::new(8, 8, 4);
    canvas.point(-2, -2, RED);
    canvas.point(100, 3, RED);
    canvas.point(i32::MIN, i32::MAX, RED);

    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(canvas.pixel(x, y), Some(Rgb::BLACK));
        }
    }

    // Partially visible point at the corner.
    canvas.point(0, 0, RED);
    assert_eq!(canvas.pixel(0, 0), Some(RED));
    assert_eq!(canvas.pixel(1, 1), Some(RED));
    assert_eq!(canvas.pixel(2, 0), Some(Rgb::BLACK));
    assert_eq!(canvas.pixel(8, 0), None);
}

#[test]
fn test_clear_paints_every_pixel() {
    let mut canvas = Canvas::new(5, 3, 1);
    canvas.clear(RED);
    assert!(canvas
        .as_raw()
        .chunks_exact(4)
        .all(|pixel| pixel == [255, 0, 0, 255]));
}

struct CanvasHost<'a> {
    canvas: &'a mut Canvas,
    swapped: bool,
}

impl PixelSink for CanvasHost<'_> {
    fn point(&mut self, x: i32, y: i32, color: Rgb) {
        self.canvas.point(x, y, color);
    }
}

impl FrameHost for CanvasHost<'_> {
    fn swap_buffers(&mut self) {
        self.swapped = true;
    }

    fn post_redisplay(&mut self) {}
}

#[test]
fn test_rendered_frame_on_canvas() {
    let resolution = Resolution::default();
    let mut canvas = Canvas::new(
        resolution.window_width(),
        resolution.window_height(),
        resolution.scale as u32,
    );
    let mut renderer = FrameRenderer::new(resolution);

    let mut host = CanvasHost {
        canvas: &mut canvas,
        swapped: false,
    };
    renderer.display(&mut host);
    assert!(host.swapped);

    let cell = |x: u32, y: u32| canvas.pixel(x * 4 + 1, y * 4 + 1);
    assert_eq!(cell(0, 0), Some(Rgb::new(255, 255, 0)));
    assert_eq!(cell(1, 0), Some(Rgb::new(160, 160, 0)));
    assert_eq!(cell(80, 61), Some(Rgb::new(255, 255, 0)));
    assert_eq!(cell(159, 119), Some(Rgb::new(0, 60, 130)));

    // The nudge centers each point, so no stray screen pixels remain unpainted.
    assert!(canvas
        .as_raw()
        .chunks_exact(4)
        .all(|pixel| pixel != [0, 0, 0, 255]));
}

#[test]
fn test_snapshot_writes_png() {
    let mut canvas = Canvas::new(4, 4, 1);
    canvas.clear(Rgb::new(0, 60, 130));

    let path = std::env::temp_dir().join(format!("pixplot-snapshot-{}.png", std::process::id()));
    canvas.save_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_far_plots_are_clipped_without_overflow() {
    let resolution = Resolution::default();
    let renderer = FrameRenderer::new(resolution);
    let mut canvas = Canvas::new(
        resolution.window_width(),
        resolution.window_height(),
        resolution.scale as u32,
    );

    renderer.plot(&mut canvas, i32::MAX, i32::MAX, 0);
    renderer.plot(&mut canvas, i32::MIN, 5, 0);

    assert!(canvas
        .as_raw()
        .chunks_exact(4)
        .all(|pixel| pixel == [0, 0, 0, 255]));
}
