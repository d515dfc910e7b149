pub mod canvas;
pub mod core;
pub mod host;
pub mod input;
pub mod renderer;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use canvas::Canvas;
use self::core::{EngineConfig, Resolution};
use host::{App, WindowHost};
use renderer::Renderer;
use wgpu::SurfaceError;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

/// Window/event host: owns the window, the canvas and the presentation path,
/// and drives a single [`App`] from the winit event loop.
pub struct EngineApp {
    config: EngineConfig,
    resolution: Resolution,
    app: Box<dyn App>,
    canvas: Canvas,
    snapshot_taken: bool,
}

impl EngineApp {
    pub fn new(config: EngineConfig, app: impl App + 'static) -> Self {
        let resolution = config.resolution();
        let canvas = Canvas::new(
            resolution.window_width(),
            resolution.window_height(),
            resolution.scale as u32,
        );
        Self {
            config,
            resolution,
            app: Box::new(app),
            canvas,
            snapshot_taken: false,
        }
    }

    pub fn run(self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            demo = %self.app.name(),
            width = self.resolution.width,
            height = self.resolution.height,
            point_size = self.canvas.point_size(),
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut engine = self;
        let (window_x, window_y) = engine
            .config
            .window_position
            .unwrap_or_else(|| engine.resolution.default_window_position());

        let window = Arc::new(
            WindowBuilder::new()
                .with_title(engine.config.app_name.clone())
                .with_resizable(false)
                .with_inner_size(PhysicalSize::new(
                    engine.resolution.window_width(),
                    engine.resolution.window_height(),
                ))
                .with_position(PhysicalPosition::new(window_x, window_y))
                .build(&event_loop)
                .context("failed to create window")?,
        );
        let mut renderer: Option<Renderer> = None;
        let mut cursor = PhysicalPosition::new(0.0, 0.0);
        let mut redraw_pending = true;
        let mut last_frame = Instant::now();

        event_loop
            .run(move |event, target| match event {
                Event::Resumed => {
                    if renderer.is_none() {
                        let vsync = engine.config.vsync;
                        match pollster::block_on(Renderer::new(
                            window.clone(),
                            &engine.canvas,
                            vsync,
                        )) {
                            Ok(new_renderer) => {
                                tracing::info!(target: "engine", "renderer initialized");
                                renderer = Some(new_renderer);
                            }
                            Err(err) => {
                                tracing::error!(target: "engine", %err, "failed to initialize renderer");
                                target.exit();
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    if renderer.is_some() && redraw_pending {
                        redraw_pending = false;
                        window.request_redraw();
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => {
                            tracing::info!(target: "engine", "window close requested");
                            target.exit();
                        }
                        WindowEvent::Resized(size) => {
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(size);
                                tracing::debug!(target: "engine", size = ?renderer.size(), "surface resized");
                            }
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            let new_size = window.inner_size();
                            if let Err(err) = inner_size_writer.request_inner_size(new_size) {
                                tracing::debug!(target: "engine", %err, "inner size request ignored");
                            }
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(new_size);
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            cursor = position;
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            engine.dispatch_key(&event, cursor, target);
                        }
                        WindowEvent::RedrawRequested => {
                            if let Some(renderer) = renderer.as_mut() {
                                let now = Instant::now();
                                let delta = now.duration_since(last_frame);
                                last_frame = now;
                                tracing::trace!(
                                    target: "engine",
                                    frame_delta_ms = %delta.as_millis(),
                                    "redraw"
                                );

                                redraw_pending |= engine.redraw(renderer, &window, target);
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            })
            .map_err(|err| anyhow!(err))?;

        tracing::info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }

    /// Runs the display callback and presents the canvas if the app swapped.
    /// Returns whether the app asked for another redraw.
    fn redraw(
        &mut self,
        renderer: &mut Renderer,
        window: &Window,
        target: &EventLoopWindowTarget<()>,
    ) -> bool {
        let mut host = WindowHost::new(&mut self.canvas);
        self.app.display(&mut host);
        let swapped = host.swapped();
        let redisplay = host.redisplay_requested();

        if swapped {
            match renderer.render(&self.canvas) {
                Ok(()) => self.take_snapshot(),
                Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                    renderer.resize(window.inner_size());
                }
                Err(SurfaceError::OutOfMemory) => {
                    tracing::error!(target: "engine", "GPU out of memory, shutting down engine");
                    target.exit();
                }
                Err(SurfaceError::Timeout) => {
                    tracing::warn!(target: "engine", "surface timeout, retrying next frame");
                }
            }
        }
        redisplay
    }

    fn dispatch_key(
        &mut self,
        event: &KeyEvent,
        cursor: PhysicalPosition<f64>,
        target: &EventLoopWindowTarget<()>,
    ) {
        if let Some(key) = input::key_char(&event.logical_key) {
            let (x, y) = (cursor.x as i32, cursor.y as i32);
            match event.state {
                ElementState::Pressed => self.app.key_down(key, x, y),
                ElementState::Released => self.app.key_up(key, x, y),
            }
        }

        if event.state == ElementState::Pressed
            && event.logical_key == Key::Named(NamedKey::Escape)
        {
            tracing::info!(target: "engine", "escape pressed, closing");
            target.exit();
        }
    }

    fn take_snapshot(&mut self) {
        if self.snapshot_taken {
            return;
        }
        self.snapshot_taken = true;
        let Some(path) = self.config.snapshot.as_deref() else {
            return;
        };
        match self.canvas.save_png(path) {
            Ok(()) => tracing::info!(target: "engine", path = %path.display(), "snapshot written"),
            Err(err) => tracing::warn!(target: "engine", err = %format!("{err:#}"), "snapshot failed"),
        }
    }
}
