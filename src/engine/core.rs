use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Largest window edge, in screen pixels, a config may produce.
pub const MAX_WINDOW_DIMENSION: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    /// Resolution multiplier: 1 = 160x120, 2 = 320x240, 4 = 640x480.
    pub res: u32,
    pub base_width: u32,
    pub base_height: u32,
    /// Screen pixels per logical pixel at `res == 1`.
    pub base_pixel_scale: u32,
    pub point_offset: i32,
    pub window_position: Option<(i32, i32)>,
    pub vsync: bool,
    /// Write the first presented frame to this PNG file.
    pub snapshot: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Test App".to_string(),
            res: 1,
            base_width: 160,
            base_height: 120,
            base_pixel_scale: 4,
            point_offset: 2,
            window_position: None,
            vsync: true,
            snapshot: None,
        }
    }
}

impl EngineConfig {
    pub fn from_ron(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source).context("failed to parse engine config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_ron(&source).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Loads `path` if it exists, otherwise falls back to the built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::info!(target: "engine", path = %path.display(), "loading config");
            Self::load(path)
        } else {
            tracing::debug!(target: "engine", path = %path.display(), "no config file, using defaults");
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_width == 0 || self.base_height == 0 {
            bail!(
                "base resolution must be non-zero, got {}x{}",
                self.base_width,
                self.base_height
            );
        }
        if self.res == 0 {
            bail!("resolution multiplier must be at least 1");
        }
        if self.res > self.base_pixel_scale || self.base_pixel_scale % self.res != 0 {
            bail!(
                "resolution multiplier {} must evenly divide the base pixel scale {}",
                self.res,
                self.base_pixel_scale
            );
        }

        let scale = self.base_pixel_scale / self.res;
        for (axis, base) in [("width", self.base_width), ("height", self.base_height)] {
            base.checked_mul(self.res)
                .and_then(|logical| logical.checked_mul(scale))
                .filter(|window| *window <= MAX_WINDOW_DIMENSION)
                .with_context(|| {
                    format!("window {axis} exceeds {MAX_WINDOW_DIMENSION} pixels")
                })?;
        }

        if self.point_offset.unsigned_abs() > self.base_pixel_scale {
            bail!(
                "point offset {} is larger than the base pixel scale {}",
                self.point_offset,
                self.base_pixel_scale
            );
        }
        Ok(())
    }

    /// Derived geometry. Only meaningful for a config that passed [`EngineConfig::validate`].
    pub fn resolution(&self) -> Resolution {
        let clamp = |value: u32| i32::try_from(value).unwrap_or(i32::MAX);
        Resolution {
            width: clamp(self.base_width.saturating_mul(self.res)),
            height: clamp(self.base_height.saturating_mul(self.res)),
            scale: clamp(self.base_pixel_scale / self.res.max(1)),
            point_offset: self.point_offset,
        }
    }
}

/// Logical canvas geometry and its mapping onto the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: i32,
    pub height: i32,
    pub scale: i32,
    pub point_offset: i32,
}

impl Resolution {
    pub fn half_width(&self) -> i32 {
        self.width / 2
    }

    pub fn half_height(&self) -> i32 {
        self.height / 2
    }

    pub fn window_width(&self) -> u32 {
        self.width.saturating_mul(self.scale).max(0) as u32
    }

    pub fn window_height(&self) -> u32 {
        self.height.saturating_mul(self.scale).max(0) as u32
    }

    pub fn default_window_position(&self) -> (i32, i32) {
        (
            (self.window_width() / 2) as i32,
            (self.window_height() / 2) as i32,
        )
    }

    /// Screen coordinate (origin bottom-left) of the point drawn for logical pixel `(x, y)`.
    /// Saturates instead of overflowing; the canvas clips anything off-screen.
    pub fn to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.saturating_mul(self.scale).saturating_add(self.point_offset),
            y.saturating_mul(self.scale).saturating_add(self.point_offset),
        )
    }
}

impl Default for Resolution {
    fn default() -> Self {
        EngineConfig::default().resolution()
    }
}
