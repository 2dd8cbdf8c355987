use std::{fs::File, io::BufReader, path::Path, time::Duration};

use crate::foundation::{
    core::{BLACK, Rgba8, Viewport},
    error::{CoverflowError, CoverflowResult},
    trig::Angle,
};

/// Tunables for a [`crate::Carousel`], loadable from JSON.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub viewport: Viewport,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Camera zoom; 100 puts the camera one viewport height away.
    pub zoom_percent: u32,
    /// Tilt of the side covers, in degrees. Must lie strictly between 0 and 90.
    pub tilt_degrees: u32,
    /// Extra gap between successive side covers, in pixels.
    pub spacing: u32,
    pub background: Rgba8,
    /// Maximum covers drawn on each side of the focus.
    pub side_limit: Option<usize>,
    pub tick_interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            cell_width: 135,
            cell_height: 175,
            zoom_percent: 100,
            tilt_degrees: 80,
            spacing: 60,
            background: BLACK,
            side_limit: None,
            tick_interval_ms: 30,
        }
    }
}

impl CarouselConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CoverflowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CoverflowError::validation(format!("parse carousel config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CoverflowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CoverflowError::validation(format!("open carousel config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_json_str(s: &str) -> CoverflowResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn validate(&self) -> CoverflowResult<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(CoverflowError::validation(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(CoverflowError::validation(format!(
                "cell must be non-empty, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.zoom_percent == 0 {
            return Err(CoverflowError::validation("zoom_percent must be > 0"));
        }
        if self.tilt_degrees == 0 || self.tilt_degrees >= 90 {
            return Err(CoverflowError::validation(format!(
                "tilt_degrees must be in 1..=89, got {}",
                self.tilt_degrees
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(CoverflowError::validation("tick_interval_ms must be > 0"));
        }
        Ok(())
    }

    pub fn tilt(&self) -> Angle {
        Angle::from_degrees(self.tilt_degrees as i32)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/config.rs"]
mod tests;
