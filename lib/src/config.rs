use crate::error::RenderError;
use image::imageops::FilterType;

/// Channel value the contrast stretch pivots around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContrastPivot {
    /// Fixed mid-point of the 8-bit range (128)
    #[default]
    Midpoint,
    /// Rounded mean BT.601 luma of the resized image
    Mean,
}

/// Configuration for colored text art rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output columns
    pub width: u32,              // >= 1, default 120
    /// Row scale compensating for tall terminal cells
    pub aspect_correction: f32,  // (0.0, 4.0], default 0.5

    /// Tone mapping
    pub contrast: f32,           // 0.0-5.0, default 1.2
    pub contrast_pivot: ContrastPivot,
    pub gamma: f32,              // (0.0, 5.0], default 0.8

    /// Display color saturation multiplier
    pub color_boost: f32,        // 0.0-5.0, default 1.1

    /// Resampling filter used to reach the target size
    pub filter: FilterType,      // default CatmullRom (bicubic)
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 120,
            aspect_correction: 0.5,

            contrast: 1.2,
            contrast_pivot: ContrastPivot::Midpoint,
            gamma: 0.8,

            color_boost: 1.1,

            filter: FilterType::CatmullRom,
        }
    }
}

impl RenderConfig {
    /// Default configuration rendering at `width` columns
    pub fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters
    ///
    /// Width is checked first so a zero width is always reported as
    /// [`RenderError::InvalidWidth`].
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::InvalidWidth(self.width));
        }
        if !(self.aspect_correction > 0.0 && self.aspect_correction <= 4.0) {
            return Err(RenderError::InvalidConfig(format!(
                "aspect_correction must be in (0.0, 4.0], got {}",
                self.aspect_correction
            )));
        }
        if !(0.0..=5.0).contains(&self.contrast) {
            return Err(RenderError::InvalidConfig(format!(
                "contrast must be between 0.0 and 5.0, got {}",
                self.contrast
            )));
        }
        if !(self.gamma > 0.0 && self.gamma <= 5.0) {
            return Err(RenderError::InvalidConfig(format!(
                "gamma must be in (0.0, 5.0], got {}",
                self.gamma
            )));
        }
        if !(0.0..=5.0).contains(&self.color_boost) {
            return Err(RenderError::InvalidConfig(format!(
                "color_boost must be between 0.0 and 5.0, got {}",
                self.color_boost
            )));
        }
        Ok(())
    }
}
