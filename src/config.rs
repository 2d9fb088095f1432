use crate::animation::{Interpolator, ANIMATION_DURATION, SLOW_ANIMATION_FACTOR};
use crate::geometry::Float;
use crate::layout::IconType;

use core::time::Duration;
use rgb::RGB8;

pub const WHITE: RGB8 = RGB8 { r: 0xff, g: 0xff, b: 0xff };
pub const BLUE_500: RGB8 = RGB8 { r: 0x56, g: 0x77, b: 0xfc };
pub const GREEN_500: RGB8 = RGB8 { r: 0x25, g: 0x9b, b: 0x24 };
pub const RED_500: RGB8 = RGB8 { r: 0xe5, g: 0x1c, b: 0x23 };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    pub stroke_width: Float,
    pub icon_color: RGB8,
    pub returned_color: RGB8,
    pub done_color: RGB8,
    pub late_color: RGB8,
    pub duration: Duration,
    pub interpolator: Interpolator,
    /// When false, transitions only translate and blend; the icon never spins.
    pub rotation_enabled: bool,
    /// Plays transitions `SLOW_ANIMATION_FACTOR` times slower.
    pub slow_animation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stroke_width: 6.0,
            icon_color: WHITE,
            returned_color: BLUE_500,
            done_color: GREEN_500,
            late_color: RED_500,
            duration: ANIMATION_DURATION,
            interpolator: Interpolator::default(),
            rotation_enabled: true,
            slow_animation: false,
        }
    }
}

impl Config {
    pub fn with_stroke_width(mut self, stroke_width: Float) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_icon_color(mut self, color: RGB8) -> Self {
        self.icon_color = color;
        self
    }

    pub fn with_background_color(mut self, icon_type: IconType, color: RGB8) -> Self {
        match icon_type {
            IconType::Returned => self.returned_color = color,
            IconType::Done => self.done_color = color,
            IconType::Late => self.late_color = color,
        }
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    pub fn with_rotation(mut self, enabled: bool) -> Self {
        self.rotation_enabled = enabled;
        self
    }

    pub fn with_slow_animation(mut self, slow: bool) -> Self {
        self.slow_animation = slow;
        self
    }

    pub fn background_color(&self, icon_type: IconType) -> RGB8 {
        match icon_type {
            IconType::Returned => self.returned_color,
            IconType::Done => self.done_color,
            IconType::Late => self.late_color,
        }
    }

    pub fn effective_duration(&self) -> Duration {
        match self.slow_animation {
            true => self.duration.saturating_mul(SLOW_ANIMATION_FACTOR),
            false => self.duration,
        }
    }
}
