//! Timed transitions between two icon types.
//!
//! The host owns the clock: it calls [`Transition::advance`] once per frame
//! with the time elapsed since the previous frame.

use crate::error::{MorphError, MorphResult};
use crate::geometry::{lerp, Float};
use crate::layout::IconType;

use core::time::Duration;
use rgb::RGB8;

#[allow(unused_imports)]
use num_traits::real::Real;

pub const ANIMATION_DURATION: Duration = Duration::from_millis(325);

/// Slow animation mode stretches transitions by this factor.
pub const SLOW_ANIMATION_FACTOR: u32 = 5;

/// Maps linear time to animation progress; both ends stay fixed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Interpolator {
    Linear,
    /// Fast start, slowing down towards the end: `1 − (1 − t)^(2·factor)`.
    Decelerate(Float),
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator::Decelerate(1.0)
    }
}

impl Interpolator {
    pub fn apply(self, t: Float) -> Float {
        if t <= 0.0 {
            return 0.0;
        } else if t >= 1.0 {
            return 1.0;
        }

        let eased = match self {
            Interpolator::Linear => t,
            Interpolator::Decelerate(factor) if factor == 1.0 => 1.0 - (1.0 - t) * (1.0 - t),
            Interpolator::Decelerate(factor) => 1.0 - (1.0 - t).powf(2.0 * factor),
        };

        // non-positive factors would otherwise leave [0, 1]
        eased.clamp(0.0, 1.0)
    }
}

/// Per channel linear blend, rounded to the nearest value.
pub fn blend_color(a: RGB8, b: RGB8, t: Float) -> RGB8 {
    let channel = |a: u8, b: u8| lerp(a as Float, b as Float, t).round().clamp(0.0, 255.0) as u8;
    RGB8::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: IconType,
    to: IconType,
    start_color: RGB8,
    end_color: RGB8,
    duration: Duration,
    elapsed: Duration,
    interpolator: Interpolator,
    finished: bool,
}

/// One scheduler tick, as delivered to the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub progress: Float,
    pub background_color: RGB8,
}

impl Transition {
    /// Fails when `from == to`; there is nothing to animate.
    pub fn new(
        from: IconType,
        to: IconType,
        start_color: RGB8,
        end_color: RGB8,
        duration: Duration,
        interpolator: Interpolator,
    ) -> MorphResult<Self> {
        if from == to {
            return Err(MorphError::SameIconType);
        }

        Ok(Self {
            from,
            to,
            start_color,
            end_color,
            duration,
            elapsed: Duration::ZERO,
            interpolator,
            finished: false,
        })
    }

    pub fn from(&self) -> IconType {
        self.from
    }

    pub fn to(&self) -> IconType {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear fraction of the duration already played, in [0, 1].
    pub fn fraction(&self) -> Float {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Moves the clock forward by `dt`.
    ///
    /// Returns the frame to display, or `None` once the final frame
    /// (progress 1) has already been delivered.
    pub fn advance(&mut self, dt: Duration) -> Option<Frame> {
        if self.finished {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let fraction = self.fraction();
        self.finished = fraction >= 1.0;

        Some(self.frame_at(fraction))
    }

    /// The frame shown after `fraction` of the duration. The last frame
    /// always has progress 1, whatever the interpolator.
    pub fn frame_at(&self, fraction: Float) -> Frame {
        let progress = match fraction >= 1.0 {
            true => 1.0,
            false => self.interpolator.apply(fraction),
        };
        Frame {
            progress,
            background_color: blend_color(self.start_color, self.end_color, progress),
        }
    }
}
