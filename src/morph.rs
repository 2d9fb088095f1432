//! The morphing icon: previous/current icon type, progress, and everything
//! needed to turn them into paths.

use crate::animation::{Frame, Transition};
use crate::config::Config;
use crate::geometry::{cos_deg, lerp, rotation_about, translation, Affine, Couple, Float, C_ZERO};
use crate::layout::{compute_layouts, DrawBounds, IconLayout, IconType, LayoutTable};
use crate::path::RenderPath;
use crate::rendering::Canvas;

use core::time::Duration;
use rgb::{RGB8, RGBA8};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MorphState {
    pub previous_type: IconType,
    pub current_type: IconType,
    /// 0 shows `previous_type`, 1 shows `current_type`
    pub progress: Float,
    pub background_color: RGB8,
}

impl MorphState {
    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Applied to the draw region before the icon paths: translate, then
/// rotate around `pivot`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTransform {
    pub translation: Couple,
    /// degrees, clockwise on screen
    pub rotation: Float,
    pub pivot: Couple,
}

impl FrameTransform {
    /// The same matrix a canvas ends up with after `translate` then `rotate`.
    pub fn to_affine(&self) -> Affine {
        translation(self.translation.x, self.translation.y) * rotation_about(self.rotation, self.pivot)
    }
}

/// One sampled frame of the icon, in draw region coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct IconGeometry {
    /// three chained cubic curves, stroked
    pub outline: RenderPath,
    /// closed triangle, filled
    pub arrow_head: RenderPath,
    /// closed quad (the exclamation dot), filled
    pub mark: RenderPath,
    pub transform: FrameTransform,
}

/// Rotation and translation for the `previous → current` pair.
///
/// The check mark's visual center is not the center of the draw region, so
/// transitions touching `Done` shift the frame while rotating; the others
/// spin one full turn around the center.
pub fn frame_transform(
    previous: IconType,
    current: IconType,
    progress: Float,
    radius: Float,
    rotation_enabled: bool,
) -> FrameTransform {
    let from_done = previous == IconType::Done;
    let to_done = current == IconType::Done;

    let translation = if from_done || to_done {
        let p = if to_done { progress } else { 1.0 - progress };
        let (cos35, cos55) = (cos_deg(35.0), cos_deg(55.0));
        Couple::new(
            lerp(0.0, -(radius / 2.0 * cos55 - radius / 4.0 * cos35), p),
            lerp(0.0, radius / 2.0 * cos55, p),
        )
    } else {
        C_ZERO
    };

    let rotation = if !rotation_enabled {
        0.0
    } else if to_done {
        lerp(0.0, -270.0, progress)
    } else if from_done {
        lerp(90.0, -360.0, progress)
    } else {
        lerp(0.0, -360.0, progress)
    };

    FrameTransform {
        translation,
        rotation,
        pivot: Couple::new(radius, radius),
    }
}

pub fn build_geometry(layout: &IconLayout, transform: FrameTransform) -> IconGeometry {
    let mut outline = RenderPath::new();
    outline.move_to(layout.end_points[0]);
    for i in 0..3 {
        let [_, ctrl0, ctrl1, end] = layout.curve(i);
        outline.cubic_to(ctrl0, ctrl1, end);
    }

    IconGeometry {
        outline,
        arrow_head: RenderPath::polygon(&layout.arrow_head_points),
        mark: RenderPath::polygon(&layout.mark_points),
        transform,
    }
}

/// Drawable status icon morphing between [`IconType`]s.
///
/// Single owner, driven from one loop: call [`MorphingIcon::tick`] every
/// frame and redraw when [`MorphingIcon::take_redraw`] says so.
#[derive(Debug, Clone)]
pub struct MorphingIcon {
    config: Config,
    bounds: DrawBounds,
    layouts: LayoutTable,
    state: MorphState,
    transition: Option<Transition>,
    alpha: u8,
    redraw: bool,
}

impl MorphingIcon {
    pub fn new(config: Config) -> Self {
        let bounds = DrawBounds::from_bounds(0.0, 0.0);
        let layouts = compute_layouts(bounds.size.x, bounds.size.y, config.stroke_width);
        let initial = IconType::Returned;

        let mut icon = Self {
            config,
            bounds,
            layouts,
            state: MorphState {
                previous_type: initial,
                current_type: initial,
                progress: 1.0,
                background_color: config.background_color(initial),
            },
            transition: None,
            alpha: u8::MAX,
            redraw: false,
        };
        icon.set_icon_type(initial);
        icon
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    pub fn icon_type(&self) -> IconType {
        self.state.current_type
    }

    pub fn draw_bounds(&self) -> &DrawBounds {
        &self.bounds
    }

    pub fn layouts(&self) -> &LayoutTable {
        &self.layouts
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The running transition, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Returns whether a redraw was requested since the last call, and
    /// clears the request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::replace(&mut self.redraw, false)
    }

    /// Recomputes the layouts for a new host size.
    pub fn set_bounds(&mut self, width: Float, height: Float) {
        let bounds = DrawBounds::from_bounds(width, height);
        if bounds == self.bounds {
            return;
        }

        log::debug!("bounds changed to {}x{} (inset {})", width, height, bounds.inset);
        self.layouts = compute_layouts(bounds.size.x, bounds.size.y, self.config.stroke_width);
        self.bounds = bounds;
        self.redraw = true;
    }

    /// Shows `icon_type` right away, cancelling any transition.
    pub fn set_icon_type(&mut self, icon_type: IconType) {
        if self.transition.take().is_some() {
            log::debug!("transition cancelled by set_icon_type({})", icon_type.as_text());
        }

        self.state = MorphState {
            previous_type: icon_type,
            current_type: icon_type,
            progress: 1.0,
            background_color: self.config.background_color(icon_type),
        };
        self.redraw = true;
    }

    /// Starts a transition towards `icon_type`; does nothing if it is
    /// already the current type.
    ///
    /// Calling this while a transition is running replaces it: the running
    /// transition's source stays the starting point and the new type
    /// becomes the target. Retargeting back to that source restarts from the
    /// previous target instead.
    pub fn animate_to(&mut self, icon_type: IconType) {
        if icon_type == self.state.current_type {
            return;
        }

        let in_flight = !self.state.is_settled() && icon_type != self.state.previous_type;
        let from = match in_flight {
            true => self.state.previous_type,
            false => self.state.current_type,
        };

        let transition = match Transition::new(
            from,
            icon_type,
            self.config.background_color(from),
            self.config.background_color(icon_type),
            self.config.effective_duration(),
            self.config.interpolator,
        ) {
            Ok(transition) => transition,
            Err(e) => {
                log::warn!("not animating {} -> {}: {}", from.as_text(), icon_type.as_text(), e);
                return;
            }
        };

        log::debug!(
            "animating {} -> {} over {}ms{}",
            from.as_text(),
            icon_type.as_text(),
            transition.duration().as_millis(),
            if in_flight { " (retargeted)" } else { "" },
        );

        self.state = MorphState {
            previous_type: from,
            current_type: icon_type,
            progress: 0.0,
            background_color: self.config.background_color(from),
        };
        self.transition = Some(transition);
        self.redraw = true;
    }

    /// Scheduler callback: shows `frame`, requesting a redraw if anything
    /// visible changed.
    ///
    /// Hosts running their own clock can push frames here directly instead
    /// of calling [`MorphingIcon::tick`]; a frame at progress 1 ends the
    /// transition either way.
    pub fn apply_frame(&mut self, frame: Frame) -> bool {
        let progress = frame.progress.clamp(0.0, 1.0);
        let changed = progress != self.state.progress
            || frame.background_color != self.state.background_color;

        if changed {
            log::trace!("frame: progress {:.3}", progress);
            self.state.progress = progress;
            self.state.background_color = frame.background_color;
            self.redraw = true;
        }

        if progress >= 1.0 {
            self.finish_transition();
        }

        changed
    }

    /// Advances the running transition by `dt`. Returns whether a
    /// transition is still running afterwards.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let frame = match self.transition.as_mut() {
            Some(transition) => transition.advance(dt),
            None => return false,
        };

        match frame {
            Some(frame) => {
                self.apply_frame(frame);
            }
            None => self.finish_transition(),
        }

        self.transition.is_some()
    }

    fn finish_transition(&mut self) {
        if let Some(transition) = self.transition.take() {
            log::debug!(
                "transition {} -> {} finished",
                transition.from().as_text(),
                transition.to().as_text(),
            );
        }
    }

    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        if self.config.rotation_enabled != enabled {
            self.config.rotation_enabled = enabled;
            self.redraw = true;
        }
    }

    /// Only affects transitions started afterwards.
    pub fn set_slow_animation(&mut self, slow: bool) {
        self.config.slow_animation = slow;
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        if self.alpha != alpha {
            self.alpha = alpha;
            self.redraw = true;
        }
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// All points, blended between the previous and the current layout.
    pub fn sample_layout(&self) -> IconLayout {
        let previous = self.layouts.get(self.state.previous_type);
        let current = self.layouts.get(self.state.current_type);
        previous.interpolate(current, self.state.progress)
    }

    pub fn frame_transform(&self) -> FrameTransform {
        frame_transform(
            self.state.previous_type,
            self.state.current_type,
            self.state.progress,
            self.bounds.radius(),
            self.config.rotation_enabled,
        )
    }

    pub fn sample_geometry(&self) -> IconGeometry {
        build_geometry(&self.sample_layout(), self.frame_transform())
    }

    /// Draws the background circle and the icon, in host coordinates.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        let geometry = self.sample_geometry();
        let with_alpha = |c: RGB8| RGBA8::new(c.r, c.g, c.b, self.alpha);

        let (center, radius) = self.bounds.background_circle();
        canvas.fill_path(&RenderPath::circle(center, radius), with_alpha(self.state.background_color));

        canvas.save();
        canvas.translate(self.bounds.inset, self.bounds.inset);

        let transform = geometry.transform;
        canvas.translate(transform.translation.x, transform.translation.y);
        canvas.rotate(transform.rotation, transform.pivot);

        let icon_color = with_alpha(self.config.icon_color);
        canvas.fill_path(&geometry.arrow_head, icon_color);
        canvas.fill_path(&geometry.mark, icon_color);
        canvas.stroke_path(&geometry.outline, icon_color, self.config.stroke_width);

        canvas.restore();
    }

    pub fn log_points(&self) {
        let layout = self.sample_layout();
        let state = self.state;

        log::info!(
            "{} -> {} at {:.3}",
            state.previous_type.as_text(),
            state.current_type.as_text(),
            state.progress,
        );
        log::info!(    "| INDEX |    KIND    |    X    |    Y    |");

        let groups: [(&str, &[Couple]); 5] = [
            ("End", &layout.end_points),
            ("Control1", &layout.control_points1),
            ("Control2", &layout.control_points2),
            ("ArrowHead", &layout.arrow_head_points),
            ("Mark", &layout.mark_points),
        ];

        for (kind, points) in groups {
            for (i, p) in points.iter().enumerate() {
                log::info!("| {:^5} | {:^10} | {:^7.2} | {:^7.2} |", i, kind, p.x, p.y);
            }
        }
    }
}

impl Default for MorphingIcon {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
