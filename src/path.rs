use crate::geometry::{Affine, Couple, Float, FOUR_SPLINE_MAGIC_NUMBER};

use alloc::vec::Vec;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathStep {
    MoveTo(Couple),
    LineTo(Couple),
    CubicTo {
        ctrl0: Couple,
        ctrl1: Couple,
        end: Couple,
    },
    Close,
}

/// An immutable path description, built fresh for every sampled frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPath {
    steps: Vec<PathStep>,
}

impl RenderPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A closed polygon through `points`.
    pub fn polygon(points: &[Couple]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close();
        }
        path
    }

    /// Four cubic curves, one per quadrant.
    pub fn circle(center: Couple, radius: Float) -> Self {
        let d = radius * FOUR_SPLINE_MAGIC_NUMBER;
        let (cx, cy) = center.into_tuple();
        let p = Couple::new;

        let mut path = Self::new();
        path.move_to(p(cx - radius, cy))
            .cubic_to(p(cx - radius, cy - d), p(cx - d, cy - radius), p(cx, cy - radius))
            .cubic_to(p(cx + d, cy - radius), p(cx + radius, cy - d), p(cx + radius, cy))
            .cubic_to(p(cx + radius, cy + d), p(cx + d, cy + radius), p(cx, cy + radius))
            .cubic_to(p(cx - d, cy + radius), p(cx - radius, cy + d), p(cx - radius, cy))
            .close();
        path
    }

    pub fn move_to(&mut self, p: Couple) -> &mut Self {
        self.steps.push(PathStep::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Couple) -> &mut Self {
        self.steps.push(PathStep::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, ctrl0: Couple, ctrl1: Couple, end: Couple) -> &mut Self {
        self.steps.push(PathStep::CubicTo { ctrl0, ctrl1, end });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.steps.push(PathStep::Close);
        self
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn transformed(&self, m: &Affine) -> Self {
        let steps = self.steps.iter().map(|step| match *step {
            PathStep::MoveTo(p) => PathStep::MoveTo(m.mul_point_2d(p)),
            PathStep::LineTo(p) => PathStep::LineTo(m.mul_point_2d(p)),
            PathStep::CubicTo { ctrl0, ctrl1, end } => PathStep::CubicTo {
                ctrl0: m.mul_point_2d(ctrl0),
                ctrl1: m.mul_point_2d(ctrl1),
                end: m.mul_point_2d(end),
            },
            PathStep::Close => PathStep::Close,
        });
        Self { steps: steps.collect() }
    }
}
