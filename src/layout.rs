//! Per-icon bezier layouts, computed from the draw size.
//!
//! Every icon is described by the same skeleton: three chained cubic curves
//! (four end points, two control points per curve), a three point arrow head
//! and a four point exclamation dot. Icons which don't show a decoration
//! collapse its points onto one of their end points, so any two layouts can
//! be blended index by index.

use crate::error::{MorphError, MorphResult};
use crate::geometry::{cos_deg, is_finite, lerp_couple, sin_deg, Couple, Float, C_ZERO};
use crate::geometry::FOUR_SPLINE_MAGIC_NUMBER;

#[allow(unused_imports)]
use num_traits::real::Real;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IconType {
    /// Circular "refresh" arrow.
    Returned,
    /// Check mark.
    Done,
    /// Exclamation mark.
    Late,
}

pub const ICON_TYPES: [IconType; 3] = [
    IconType::Returned,
    IconType::Done,
    IconType::Late,
];

impl IconType {
    pub fn as_u8(self) -> u8 {
        match self {
            IconType::Returned => 0,
            IconType::Done => 1,
            IconType::Late => 2,
        }
    }

    pub fn as_text(self) -> &'static str {
        match self {
            IconType::Returned => "Returned",
            IconType::Done => "Done",
            IconType::Late => "Late",
        }
    }
}

impl TryFrom<u8> for IconType {
    type Error = MorphError;

    fn try_from(value: u8) -> MorphResult<Self> {
        ICON_TYPES
            .get(value as usize)
            .copied()
            .ok_or(MorphError::InvalidIconType(value))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IconLayout {
    /// `end_points[i]` → `end_points[i + 1]` is the i-th curve
    pub end_points: [Couple; 4],
    pub control_points1: [Couple; 3],
    pub control_points2: [Couple; 3],
    pub arrow_head_points: [Couple; 3],
    /// the exclamation dot
    pub mark_points: [Couple; 4],
}

impl Default for IconLayout {
    fn default() -> Self {
        Self {
            end_points: [C_ZERO; 4],
            control_points1: [C_ZERO; 3],
            control_points2: [C_ZERO; 3],
            arrow_head_points: [C_ZERO; 3],
            mark_points: [C_ZERO; 4],
        }
    }
}

impl IconLayout {
    /// Blends every point of `self` towards the same point of `other`.
    pub fn interpolate(&self, other: &Self, t: Float) -> Self {
        fn each<const N: usize>(a: &[Couple; N], b: &[Couple; N], t: Float) -> [Couple; N] {
            core::array::from_fn(|i| lerp_couple(a[i], b[i], t))
        }

        Self {
            end_points: each(&self.end_points, &other.end_points, t),
            control_points1: each(&self.control_points1, &other.control_points1, t),
            control_points2: each(&self.control_points2, &other.control_points2, t),
            arrow_head_points: each(&self.arrow_head_points, &other.arrow_head_points, t),
            mark_points: each(&self.mark_points, &other.mark_points, t),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Couple> + '_ {
        self.end_points
            .iter()
            .chain(self.control_points1.iter())
            .chain(self.control_points2.iter())
            .chain(self.arrow_head_points.iter())
            .chain(self.mark_points.iter())
            .copied()
    }

    pub fn is_finite(&self) -> bool {
        self.points().all(is_finite)
    }

    /// (start, ctrl0, ctrl1, end) of the i-th curve
    pub fn curve(&self, i: usize) -> [Couple; 4] {
        [
            self.end_points[i],
            self.control_points1[i],
            self.control_points2[i],
            self.end_points[i + 1],
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTable {
    returned: IconLayout,
    done: IconLayout,
    late: IconLayout,
}

impl LayoutTable {
    pub fn get(&self, icon_type: IconType) -> &IconLayout {
        match icon_type {
            IconType::Returned => &self.returned,
            IconType::Done => &self.done,
            IconType::Late => &self.late,
        }
    }
}

/// Square region the icon is drawn in, inset so that the icon fits the
/// background circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawBounds {
    /// full size given by the host
    pub bounds: Couple,
    pub inset: Float,
    /// size of the inset region
    pub size: Couple,
}

impl DrawBounds {
    pub fn from_bounds(width: Float, height: Float) -> Self {
        let total_size = width.min(height);
        let total_radius = total_size / 2.0;
        let inset = (total_size - (2.0 * total_radius * total_radius).sqrt()) / 2.0;

        Self {
            bounds: Couple::new(width, height),
            inset,
            size: Couple::new(width - 2.0 * inset, height - 2.0 * inset),
        }
    }

    /// Half the side of the square draw region; also the rotation pivot.
    pub fn radius(&self) -> Float {
        self.size.x.min(self.size.y) / 2.0
    }

    /// The background circle: (center, radius), in host coordinates.
    pub fn background_circle(&self) -> (Couple, Float) {
        let center = Couple::new(self.bounds.x / 2.0, self.bounds.y / 2.0);
        (center, self.bounds.x.min(self.bounds.y) / 2.0)
    }
}

/// Computes the layouts of all three icons inside a `width × height` region.
pub fn compute_layouts(width: Float, height: Float, stroke_width: Float) -> LayoutTable {
    let s = width.min(height);
    let r = s / 2.0;

    log::debug!("computing icon layouts for a {}x{} region", width, height);

    LayoutTable {
        returned: returned_layout(s, r, stroke_width),
        done: done_layout(s, r),
        late: late_layout(s, r, stroke_width),
    }
}

fn returned_layout(s: Float, r: Float, sw: Float) -> IconLayout {
    let d = r * FOUR_SPLINE_MAGIC_NUMBER;

    let end_points = [
        Couple::new(0.0, r),
        Couple::new(r, 0.0),
        Couple::new(s, r),
        Couple::new(r, s),
    ];

    let arrow_head_size = 4.0 * sw;
    let arrow_head_height = arrow_head_size * cos_deg(30.0);
    let x = end_points[0].x;
    // one pixel up, or the arc and the arrow head don't touch
    let y = end_points[0].y - 1.0;

    IconLayout {
        end_points,
        control_points1: [
            Couple::new(0.0, r - d),
            Couple::new(r + d, 0.0),
            Couple::new(s, r + d),
        ],
        control_points2: [
            Couple::new(r - d, 0.0),
            Couple::new(s, r - d),
            Couple::new(r + d, s),
        ],
        arrow_head_points: [
            Couple::new(x, y + arrow_head_height),
            Couple::new(x - arrow_head_size / 2.0, y),
            Couple::new(x + arrow_head_size / 2.0, y),
        ],
        mark_points: [end_points[3]; 4],
    }
}

fn done_layout(s: Float, r: Float) -> IconLayout {
    let (cos35, sin35) = (cos_deg(35.0), sin_deg(35.0));
    let (cos55, sin55) = (cos_deg(55.0), sin_deg(55.0));

    // long bar, up and to the left of the center
    let long = |radius: Float| Couple::new(r - radius * cos35, r - radius * sin35);
    // short bar, down and to the left of the center
    let short = |radius: Float| Couple::new(r - radius * cos55, r + radius * sin55);

    let end_points = [
        long(r),
        long(r / 2.0),
        Couple::new(r, s / 2.0),
        short(r / 2.0),
    ];

    IconLayout {
        end_points,
        control_points1: [
            long(r * 5.0 / 6.0),
            long(r * 2.0 / 6.0),
            short(r / 6.0),
        ],
        control_points2: [
            long(r * 4.0 / 6.0),
            long(r / 6.0),
            short(r * 2.0 / 6.0),
        ],
        arrow_head_points: [end_points[0]; 3],
        mark_points: [end_points[3]; 4],
    }
}

fn late_layout(s: Float, r: Float, sw: Float) -> IconLayout {
    let padding = s / 6.0;
    let bar_length = s - 2.5 * sw - 2.0 * padding;
    let at = |ninths: Float| Couple::new(r, padding + ninths * bar_length / 9.0);

    let end_points = [at(0.0), at(3.0), at(6.0), at(9.0)];

    IconLayout {
        end_points,
        control_points1: [at(1.0), at(4.0), at(7.0)],
        control_points2: [at(2.0), at(5.0), at(8.0)],
        arrow_head_points: [end_points[0]; 3],
        mark_points: [
            Couple::new(r - sw / 2.0, s - sw - padding),
            Couple::new(r + sw / 2.0, s - sw - padding),
            Couple::new(r + sw / 2.0, s - padding),
            Couple::new(r - sw / 2.0, s - padding),
        ],
    }
}
