#[allow(unused_imports)]
use num_traits::real::Real;

pub type Float = f32;
pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;
pub const C_ZERO: Couple = Couple::new(0.0, 0.0);

/// Multiply this by a radius R to get the distance between the end points
/// and the control points of a quarter circle drawn as a cubic bezier.
pub const FOUR_SPLINE_MAGIC_NUMBER: Float = (core::f32::consts::SQRT_2 - 1.0) * 4.0 / 3.0;

/// Blends `a` into `b`.
///
/// Written as `a·(1−t) + b·t` rather than `a + (b−a)·t`: both describe the
/// same line, but this form returns `a` and `b` bit for bit at the ends.
#[inline]
pub fn lerp(a: Float, b: Float, t: Float) -> Float {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_couple(a: Couple, b: Couple, t: Float) -> Couple {
    Couple::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

pub fn cos_deg(degrees: Float) -> Float {
    degrees.to_radians().cos()
}

pub fn sin_deg(degrees: Float) -> Float {
    degrees.to_radians().sin()
}

pub fn is_finite(c: Couple) -> bool {
    c.x.is_finite() && c.y.is_finite()
}

/// 2D affine transform in homogeneous coordinates. Composition follows
/// canvas rules: in `a * b`, `b` is applied to points first.
pub type Affine = vek::mat::repr_c::column_major::Mat3<Float>;

pub fn translation(dx: Float, dy: Float) -> Affine {
    Affine::translation_2d(Couple::new(dx, dy))
}

/// Clockwise on screen (y axis pointing down) for positive degrees.
pub fn rotation_about(degrees: Float, pivot: Couple) -> Affine {
    Affine::translation_2d(pivot)
        * Affine::rotation_z(degrees.to_radians())
        * Affine::translation_2d(-pivot)
}

/// Length multiplier for strokes; exact for rotations and translations.
pub fn stroke_scale(m: &Affine) -> Float {
    m.determinant().abs().sqrt()
}
