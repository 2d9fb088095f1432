use crate::error::{MorphError, MorphResult};
use crate::geometry::{rotation_about, stroke_scale, translation, Affine, Couple, Float};
use crate::path::{PathStep, RenderPath};

use wizdraw::push_cubic_bezier_segments;
use wizdraw::stroke;
use wizdraw::fill;

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

use rgb::RGBA8;

use alloc::vec::Vec;

/// A 2D drawing surface with a transform stack.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: Float, dy: Float);
    /// Clockwise on screen for positive degrees.
    fn rotate(&mut self, degrees: Float, pivot: Couple);
    fn fill_path(&mut self, path: &RenderPath, color: RGBA8);
    fn stroke_path(&mut self, path: &RenderPath, color: RGBA8, width: Float);
}

/// Software canvas writing into an RGBA8 pixel buffer.
///
/// `SSAA` is the supersampling factor per axis, `SSAA_SQ` its square.
pub struct Rasterizer<'a, const SSAA: usize, const SSAA_SQ: usize> {
    dst: &'a mut [RGBA8],
    mask: &'a mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    alpha_blend: bool,
    transform: Affine,
    saved: Vec<Affine>,
    flat: Vec<Couple>,
}

pub type DefaultRasterizer<'a> = Rasterizer<'a, 4, 16>;

impl<'a, const SSAA: usize, const SSAA_SQ: usize> Rasterizer<'a, SSAA, SSAA_SQ> {
    /// `dst` holds `h` rows of `stride` pixels; `mask` holds `w × h` bytes.
    pub fn new(
        dst: &'a mut [RGBA8],
        mask: &'a mut [u8],
        w: usize,
        h: usize,
        stride: usize,
        alpha_blend: bool,
    ) -> MorphResult<Self> {
        if stride < w || dst.len() < stride * h || mask.len() < w * h {
            return Err(MorphError::BufferTooSmall);
        }

        Ok(Self {
            dst,
            mask,
            w,
            h,
            stride,
            alpha_blend,
            transform: Affine::identity(),
            saved: Vec::new(),
            flat: Vec::new(),
        })
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Makes every pixel transparent.
    pub fn clear(&mut self) {
        let mut i = 0;
        for _ in 0..self.h {
            self.dst[i..][..self.w].fill(RGBA8::new(0, 0, 0, 0));
            i += self.stride;
        }
    }

    /// Converts `path` to a polyline in device coordinates.
    fn flatten(&mut self, path: &RenderPath) {
        let m = self.transform;
        let flat = &mut self.flat;
        flat.clear();

        let mut start = None;
        let mut last = None;
        for step in path.steps() {
            match *step {
                PathStep::MoveTo(p) => {
                    let p = m.mul_point_2d(p);
                    flat.push(p);
                    start = Some(p);
                    last = Some(p);
                }
                PathStep::LineTo(p) => {
                    let p = m.mul_point_2d(p);
                    flat.push(p);
                    last = Some(p);
                }
                PathStep::CubicTo { ctrl0, ctrl1, end } => {
                    let end = m.mul_point_2d(end);
                    let curve = CubicBezier2 {
                        start: last.unwrap_or(end),
                        ctrl0: m.mul_point_2d(ctrl0),
                        ctrl1: m.mul_point_2d(ctrl1),
                        end,
                    };
                    push_cubic_bezier_segments::<8>(&curve, 0.6, flat);
                    last = Some(end);
                }
                PathStep::Close => {
                    if let Some(p) = start {
                        flat.push(p);
                        last = Some(p);
                    }
                }
            }
        }
    }

    fn paint_mask(&mut self, color: RGBA8) {
        let mut mask = self.mask.iter();
        let mut line = 0;
        for _ in 0..self.h {
            for x in 0..self.w {
                let q = mask.next().copied().unwrap_or(0);
                if q != 0 {
                    blend_pixel(&mut self.dst[line + x], color, q, self.alpha_blend);
                }
            }
            line += self.stride;
        }
    }
}

impl<'a, const SSAA: usize, const SSAA_SQ: usize> Canvas for Rasterizer<'a, SSAA, SSAA_SQ> {
    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(transform) => self.transform = transform,
            None => log::warn!("restore() without a matching save()"),
        }
    }

    fn translate(&mut self, dx: Float, dy: Float) {
        self.transform = self.transform * translation(dx, dy);
    }

    fn rotate(&mut self, degrees: Float, pivot: Couple) {
        self.transform = self.transform * rotation_about(degrees, pivot);
    }

    fn fill_path(&mut self, path: &RenderPath, color: RGBA8) {
        self.flatten(path);
        if self.flat.len() < 3 {
            return;
        }

        self.mask.fill(0);
        fill::<SSAA, SSAA_SQ>(&self.flat, &mut self.mask[..], Vec2::new(self.w, self.h));
        self.paint_mask(color);
    }

    fn stroke_path(&mut self, path: &RenderPath, color: RGBA8, width: Float) {
        self.flatten(path);
        if self.flat.len() < 2 {
            return;
        }

        let width = width * stroke_scale(&self.transform);
        self.mask.fill(0);
        stroke::<SSAA>(&self.flat, &mut self.mask[..], Vec2::new(self.w, self.h), width);
        self.paint_mask(color);
    }
}

#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8, alpha_blend_dst: bool) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
        return;
    }

    let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / 255;
    let u8_max = u8::MAX as u32;
    let dst_alpha = u8_max - src_alpha;

    let mix = |src: u8, dst: &mut u8| {
        let src_scaled = (src as u32) * src_alpha;
        *dst = match alpha_blend_dst {
            true => ((src_scaled + (*dst as u32) * dst_alpha) / u8_max) as u8,
            false => (src_scaled / u8_max) as u8,
        };
    };

    mix(src_pixel.r, &mut dst_pixel.r);
    mix(src_pixel.g, &mut dst_pixel.g);
    mix(src_pixel.b, &mut dst_pixel.b);
    mix(src_pixel.a, &mut dst_pixel.a);
}
