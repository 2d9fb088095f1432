#![no_std]
extern crate alloc;

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod morph;
pub mod path;
pub mod rendering;


#[doc(inline)]
pub use {
    animation::Transition,
    config::Config,
    error::{MorphError, MorphResult},
    geometry::Couple,
    layout::{compute_layouts, IconLayout, IconType, LayoutTable},
    morph::{IconGeometry, MorphState, MorphingIcon},
    path::RenderPath,
    rendering::{Canvas, DefaultRasterizer, Rasterizer},
};
