// rasterturtle/renderer/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Software rasterization onto a fixed-size RGBA canvas.
//!
//! The pieces here are deliberately dumb: `raster` stamps a pen along an
//! integer-stepped line, `fill` grows a region over unpainted pixels, and
//! `bounds` finds the painted area so `Canvas::crop` can copy it out.

pub mod bounds;
pub mod canvas;
pub mod fill;
pub mod raster;

pub use crate::canvas::{BoundsPolicy, Canvas, CroppedImage};

use thiserror::Error;

/// Failures that abort a render. Neither is recoverable mid-run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("pixel ({x}, {y}) lies outside the {size}x{size} canvas")]
    OutOfBounds { x: i64, y: i64, size: u32 },
    #[error("nothing was drawn, so there is no region to crop")]
    EmptyDrawing,
}
