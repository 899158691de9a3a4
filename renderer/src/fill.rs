// rasterturtle/renderer/src/fill.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Four-way flood fill over unpainted pixels.

use crate::canvas::Canvas;
use crate::RenderError;
use rasterturtle_geometry::basic::point::Point2DI64;
use rasterturtle_geometry::color::ColorU;
use tracing::debug;

const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Paints every background pixel 4-connected to `seed` with `color` and
/// returns how many pixels changed.
///
/// Any painted pixel is a wall, whatever its color. The canvas edge is a
/// wall too; only a seed outside the canvas is subject to the bounds
/// policy.
pub fn flood_fill(
    canvas: &mut Canvas,
    seed: Point2DI64,
    color: ColorU,
) -> Result<usize, RenderError> {
    if !canvas.contains(seed) {
        canvas.out_of_bounds(seed)?;
        return Ok(0);
    }

    let mut filled = 0;
    let mut stack = vec![seed];
    while let Some(point) = stack.pop() {
        match canvas.pixel(point) {
            Some(pixel) if pixel.is_background() => {}
            _ => continue,
        }

        canvas.put_pixel(point, color)?;
        filled += 1;

        for &(dx, dy) in &NEIGHBORS {
            stack.push(Point2DI64::new(point.x + dx, point.y + dy));
        }
    }

    debug!("filled {} pixels from ({}, {})", filled, seed.x, seed.y);
    Ok(filled)
}
