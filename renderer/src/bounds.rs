// rasterturtle/renderer/src/bounds.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::canvas::Canvas;
use rasterturtle_geometry::basic::point::Point2DI64;
use rasterturtle_geometry::basic::rect::RectI64;

/// The smallest rectangle holding every painted pixel, or `RectI64::EMPTY`.
pub fn bounding_box(canvas: &Canvas) -> RectI64 {
    let mut bounds = RectI64::EMPTY;
    for (y, row) in canvas.rows().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            if !pixel.is_background() {
                bounds = bounds.union_point(Point2DI64::new(x as i64, y as i64));
            }
        }
    }
    bounds
}
