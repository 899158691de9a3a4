// rasterturtle/geometry/src/basic/rect.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inclusive integer rectangles, used as pixel bounding boxes.

use crate::basic::point::Point2DI64;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A rectangle whose corners are both inside it: `min_x..=max_x` by
/// `min_y..=max_y`.
///
/// The empty rectangle is encoded with every coordinate set to -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI64 {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl RectI64 {
    pub const EMPTY: RectI64 = RectI64 { min_x: -1, min_y: -1, max_x: -1, max_y: -1 };

    #[inline]
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> RectI64 {
        RectI64 { min_x, min_y, max_x, max_y }
    }

    #[inline]
    pub fn from_point(point: Point2DI64) -> RectI64 {
        RectI64::new(point.x, point.y, point.x, point.y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == RectI64::EMPTY
    }

    /// Grows the rectangle to cover `point`. The empty rectangle becomes a
    /// single-pixel rectangle.
    pub fn union_point(&self, point: Point2DI64) -> RectI64 {
        if self.is_empty() {
            return RectI64::from_point(point);
        }
        RectI64::new(
            self.min_x.min(point.x),
            self.min_y.min(point.y),
            self.max_x.max(point.x),
            self.max_y.max(point.y),
        )
    }

    /// Width in pixels; zero when empty.
    #[inline]
    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.max_x - self.min_x + 1) as u32
        }
    }

    /// Height in pixels; zero when empty.
    #[inline]
    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.max_y - self.min_y + 1) as u32
        }
    }
}

impl Default for RectI64 {
    fn default() -> RectI64 {
        RectI64::EMPTY
    }
}

impl Display for RectI64 {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        write!(
            formatter,
            "minX: {}, minY: {}, maxX: {}, maxY: {}",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
