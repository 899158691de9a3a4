// rasterturtle/geometry/src/basic/point.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A point on the pixel grid.

use std::ops::Sub;

/// Coordinates are 64-bit so a turtle can wander far off the canvas with
/// its pen up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2DI64 {
    pub x: i64,
    pub y: i64,
}

impl Point2DI64 {
    #[inline]
    pub fn new(x: i64, y: i64) -> Point2DI64 {
        Point2DI64 { x, y }
    }

    /// Offsets this point by a real-valued displacement, truncating each
    /// component toward zero before adding it. Saturates at the `i64` range;
    /// NaN counts as zero.
    #[inline]
    pub fn offset_truncated(self, dx: f64, dy: f64) -> Point2DI64 {
        Point2DI64::new(self.x.saturating_add(dx as i64), self.y.saturating_add(dy as i64))
    }
}

impl Sub<Point2DI64> for Point2DI64 {
    type Output = Point2DI64;
    #[inline]
    fn sub(self, other: Point2DI64) -> Point2DI64 {
        Point2DI64::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point2DI64;

    #[test]
    fn offset_truncates_toward_zero() {
        let p = Point2DI64::new(10, 10);
        assert_eq!(p.offset_truncated(2.9, -2.9), Point2DI64::new(12, 8));
        assert_eq!(p.offset_truncated(-0.5, 0.5), p);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let p = Point2DI64::new(500, 500);
        assert_eq!(p.offset_truncated(1e10, 0.0), Point2DI64::new(10_000_000_500, 500));
        assert_eq!(
            p.offset_truncated(f64::INFINITY, f64::NEG_INFINITY),
            Point2DI64::new(i64::MAX, i64::MIN + 500)
        );
        let far = Point2DI64::new(i64::MAX - 1, 0);
        assert_eq!(far.offset_truncated(1e30, f64::NAN), Point2DI64::new(i64::MAX, 0));
    }

    #[test]
    fn subtraction() {
        let a = Point2DI64::new(3, -4);
        let b = Point2DI64::new(1, 1);
        assert_eq!(a - b, Point2DI64::new(2, -5));
    }
}
