// rasterturtle/renderer/src/raster.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pen strokes.
//!
//! Lines are walked with a plain integer DDA: the per-step increment is the
//! truncated quotient of the delta and the step count, so only horizontal,
//! vertical and 45° lines come out straight. Other slopes come out as a
//! flat or diagonal run that stops short of the end point; drawings made
//! so far depend on that exact shape.

use crate::canvas::{BoundsPolicy, Canvas};
use crate::RenderError;
use rasterturtle_geometry::basic::point::Point2DI64;
use rasterturtle_geometry::color::ColorU;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PenShape {
    Square,
    Circle,
    /// A shape name nobody recognized. Only the line trace is drawn.
    Other(String),
}

impl PenShape {
    pub fn from_name(name: &str) -> PenShape {
        match name {
            "square" => PenShape::Square,
            "circle" => PenShape::Circle,
            other => PenShape::Other(other.to_owned()),
        }
    }
}

impl Default for PenShape {
    fn default() -> PenShape {
        PenShape::Square
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pen {
    pub color: ColorU,
    pub width: i32,
    pub height: i32,
    pub shape: PenShape,
}

impl Default for Pen {
    fn default() -> Pen {
        Pen { color: ColorU::black(), width: 1, height: 1, shape: PenShape::Square }
    }
}

/// Draws from `from` up to, but not including, `to`. Returns the number of
/// steps the segment spans.
///
/// Under `BoundsPolicy::Clip` only the steps whose stamp can reach the
/// canvas are visited, so a stroke across a huge distance costs no more
/// than one across the canvas.
pub fn draw_segment(
    canvas: &mut Canvas,
    from: Point2DI64,
    to: Point2DI64,
    pen: &Pen,
) -> Result<u64, RenderError> {
    // Deltas between far-apart i64 points need the extra width.
    let dx = i128::from(to.x) - i128::from(from.x);
    let dy = i128::from(to.y) - i128::from(from.y);
    let steps = i128::max(dx.abs(), dy.abs());
    if steps == 0 {
        return Ok(0);
    }

    let increment = (dx / steps, dy / steps);
    let (first, last) = match canvas.bounds_policy() {
        BoundsPolicy::Fail => (0, steps - 1),
        BoundsPolicy::Clip => visible_steps(canvas, from, increment, steps, reach(pen)),
    };

    let mut step = first;
    while step <= last {
        // Every cursor lies between `from` and `to`, so it fits in i64.
        let cursor = Point2DI64::new(
            (i128::from(from.x) + step * increment.0) as i64,
            (i128::from(from.y) + step * increment.1) as i64,
        );
        canvas.put_pixel(cursor, pen.color)?;
        stamp(canvas, cursor, pen)?;
        step += 1;
    }

    Ok(steps as u64)
}

/// How far any stamp pixel can land from its anchor.
fn reach(pen: &Pen) -> i128 {
    i128::from(pen.width.max(pen.height).max(0))
}

/// The inclusive range of steps whose anchor lies within `reach` of the
/// canvas. Empty when `first > last`.
fn visible_steps(
    canvas: &Canvas,
    from: Point2DI64,
    increment: (i128, i128),
    steps: i128,
    reach: i128,
) -> (i128, i128) {
    let (lo, hi) = (-reach, i128::from(canvas.size()) - 1 + reach);
    let (x_first, x_last) = axis_window(i128::from(from.x), increment.0, lo, hi);
    let (y_first, y_last) = axis_window(i128::from(from.y), increment.1, lo, hi);
    (x_first.max(y_first).max(0), x_last.min(y_last).min(steps - 1))
}

/// Steps `i` for which `start + i * increment` falls in `lo..=hi`, given an
/// increment of -1, 0 or 1.
fn axis_window(start: i128, increment: i128, lo: i128, hi: i128) -> (i128, i128) {
    match increment {
        0 if lo <= start && start <= hi => (i128::MIN, i128::MAX),
        0 => (1, 0),
        1 => (lo - start, hi - start),
        _ => (start - hi, start - lo),
    }
}

/// Offsets in `span` that put `origin + offset` on a canvas of side `size`.
fn clamp_span(span: Range<i64>, origin: i64, size: i64) -> Range<i64> {
    span.start.max(origin.saturating_neg())..span.end.min(size.saturating_sub(origin))
}

/// Exclusive bound on a circle loop index whose halved offset, mirrored
/// either way from `origin`, can still land on the canvas.
fn mirror_limit(origin: i64, size: i64) -> i64 {
    let farthest = origin.saturating_abs().max((size - 1).saturating_sub(origin).saturating_abs());
    farthest.saturating_mul(2).saturating_add(2)
}

/// Paints the pen shape anchored at `at`.
pub fn stamp(canvas: &mut Canvas, at: Point2DI64, pen: &Pen) -> Result<(), RenderError> {
    let clip = canvas.bounds_policy() == BoundsPolicy::Clip;
    let size = i64::from(canvas.size());
    let (width, height) = (i64::from(pen.width), i64::from(pen.height));

    match pen.shape {
        PenShape::Square => {
            // Grows right and down from the anchor; width runs along rows.
            let (mut rows, mut columns) = (0..width, 0..height);
            if clip {
                rows = clamp_span(rows, at.y, size);
                columns = clamp_span(columns, at.x, size);
            }
            for j in rows {
                for k in columns.clone() {
                    let point = Point2DI64::new(at.x.saturating_add(k), at.y.saturating_add(j));
                    canvas.put_pixel(point, pen.color)?;
                }
            }
        }
        PenShape::Circle => {
            // Quadrant-mirrored with halved offsets; height is unused.
            // `width` is at most i32::MAX, so these squares stay in i64.
            let radius_squared = width * width;
            let (mut rows, mut columns) = (0..width, 0..width);
            if clip {
                rows.end = rows.end.min(mirror_limit(at.y, size));
                columns.end = columns.end.min(mirror_limit(at.x, size));
            }
            for j in rows {
                for k in columns.clone() {
                    if j * j + k * k >= radius_squared {
                        continue;
                    }
                    let (half_j, half_k) = (j / 2, k / 2);
                    for &(dx, dy) in &[
                        (-half_k, half_j),
                        (half_k, -half_j),
                        (-half_k, -half_j),
                        (half_k, half_j),
                    ] {
                        let point =
                            Point2DI64::new(at.x.saturating_add(dx), at.y.saturating_add(dy));
                        canvas.put_pixel(point, pen.color)?;
                    }
                }
            }
        }
        PenShape::Other(_) => {}
    }
    Ok(())
}
