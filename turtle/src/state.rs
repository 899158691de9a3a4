// rasterturtle/turtle/src/state.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Position, heading and pen of the turtle.

use rasterturtle_geometry::basic::point::Point2DI64;
use rasterturtle_geometry::color::ColorU;
use rasterturtle_renderer::raster::{self, Pen, PenShape};
use rasterturtle_renderer::{Canvas, RenderError};
use std::f64::consts::PI;

#[derive(Clone, Debug, PartialEq)]
pub struct TurtleState {
    pub position: Point2DI64,
    /// Radians, clockwise on screen since y grows downward. Never wrapped.
    pub heading: f64,
    pub pen_down: bool,
    pub pen: Pen,
}

impl TurtleState {
    pub fn new(position: Point2DI64) -> TurtleState {
        TurtleState { position, heading: 0.0, pen_down: true, pen: Pen::default() }
    }

    /// Moves along the heading. Each component of the displacement is
    /// truncated toward zero, so fractional progress is lost on every step.
    ///
    /// The turtle ends up at the new position even if drawing fails.
    pub fn forward(&mut self, canvas: &mut Canvas, distance: f64) -> Result<(), RenderError> {
        let (sin, cos) = self.heading.sin_cos();
        let to = self.position.offset_truncated(distance * cos, distance * sin);

        let drawn = if self.pen_down {
            raster::draw_segment(canvas, self.position, to, &self.pen).map(|_| ())
        } else {
            Ok(())
        };

        self.position = to;
        drawn
    }

    pub fn backward(&mut self, canvas: &mut Canvas, distance: f64) -> Result<(), RenderError> {
        self.forward(canvas, -distance)
    }

    pub fn turn_right(&mut self, degrees: f64) {
        self.heading += degrees * (PI / 180.0);
    }

    pub fn turn_left(&mut self, degrees: f64) {
        self.heading -= degrees * (PI / 180.0);
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn set_pen_size(&mut self, width: i32, height: i32) {
        self.pen.width = width;
        self.pen.height = height;
    }

    pub fn set_pen_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.pen.color = ColorU::new(r, g, b, a);
    }

    pub fn set_pen_shape(&mut self, shape: PenShape) {
        self.pen.shape = shape;
    }
}
