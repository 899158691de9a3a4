// rasterturtle/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Replays a sequence of Turtle commands onto a pixel canvas.

#[macro_use]
extern crate bitflags;

pub mod state;

pub use crate::state::TurtleState;

use rasterturtle_geometry::basic::rect::RectI64;
use rasterturtle_geometry::color::ColorU;
use rasterturtle_renderer::raster::PenShape;
use rasterturtle_renderer::{bounds, fill, BoundsPolicy, Canvas, CroppedImage, RenderError};
use std::fmt::{Display, Formatter, Result as FormatResult};
use thiserror::Error;
use tracing::{debug, info, warn};
use uturtle::ast::{Command, Statement, Turtle};
use uturtle::ParseError;

pub const DEFAULT_CANVAS_SIZE: u32 = 1000;

/// What to do with lines that decoded badly or not at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Note them in the result flags and carry on.
    Lenient,
    /// Stop at the first one.
    Strict,
}

impl Default for DispatchPolicy {
    fn default() -> DispatchPolicy {
        DispatchPolicy::Lenient
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub canvas_size: u32,
    pub bounds_policy: BoundsPolicy,
    pub dispatch_policy: DispatchPolicy,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            canvas_size: DEFAULT_CANVAS_SIZE,
            bounds_policy: BoundsPolicy::default(),
            dispatch_policy: DispatchPolicy::default(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("line {line}: {source}")]
    Render { line: usize, source: RenderError },
    #[error("line {line}: malformed `{verb}` command: {error}")]
    MalformedCommand { line: usize, verb: String, error: ParseError },
    #[error("line {line}: unknown command `{verb}`")]
    UnknownCommand { line: usize, verb: String },
}

bitflags! {
    // NB: If you change this, make sure to update the `Display`
    // implementation as well.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct BuildResultFlags: u16 {
        const ERR_UNHANDLED_COMMAND       = 0x0001;
        const ERR_MALFORMED_COMMAND       = 0x0002;
        const ERR_UNKNOWN_PEN_TYPE        = 0x0004;
    }
}

impl Display for BuildResultFlags {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        if self.is_empty() {
            return Ok(());
        }

        let mut first = true;
        for (bit, name) in NAMES.iter().enumerate() {
            if (self.bits() >> bit) & 1 == 0 {
                continue;
            }
            if !first {
                formatter.write_str(", ")?;
            } else {
                first = false;
            }
            formatter.write_str(name)?;
        }

        return Ok(());

        // Must match the order in `BuildResultFlags`.
        static NAMES: &'static [&'static str] =
            &["unhandled command", "malformed command", "unknown pen type"];
    }
}

#[derive(Debug)]
pub struct BuiltTurtle {
    pub canvas: Canvas,
    pub result_flags: BuildResultFlags,
    /// Lines that raised any of `result_flags`, in order.
    pub flagged_lines: Vec<usize>,
    state: TurtleState,
    dispatch_policy: DispatchPolicy,
}

impl BuiltTurtle {
    /// Runs a decoded program. Blank lines are ignored. Under the lenient
    /// policy unknown verbs are skipped and malformed commands run with the
    /// fields that failed to parse zeroed; under the strict policy either
    /// one stops the run.
    pub fn from_ast(t: &Turtle, options: &RenderOptions) -> Result<BuiltTurtle, BuildError> {
        let mut built = BuiltTurtle::new(options);
        built.process_turtle(t)?;
        built.log_summary();
        Ok(built)
    }

    /// Runs commands that were decoded elsewhere. The n-th command is
    /// reported as line n.
    pub fn from_commands(
        commands: &[Command],
        options: &RenderOptions,
    ) -> Result<BuiltTurtle, BuildError> {
        let mut built = BuiltTurtle::new(options);
        for (index, cmd) in commands.iter().enumerate() {
            built.process_command(index + 1, cmd)?;
        }
        built.log_summary();
        Ok(built)
    }

    fn new(options: &RenderOptions) -> BuiltTurtle {
        let canvas = Canvas::new(options.canvas_size, options.bounds_policy);
        let state = TurtleState::new(canvas.center());
        BuiltTurtle {
            canvas,
            result_flags: BuildResultFlags::empty(),
            flagged_lines: Vec::new(),
            state,
            dispatch_policy: options.dispatch_policy,
        }
    }

    #[inline]
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    /// The smallest rectangle holding every painted pixel.
    pub fn bounds(&self) -> RectI64 {
        bounds::bounding_box(&self.canvas)
    }

    /// Copies out the drawn region. Fails with `EmptyDrawing` when nothing
    /// was painted.
    pub fn crop(&self) -> Result<CroppedImage, RenderError> {
        self.canvas.crop(self.bounds())
    }

    fn process_turtle(&mut self, t: &Turtle) -> Result<(), BuildError> {
        for line in t {
            match line.statement {
                Statement::Command(ref cmd) => self.process_command(line.number, cmd)?,
                Statement::Blank => {}
                Statement::Malformed { ref verb, ref error, ref command } => {
                    if self.dispatch_policy == DispatchPolicy::Strict {
                        return Err(BuildError::MalformedCommand {
                            line: line.number,
                            verb: verb.clone(),
                            error: error.clone(),
                        });
                    }
                    warn!(
                        "line {}: malformed `{}` command runs with zeroed fields: {}",
                        line.number, verb, error
                    );
                    self.flag(line.number, BuildResultFlags::ERR_MALFORMED_COMMAND);
                    self.process_command(line.number, command)?;
                }
                Statement::Unknown(ref verb) => {
                    if self.dispatch_policy == DispatchPolicy::Strict {
                        return Err(BuildError::UnknownCommand {
                            line: line.number,
                            verb: verb.clone(),
                        });
                    }
                    debug!("line {}: ignoring unknown command `{}`", line.number, verb);
                    self.flag(line.number, BuildResultFlags::ERR_UNHANDLED_COMMAND);
                }
            }
        }
        Ok(())
    }

    fn flag(&mut self, line: usize, flag: BuildResultFlags) {
        self.result_flags |= flag;
        if self.flagged_lines.last() != Some(&line) {
            self.flagged_lines.push(line);
        }
    }

    fn process_command(&mut self, line: usize, cmd: &Command) -> Result<(), BuildError> {
        debug!("line {}: {:?}", line, cmd);
        let canvas = &mut self.canvas;
        let state = &mut self.state;
        let mut unknown_pen_type = false;
        let drawn = match *cmd {
            Command::Forward(distance) => state.forward(canvas, distance),
            Command::Back(distance) => state.backward(canvas, distance),
            Command::Fill(r, g, b) => {
                fill::flood_fill(canvas, state.position, ColorU::from_rgb(r, g, b)).map(|_| ())
            }
            Command::Right(degrees) => {
                state.turn_right(degrees);
                Ok(())
            }
            Command::Left(degrees) => {
                state.turn_left(degrees);
                Ok(())
            }
            Command::PenUp => {
                state.pen_up();
                Ok(())
            }
            Command::PenDown => {
                state.pen_down();
                Ok(())
            }
            Command::PenColor { r, g, b, a } => {
                state.set_pen_color(r, g, b, a.unwrap_or(255));
                Ok(())
            }
            Command::PenSize(width, height) => {
                state.set_pen_size(width, height);
                Ok(())
            }
            Command::PenType(ref name) => {
                let shape = PenShape::from_name(name);
                if let PenShape::Other(_) = shape {
                    warn!("line {}: pen type `{}` draws no stamp", line, name);
                    unknown_pen_type = true;
                }
                state.set_pen_shape(shape);
                Ok(())
            }
        };
        if unknown_pen_type {
            self.flag(line, BuildResultFlags::ERR_UNKNOWN_PEN_TYPE);
        }
        drawn.map_err(|source| BuildError::Render { line, source })
    }

    fn log_summary(&self) {
        info!(
            "turtle finished at ({}, {}); {} pixels painted",
            self.state.position.x,
            self.state.position.y,
            self.canvas.painted_pixel_count()
        );
        if !self.result_flags.is_empty() {
            warn!("{} line(s) flagged: {}", self.flagged_lines.len(), self.result_flags);
        }
    }
}
