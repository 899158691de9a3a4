// rasterturtle/uturtle/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// The verbs follow the UCBLogo spellings: fd, bk, rt, lt, pu, pd, ...

use crate::ParseError;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Forward(f64),
    Back(f64),
    Right(f64),
    Left(f64),
    PenUp,
    PenDown,
    PenColor { r: u8, g: u8, b: u8, a: Option<u8> }, // RGB, alpha optional.
    PenSize(i32, i32),
    PenType(String),
    Fill(u8, u8, u8),
}

/// What one source line decoded to.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Command(Command),
    /// A known verb whose arguments did not all parse. `command` holds what
    /// did, with the rest zeroed.
    Malformed { verb: String, error: ParseError, command: Command },
    /// A verb nobody knows. Skipped.
    Unknown(String),
    Blank,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// 1-based.
    pub number: usize,
    pub statement: Statement,
}

pub type Turtle = Vec<Line>;
