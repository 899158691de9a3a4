// rasterturtle/uturtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decodes turtle programs, one command per line.
//!
//! Decoding is best-effort: a line never fails the whole program. Every
//! line becomes a `Statement` saying whether it decoded, was a known verb
//! with bad arguments, or was a verb nobody recognizes. Square brackets
//! around argument lists are optional and extra trailing tokens are ignored.
//!
//! Arguments are read left to right like `scanf`: once one is missing or
//! bad, it and every argument after it read as zero. A malformed line still
//! carries the command built that way.

pub mod ast;

use crate::ast::{Command, Line, Statement, Turtle};
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing argument {index} ({name})")]
    MissingArgument { index: usize, name: &'static str },
    #[error("argument {index} ({name}) is not a valid {expected}: {token:?}")]
    InvalidArgument { index: usize, name: &'static str, expected: &'static str, token: String },
}

pub struct Parser {
    token: Regex,
}

impl Parser {
    pub fn new() -> Parser {
        Parser { token: Regex::new(r"[^\s\[\]]+").expect("token pattern is valid") }
    }

    pub fn parse(&self, source: &str) -> Turtle {
        source
            .lines()
            .enumerate()
            .map(|(index, text)| Line { number: index + 1, statement: self.parse_line(text) })
            .collect()
    }

    pub fn parse_line(&self, text: &str) -> Statement {
        let mut tokens = self.token.find_iter(text).map(|token| token.as_str());
        let verb = match tokens.next() {
            Some(verb) => verb,
            None => return Statement::Blank,
        };
        let mut scanner = Scanner { tokens: tokens.collect(), error: None };

        match decode(verb, &mut scanner) {
            None => Statement::Unknown(verb.to_owned()),
            Some(command) => match scanner.error {
                None => Statement::Command(command),
                Some(error) => Statement::Malformed { verb: verb.to_owned(), error, command },
            },
        }
    }
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}

fn decode(verb: &str, scan: &mut Scanner) -> Option<Command> {
    let command = match verb {
        "fd" => Command::Forward(scan.real(0, "distance")),
        "bk" => Command::Back(scan.real(0, "distance")),
        "rt" => Command::Right(scan.real(0, "degrees")),
        "lt" => Command::Left(scan.real(0, "degrees")),
        "pu" => Command::PenUp,
        "pd" => Command::PenDown,
        "setpencolor" => Command::PenColor {
            r: scan.channel(0, "red"),
            g: scan.channel(1, "green"),
            b: scan.channel(2, "blue"),
            a: scan.optional_channel(3, "alpha"),
        },
        "setpensize" => Command::PenSize(scan.integer(0, "width"), scan.integer(1, "height")),
        "setpentype" => Command::PenType(scan.word(0, "shape").to_owned()),
        "fill" => {
            Command::Fill(scan.channel(0, "red"), scan.channel(1, "green"), scan.channel(2, "blue"))
        }
        _ => return None,
    };
    Some(command)
}

/// Argument tokens plus the first error met while reading them.
struct Scanner<'a> {
    tokens: Vec<&'a str>,
    error: Option<ParseError>,
}

impl<'a> Scanner<'a> {
    fn token(&mut self, index: usize, name: &'static str) -> Option<&'a str> {
        if self.error.is_some() {
            return None;
        }
        let token = self.tokens.get(index).copied();
        if token.is_none() {
            self.error = Some(ParseError::MissingArgument { index, name });
        }
        token
    }

    fn word(&mut self, index: usize, name: &'static str) -> &'a str {
        self.token(index, name).unwrap_or("")
    }

    fn number<T: FromStr + Default>(
        &mut self,
        index: usize,
        name: &'static str,
        expected: &'static str,
    ) -> T {
        let token = match self.token(index, name) {
            Some(token) => token,
            None => return T::default(),
        };
        token.parse().unwrap_or_else(|_| {
            self.error = Some(ParseError::InvalidArgument {
                index,
                name,
                expected,
                token: token.to_owned(),
            });
            T::default()
        })
    }

    fn real(&mut self, index: usize, name: &'static str) -> f64 {
        self.number(index, name, "number")
    }

    fn integer(&mut self, index: usize, name: &'static str) -> i32 {
        self.number(index, name, "integer")
    }

    fn channel(&mut self, index: usize, name: &'static str) -> u8 {
        self.number(index, name, "color channel (0-255)")
    }

    /// `None` only when the token is absent; a present token that cannot be
    /// read is zero like any other field.
    fn optional_channel(&mut self, index: usize, name: &'static str) -> Option<u8> {
        if index < self.tokens.len() {
            Some(self.channel(index, name))
        } else {
            None
        }
    }
}

#[test]
fn turtle_command_parser() {
    let parser = Parser::new();
    let command = |text: &str| match parser.parse_line(text) {
        Statement::Command(command) => command,
        other => panic!("{:?} did not decode: {:?}", text, other),
    };

    assert_eq!(command("fd 100"), Command::Forward(100.0));
    assert_eq!(command("bk 12.5"), Command::Back(12.5));
    assert_eq!(command("rt 90"), Command::Right(90.0));
    assert_eq!(command("lt -45"), Command::Left(-45.0));
    assert_eq!(command("pu"), Command::PenUp);
    assert_eq!(command("pd"), Command::PenDown);
    assert_eq!(
        command("setpencolor [255 0 0]"),
        Command::PenColor { r: 255, g: 0, b: 0, a: None }
    );
    assert_eq!(
        command("setpencolor 10 20 30 40"),
        Command::PenColor { r: 10, g: 20, b: 30, a: Some(40) }
    );
    assert_eq!(command("setpensize [3 4]"), Command::PenSize(3, 4));
    assert_eq!(command("setpensize 0 -1"), Command::PenSize(0, -1));
    assert_eq!(command("setpentype circle"), Command::PenType("circle".to_owned()));
    assert_eq!(command("setpentype [star]"), Command::PenType("star".to_owned()));
    assert_eq!(command("fill [0 255 0]"), Command::Fill(0, 255, 0));
    assert_eq!(command("  fd   7   extra tokens"), Command::Forward(7.0));
}

#[test]
fn turtle_lenient_outcomes() {
    let parser = Parser::new();

    assert_eq!(parser.parse_line(""), Statement::Blank);
    assert_eq!(parser.parse_line("   \t"), Statement::Blank);
    assert_eq!(parser.parse_line("bleh 1 2"), Statement::Unknown("bleh".to_owned()));
    assert_eq!(parser.parse_line("FD 10"), Statement::Unknown("FD".to_owned()));

    assert_eq!(
        parser.parse_line("fd"),
        Statement::Malformed {
            verb: "fd".to_owned(),
            error: ParseError::MissingArgument { index: 0, name: "distance" },
            command: Command::Forward(0.0),
        }
    );
    assert_eq!(
        parser.parse_line("setpencolor [255 zero 0]"),
        Statement::Malformed {
            verb: "setpencolor".to_owned(),
            error: ParseError::InvalidArgument {
                index: 1,
                name: "green",
                expected: "color channel (0-255)",
                token: "zero".to_owned(),
            },
            command: Command::PenColor { r: 255, g: 0, b: 0, a: None },
        }
    );
    match parser.parse_line("setpencolor 300 0 0") {
        Statement::Malformed { error: ParseError::InvalidArgument { index: 0, .. }, .. } => {}
        other => panic!("out-of-range channel decoded: {:?}", other),
    }
    match parser.parse_line("setpencolor 1 2 3 x") {
        Statement::Malformed { error: ParseError::InvalidArgument { name: "alpha", .. }, .. } => {}
        other => panic!("bad alpha decoded: {:?}", other),
    }
    match parser.parse_line("setpensize [2.5 1]") {
        Statement::Malformed { error: ParseError::InvalidArgument { name: "width", .. }, .. } => {}
        other => panic!("fractional size decoded: {:?}", other),
    }
}

#[test]
fn turtle_malformed_fields_read_as_zero() {
    let parser = Parser::new();
    let recovered = |text: &str| match parser.parse_line(text) {
        Statement::Malformed { command, .. } => command,
        other => panic!("{:?} was not malformed: {:?}", text, other),
    };

    assert_eq!(recovered("setpensize [5]"), Command::PenSize(5, 0));
    assert_eq!(recovered("setpensize x 7"), Command::PenSize(0, 0));
    assert_eq!(recovered("fd ten"), Command::Forward(0.0));
    assert_eq!(recovered("fill [0 255]"), Command::Fill(0, 255, 0));
    assert_eq!(recovered("setpentype"), Command::PenType(String::new()));
    // Reading stops at the first bad field, even if later ones are fine.
    assert_eq!(recovered("setpencolor 9 x 9"), Command::PenColor { r: 9, g: 0, b: 0, a: None });
    assert_eq!(
        recovered("setpencolor 9 x 9 9"),
        Command::PenColor { r: 9, g: 0, b: 0, a: Some(0) }
    );
    assert_eq!(
        recovered("setpencolor 1 2 3 x"),
        Command::PenColor { r: 1, g: 2, b: 3, a: Some(0) }
    );
}

#[test]
fn turtle_program_parser() {
    let program = Parser::new().parse("fd 10\n\nwobble\nrt 90\r\nfill [1 2]\n");
    let numbers: Vec<usize> = program.iter().map(|line| line.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(program[0].statement, Statement::Command(Command::Forward(10.0)));
    assert_eq!(program[1].statement, Statement::Blank);
    assert_eq!(program[2].statement, Statement::Unknown("wobble".to_owned()));
    assert_eq!(program[3].statement, Statement::Command(Command::Right(90.0)));
    match program[4].statement {
        Statement::Malformed { error: ParseError::MissingArgument { index: 2, .. }, .. } => {}
        ref other => panic!("short fill decoded: {:?}", other),
    }
}
