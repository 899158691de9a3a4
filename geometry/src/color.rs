// rasterturtle/geometry/src/color.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! 8-bit RGBA pixels.

/// One pixel. All-zero is the background; a zero alpha channel is the only
/// thing that marks a pixel as unpainted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorU {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> ColorU {
        ColorU { r, g, b, a }
    }

    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> ColorU {
        ColorU::new(r, g, b, 255)
    }

    #[inline]
    pub fn transparent_black() -> ColorU {
        ColorU::default()
    }

    #[inline]
    pub fn black() -> ColorU {
        ColorU::from_rgb(0, 0, 0)
    }

    #[inline]
    pub fn is_background(&self) -> bool {
        self.a == 0
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
