// rasterturtle/renderer/src/canvas.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pixel storage.

use crate::RenderError;
use rasterturtle_geometry::basic::point::Point2DI64;
use rasterturtle_geometry::basic::rect::RectI64;
use rasterturtle_geometry::color::ColorU;
use tracing::debug;

/// What a write outside the canvas does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Report `RenderError::OutOfBounds` and stop.
    Fail,
    /// Silently drop the write.
    Clip,
}

impl Default for BoundsPolicy {
    fn default() -> BoundsPolicy {
        BoundsPolicy::Fail
    }
}

/// A square, row-major grid of pixels. Never grows.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: u32,
    policy: BoundsPolicy,
    pixels: Vec<ColorU>,
}

impl Canvas {
    pub fn new(size: u32, policy: BoundsPolicy) -> Canvas {
        let len = size as usize * size as usize;
        Canvas { size, policy, pixels: vec![ColorU::transparent_black(); len] }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.policy
    }

    #[inline]
    pub fn center(&self) -> Point2DI64 {
        let half = i64::from(self.size / 2);
        Point2DI64::new(half, half)
    }

    #[inline]
    pub fn contains(&self, point: Point2DI64) -> bool {
        let size = i64::from(self.size);
        point.x >= 0 && point.y >= 0 && point.x < size && point.y < size
    }

    #[inline]
    fn index(&self, point: Point2DI64) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.size as usize + point.x as usize)
        } else {
            None
        }
    }

    /// Returns the pixel at `point`, or `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, point: Point2DI64) -> Option<ColorU> {
        self.index(point).map(|index| self.pixels[index])
    }

    /// Writes one pixel.
    ///
    /// A zero alpha is stored as 1 so the pixel still reads as painted.
    pub fn put_pixel(&mut self, point: Point2DI64, color: ColorU) -> Result<(), RenderError> {
        match self.index(point) {
            Some(index) => {
                self.pixels[index] = ColorU { a: color.a.max(1), ..color };
                Ok(())
            }
            None => self.out_of_bounds(point),
        }
    }

    /// Applies the bounds policy to an access at `point`, which the caller
    /// has already found to be outside the canvas.
    pub(crate) fn out_of_bounds(&self, point: Point2DI64) -> Result<(), RenderError> {
        match self.policy {
            BoundsPolicy::Clip => Ok(()),
            BoundsPolicy::Fail => {
                Err(RenderError::OutOfBounds { x: point.x, y: point.y, size: self.size })
            }
        }
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorU]> {
        // `chunks` rejects a zero chunk size.
        self.pixels.chunks(self.size.max(1) as usize)
    }

    pub fn painted_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| !pixel.is_background()).count()
    }

    /// Copies the pixels inside `rect` out into a dense image.
    pub fn crop(&self, rect: RectI64) -> Result<CroppedImage, RenderError> {
        if rect.is_empty() {
            return Err(RenderError::EmptyDrawing);
        }
        for corner in &[
            Point2DI64::new(rect.min_x, rect.min_y),
            Point2DI64::new(rect.max_x, rect.max_y),
        ] {
            if !self.contains(*corner) {
                return Err(RenderError::OutOfBounds { x: corner.x, y: corner.y, size: self.size });
            }
        }
        if rect.min_x > rect.max_x || rect.min_y > rect.max_y {
            return Err(RenderError::EmptyDrawing);
        }

        let (min_x, max_x) = (rect.min_x as usize, rect.max_x as usize);
        let mut pixels = Vec::with_capacity(rect.width() as usize * rect.height() as usize);
        for row in self.rows().skip(rect.min_y as usize).take(rect.height() as usize) {
            pixels.extend_from_slice(&row[min_x..=max_x]);
        }

        debug!("cropped {}x{} pixels at {}", rect.width(), rect.height(), rect);
        Ok(CroppedImage { bounds: rect, width: rect.width(), height: rect.height(), pixels })
    }
}

/// The drawn region of a canvas, ready for an encoder. Channel order is
/// R, G, B, A and an alpha of zero still means background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CroppedImage {
    pub bounds: RectI64,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<ColorU>,
}

impl CroppedImage {
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ColorU]> {
        self.pixels.chunks(self.width as usize)
    }

    /// Flattens the image into `width * height * 4` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.to_array()).collect()
    }

    /// A plain-text picture of the image: `X` for painted pixels, a space
    /// for background, one line per row, then the source bounds.
    pub fn to_debug_text(&self) -> String {
        let mut text = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            text.extend(row.iter().map(|pixel| if pixel.is_background() { ' ' } else { 'X' }));
            text.push('\n');
        }
        text.push_str(&self.bounds.to_string());
        text
    }
}
