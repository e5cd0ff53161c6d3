//! Tight bounds of the inked region of an RGBA pixel buffer.

use crate::model::Point;

/// Axis-aligned pixel bounds, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Bounds reported for a buffer with no ink: min at the far edge, max at zero.
    pub fn degenerate(width: u32, height: u32) -> Self {
        Self {
            min_x: width,
            min_y: height,
            max_x: 0,
            max_y: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Midpoint of min/max on each axis. For degenerate bounds this is the canvas centre.
    pub fn center(&self) -> Point {
        Point {
            x: (self.min_x as f64 + self.max_x as f64) / 2.0,
            y: (self.min_y as f64 + self.max_y as f64) / 2.0,
        }
    }
}

// Byte offset of the alpha channel of (x, y), computed in usize so large canvases cannot overflow.
fn alpha_index(x: u32, y: u32, width: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4 + 3
}

/// Scans every pixel once; a pixel is ink when its alpha byte is nonzero.
///
/// `rgba` is row-major, 4 bytes per pixel. A short buffer only contributes the
/// pixels it actually holds.
pub fn locate(rgba: &[u8], width: u32, height: u32) -> BoundingBox {
    let mut bb = BoundingBox::degenerate(width, height);
    for y in 0..height {
        for x in 0..width {
            match rgba.get(alpha_index(x, y, width)) {
                Some(&a) if a > 0 => {
                    if x < bb.min_x {
                        bb.min_x = x;
                    }
                    if x > bb.max_x {
                        bb.max_x = x;
                    }
                    if y < bb.min_y {
                        bb.min_y = y;
                    }
                    if y > bb.max_y {
                        bb.max_y = y;
                    }
                }
                _ => {}
            }
        }
    }
    bb
}
