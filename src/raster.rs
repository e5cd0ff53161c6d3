//! In-memory RGBA raster with round-capped strokes.
//!
//! Pixels are transparent until inked; the canvas background colour is a CSS
//! style on the element and never part of the pixel data, so the same holds here.

use crate::palette::parse_css_color;
use crate::surface::InkTarget;

#[derive(Clone, Debug, PartialEq)]
pub struct PixelRaster {
    width: u32,
    height: u32,
    line_width: f64,
    data: Vec<u8>,
}

impl PixelRaster {
    pub fn new(width: u32, height: u32, line_width: f64) -> Self {
        Self {
            width,
            height,
            line_width,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }
}

// Distance from p to the segment a-b.
fn dist_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

impl InkTarget for PixelRaster {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn segment(&mut self, from: (f64, f64), to: (f64, f64), color: &str) {
        let Some(rgba) = parse_css_color(color) else {
            log::warn!("unsupported ink colour {color:?}, segment skipped");
            return;
        };
        if self.width == 0 || self.height == 0 {
            return;
        }
        let r = self.line_width / 2.0;
        let x0 = (from.0.min(to.0) - r).floor().max(0.0) as u32;
        let y0 = (from.1.min(to.1) - r).floor().max(0.0) as u32;
        let x1 = ((from.0.max(to.0) + r).ceil().max(0.0) as u32).min(self.width - 1);
        let y1 = ((from.1.max(to.1) + r).ceil().max(0.0) as u32).min(self.height - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let centre = (x as f64 + 0.5, y as f64 + 0.5);
                if dist_to_segment(centre, from, to) <= r {
                    let i = self.index(x, y);
                    self.data[i..i + 4].copy_from_slice(&rgba);
                }
            }
        }
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn resize(&mut self, width: u32, height: u32) {
        let mut data = vec![0; (width as usize) * (height as usize) * 4];
        let keep_w = self.width.min(width) as usize * 4;
        for y in 0..self.height.min(height) as usize {
            let src = y * self.width as usize * 4;
            let dst = y * width as usize * 4;
            data[dst..dst + keep_w].copy_from_slice(&self.data[src..src + keep_w]);
        }
        self.width = width;
        self.height = height;
        self.data = data;
    }

    fn pixels(&self) -> Option<Vec<u8>> {
        Some(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::locate;

    #[test]
    fn starts_transparent() {
        let r = PixelRaster::new(10, 10, 3.0);
        assert!(r.is_blank());
        assert_eq!(r.data().len(), 400);
    }

    #[test]
    fn horizontal_segment_thickness() {
        let mut r = PixelRaster::new(40, 20, 3.0);
        r.segment((10.0, 10.0), (20.0, 10.0), "#ffffff");
        let bb = locate(r.data(), 40, 20);
        assert_eq!((bb.min_x, bb.max_x), (9, 20));
        assert_eq!((bb.min_y, bb.max_y), (8, 11));
    }

    #[test]
    fn zero_length_segment_is_a_dot() {
        let mut r = PixelRaster::new(10, 10, 3.0);
        r.segment((5.0, 5.0), (5.0, 5.0), "#ffffff");
        assert!(!r.is_blank());
        assert_eq!(r.pixel(4, 4)[3], 255);
        assert_eq!(r.pixel(0, 0)[3], 0);
    }

    #[test]
    fn clips_at_edges() {
        let mut r = PixelRaster::new(10, 10, 3.0);
        r.segment((-5.0, 2.0), (50.0, 2.0), "#ffffff");
        let bb = locate(r.data(), 10, 10);
        assert_eq!((bb.min_x, bb.max_x), (0, 9));
    }

    #[test]
    fn unknown_colour_is_skipped() {
        let mut r = PixelRaster::new(10, 10, 3.0);
        r.segment((1.0, 1.0), (8.0, 8.0), "chartreuse");
        assert!(r.is_blank());
    }

    #[test]
    fn grow_keeps_pixels_in_place() {
        let mut r = PixelRaster::new(10, 8, 3.0);
        r.put_pixel(2, 3, [9, 8, 7, 255]);
        r.put_pixel(9, 7, [1, 1, 1, 255]);
        r.resize(20, 16);
        assert_eq!(r.dimensions(), (20, 16));
        assert_eq!(r.data().len(), 20 * 16 * 4);
        assert_eq!(r.pixel(2, 3), [9, 8, 7, 255]);
        assert_eq!(r.pixel(9, 7), [1, 1, 1, 255]);
        assert_eq!(r.pixel(15, 12)[3], 0);
    }

    #[test]
    fn shrink_crops_right_and_bottom() {
        let mut r = PixelRaster::new(10, 10, 3.0);
        r.put_pixel(1, 1, [5, 5, 5, 255]);
        r.put_pixel(8, 8, [5, 5, 5, 255]);
        r.resize(4, 4);
        let bb = locate(r.data(), 4, 4);
        assert_eq!((bb.min_x, bb.min_y, bb.max_x, bb.max_y), (1, 1, 1, 1));
    }

    #[test]
    fn clear_wipes_everything() {
        let mut r = PixelRaster::new(10, 10, 3.0);
        r.put_pixel(3, 3, [1, 2, 3, 4]);
        r.put_pixel(30, 3, [1, 2, 3, 4]);
        assert!(!r.is_blank());
        r.clear();
        assert!(r.is_blank());
    }
}
