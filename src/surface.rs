//! Immediate-mode freehand drawing over a pixel target.
//!
//! `DrawingSurface` owns the stroke bookkeeping and the selected ink; the
//! actual pixels live behind [`InkTarget`], which is the browser canvas in
//! the app and a [`crate::raster::PixelRaster`] in tests.

use crate::bbox::{self, BoundingBox};
use crate::palette::DEFAULT_INK;
use crate::state::StrokeState;

pub trait InkTarget {
    /// Pixel width and height of the backing store.
    fn dimensions(&self) -> (u32, u32);
    /// Draws one round-capped segment right away.
    fn segment(&mut self, from: (f64, f64), to: (f64, f64), color: &str);
    fn clear(&mut self);
    /// Changes the backing size, keeping the pixels that still fit.
    fn resize(&mut self, width: u32, height: u32);
    /// Row-major RGBA bytes, `None` when the target cannot be read back.
    fn pixels(&self) -> Option<Vec<u8>>;
}

pub struct DrawingSurface<T> {
    target: T,
    stroke: StrokeState,
    color: String,
}

impl<T: InkTarget> DrawingSurface<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            stroke: StrokeState::default(),
            color: DEFAULT_INK.to_string(),
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.drawing
    }

    /// Colour used by every later `extend`, including the rest of a stroke in progress.
    pub fn select_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    /// Opens a path at `(x, y)`. Leaves no ink on its own.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.stroke.start(x, y);
    }

    pub fn extend(&mut self, x: f64, y: f64) {
        if !self.stroke.drawing {
            return;
        }
        let from = (self.stroke.last_x, self.stroke.last_y);
        self.target.segment(from, (x, y), &self.color);
        self.stroke.advance(x, y);
    }

    pub fn end(&mut self) {
        self.stroke.finish();
    }

    /// Wipes the pixels. A stroke in progress keeps going from its last point.
    pub fn clear(&mut self) {
        self.target.clear();
    }

    /// Follows a viewport change without losing ink. Ends any stroke in progress.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.stroke.finish();
        self.target.resize(width, height);
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (w, h) = self.target.dimensions();
        let px = self.target.pixels()?;
        Some(bbox::locate(&px, w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelRaster;

    fn surface() -> DrawingSurface<PixelRaster> {
        DrawingSurface::new(PixelRaster::new(64, 48, 3.0))
    }

    #[test]
    fn extend_without_begin_is_noop() {
        let mut s = surface();
        s.extend(10.0, 10.0);
        s.extend(30.0, 30.0);
        assert!(s.target().is_blank());
    }

    #[test]
    fn begin_alone_leaves_no_ink() {
        let mut s = surface();
        s.begin(20.0, 20.0);
        assert!(s.is_drawing());
        assert!(s.target().is_blank());
    }

    #[test]
    fn ink_follows_the_path() {
        let mut s = surface();
        s.begin(10.0, 10.0);
        s.extend(40.0, 10.0);
        s.extend(40.0, 30.0);
        s.end();
        let r = s.target();
        assert_eq!(r.pixel(25, 10), [255, 255, 255, 255]);
        assert_eq!(r.pixel(40, 20), [255, 255, 255, 255]);
        // off the path
        assert_eq!(r.pixel(25, 25)[3], 0);
        assert_eq!(r.pixel(5, 40)[3], 0);
    }

    #[test]
    fn end_stops_ink_and_is_idempotent() {
        let mut s = surface();
        s.begin(5.0, 5.0);
        s.extend(15.0, 5.0);
        s.end();
        s.end();
        assert!(!s.is_drawing());
        s.extend(50.0, 40.0);
        assert_eq!(s.target().pixel(50, 40)[3], 0);
    }

    #[test]
    fn each_extend_uses_current_color() {
        let mut s = surface();
        s.begin(5.0, 5.0);
        s.extend(20.0, 5.0);
        s.select_color("#ee3333");
        assert_eq!(s.color(), "#ee3333");
        s.extend(20.0, 40.0);
        s.end();
        assert_eq!(s.target().pixel(10, 5), [255, 255, 255, 255]);
        assert_eq!(s.target().pixel(20, 30), [0xee, 0x33, 0x33, 255]);
    }

    #[test]
    fn bounding_box_of_stroke_and_after_clear() {
        let mut s = surface();
        s.begin(10.0, 20.0);
        s.extend(30.0, 20.0);
        s.end();
        let bb = s.bounding_box().unwrap();
        assert!(bb.min_x <= 10 && bb.max_x >= 29);
        assert!(bb.min_y <= 20 && bb.max_y >= 20);
        assert!(bb.max_x < 33 && bb.min_y > 16 && bb.max_y < 23);

        s.clear();
        assert!(s.target().is_blank());
        assert!(s.bounding_box().unwrap().is_empty());
    }

    #[test]
    fn resize_keeps_ink_and_ends_stroke() {
        let mut s = surface();
        s.begin(10.0, 20.0);
        s.extend(30.0, 20.0);
        let before = s.bounding_box().unwrap();
        s.resize(100, 80);
        assert!(!s.is_drawing());
        assert_eq!(s.target().dimensions(), (100, 80));
        assert_eq!(s.bounding_box().unwrap(), before);
    }

    #[test]
    fn malformed_colour_leaves_no_ink_and_does_not_panic() {
        let mut s = surface();
        s.select_color("#a\u{e9}bcd");
        s.begin(1.0, 1.0);
        s.extend(5.0, 5.0);
        assert!(s.target().is_blank());
    }
}
