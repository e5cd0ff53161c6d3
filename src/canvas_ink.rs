//! `InkTarget` backed by an HTML `<canvas>` 2D context.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::Config;
use crate::error::SubmitError;
use crate::surface::{DrawingSurface, InkTarget};

pub struct CanvasInk {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    line_width: f64,
}

impl CanvasInk {
    /// `None` when the element has no 2D context (drawing then silently does nothing).
    pub fn attach(canvas: HtmlCanvasElement, config: &Config) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let _ = canvas.style().set_property("background", config.background);
        let ink = Self {
            canvas,
            ctx,
            line_width: config.stroke_width,
        };
        ink.fit_to_viewport();
        Some(ink)
    }

    /// Viewport width by viewport height minus the canvas' top offset.
    pub fn viewport_size(&self) -> Option<(u32, u32)> {
        let window = web_sys::window()?;
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0)
            - self.canvas.offset_top() as f64;
        Some((width.max(0.0) as u32, height.max(0.0) as u32))
    }

    fn fit_to_viewport(&self) {
        if let Some((w, h)) = self.viewport_size() {
            self.set_size(w, h);
        }
    }

    // Setting either dimension wipes the bitmap and the context state.
    fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.set_line_width(self.line_width);
    }

    pub fn to_png_data_url(&self) -> Result<String, SubmitError> {
        self.canvas
            .to_data_url_with_type("image/png")
            .map_err(SubmitError::encode)
    }
}

impl InkTarget for CanvasInk {
    fn dimensions(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn segment(&mut self, from: (f64, f64), to: (f64, f64), color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
    }

    fn clear(&mut self) {
        let (w, h) = self.dimensions();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == self.dimensions() {
            return;
        }
        let (w, h) = self.dimensions();
        let saved = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .ok();
        self.set_size(width, height);
        if let Some(img) = saved {
            if let Err(e) = self.ctx.put_image_data(&img, 0.0, 0.0) {
                log::warn!("could not restore drawing after resize: {e:?}");
            }
        }
    }

    fn pixels(&self) -> Option<Vec<u8>> {
        let (w, h) = self.dimensions();
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .ok()?;
        Some(data.data().0)
    }
}

/// Shared slot for the mounted drawing surface. Empty until the canvas mounts
/// and after it unmounts, in which case every call is a no-op.
#[derive(Clone, Default)]
pub struct SurfaceHandle(Rc<RefCell<Option<DrawingSurface<CanvasInk>>>>);

impl PartialEq for SurfaceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SurfaceHandle {
    pub fn set(&self, surface: Option<DrawingSurface<CanvasInk>>) {
        *self.0.borrow_mut() = surface;
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut DrawingSurface<CanvasInk>) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(f)
    }
}
