pub mod app;
pub mod overlay_layer;
pub mod sketch_canvas;
pub mod status_line;
pub mod swatch;
pub mod toolbar;

pub use app::App;
