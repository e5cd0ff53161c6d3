//! Sketch calculator: draw an expression on a canvas, have a remote service
//! recognise and evaluate it, and show the typeset result where it was drawn.

pub mod api;
pub mod bbox;
pub mod canvas_ink;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod overlay;
pub mod palette;
pub mod raster;
pub mod state;
pub mod surface;
pub mod typeset;
pub mod util;
