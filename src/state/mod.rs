pub mod drag;
pub mod stroke;
pub mod submit_gate;

pub use drag::OverlayDrag;
pub use stroke::StrokeState;
pub use submit_gate::SubmitGate;
