use crate::model::Point;

// Overlay drag in progress: which overlay, and where inside it the pointer grabbed.
#[derive(Default, Debug, Clone)]
pub struct OverlayDrag {
    pub index: Option<usize>,
    pub grab_dx: f64,
    pub grab_dy: f64,
}

impl OverlayDrag {
    pub fn grab(&mut self, index: usize, pointer_x: f64, pointer_y: f64, origin: Point) {
        self.index = Some(index);
        self.grab_dx = pointer_x - origin.x;
        self.grab_dy = pointer_y - origin.y;
    }

    /// New top-left for the dragged overlay, keeping the grab offset.
    pub fn follow(&self, pointer_x: f64, pointer_y: f64) -> Option<(usize, Point)> {
        let index = self.index?;
        Some((
            index,
            Point {
                x: pointer_x - self.grab_dx,
                y: pointer_y - self.grab_dy,
            },
        ))
    }

    pub fn release(&mut self) -> Option<usize> {
        self.index.take()
    }
}
