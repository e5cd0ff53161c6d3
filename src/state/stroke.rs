// Pointer stroke in progress on the sketch canvas
#[derive(Default, Debug, Clone)]
pub struct StrokeState {
    pub drawing: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl StrokeState {
    pub fn start(&mut self, x: f64, y: f64) {
        self.drawing = true;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn advance(&mut self, x: f64, y: f64) {
        self.last_x = x;
        self.last_y = y;
    }

    pub fn finish(&mut self) {
        self.drawing = false;
    }
}
