// Text shown inside a result overlay.

use crate::model::OverlayEntry;

/// `expression = answer`
pub fn plain_text(expression: &str, answer: &str) -> String {
    format!("{expression} = {answer}")
}

/// Inline-math source handed to the typesetter, using the `\( ... \)` delimiters.
pub fn latex_for(expression: &str, answer: &str) -> String {
    format!("\\(\\LARGE {} \\)", plain_text(expression, answer))
}

impl OverlayEntry {
    pub fn latex(&self) -> String {
        latex_for(&self.expression, &self.answer)
    }
}
