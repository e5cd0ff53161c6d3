//! Session state for the sketch calculator.
//! One reducer holds everything that outlives a single pointer event: the
//! overlays, the variable bindings carried between submissions and the
//! submission status.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

use crate::api::CalculateRecord;
use crate::palette::DEFAULT_INK;

/// Where new overlays land before the first submission.
pub const INITIAL_ANCHOR: Point = Point { x: 10.0, y: 200.0 };

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Symbol -> value assignments returned by the recognition service.
pub type VariableBindings = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayEntry {
    pub expression: String,
    pub answer: String,
    /// Top-left of the overlay in canvas pixels.
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SketchState {
    pub overlays: Vec<OverlayEntry>,
    pub bindings: VariableBindings,
    /// Position given to the next overlay that gets added.
    pub anchor: Point,
    /// Most recently added result.
    pub result: Option<OverlayEntry>,
    pub ink_color: String,
    pub submitting: bool,
    pub last_error: Option<String>,
    /// Bumped on every change so effects can key on it.
    pub version: u64,
}

impl Default for SketchState {
    fn default() -> Self {
        Self {
            overlays: Vec::new(),
            bindings: VariableBindings::new(),
            anchor: INITIAL_ANCHOR,
            result: None,
            ink_color: DEFAULT_INK.to_string(),
            submitting: false,
            last_error: None,
            version: 0,
        }
    }
}

pub enum SketchAction {
    SelectColor(String),
    /// Clears overlays, the current result and any error. Bindings stay.
    Reset,
    SubmitStarted,
    /// Merges assignments and moves the anchor to the drawing's centre.
    ResponseReceived {
        records: Vec<CalculateRecord>,
        anchor: Point,
    },
    /// All overlays of a response have been handed to the timers.
    SubmitFinished,
    SubmitFailed(String),
    AddOverlay {
        expression: String,
        answer: String,
    },
    MoveOverlay {
        index: usize,
        position: Point,
    },
    DismissError,
}

impl SketchState {
    /// Applies `assign` records in order; a repeated symbol keeps the last value.
    pub fn merge_assignments(&mut self, records: &[CalculateRecord]) {
        for rec in records.iter().filter(|r| r.assign) {
            self.bindings.insert(rec.expr.clone(), rec.result.clone());
        }
    }
}

impl Reducible for SketchState {
    type Action = SketchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SketchAction::*;
        let mut new = (*self).clone();
        match action {
            SelectColor(c) => {
                if new.ink_color == c {
                    return self;
                }
                new.ink_color = c;
            }
            Reset => {
                new.overlays.clear();
                new.result = None;
                new.last_error = None;
            }
            SubmitStarted => {
                if new.submitting {
                    return self;
                }
                new.submitting = true;
                new.last_error = None;
            }
            ResponseReceived { records, anchor } => {
                new.merge_assignments(&records);
                new.anchor = anchor;
            }
            SubmitFinished => {
                new.submitting = false;
            }
            SubmitFailed(msg) => {
                new.submitting = false;
                new.last_error = Some(msg);
            }
            AddOverlay { expression, answer } => {
                let entry = OverlayEntry {
                    expression,
                    answer,
                    position: new.anchor,
                };
                new.result = Some(entry.clone());
                new.overlays.push(entry);
            }
            MoveOverlay { index, position } => match new.overlays.get_mut(index) {
                Some(o) if o.position != position => o.position = position,
                _ => return self,
            },
            DismissError => {
                if new.last_error.is_none() {
                    return self;
                }
                new.last_error = None;
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
