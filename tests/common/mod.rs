#![allow(dead_code)]

use cellgrid::{CellChanged, DebugView, Grid, GridLine};
use macroquad::math::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Every call a grid made on a [`DebugView`], in order
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCall {
    Line(GridLine),
    Label { x: i32, y: i32, anchor: Vec2, text: String },
    SetText { x: i32, y: i32, text: String },
}

#[derive(Clone, Default)]
pub struct RecordingView {
    pub calls: Rc<RefCell<Vec<ViewCall>>>,
}

impl RecordingView {
    pub fn set_text_calls(&self) -> Vec<(i32, i32, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ViewCall::SetText { x, y, text } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl DebugView for RecordingView {
    fn draw_line(&mut self, line: GridLine) {
        self.calls.borrow_mut().push(ViewCall::Line(line));
    }

    fn create_label(&mut self, x: i32, y: i32, anchor: Vec2, text: String) {
        self.calls.borrow_mut().push(ViewCall::Label { x, y, anchor, text });
    }

    fn set_label_text(&mut self, x: i32, y: i32, text: String) {
        self.calls.borrow_mut().push(ViewCall::SetText { x, y, text });
    }
}

/// Subscribe a listener that records every event it sees
pub fn record_events<T: 'static>(grid: &mut Grid<T>) -> Rc<RefCell<Vec<CellChanged>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    grid.subscribe(move |_, event| sink.borrow_mut().push(event));
    events
}

/// Grid of `i32` where every cell starts at `x * 10 + y`
pub fn numbered_grid(width: i32, height: i32, cell_size: f32) -> Grid<i32> {
    Grid::new(width, height, cell_size, |_, x, y| x * 10 + y).unwrap()
}
