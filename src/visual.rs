//! Debug visualization for grids.
//!
//! A [`Grid`](crate::Grid) never draws anything itself. It reports lines and
//! per-cell labels to a [`DebugView`], which can record them, forward them to
//! a renderer, or drop them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use macroquad::prelude::*;

/// Receiver for the debug output of a grid.
pub trait DebugView {
    /// Persistent line in world space.
    fn draw_line(&mut self, line: GridLine);

    /// Text label centred on `anchor` for cell (x, y).
    fn create_label(&mut self, x: i32, y: i32, anchor: Vec2, text: String);

    /// Replace the text of the label for cell (x, y).
    fn set_label_text(&mut self, x: i32, y: i32, text: String);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
}

impl GridLine {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        GridLine { from, to }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellLabel {
    pub anchor: Vec2,
    pub text: String,
}

/// How overlay labels and lines look on screen.
#[derive(Clone, Debug)]
pub struct OverlayStyle {
    pub font_size: u16,
    pub label_color: Color,
    pub line_color: Color,
    pub line_thickness: f32,
    pub show_labels: bool,
    pub show_lines: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        OverlayStyle {
            font_size: 30,
            label_color: WHITE,
            line_color: WHITE,
            line_thickness: 1.0,
            show_labels: true,
            show_lines: true,
        }
    }
}

/// Maps world space onto window pixels. Screen y grows downward, and so does
/// world y here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapping {
    pub origin: Vec2,
    pub pixels_per_unit: f32,
}

impl ScreenMapping {
    pub fn new(origin: Vec2, pixels_per_unit: f32) -> Self {
        ScreenMapping {
            origin,
            pixels_per_unit,
        }
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.origin + world * self.pixels_per_unit
    }

    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.origin) / self.pixels_per_unit
    }
}

#[derive(Debug, Default)]
struct OverlayState {
    lines: Vec<GridLine>,
    labels: BTreeMap<(i32, i32), CellLabel>,
}

/// Recording [`DebugView`] shared between a grid and the render loop.
///
/// Clones share the same state; attach one clone to the grid and draw from
/// another.
#[derive(Clone, Debug, Default)]
pub struct DebugOverlay {
    state: Rc<RefCell<OverlayState>>,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.state.borrow().lines.len()
    }

    pub fn lines(&self) -> Vec<GridLine> {
        self.state.borrow().lines.clone()
    }

    pub fn label_count(&self) -> usize {
        self.state.borrow().labels.len()
    }

    pub fn label(&self, x: i32, y: i32) -> Option<CellLabel> {
        self.state.borrow().labels.get(&(x, y)).cloned()
    }

    pub fn label_text(&self, x: i32, y: i32) -> Option<String> {
        self.label(x, y).map(|label| label.text)
    }

    /// Draw everything recorded so far. Must run inside a macroquad frame.
    pub fn draw(&self, style: &OverlayStyle, mapping: &ScreenMapping) {
        let state = self.state.borrow();

        if style.show_lines {
            for line in &state.lines {
                let from = mapping.to_screen(line.from);
                let to = mapping.to_screen(line.to);
                draw_line(from.x, from.y, to.x, to.y, style.line_thickness, style.line_color);
            }
        }

        if style.show_labels {
            for label in state.labels.values() {
                if label.text.is_empty() {
                    continue;
                }
                let center = mapping.to_screen(label.anchor);
                let size = measure_text(&label.text, None, style.font_size, 1.0);
                draw_text(
                    &label.text,
                    center.x - size.width / 2.0,
                    center.y + size.offset_y / 2.0,
                    style.font_size as f32,
                    style.label_color,
                );
            }
        }
    }
}

impl DebugView for DebugOverlay {
    fn draw_line(&mut self, line: GridLine) {
        self.state.borrow_mut().lines.push(line);
    }

    fn create_label(&mut self, x: i32, y: i32, anchor: Vec2, text: String) {
        self.state
            .borrow_mut()
            .labels
            .insert((x, y), CellLabel { anchor, text });
    }

    fn set_label_text(&mut self, x: i32, y: i32, text: String) {
        if let Some(label) = self.state.borrow_mut().labels.get_mut(&(x, y)) {
            label.text = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_mapping_round_trips() {
        let mapping = ScreenMapping::new(vec2(40.0, 20.0), 64.0);
        let world = vec2(1.5, 2.25);
        let screen = mapping.to_screen(world);
        assert_eq!(screen, vec2(136.0, 164.0));
        assert_eq!(mapping.to_world(screen), world);
    }

    #[test]
    fn clones_share_recorded_state() {
        let overlay = DebugOverlay::new();
        let mut attached = overlay.clone();
        attached.create_label(0, 0, vec2(0.5, 0.5), "a".to_string());
        attached.set_label_text(0, 0, "b".to_string());
        attached.draw_line(GridLine::new(Vec2::ZERO, vec2(0.0, 1.0)));

        assert_eq!(overlay.label_text(0, 0).as_deref(), Some("b"));
        assert_eq!(overlay.line_count(), 1);
    }

    #[test]
    fn unknown_label_update_is_ignored() {
        let mut overlay = DebugOverlay::new();
        overlay.set_label_text(3, 3, "x".to_string());
        assert_eq!(overlay.label_count(), 0);
    }
}
