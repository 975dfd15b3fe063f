use std::fmt::Display;
use std::mem;

use macroquad::math::Vec2;
use tracing::{debug, trace};

use crate::error::GridError;
use crate::events::{CellChanged, ChangeListeners, SubscriberId};
use crate::layout::GridLayout;
use crate::visual::{DebugView, GridLine};

/// Fixed-size 2D grid holding one value per cell.
///
/// Writes go through [`Grid::set_value`] (or [`Grid::trigger_changed`] after an
/// in-place edit) so subscribers see every change.
#[derive(Debug)]
pub struct Grid<T> {
    layout: GridLayout,
    /// Cells in x-major order, see [`GridLayout::index`]
    cells: Vec<T>,
    listeners: ChangeListeners<T>,
}

impl<T> Grid<T> {
    /// Create a grid, calling `factory` once per cell with x outer and y inner.
    pub fn new<F>(width: i32, height: i32, cell_size: f32, mut factory: F) -> Result<Self, GridError>
    where
        F: FnMut(&GridLayout, i32, i32) -> T,
    {
        let layout = GridLayout::new(width, height, cell_size)?;

        let mut cells = Vec::with_capacity(layout.cell_count());
        for x in 0..width {
            for y in 0..height {
                cells.push(factory(&layout, x, y));
            }
        }

        debug!(width, height, cell_size, "grid created");

        Ok(Grid {
            layout,
            cells,
            listeners: ChangeListeners::new(),
        })
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn width(&self) -> i32 {
        self.layout.width()
    }

    pub fn height(&self) -> i32 {
        self.layout.height()
    }

    pub fn cell_size(&self) -> f32 {
        self.layout.cell_size()
    }

    pub fn position(&self, x: i32, y: i32) -> Vec2 {
        self.layout.position(x, y)
    }

    pub fn xy(&self, world: Vec2) -> (i32, i32) {
        self.layout.xy(world)
    }

    pub fn checked_xy(&self, world: Vec2) -> Result<(i32, i32), GridError> {
        self.layout.checked_xy(world)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.layout.contains(x, y)
    }

    /// Store `value` at (x, y) and notify subscribers.
    pub fn set_value(&mut self, x: i32, y: i32, value: T) -> Result<(), GridError> {
        let index = self.layout.index(x, y)?;
        self.cells[index] = value;
        self.raise(CellChanged { x, y });
        Ok(())
    }

    pub fn set_value_at(&mut self, world: Vec2, value: T) -> Result<(), GridError> {
        let (x, y) = self.layout.checked_xy(world)?;
        self.set_value(x, y, value)
    }

    pub fn value(&self, x: i32, y: i32) -> Result<&T, GridError> {
        let index = self.layout.index(x, y)?;
        Ok(&self.cells[index])
    }

    pub fn value_at(&self, world: Vec2) -> Result<&T, GridError> {
        let (x, y) = self.layout.checked_xy(world)?;
        self.value(x, y)
    }

    /// Mutable access that does not notify. Call [`Grid::trigger_changed`]
    /// once the edit is done.
    pub fn value_mut(&mut self, x: i32, y: i32) -> Result<&mut T, GridError> {
        let index = self.layout.index(x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Notify subscribers that (x, y) changed without writing to it.
    pub fn trigger_changed(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.layout.index(x, y)?;
        self.raise(CellChanged { x, y });
        Ok(())
    }

    /// Cells with their coordinates, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, value)| (self.layout.coords(index), value))
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&Grid<T>, CellChanged) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn raise(&mut self, event: CellChanged) {
        trace!(x = event.x, y = event.y, listeners = self.listeners.len(), "cell changed");
        // Listeners borrow the grid immutably, so run them from a detached list.
        let mut listeners = mem::take(&mut self.listeners);
        listeners.notify(self, event);
        self.listeners = listeners;
    }
}

impl<T: Display> Grid<T> {
    /// [`Grid::new`] followed by [`Grid::attach_debug_view`].
    pub fn with_debug_view<F, V>(
        width: i32,
        height: i32,
        cell_size: f32,
        factory: F,
        view: V,
    ) -> Result<Self, GridError>
    where
        F: FnMut(&GridLayout, i32, i32) -> T,
        V: DebugView + 'static,
    {
        let mut grid = Grid::new(width, height, cell_size, factory)?;
        grid.attach_debug_view(view);
        Ok(grid)
    }

    /// Label every cell and outline the grid on `view`, then keep the labels
    /// in sync with change notifications.
    pub fn attach_debug_view<V>(&mut self, mut view: V) -> SubscriberId
    where
        V: DebugView + 'static,
    {
        let layout = self.layout;
        let (width, height) = (layout.width(), layout.height());

        for ((x, y), value) in self.iter() {
            view.create_label(x, y, layout.cell_center(x, y), value.to_string());
            view.draw_line(GridLine::new(layout.position(x, y), layout.position(x, y + 1)));
            view.draw_line(GridLine::new(layout.position(x, y), layout.position(x + 1, y)));
        }
        view.draw_line(GridLine::new(layout.position(0, height), layout.position(width, height)));
        view.draw_line(GridLine::new(layout.position(width, 0), layout.position(width, height)));

        debug!(width, height, "debug view attached");

        self.subscribe(move |grid, event| {
            if let Ok(value) = grid.value(event.x, event.y) {
                view.set_label_text(event.x, event.y, value.to_string());
            }
        })
    }
}
