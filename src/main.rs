use arboard::Clipboard;
use cellgrid::action_log::{Action, ActionLog};
use cellgrid::config::{self, Config};
use cellgrid::logging::init_tracing;
use cellgrid::visual::{OverlayStyle, ScreenMapping};
use cellgrid::{DebugOverlay, Grid};
use macroquad::prelude::*;
use std::fmt;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Demo cell: a click counter
#[derive(Clone, Copy, Debug, Default)]
struct HeatCell {
    value: i32,
}

impl fmt::Display for HeatCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Visualization state
struct DemoState {
    config: Config,
    grid: Grid<HeatCell>,
    overlay: DebugOverlay,
    style: OverlayStyle,
    mapping: ScreenMapping,
    action_log: ActionLog,
}

impl DemoState {
    fn new(config: Config) -> Result<Self, cellgrid::GridError> {
        let overlay = DebugOverlay::new();
        let grid = Grid::with_debug_view(
            config.grid.width,
            config.grid.height,
            config.grid.cell_size,
            |_, _, _| HeatCell::default(),
            overlay.clone(),
        )?;
        let style = config.visual.overlay_style();
        let mapping = ScreenMapping::new(vec2(20.0, 20.0), config.visual.pixels_per_unit);

        Ok(DemoState {
            config,
            grid,
            overlay,
            style,
            mapping,
            action_log: ActionLog::new(),
        })
    }

    fn mouse_world(&self) -> Vec2 {
        let (mouse_x, mouse_y) = mouse_position();
        self.mapping.to_world(vec2(mouse_x, mouse_y))
    }

    /// Left click: write value + 1 through the grid
    fn increment_at(&mut self, world: Vec2) {
        let next = match self.grid.value_at(world) {
            Ok(cell) => HeatCell { value: cell.value + 1 },
            Err(e) => {
                debug!(error = %e, "click outside grid");
                return;
            }
        };
        let (x, y) = self.grid.xy(world);
        if let Err(e) = self.grid.set_value(x, y, next) {
            warn!(error = %e, "set_value failed");
            return;
        }
        self.action_log.log(Action::SetCell { x, y, text: next.to_string() });
    }

    /// Right click: edit in place, then re-raise the change
    fn decrement_in_place(&mut self, world: Vec2) {
        let (x, y) = match self.grid.checked_xy(world) {
            Ok(xy) => xy,
            Err(e) => {
                debug!(error = %e, "click outside grid");
                return;
            }
        };
        match self.grid.value_mut(x, y) {
            Ok(cell) => cell.value -= 1,
            Err(e) => {
                debug!(error = %e, "click outside grid");
                return;
            }
        }
        if let Err(e) = self.grid.trigger_changed(x, y) {
            warn!(error = %e, "trigger_changed failed");
            return;
        }
        self.action_log.log(Action::Retrigger { x, y });
    }

    fn grid_to_string(&self) -> String {
        let mut result = String::new();
        for y in 0..self.grid.height() {
            let row: Vec<String> = (0..self.grid.width())
                .filter_map(|x| self.grid.value(x, y).ok())
                .map(|cell| cell.to_string())
                .collect();
            result.push_str(&row.join("\t"));
            result.push('\n');
        }
        result
    }

    fn copy_to_clipboard(&mut self) {
        let grid_string = self.grid_to_string();
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(grid_string) {
                    warn!(error = %e, "Failed to copy to clipboard");
                } else {
                    info!("Grid values copied to clipboard");
                    self.action_log.log(Action::CopyLayout {
                        width: self.grid.width(),
                        height: self.grid.height(),
                    });
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to access clipboard");
            }
        }
    }

    fn save_action_log(&self) {
        if !self.config.logging.enable_action_log {
            return;
        }
        let path = Path::new(&self.config.logging.action_log_path);
        match self.action_log.save_to_file(path) {
            Ok(()) => info!("Action log saved to {}\n{}", path.display(), self.action_log.summary()),
            Err(e) => error!(error = %e, "Failed to save action log"),
        }
    }

    fn draw(&self) {
        clear_background(self.config.visual.background());
        self.overlay.draw(&self.style, &self.mapping);

        let info = format!(
            "Cells: {}x{} (size {})\nLeft click: increment\nRight click: decrement in place\nC: copy values to clipboard\nEsc: save log and close",
            self.grid.width(),
            self.grid.height(),
            self.grid.cell_size(),
        );
        let y = screen_height() - 90.0;
        for (i, line) in info.lines().enumerate() {
            draw_text(line, 10.0, y + i as f32 * 18.0, 18.0, GRAY);
        }
    }
}

/// Runs before `main`, so logging is installed here and the config read
/// here is the one the demo uses.
fn window_conf() -> Conf {
    init_tracing("info");
    Conf {
        window_title: config::shared().visual.window_title.clone(),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config::shared().clone();

    let mut state = match DemoState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Invalid grid configuration");
            return;
        }
    };

    loop {
        if is_mouse_button_pressed(MouseButton::Left) {
            let world = state.mouse_world();
            state.increment_at(world);
        } else if is_mouse_button_pressed(MouseButton::Right) {
            let world = state.mouse_world();
            state.decrement_in_place(world);
        }

        if is_key_pressed(KeyCode::C) {
            state.copy_to_clipboard();
        }

        if is_key_pressed(KeyCode::Escape) {
            state.save_action_log();
            break;
        }

        state.draw();

        next_frame().await
    }
}
