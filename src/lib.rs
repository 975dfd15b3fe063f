pub mod action_log;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod visual;

pub use error::{ConfigError, GridError};
pub use events::{CellChanged, SubscriberId};
pub use grid::Grid;
pub use layout::GridLayout;
pub use visual::{DebugOverlay, DebugView, GridLine};
