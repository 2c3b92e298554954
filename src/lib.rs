// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use application::{ControlEvent, RunState, Session};
pub use domain::{Cell, Grid, GridError, Pattern, changed_cells, presets};
pub use ui::Button;
