mod engine;
mod grid;

pub use engine::{all_promises_kept, close_day, ensure_all_kept, promise_progress, DayClosed};
pub use grid::{
    promise_hint, status_label, streak_grid, DayLabel, GridCell, DEFAULT_GRID_DAYS, MAX_GRID_DAYS,
};
