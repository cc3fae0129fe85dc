pub mod grid_layout;
pub mod palette;
pub mod time_grid;
