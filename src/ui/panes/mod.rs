//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: the array itself, as boxes or bars coloured by highlight
//! - [`legend`]: colour legend
//! - [`menu`]: algorithm picker
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each module exports a stateless `render_*` function.

pub mod array;
pub mod legend;
pub mod menu;
pub mod status;

pub use array::render_array_pane;
pub use legend::render_legend;
pub use menu::render_menu_pane;
pub use status::{render_status_bar, StatusRenderData};
