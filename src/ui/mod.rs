//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, wiring of the
//!   playback timer to the controller
//! - **[`panes`]**: stateless render functions for each visible pane (array,
//!   legend, algorithm menu, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the parsed
//! input, start an algorithm with [`App::start`] and call [`App::run`] to
//! start the event loop.
//!
//! [`App::start`]: app::App::start
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
