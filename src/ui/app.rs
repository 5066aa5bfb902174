//! Main TUI application state and logic

use crate::config::ValueLimits;
use crate::playback::{
    IntervalTimer, PlaybackController, PlaybackFrame, PlaybackStatus, Renderer,
};
use crate::steps::{Algorithm, Highlight, RecordError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_secs(5);

/// The last frame handed over by the playback controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameView {
    pub snapshot: Vec<i64>,
    pub highlight: Highlight,
    pub index: usize,
    pub is_final: bool,
}

impl Renderer for FrameView {
    fn render(&mut self, frame: PlaybackFrame<'_>) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(frame.step.snapshot());
        self.highlight = frame.step.highlight();
        self.index = frame.index;
        self.is_final = frame.is_final;
    }
}

/// The main application state
pub struct App {
    /// Parsed input array
    pub values: Vec<i64>,

    /// Bounds for the value-indexed sorts
    pub limits: ValueLimits,

    /// Playback of the current run
    pub controller: PlaybackController<IntervalTimer>,

    /// What is on screen; `None` while idle
    pub view: Option<FrameView>,

    /// Highlighted row in the algorithm menu
    pub menu_cursor: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    pub fn new(values: Vec<i64>, limits: ValueLimits, interval: Duration) -> Self {
        App {
            values,
            limits,
            controller: PlaybackController::new(IntervalTimer::new(), interval),
            view: None,
            menu_cursor: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Record `algorithm` on the input and show its first frame, replacing
    /// any previous run. A rejected run still cancels the previous one.
    pub fn start(&mut self, algorithm: Algorithm) -> Result<(), RecordError> {
        self.menu_cursor = algorithm.index();
        match algorithm.record(&self.values, &self.limits) {
            Ok(sequence) => {
                self.controller.reset();
                self.controller.load(sequence);
                self.sync_view();
                self.set_status(format!("{} loaded", algorithm), false);
                Ok(())
            }
            Err(e) => {
                self.controller.reset();
                self.view = None;
                self.set_status(e.to_string(), true);
                Err(e)
            }
        }
    }

    /// Start from a key press; the status bar already shows any error
    fn start_from_key(&mut self, algorithm: Algorithm) {
        if let Err(e) = self.start(algorithm) {
            log::debug!("{} not started: {}", algorithm, e);
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.poll_playback();

            // Poll with a short timeout so ticks are delivered on time
            let timeout = self
                .controller
                .ticker()
                .remaining()
                .unwrap_or(Duration::from_millis(50))
                .min(Duration::from_millis(50));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Deliver a tick if the timer says one is due
    pub fn poll_playback(&mut self) {
        if !self.controller.ticker_mut().due() {
            return;
        }
        if let Some(view) = self.view.as_mut() {
            self.controller.tick(view);
        }
        if self.controller.is_finished() {
            self.set_status("Sorted!".to_string(), false);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(24)])
            .split(rows[1]);

        let algorithm = self.controller.sequence().map(|s| s.algorithm());
        let title = algorithm.map_or("Sorting Algorithm Visualizer", Algorithm::name);

        super::panes::render_legend(frame, rows[0]);
        super::panes::render_array_pane(
            frame,
            columns[0],
            title,
            self.view
                .as_ref()
                .map(|view| (view.snapshot.as_slice(), view.highlight)),
        );
        super::panes::render_menu_pane(frame, columns[1], self.menu_cursor, algorithm);
        super::panes::render_status_bar(
            frame,
            rows[2],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.view.as_ref().map(|view| view.index),
                total_steps: self.controller.sequence().map_or(0, |s| s.len()),
                status: self.controller.status(),
                finished: self.controller.is_finished(),
                interval_ms: self.controller.interval().as_millis(),
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // 1-9 pick the first nine algorithms, 0 the tenth
            KeyCode::Char(c @ '0'..='9') => {
                let index = match c.to_digit(10) {
                    Some(0) | None => 9,
                    Some(d) => d as usize - 1,
                };
                self.start_from_key(Algorithm::ALL[index]);
            }
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1).min(Algorithm::ALL.len() - 1);
            }
            KeyCode::Enter => {
                self.start_from_key(Algorithm::ALL[self.menu_cursor]);
            }
            KeyCode::Char(' ') => self.toggle_play(),
            KeyCode::Right => {
                self.controller.pause();
                let stepped = match self.view.as_mut() {
                    Some(view) => self.controller.step(view),
                    None => false,
                };
                if stepped {
                    let message = if self.controller.is_finished() {
                        "Sorted!"
                    } else {
                        "Stepped forward"
                    };
                    self.set_status(message.to_string(), false);
                }
            }
            KeyCode::Backspace => {
                if self.controller.rewind() {
                    self.sync_view();
                    self.set_status("Jumped to start".to_string(), false);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.view = None;
                self.set_status("Reset".to_string(), false);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let faster = (self.controller.interval() / 2).max(MIN_INTERVAL);
                self.controller.set_interval(faster);
            }
            KeyCode::Char('-') => {
                let slower = (self.controller.interval() * 2).min(MAX_INTERVAL);
                self.controller.set_interval(slower);
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        match self.controller.status() {
            PlaybackStatus::Idle => {
                self.set_status("Pick an algorithm first!".to_string(), true);
            }
            PlaybackStatus::Playing => {
                self.controller.pause();
                self.set_status("Paused".to_string(), false);
            }
            PlaybackStatus::Paused => {
                if self.controller.play() {
                    self.set_status("Playing...".to_string(), false);
                } else {
                    self.set_status("Nothing left to play".to_string(), false);
                }
            }
        }
    }

    /// Copy the controller's current frame into the view
    fn sync_view(&mut self) {
        self.view = self.controller.current().map(|frame| {
            let mut view = FrameView::default();
            view.render(frame);
            view
        });
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::TickSource;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app_with(values: Vec<i64>) -> App {
        App::new(values, ValueLimits::default(), Duration::from_millis(300))
    }

    #[test]
    fn test_start_shows_initial_frame() {
        let mut app = app_with(vec![3, 1, 2]);
        app.start(Algorithm::Selection).unwrap();

        let view = app.view.as_ref().unwrap();
        assert_eq!(view.snapshot, vec![3, 1, 2]);
        assert_eq!(view.highlight, Highlight::NONE);
        assert_eq!(app.controller.status(), PlaybackStatus::Paused);
        assert_eq!(app.menu_cursor, 2);
    }

    #[test]
    fn test_rejected_run_reports_error() {
        let mut app = app_with(vec![3, -1]);
        assert!(app.start(Algorithm::Bucket).is_err());
        assert!(app.status_is_error);
        assert_eq!(app.controller.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_rejected_run_cancels_playing_run() {
        let mut app = app_with(vec![3, -1]);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.status(), PlaybackStatus::Playing);

        press(&mut app, KeyCode::Char('0'));
        assert!(app.status_is_error);
        assert_eq!(app.menu_cursor, Algorithm::Bucket.index());
        assert_eq!(app.controller.status(), PlaybackStatus::Idle);
        assert!(app.controller.sequence().is_none());
        assert!(app.view.is_none());
        assert!(!app.controller.ticker().is_armed());

        // Enter on the rejected entry fails the same way
        press(&mut app, KeyCode::Enter);
        assert!(app.status_is_error);
        assert_eq!(app.controller.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_step_key_walks_to_sorted() {
        let mut app = app_with(vec![2, 1]);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);

        let view = app.view.as_ref().unwrap();
        assert!(view.is_final);
        assert_eq!(view.snapshot, vec![1, 2]);
        assert!(app.controller.is_finished());
        assert_eq!(app.status_message, "Sorted!");
    }

    #[test]
    fn test_switching_algorithm_replaces_playing_run() {
        let mut app = app_with(vec![2, 1]);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.status(), PlaybackStatus::Playing);

        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.controller.status(), PlaybackStatus::Paused);
        assert_eq!(
            app.controller.sequence().unwrap().algorithm(),
            Algorithm::Bucket
        );
        assert!(!app.controller.ticker().is_armed());
    }

    #[test]
    fn test_reset_and_speed_keys() {
        let mut app = app_with(vec![2, 1]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.controller.interval(), Duration::from_millis(150));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.controller.interval(), Duration::from_millis(600));

        press(&mut app, KeyCode::Char('r'));
        assert!(app.view.is_none());
        assert_eq!(app.controller.status(), PlaybackStatus::Idle);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.status_is_error);
    }
}
