//! Main TUI application state and logic

use crate::algorithms::{build_sequence, AlgorithmId, Snapshot};
use crate::catalog::{self, AlgorithmInfo};
use crate::config::Config;
use crate::timeline::{FrameClock, PlaybackController};
use crate::ui::panes::DetailsView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Whether keystrokes edit the search query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// The main application state
pub struct App {
    /// Playback over the selected algorithm's steps
    controller: PlaybackController<Snapshot, FrameClock>,

    /// Algorithm whose sequence is loaded
    algorithm: AlgorithmId,

    /// Speed presets, ascending
    presets: Vec<f64>,

    /// Library filter state
    categories: Vec<&'static str>,
    category_index: usize,
    query: String,
    entries: Vec<&'static AlgorithmInfo>,

    pub input_mode: InputMode,
    pub details_view: DetailsView,
    pub details_scroll: u16,
    frame_period: Duration,

    /// Origin of the monotonic tick timestamps
    started: Instant,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create an app showing `algorithm`, idle at its first step
    pub fn new(config: &Config, algorithm: AlgorithmId) -> Self {
        let mut controller = PlaybackController::new(build_sequence(algorithm), FrameClock::new())
            .with_base_interval(config.base_interval())
            .with_default_speed(config.default_speed);
        controller.subscribe(|index, step| {
            trace!(index, description = %step.state().description, "step changed");
        });

        let categories = catalog::categories();
        let mut app = App {
            controller,
            algorithm,
            presets: config.sorted_presets(),
            categories,
            category_index: 0,
            query: String::new(),
            entries: Vec::new(),
            input_mode: InputMode::Normal,
            details_view: DetailsView::About,
            details_scroll: 0,
            frame_period: config.frame_period(),
            started: Instant::now(),
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        app.refresh_entries();
        app
    }

    pub fn controller(&self) -> &PlaybackController<Snapshot, FrameClock> {
        &self.controller
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn category(&self) -> &'static str {
        self.categories[self.category_index]
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[&'static AlgorithmInfo] {
        &self.entries
    }

    /// Position of the loaded algorithm in the filtered list
    pub fn selected_entry(&self) -> Option<usize> {
        self.entries.iter().position(|info| info.id == self.algorithm)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.started = Instant::now();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(self.started.elapsed());

            // Poll with the frame period so ticks keep flowing while playing
            if event::poll(self.frame_period)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Forward one frame tick to the controller if its loop is registered
    pub fn tick(&mut self, now: Duration) {
        let Some(registration) = self.controller.scheduler().active() else {
            return;
        };
        if self.controller.on_tick(registration, now) {
            self.status_message = if self.controller.is_playing() {
                "Playing...".to_string()
            } else {
                "Playback complete".to_string()
            };
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let info = catalog::entry(self.algorithm);

        super::panes::render_library_pane(
            frame,
            columns[0],
            super::panes::LibraryRenderData {
                entries: &self.entries,
                selected: self.selected_entry(),
                category: self.category(),
                query: &self.query,
                is_searching: self.input_mode == InputMode::Search,
            },
        );

        super::panes::render_visual_pane(
            frame,
            right_rows[0],
            info.name,
            self.controller.current_step().map(|step| step.state()),
        );

        super::panes::render_details_pane(
            frame,
            right_rows[1],
            info,
            self.details_view,
            &mut self.details_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.controller.state(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_mode == InputMode::Search {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.toggle_play(),
            KeyCode::Left => {
                if self.controller.prev() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the first step".to_string();
                }
            }
            KeyCode::Right => {
                if self.controller.next() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already at the last step".to_string();
                }
            }
            KeyCode::Home => {
                self.controller.seek(0);
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::End => {
                self.controller.seek(i64::MAX);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(true),
            KeyCode::Char('-') | KeyCode::Char('_') => self.change_speed(false),
            KeyCode::Up => self.select_relative(-1),
            KeyCode::Down => self.select_relative(1),
            KeyCode::Tab => self.cycle_category(1),
            KeyCode::BackTab => self.cycle_category(-1),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.status_message = "Search: type to filter, Enter to keep, Esc to clear".to_string();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.details_view = self.details_view.toggle();
                self.details_scroll = 0;
            }
            KeyCode::PageUp => {
                self.details_scroll = self.details_scroll.saturating_sub(3);
            }
            KeyCode::PageDown => {
                self.details_scroll = self.details_scroll.saturating_add(3);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.status_message = format!("{} algorithm(s) match", self.entries.len());
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.query.clear();
                self.refresh_entries();
                self.status_message = "Search cleared".to_string();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refresh_entries();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refresh_entries();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.controller.is_playing() {
            self.controller.pause();
            self.status_message = "Paused".to_string();
        } else if self.controller.play() {
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "At the last step; press r to reset".to_string();
        }
    }

    fn change_speed(&mut self, faster: bool) {
        let current = self.controller.speed();
        let preset = if faster {
            self.presets.iter().copied().find(|p| *p > current)
        } else {
            self.presets.iter().rev().copied().find(|p| *p < current)
        };

        match preset {
            Some(speed) if self.controller.set_speed(speed) => {
                self.status_message = format!("Speed {}x", speed);
            }
            _ => {
                self.status_message = format!("Speed stays at {}x", current);
            }
        }
    }

    /// Move the selection within the filtered list and load that algorithm
    fn select_relative(&mut self, delta: isize) {
        if self.entries.is_empty() {
            self.status_message = "No algorithms match the filter".to_string();
            return;
        }

        let last = self.entries.len() - 1;
        let target = match self.selected_entry() {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None => 0,
        };
        let id = self.entries[target].id;
        self.select_algorithm(id);
    }

    /// Load the step sequence of `id`, discarding all playback state
    pub fn select_algorithm(&mut self, id: AlgorithmId) {
        if id == self.algorithm {
            return;
        }
        self.algorithm = id;
        self.controller.load_sequence(build_sequence(id));
        self.details_scroll = 0;
        self.status_message = format!("Loaded {}", catalog::entry(id).name);
        debug!(algorithm = %id, steps = self.controller.sequence().len(), "algorithm selected");
    }

    fn cycle_category(&mut self, delta: isize) {
        let count = self.categories.len() as isize;
        self.category_index = (self.category_index as isize + delta).rem_euclid(count) as usize;
        self.refresh_entries();
        self.status_message = format!("Category: {}", self.category());
    }

    fn refresh_entries(&mut self) {
        self.entries = catalog::filter(&self.query, self.category());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(&Config::default(), AlgorithmId::GraphBfs)
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller().current_index(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.controller().current_index(), 1);
        press(&mut app, KeyCode::End);
        assert_eq!(
            app.controller().current_index(),
            app.controller().sequence().last_index()
        );
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller().current_index(), 0);
    }

    #[test]
    fn test_space_plays_and_ticks_advance() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller().is_playing());
        app.tick(Duration::from_millis(100));
        app.tick(Duration::from_millis(2100));
        assert_eq!(app.controller().current_index(), 1);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.controller().is_playing());
        app.tick(Duration::from_millis(10_000));
        assert_eq!(app.controller().current_index(), 1);
    }

    #[test]
    fn test_speed_presets() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.controller().speed(), 1.5);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.controller().speed(), 2.0);
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.controller().speed(), 0.25);
    }

    #[test]
    fn test_switching_algorithm_stops_playback() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        app.tick(Duration::ZERO);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.algorithm(), AlgorithmId::BinarySearch);
        assert!(!app.controller().is_playing());
        assert_eq!(app.controller().current_index(), 0);
        assert!(app.controller().scheduler().active().is_none());
    }

    #[test]
    fn test_search_filters_library() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        for c in "heap".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_mode, InputMode::Search);
        assert_eq!(app.entries().len(), 2);
        assert_eq!(app.selected_entry(), None);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.algorithm(), AlgorithmId::MinHeap);

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.query(), "");
        assert_eq!(app.entries().len(), catalog::CATALOG.len());
    }

    #[test]
    fn test_code_key_toggles_details_view() {
        let mut app = app();
        app.details_scroll = 12;
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.details_view, DetailsView::Code);
        assert_eq!(app.details_scroll, 0);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.details_view, DetailsView::About);
    }

    #[test]
    fn test_category_cycles_and_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.category(), "Tree");
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.category(), "Algorithm Paradigm");
        assert_eq!(app.entries().len(), 1);
    }
}
