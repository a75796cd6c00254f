//! Application state and main loop.
//!
//! [`App`] owns the entity directory, the selected entity and the single
//! [`ViewState`] of the graph canvas. All mutation goes through
//! [`App::update`]; every handled action is followed by a full redraw.

use color_eyre::Result;
use ratatui::crossterm::event;
use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::constants::TICK_RATE;
use crate::domain::{Entity, EntityDirectory};
use crate::event::Action;
use crate::graph::{AngularPartition, ViewState};
use crate::handler::handle_event;
use crate::tui::Tui;
use crate::ui;

/// Top-level application state.
pub struct App {
    directory: Box<dyn EntityDirectory>,
    /// Directory ids in browse order.
    ids: Vec<String>,
    selected: usize,
    /// Requested startup id that the directory could not resolve.
    missing: Option<String>,
    pub view: ViewState,
    pub partition: AngularPartition,
    pub terminal_area: Rect,
    pub exit: bool,
}

impl App {
    /// Creates the app, selecting `config.default_entity` when present.
    #[must_use]
    pub fn new(directory: Box<dyn EntityDirectory>, config: &AppConfig, terminal_area: Rect) -> Self {
        tracing::info!("Directory holds {} entities", directory.len());
        let ids: Vec<String> = directory.ids().into_iter().map(str::to_string).collect();
        let (selected, missing) = match config.default_entity.as_deref() {
            Some(id) => match ids.iter().position(|candidate| candidate == id) {
                Some(idx) => (idx, None),
                None => {
                    tracing::warn!("Requested entity {id} is not in the directory");
                    (0, Some(id.to_string()))
                }
            },
            None => (0, None),
        };

        Self {
            directory,
            ids,
            selected,
            missing,
            view: ViewState::new(),
            partition: config.angular_partition,
            terminal_area,
            exit: false,
        }
    }

    /// The entity currently mounted in the graph view.
    #[must_use]
    pub fn current_entity(&self) -> Option<&Entity> {
        if self.missing.is_some() {
            return None;
        }
        self.ids
            .get(self.selected)
            .and_then(|id| self.directory.lookup(id))
    }

    /// The unresolved startup id, if any.
    #[must_use]
    pub fn missing_entity(&self) -> Option<&str> {
        self.missing.as_deref()
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.ids.len()
    }

    /// 1-based position of the selected entity, for display.
    #[must_use]
    pub fn position(&self) -> usize {
        self.selected + 1
    }

    /// Applies an action to the state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.exit = true,
            Action::NextEntity => self.step_entity(1),
            Action::PrevEntity => self.step_entity(-1),
            Action::ZoomIn => self.view.zoom_in(),
            Action::ZoomOut => self.view.zoom_out(),
            Action::ResetView => self.view.reset(),
            Action::PointerDown(point) => self.view.pointer_down(point),
            Action::PointerMove(point) => {
                self.view.pointer_move(point);
            }
            Action::PointerUp => self.view.pointer_up(),
            Action::PointerLeave => self.view.pointer_leave(),
            Action::Resize(width, height) => {
                tracing::debug!("Terminal resized to {width}x{height}");
                self.terminal_area = Rect::new(0, 0, width, height);
            }
        }
        tracing::trace!(
            zoom = self.view.zoom(),
            pan_x = self.view.pan().x,
            pan_y = self.view.pan().y,
            "applied {action:?}"
        );
    }

    /// Moves the selection with wrap-around and starts a fresh view.
    fn step_entity(&mut self, delta: isize) {
        if self.ids.is_empty() {
            return;
        }
        let len = self.ids.len() as isize;
        let next = if self.missing.take().is_some() {
            0
        } else {
            (self.selected as isize + delta).rem_euclid(len)
        };
        self.selected = next as usize;
        self.view = ViewState::new();
        tracing::info!("Viewing entity {}", self.ids[self.selected]);
    }

    /// Runs the event loop until [`Action::Quit`].
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing or event reading fails.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        if let Some(entity) = self.current_entity() {
            tracing::info!("Viewing entity {}", entity.id);
        }
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            if !event::poll(TICK_RATE)? {
                continue;
            }
            let event = event::read()?;
            if let Some(action) = handle_event(self, &event) {
                self.update(action);
                terminal.draw(|frame| ui::render(self, frame))?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StaticDirectory;
    use crate::graph::Point;

    fn app_with(config: AppConfig) -> App {
        App::new(
            Box::new(StaticDirectory::builtin()),
            &config,
            Rect::new(0, 0, 120, 40),
        )
    }

    #[test]
    fn test_starts_on_first_entity_by_default() {
        let app = app_with(AppConfig::default());
        assert_eq!(app.current_entity().unwrap().id, "ENT-00451");
        assert_eq!(app.entity_count(), 2);
        assert_eq!(app.position(), 1);
    }

    #[test]
    fn test_starts_on_configured_entity() {
        let app = app_with(AppConfig {
            default_entity: Some("ENT-03294".to_string()),
            ..AppConfig::default()
        });
        assert_eq!(app.current_entity().unwrap().name, "Zhang Wei");
    }

    #[test]
    fn test_unknown_entity_is_not_mounted() {
        let mut app = app_with(AppConfig {
            default_entity: Some("ENT-00000".to_string()),
            ..AppConfig::default()
        });
        assert!(app.current_entity().is_none());
        assert_eq!(app.missing_entity(), Some("ENT-00000"));

        app.update(Action::NextEntity);
        assert_eq!(app.missing_entity(), None);
        assert_eq!(app.current_entity().unwrap().id, "ENT-00451");
    }

    #[test]
    fn test_entity_navigation_wraps() {
        let mut app = app_with(AppConfig::default());
        app.update(Action::PrevEntity);
        assert_eq!(app.current_entity().unwrap().id, "ENT-03294");
        app.update(Action::NextEntity);
        assert_eq!(app.current_entity().unwrap().id, "ENT-00451");
    }

    #[test]
    fn test_switching_entity_resets_view() {
        let mut app = app_with(AppConfig::default());
        app.update(Action::ZoomIn);
        app.update(Action::PointerDown(Point::new(10.0, 10.0)));
        app.update(Action::PointerMove(Point::new(60.0, 40.0)));
        assert_ne!(app.view, ViewState::new());

        app.update(Action::NextEntity);
        assert_eq!(app.view, ViewState::new());
    }

    #[test]
    fn test_pointer_actions_drive_view() {
        let mut app = app_with(AppConfig::default());
        app.update(Action::PointerDown(Point::new(100.0, 100.0)));
        app.update(Action::PointerMove(Point::new(150.0, 130.0)));
        assert_eq!(app.view.pan(), Point::new(50.0, 30.0));
        app.update(Action::PointerLeave);
        assert!(!app.view.is_dragging());

        app.update(Action::ResetView);
        assert_eq!(app.view.pan(), Point::ORIGIN);
    }

    #[test]
    fn test_resize_and_quit() {
        let mut app = app_with(AppConfig::default());
        app.update(Action::Resize(80, 24));
        assert_eq!(app.terminal_area, Rect::new(0, 0, 80, 24));
        app.update(Action::Quit);
        assert!(app.exit);
    }

    #[test]
    fn test_empty_directory() {
        let mut app = App::new(
            Box::new(StaticDirectory::default()),
            &AppConfig::default(),
            Rect::new(0, 0, 80, 24),
        );
        assert!(app.current_entity().is_none());
        app.update(Action::NextEntity);
        assert!(app.current_entity().is_none());
    }
}
