use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use eyre::Result;
use ratatui::DefaultTerminal;
use std::io;
use tracing::debug;

use super::item::SelectableItem;
use super::layout::FrameStyle;
use super::list::Movement;
use super::view::BrowserView;

/// How the browser was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Quit,
    Chosen,
}

struct App<T> {
    view: BrowserView<T>,
    outcome: Option<Outcome>,
}

/// Shows `items` in the two-pane browser until the user quits or presses
/// enter. Returns the chosen item, if any.
///
/// Nothing is logged while the alternate screen is active.
pub(crate) fn browse<T: SelectableItem>(items: Vec<T>) -> Result<Option<T>> {
    let mut app = App::new(items);

    let mut terminal = ratatui::init();
    let app_result = app.run(&mut terminal);
    ratatui::restore();
    app_result.map_err(|e| eyre::eyre!("TUI error: {}", e))?;

    debug!(
        outcome = ?app.outcome,
        selected = ?app.view.selected_index(),
        viewport = ?app.view.viewport(),
        "browser closed"
    );
    Ok(app.finish())
}

impl<T: SelectableItem> App<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            view: BrowserView::new(items, FrameStyle::default()),
            outcome: None,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        let size = terminal.size()?;
        self.view.resize(size.width, size.height);

        while self.outcome.is_none() {
            terminal.draw(|frame| self.view.render(frame.area(), frame.buffer_mut()))?;
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            Event::Resize(width, height) => self.view.resize(width, height),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let movement = match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.outcome = Some(Outcome::Quit);
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.outcome = Some(Outcome::Quit);
                return;
            }
            KeyCode::Enter => {
                self.outcome = Some(Outcome::Chosen);
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => Movement::Up,
            KeyCode::Down | KeyCode::Char('j') => Movement::Down,
            KeyCode::PageUp => Movement::PageUp,
            KeyCode::PageDown => Movement::PageDown,
            KeyCode::Home | KeyCode::Char('g') => Movement::First,
            KeyCode::End | KeyCode::Char('G') => Movement::Last,
            _ => return,
        };

        self.view.navigate(movement);
    }

    fn finish(self) -> Option<T> {
        match self.outcome {
            Some(Outcome::Chosen) => self.view.into_selected(),
            _ => None,
        }
    }
}
