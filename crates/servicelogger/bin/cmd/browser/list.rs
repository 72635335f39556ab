use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

use super::item::SelectableItem;

/// Navigation commands understood by [`SelectableList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Movement {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

/// Items with a single selection that clamps at both ends.
pub(crate) struct SelectableList<T> {
    items: Vec<T>,
    state: ListState,
    width: u16,
    height: u16,
}

impl<T: SelectableItem> SelectableList<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self {
            items,
            state: ListState::default().with_selected(selected),
            width: 0,
            height: 0,
        }
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub(crate) fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub(crate) fn into_selected(mut self) -> Option<T> {
        let index = self.state.selected()?;
        Some(self.items.swap_remove(index))
    }

    pub(crate) fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn page_size(&self) -> usize {
        usize::from(self.height).max(1)
    }

    /// Moves the selection. Returns whether it changed.
    pub(crate) fn navigate(&mut self, movement: Movement) -> bool {
        let Some(current) = self.state.selected() else {
            return false;
        };
        let last = self.items.len() - 1;

        let next = match movement {
            Movement::Up => current.saturating_sub(1),
            Movement::Down => (current + 1).min(last),
            Movement::PageUp => current.saturating_sub(self.page_size()),
            Movement::PageDown => (current + self.page_size()).min(last),
            Movement::First => 0,
            Movement::Last => last,
        };

        if next == current {
            return false;
        }
        self.state.select(Some(next));
        true
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.title()))
            .collect();

        let selected_style = Style::default()
            .fg(Color::Indexed(227))
            .add_modifier(Modifier::BOLD);

        let list = List::new(rows)
            .highlight_style(selected_style)
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}
