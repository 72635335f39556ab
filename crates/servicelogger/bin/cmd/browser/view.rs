use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

use super::detail::DetailRenderer;
use super::item::SelectableItem;
use super::layout::{FrameStyle, LayoutEngine};
use super::list::{Movement, SelectableList};

const BORDER_COLOR: Color = Color::Indexed(227);

/// Terminal size as last seen by the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Viewport {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

/// List of items on the left, the selected item's body on the right.
pub(crate) struct BrowserView<T> {
    layout: LayoutEngine,
    list: SelectableList<T>,
    renderer: DetailRenderer,
    viewport: Viewport,
}

impl<T: SelectableItem> BrowserView<T> {
    pub(crate) fn new(items: Vec<T>, style: FrameStyle) -> Self {
        Self {
            layout: LayoutEngine::new(style),
            list: SelectableList::new(items),
            renderer: DetailRenderer::new(),
            viewport: Viewport::default(),
        }
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
        let (list_width, list_height) = self.layout.list_size(width, height);
        self.list.set_size(list_width, list_height);
    }

    pub(crate) fn navigate(&mut self, movement: Movement) -> bool {
        self.list.navigate(movement)
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.list.selected_index()
    }

    pub(crate) fn into_selected(self) -> Option<T> {
        self.list.into_selected()
    }

    /// Draws both panes into `area`, sized from the area itself.
    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.resize(area.width, area.height);

        let style = self.layout.style();
        let pane_width = self.layout.pane_width(area.width);
        let pane_height = self.layout.pane_height(area.height);
        if pane_width == 0 || pane_height == 0 {
            return;
        }

        let padding = Padding::new(
            style.horizontal_padding,
            style.horizontal_padding,
            style.vertical_padding,
            style.vertical_padding,
        );
        let height = pane_height
            .saturating_add(style.vertical_padding.saturating_mul(2))
            .min(area.height);

        let list_area = Rect::new(
            area.x,
            area.y,
            pane_width.saturating_add(1).min(area.width),
            height,
        );
        let list_block = Block::new()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(BORDER_COLOR))
            .padding(padding);
        let list_inner = list_block.inner(list_area);
        list_block.render(list_area, buf);
        self.list.render(list_inner, buf);

        let detail_area = Rect::new(
            list_area.right(),
            area.y,
            pane_width.min(area.width - list_area.width),
            height,
        );
        let body = self
            .list
            .selected()
            .map(SelectableItem::body)
            .unwrap_or_default();
        let text = self
            .renderer
            .render(&body, self.layout.wrap_width(area.width));
        Paragraph::new(text)
            .block(Block::new().padding(padding))
            .render(detail_area, buf);
    }
}
