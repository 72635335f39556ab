/// Padding and border overhead around each pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameStyle {
    pub(crate) horizontal_padding: u16,
    pub(crate) vertical_padding: u16,
    pub(crate) border_width: u16,
    pub(crate) border_height: u16,
}

impl FrameStyle {
    /// Horizontal overhead: padding on both sides plus border columns.
    pub(crate) fn frame_width(&self) -> u16 {
        self.horizontal_padding
            .saturating_mul(2)
            .saturating_add(self.border_width)
    }

    /// Vertical overhead: padding above and below plus border rows.
    pub(crate) fn frame_height(&self) -> u16 {
        self.vertical_padding
            .saturating_mul(2)
            .saturating_add(self.border_height)
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            horizontal_padding: 2,
            vertical_padding: 1,
            border_width: 0,
            border_height: 0,
        }
    }
}

/// Splits the terminal into two equal panes.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutEngine {
    style: FrameStyle,
}

impl LayoutEngine {
    pub(crate) fn new(style: FrameStyle) -> Self {
        Self { style }
    }

    pub(crate) fn style(&self) -> FrameStyle {
        self.style
    }

    /// Width of one pane, 0 when the terminal is no wider than the frame.
    pub(crate) fn pane_width(&self, terminal_width: u16) -> u16 {
        terminal_width.saturating_sub(self.style.frame_width()) / 2
    }

    /// Height of both panes, 0 when the terminal is no taller than the frame.
    pub(crate) fn pane_height(&self, terminal_height: u16) -> u16 {
        terminal_height.saturating_sub(self.style.frame_height())
    }

    /// Size of the list widget inside the left pane.
    pub(crate) fn list_size(&self, terminal_width: u16, terminal_height: u16) -> (u16, u16) {
        let width = self
            .pane_width(terminal_width)
            .saturating_sub(self.style.horizontal_padding.saturating_mul(2));
        (width, self.pane_height(terminal_height))
    }

    /// Word-wrap width of the detail pane, leaving room for border and padding.
    pub(crate) fn wrap_width(&self, terminal_width: u16) -> usize {
        let allowance = 1 + usize::from(self.style.horizontal_padding) * 4;
        usize::from(self.pane_width(terminal_width)).saturating_sub(allowance)
    }
}
