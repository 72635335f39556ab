use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use textwrap::core::{display_width, Fragment};
use textwrap::wrap_algorithms::wrap_first_fit;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RenderError {
    #[error("wrap width must be at least one column")]
    ZeroWidth,
    #[error("unbalanced markup: {0}")]
    Unbalanced(String),
}

/// Turns a body into wrapped, styled lines.
pub(crate) trait Formatter {
    fn format(&self, body: &str, width: usize) -> Result<Vec<Line<'static>>, RenderError>;
}

/// Renders CommonMark with headings, lists, emphasis and code styled for the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format(&self, body: &str, width: usize) -> Result<Vec<Line<'static>>, RenderError> {
        if width == 0 {
            return Err(RenderError::ZeroWidth);
        }

        let mut writer = Writer::new(width);
        for event in Parser::new_ext(body, Options::ENABLE_STRIKETHROUGH) {
            writer.event(event)?;
        }
        writer.finish()
    }
}

/// Renders the detail pane. Falls back to the raw body when formatting fails.
pub(crate) struct DetailRenderer<F = MarkdownFormatter> {
    formatter: F,
}

impl DetailRenderer {
    pub(crate) fn new() -> Self {
        Self::with_formatter(MarkdownFormatter)
    }
}

impl<F: Formatter> DetailRenderer<F> {
    pub(crate) fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    pub(crate) fn render(&self, body: &str, width: usize) -> Text<'static> {
        match self.formatter.format(body, width) {
            Ok(lines) => Text::from(lines),
            Err(_) => Text::raw(body.to_string()),
        }
    }
}

/// A word plus the whitespace that followed it in the source.
#[derive(Debug)]
struct Word {
    text: String,
    style: Style,
    width: usize,
    whitespace: usize,
}

impl Fragment for Word {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn whitespace_width(&self) -> f64 {
        self.whitespace as f64
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// An open link: where it points and the text shown so far.
struct Link {
    dest: String,
    text: String,
}

struct Writer {
    width: usize,
    lines: Vec<Line<'static>>,
    words: Vec<Word>,
    styles: Vec<Style>,
    open: Vec<TagEnd>,
    lists: Vec<Option<u64>>,
    links: Vec<Link>,
    marker: Option<String>,
    in_code_block: bool,
}

impl Writer {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            words: Vec::new(),
            styles: Vec::new(),
            open: Vec::new(),
            lists: Vec::new(),
            links: Vec::new(),
            marker: None,
            in_code_block: false,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, style: impl FnOnce(Style) -> Style) {
        let style = style(self.style());
        self.styles.push(style);
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(end) => return self.end(end),
            Event::Text(text) => {
                if self.in_code_block {
                    self.code_block(&text);
                } else {
                    self.text(&text, self.style());
                }
            }
            Event::Code(code) => self.text(&code, self.style().fg(Color::Cyan)),
            Event::Html(html) | Event::InlineHtml(html) => self.text(&html, self.style()),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                self.lines.push(Line::styled(
                    "─".repeat(self.width),
                    Style::default().fg(Color::DarkGray),
                ));
                self.blank();
            }
            Event::TaskListMarker(done) => {
                self.text(if done { "[x]" } else { "[ ]" }, self.style());
            }
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) {
        self.open.push(tag.to_end());

        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.push_style(|s| s.fg(Color::Yellow).add_modifier(Modifier::BOLD));
                let marker = "#".repeat(level as usize);
                self.text(&format!("{marker} "), self.style());
            }
            Tag::Paragraph => self.flush(),
            Tag::CodeBlock(_) => {
                self.flush();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                self.marker = Some(self.next_marker());
            }
            Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { dest_url, .. } => {
                self.links.push(Link {
                    dest: dest_url.to_string(),
                    text: String::new(),
                });
                self.push_style(|s| s.fg(Color::Blue).add_modifier(Modifier::UNDERLINED))
            }
            _ => {}
        }
    }

    fn end(&mut self, end: TagEnd) -> Result<(), RenderError> {
        match self.open.pop() {
            Some(open) if open == end => {}
            open => {
                return Err(RenderError::Unbalanced(format!(
                    "{end:?} closes {open:?}"
                )))
            }
        }

        match end {
            TagEnd::Heading(_) => {
                self.flush();
                self.styles.pop();
                self.blank();
            }
            TagEnd::Paragraph => {
                self.flush();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.blank();
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            TagEnd::Item => self.flush(),
            TagEnd::Link => {
                self.styles.pop();
                self.link_destination();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.styles.pop();
            }
            _ => {}
        }
        Ok(())
    }

    fn next_marker(&mut self) -> String {
        let indent = "  ".repeat(self.lists.len().saturating_sub(1));
        match self.lists.last_mut() {
            Some(Some(number)) => {
                let marker = format!("{indent}{number}. ");
                *number += 1;
                marker
            }
            _ => format!("{indent}• "),
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.lists.len())
    }

    /// Shows the destination of the link just closed, unless its text already does.
    fn link_destination(&mut self) {
        let Some(link) = self.links.pop() else {
            return;
        };
        if link.dest.is_empty() || link.dest == link.text.trim() {
            return;
        }
        self.soft_break();
        self.text(
            &format!("({})", link.dest),
            Style::default().fg(Color::DarkGray),
        );
    }

    fn text(&mut self, text: &str, style: Style) {
        if let Some(link) = self.links.last_mut() {
            link.text.push_str(text);
        }
        if text.starts_with(char::is_whitespace) {
            self.soft_break();
        }
        let trailing = text.ends_with(char::is_whitespace);

        let mut parts = text.split_whitespace().peekable();
        while let Some(part) = parts.next() {
            let whitespace = usize::from(parts.peek().is_some() || trailing);
            self.words.push(Word {
                text: part.to_string(),
                style,
                width: display_width(part),
                whitespace,
            });
        }
    }

    fn soft_break(&mut self) {
        if let Some(last) = self.words.last_mut() {
            last.whitespace = 1;
        }
    }

    fn code_block(&mut self, text: &str) {
        let indent = self.indent();
        for line in text.lines() {
            self.lines.push(Line::styled(
                format!("{indent}    {line}"),
                Style::default().fg(Color::Cyan),
            ));
        }
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|line| line.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    /// Wraps the pending words into lines, hanging under the list marker if any.
    fn flush(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let words = std::mem::take(&mut self.words);
        let lead = self.marker.take().unwrap_or_else(|| self.indent());
        let lead_width = display_width(&lead);
        let hang = " ".repeat(lead_width);
        let available = self.width.saturating_sub(lead_width).max(1) as f64;

        for (row_index, row) in wrap_first_fit(&words, &[available]).into_iter().enumerate() {
            let mut spans = Vec::with_capacity(row.len() * 2 + 1);
            let prefix = if row_index == 0 { &lead } else { &hang };
            if !prefix.is_empty() {
                spans.push(Span::raw(prefix.clone()));
            }
            for (i, word) in row.iter().enumerate() {
                spans.push(Span::styled(word.text.clone(), word.style));
                if word.whitespace > 0 && i + 1 < row.len() {
                    spans.push(Span::raw(" "));
                }
            }
            self.lines.push(Line::from(spans));
        }
    }

    fn finish(mut self) -> Result<Vec<Line<'static>>, RenderError> {
        if let Some(open) = self.open.last() {
            return Err(RenderError::Unbalanced(format!("{open:?} is never closed")));
        }
        self.flush();
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        Ok(self.lines)
    }
}
