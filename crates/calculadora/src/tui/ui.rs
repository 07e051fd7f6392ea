//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::{CalculatorApp, Field};
use crate::core::{DisplayState, HistoryEntry, Operator};
use crate::labels;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Key hints shown under the operator row
pub const HELP_LINE: &str = "Tab/Enter: campo  Esc: limpiar  Ctrl+C: salir";

/// Calculator panel and history panel side by side
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn create_horizontal_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(44), Constraint::Length(40)])
            .split(area)
            .to_vec()
    }

    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // First operand
                Constraint::Length(3), // Second operand
                Constraint::Length(3), // Operators
                Constraint::Length(3), // Output
                Constraint::Min(1),    // Help
            ])
            .split(area)
            .to_vec()
    }

    fn render_field(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let (title, placeholder) = match field {
            Field::First => (labels::FIRST_LABEL, labels::FIRST_PLACEHOLDER),
            Field::Second => (labels::SECOND_LABEL, labels::SECOND_PLACEHOLDER),
        };
        let focused = self.app.focused() == field;
        let text = self.app.field_text(field);

        let mut spans = if text.is_empty() {
            vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
        } else {
            vec![Span::raw(text)]
        };
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        }

        let border = if focused { Color::Yellow } else { Color::Gray };
        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }

    fn render_operators(area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Operator::ALL
            .iter()
            .flat_map(|op| {
                [
                    Span::styled(
                        format!("[ {} ]", op.symbol()),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        spans.push(Span::styled(
            format!("[ {} ]", labels::CLEAR),
            Style::default().fg(Color::Magenta),
        ));

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }

    fn render_output(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.state().display();
        let style = match display {
            DisplayState::Idle => Style::default().fg(Color::Gray),
            DisplayState::Error(_) => Style::default().fg(Color::Red),
            DisplayState::Success(_) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        };

        Paragraph::new(Span::styled(display.message(), style))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_calculator(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Self::create_layout(area);
        self.render_field(Field::First, chunks[0], buf);
        self.render_field(Field::Second, chunks[1], buf);
        Self::render_operators(chunks[2], buf);
        self.render_output(chunks[3], buf);
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .render(chunks[4], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" {} ", labels::TITLE))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = Self::create_horizontal_layout(area);
        self.render_calculator(h_chunks[0], buf);
        HistoryPanel::new(self.app.state().history().as_slice()).render(h_chunks[1], buf);
    }
}

/// History panel, rendered from a slice of entries in the given order
#[derive(Debug)]
pub struct HistoryPanel<'a> {
    entries: &'a [HistoryEntry],
}

impl<'a> HistoryPanel<'a> {
    /// Creates a panel for `entries`
    #[must_use]
    pub fn new(entries: &'a [HistoryEntry]) -> Self {
        Self { entries }
    }
}

impl Widget for HistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", labels::HISTORY_TITLE))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        if self.entries.is_empty() {
            Paragraph::new(Span::styled(
                labels::EMPTY_HISTORY,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression(), Style::default().fg(Color::Gray)),
                    Span::raw(" "),
                    Span::styled(entry.result_label(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
