//! Rendering of the wizard
//!
//! Layout, top to bottom: step progress, the rows of the current step
//! (label, value, inline error), the banner and a key help footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::form::FieldValue;
use crate::wizard::{STEPS, State};

use super::fields::{FieldKind, FieldSpec, FormItem, items_for_step};
use super::input::ViewState;
use super::theme::Theme;

const LABEL_WIDTH: usize = 32;

/// Options passed down from the configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    pub show_step_ids: bool,
}

pub fn render(frame: &mut Frame, state: &State, view: &ViewState, theme: &Theme, options: ViewOptions) {
    let [header, body, banner, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(if state.banner.is_some() { 3 } else { 0 }),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, state, theme, options, header);
    if state.is_complete() {
        render_complete(frame, state, theme, body);
    } else {
        render_body(frame, state, view, theme, body);
    }
    render_banner(frame, state, theme, banner);
    render_footer(frame, state, theme, footer);
}

fn render_header(frame: &mut Frame, state: &State, theme: &Theme, options: ViewOptions, area: Rect) {
    let step = state.step();
    let mut title = format!(" Step {} of {} · {} ", state.current_step + 1, STEPS.len(), step.name);
    if options.show_step_ids {
        title.push_str(&format!("[{}] ", step.id));
    }

    let mut spans = Vec::new();
    for (index, descriptor) in STEPS.iter().enumerate() {
        let style = if index == state.current_step {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else if index < state.current_step {
            Style::default().fg(theme.accent_success)
        } else {
            Style::default().fg(theme.text_tertiary)
        };
        if index > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(theme.text_tertiary)));
        }
        spans.push(Span::styled(descriptor.name, style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_primary))
        .title(Span::styled(title, Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD)));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Lines for the step body plus where the focused row and text cursor are
pub(crate) struct Body {
    pub lines: Vec<Line<'static>>,
    pub focused_lines: (usize, usize),
    /// (line, column) of the text cursor
    pub cursor: Option<(usize, u16)>,
}

pub(crate) fn build_body(state: &State, view: &ViewState, theme: &Theme) -> Body {
    let mut lines = Vec::new();
    let mut focused_lines = (0, 0);
    let mut cursor = None;

    for (index, item) in items_for_step(state).iter().enumerate() {
        let focused = index == view.focused;
        let start = lines.len();
        let marker = if focused {
            Span::styled("› ", Style::default().fg(theme.accent_primary))
        } else {
            Span::raw("  ")
        };

        match item {
            FormItem::Heading(text) => {
                if start > 0 {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(theme.accent_info).add_modifier(Modifier::BOLD),
                )));
            }
            FormItem::SameAddress => {
                let mark = if state.same_address { "x" } else { " " };
                lines.push(Line::from(vec![
                    marker,
                    Span::styled(
                        format!("[{}] Correspondence address same as first address", mark),
                        row_style(theme, focused, false),
                    ),
                ]));
            }
            FormItem::Action { label, .. } => {
                lines.push(Line::from(vec![
                    marker,
                    Span::styled(format!("[ {} ]", label), row_style(theme, focused, false)),
                ]));
            }
            FormItem::Field(spec) => {
                let (value_spans, text_cursor) = field_spans(state, view, theme, spec, focused);
                let mut spans = vec![
                    marker,
                    Span::styled(
                        format!("{:<width$}", spec.label, width = LABEL_WIDTH),
                        label_style(theme, focused, spec.disabled),
                    ),
                ];
                spans.extend(value_spans);
                if let Some(column) = text_cursor {
                    cursor = Some((lines.len(), (LABEL_WIDTH + 2) as u16 + column));
                }
                lines.push(Line::from(spans));

                if let Some(message) = state.error_for(&spec.path) {
                    lines.push(Line::from(Span::styled(
                        format!("{:indent$}{}", "", message, indent = LABEL_WIDTH + 2),
                        Style::default().fg(theme.accent_error),
                    )));
                }
            }
        }

        if focused {
            focused_lines = (start, lines.len());
        }
    }

    Body {
        lines,
        focused_lines,
        cursor,
    }
}

fn field_spans(
    state: &State,
    view: &ViewState,
    theme: &Theme,
    spec: &FieldSpec,
    focused: bool,
) -> (Vec<Span<'static>>, Option<u16>) {
    let value = state.record.field(&spec.path).unwrap_or(FieldValue::Text(String::new()));
    let style = value_style(theme, focused, spec.disabled);
    let placeholder = Style::default().fg(theme.text_tertiary);

    match (spec.kind, value) {
        (kind, FieldValue::Text(text)) if kind.is_textual() => {
            let cursor = (focused && !spec.disabled).then(|| view.text.cursor_column(&text));
            let span = match kind.placeholder() {
                Some(hint) if text.is_empty() => Span::styled(hint.to_string(), placeholder),
                _ => Span::styled(text, style),
            };
            (vec![span], cursor)
        }
        (FieldKind::Select(_), FieldValue::Text(text)) => {
            let shown = if text.is_empty() { "select".to_string() } else { text };
            (vec![Span::styled(format!("‹ {} ›", shown), style)], None)
        }
        (FieldKind::Checkbox, FieldValue::Flag(checked)) => {
            (vec![Span::styled(if checked { "[x]" } else { "[ ]" }, style)], None)
        }
        (FieldKind::MultiChoice(options), FieldValue::Choices(selected)) => {
            let mut spans = Vec::new();
            for (i, option) in options.iter().enumerate() {
                let mark = if selected.iter().any(|s| s == option) { "x" } else { " " };
                let option_style = if focused && i == view.option_cursor {
                    style.add_modifier(Modifier::REVERSED)
                } else {
                    style
                };
                spans.push(Span::styled(format!("[{}] {}", mark, option), option_style));
                spans.push(Span::raw(" "));
            }
            (spans, None)
        }
        (_, other) => (vec![Span::styled(format!("{:?}", other), style)], None),
    }
}

fn row_style(theme: &Theme, focused: bool, disabled: bool) -> Style {
    if disabled {
        Style::default().fg(theme.text_tertiary)
    } else if focused {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_primary)
    }
}

fn label_style(theme: &Theme, focused: bool, disabled: bool) -> Style {
    if disabled {
        Style::default().fg(theme.text_tertiary)
    } else if focused {
        Style::default().fg(theme.accent_primary)
    } else {
        Style::default().fg(theme.text_secondary)
    }
}

fn value_style(theme: &Theme, focused: bool, disabled: bool) -> Style {
    row_style(theme, focused, disabled).remove_modifier(Modifier::BOLD)
}

/// First line to show so the focused row is on screen
fn scroll_offset(focused: (usize, usize), height: usize) -> usize {
    let (_, end) = focused;
    end.saturating_sub(height)
}

fn render_body(frame: &mut Frame, state: &State, view: &ViewState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = build_body(state, view, theme);
    if body.lines.is_empty() {
        return;
    }
    let offset = scroll_offset(body.focused_lines, inner.height as usize);
    frame.render_widget(Paragraph::new(body.lines).scroll((offset as u16, 0)), inner);

    if let Some((line, column)) = body.cursor {
        if line >= offset && line < offset + inner.height as usize {
            let x = inner.x.saturating_add(column).min(inner.right().saturating_sub(1));
            let y = inner.y + (line - offset) as u16;
            frame.set_cursor_position((x, y));
        }
    }
}

fn render_complete(frame: &mut Frame, state: &State, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Thank you! Your onboarding details have been submitted.",
            Style::default().fg(theme.accent_success).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Records submitted this session: {}", state.submitted_count),
            Style::default().fg(theme.text_secondary),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_secondary));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_banner(frame: &mut Frame, state: &State, theme: &Theme, area: Rect) {
    let Some(banner) = &state.banner else {
        return;
    };
    let color = if banner.is_error() { theme.accent_error } else { theme.accent_success };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let text = Paragraph::new(Span::styled(banner.text().to_string(), Style::default().fg(color)))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, area);
}

fn render_footer(frame: &mut Frame, state: &State, theme: &Theme, area: Rect) {
    let help = if state.submitting {
        "Submitting..."
    } else if state.is_complete() {
        "Enter/q quit · Esc back"
    } else {
        "Tab/↑↓ move · ←→ change · Space toggle · Enter next · Esc back · Ctrl+C quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(theme.text_tertiary))),
        area,
    );
}
