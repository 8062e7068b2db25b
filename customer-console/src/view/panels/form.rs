//! 客户表单面板

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{App, FormField};
use crate::view::theme::{Styles, colors};

use super::{mask, truncate};

const LABEL_WIDTH: usize = 12;

/// 渲染客户表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_form();
    let block = Block::default()
        .title(" Customer ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_width = usize::from(inner.width).saturating_sub(LABEL_WIDTH + 5);
    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| field_line(app, *field, focused, value_width))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  ↑↓ field  ←→ option  Alt+x clear",
        Style::default().fg(colors().muted),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(app: &App, field: FormField, panel_focused: bool, width: usize) -> Line<'static> {
    let c = colors();
    let is_current = panel_focused && app.form.focused == field;
    let raw = app.form.value(field);

    let shown = if field.is_secret() {
        mask(raw)
    } else if field.is_selector() {
        let option = if raw.is_empty() { "(any)" } else { raw };
        format!("◀ {option} ▶")
    } else {
        raw.to_string()
    };
    let mut shown = truncate(&shown, width);
    if is_current && !field.is_selector() {
        shown.push('▏');
    }

    let marker = if is_current { "▸ " } else { "  " };
    let label_style = if is_current {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_current {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
        Span::raw(" "),
        Span::styled(shown, value_style),
    ])
}
