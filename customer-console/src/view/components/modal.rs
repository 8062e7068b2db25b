//! 弹窗组件

use customer_client::Customer;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::domain::active_literal;
use crate::model::{App, Modal};
use crate::view::panels::mask;
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::CustomerDetails { customer } => render_details(frame, customer),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并绘制弹窗边框，返回内容区域
fn frame_modal(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let c = colors();
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.modal_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染客户详情（只读）
fn render_details(frame: &mut Frame, customer: &Customer) {
    let c = colors();
    let inner = frame_modal(frame, "Customer Details", 60, 15);

    let label = Style::default().fg(c.muted);
    let value = Style::default().fg(c.fg);
    let field = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<12}"), label),
            Span::styled(text, value),
        ])
    };

    let lines = vec![
        field("ID", customer.id.to_string()),
        field("Username", customer.username.clone()),
        field("Password", mask(&customer.password)),
        field("First Name", customer.first_name.clone()),
        field("Last Name", customer.last_name.clone()),
        field("Gender", customer.gender.clone()),
        field("Address", customer.address.clone()),
        field("Email", customer.email.clone()),
        field("Active", active_literal(customer.active).to_string()),
        Line::from(""),
        Line::styled("Press Esc to close", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染帮助
fn render_help(frame: &mut Frame) {
    let c = colors();
    let inner = frame_modal(frame, "Help", 56, 24);

    let heading = Style::default()
        .fg(c.highlight)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(c.key);
    let desc = Style::default().fg(c.fg);
    let entry = |k: &'static str, d: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<10}"), key),
            Span::styled(d, desc),
        ])
    };

    let lines = vec![
        Line::styled("Operations", heading),
        entry("Alt+c", "Create from form"),
        entry("Alt+l", "List all customers"),
        entry("Alt+s", "Search by filled fields"),
        entry("Alt+r", "Retrieve by ID"),
        entry("Alt+u", "Update by ID"),
        entry("Alt+d", "Delete by ID"),
        entry("Alt+x", "Clear form"),
        Line::from(""),
        Line::styled("Form", heading),
        entry("↑↓", "Move between fields"),
        entry("←→", "Change gender / active"),
        Line::from(""),
        Line::styled("Results", heading),
        entry("↑↓/jk", "Select row"),
        entry("v/Enter", "View details"),
        entry("a / d", "Activate / Deactivate"),
        Line::from(""),
        entry("Tab", "Switch panel"),
        entry("Alt+q", "Quit"),
        Line::styled("Press Esc to close the help", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
