//! 底部状态栏组件
//!
//! 左侧是消息通道，右侧是当前焦点可用的快捷键。

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel, MessageKind};
use crate::view::theme::{Styles, colors};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    frame.render_widget(Paragraph::new(message_line(app)), columns[0]);
    frame.render_widget(
        Paragraph::new(hints_line(app)).alignment(Alignment::Right),
        columns[1],
    );
}

fn message_line(app: &App) -> Line<'static> {
    let c = colors();
    let Some(msg) = app.messages.current() else {
        return Line::from("");
    };
    let color = match msg.kind {
        MessageKind::Success => c.success,
        MessageKind::Error => c.error,
    };
    Line::from(Span::styled(
        format!(" {}", msg.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn hints_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors().border)));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }
    Line::from(spans)
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Esc", "Close")];
    }

    let mut hints = vec![("Tab", "Switch Panels")];
    match app.focus {
        FocusPanel::Form => {
            hints.push(("Alt+c/l/s", "Create/List/Search"));
            hints.push(("Alt+r/u/d", "Retrieve/Update/Delete"));
        }
        FocusPanel::Results => {
            hints.push(("↑↓", "Select"));
            hints.push(("v/a/d", "View/Activate/Deactivate"));
        }
    }
    hints.push(("Alt+h", "Help"));
    hints.push(("Alt+q", "Quit"));
    hints
}
