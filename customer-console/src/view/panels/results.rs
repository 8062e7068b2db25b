//! 结果表格面板

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::model::domain::active_literal;
use crate::model::{App, ResultRow, RowControls};
use crate::view::theme::{Styles, colors};

use super::truncate;

/// 渲染结果表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_results();
    let block = Block::default()
        .title(format!(" Results ({}) ", app.results.len()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if app.results.is_empty() {
        render_empty(frame, block.inner(area));
        frame.render_widget(block, area);
        return;
    }

    let c = colors();
    let header = Row::new(["ID", "Username", "Name", "Email", "Gender", "Active", "Actions"])
        .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.results.rows.iter().map(render_row).collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(10),
        Constraint::Min(14),
        Constraint::Min(18),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(30),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(if focused {
            Styles::selected()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        });

    let mut state = TableState::default().with_selected(Some(app.results.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let muted = Style::default().fg(colors().muted);
    let content = vec![
        Line::from(""),
        Line::styled("  No customers to show.", muted),
        Line::from(""),
        Line::styled("  Press Alt+l to list all, or Alt+s to search by the form.", muted),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_row(row: &ResultRow) -> Row<'static> {
    let customer = &row.customer;
    let name = format!("{} {}", customer.first_name, customer.last_name);

    Row::new(vec![
        Cell::from(customer.id.to_string()),
        Cell::from(truncate(&customer.username, 20)),
        Cell::from(truncate(name.trim(), 24)),
        Cell::from(truncate(&customer.email, 28)),
        Cell::from(customer.gender.clone()),
        Cell::from(active_literal(customer.active)),
        Cell::from(controls_line(row.controls())),
    ])
}

/// 行按钮：被禁用的按钮以删除线显示
fn controls_line(controls: RowControls) -> Line<'static> {
    let button = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, Styles::hint_key())
        } else {
            Span::styled(label, Styles::disabled())
        }
    };

    Line::from(vec![
        button("[v]iew", controls.view_details),
        Span::raw(" "),
        button("[a]ctivate", controls.activate),
        Span::raw(" "),
        button("[d]eactivate", controls.deactivate),
    ])
}

#[cfg(test)]
mod tests {
    use customer_client::Customer;
    use ratatui::{Terminal, backend::TestBackend};

    use crate::model::App;
    use crate::view;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 16)).unwrap();
        terminal.draw(|frame| view::render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn customer(id: u64, username: &str, active: bool) -> Customer {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "username": username,
            "active": active
        }))
        .unwrap()
    }

    #[test]
    fn rows_render_active_flag_in_title_case() {
        let mut app = App::new();
        app.results.set_records(vec![
            customer(1, "alice", true),
            customer(2, "bob", false),
        ]);

        let text = screen(&app);
        let alice = text.lines().find(|l| l.contains("alice")).unwrap();
        let bob = text.lines().find(|l| l.contains("bob")).unwrap();
        assert!(alice.contains("True"));
        assert!(bob.contains("False"));
        assert!(alice.contains("[d]eactivate"));
    }

    #[test]
    fn empty_results_show_hint() {
        let app = App::new();
        assert!(screen(&app).contains("No customers to show."));
    }

    #[test]
    fn password_is_masked() {
        let mut app = App::new();
        app.form.password = "hunter2".to_string();
        let text = screen(&app);
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn details_modal_masks_password() {
        let mut app = App::new();
        let mut record = customer(3, "carol", true);
        record.password = "s3cret".to_string();
        app.modal.show_details(record);

        let text = screen(&app);
        assert!(text.contains("Customer Details"));
        assert!(!text.contains("s3cret"));
        assert!(text.contains("••••••"));
    }
}
