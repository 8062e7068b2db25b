//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use customer_client::LifecycleAction;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage, Operation, ResultsMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if let Some(msg) = handle_global_keys(&key) {
        return msg;
    }

    if app.focus.is_form() {
        handle_form_keys(key)
    } else {
        handle_results_keys(key, app)
    }
}

/// 全局快捷键（无论焦点在哪里）
fn handle_global_keys(key: &KeyEvent) -> Option<AppMessage> {
    let operations = [
        (DefaultKeymap::CREATE, Operation::Create),
        (DefaultKeymap::LIST, Operation::List),
        (DefaultKeymap::SEARCH, Operation::Search),
        (DefaultKeymap::RETRIEVE, Operation::Retrieve),
        (DefaultKeymap::UPDATE, Operation::Update),
        (DefaultKeymap::DELETE, Operation::Delete),
    ];

    if DefaultKeymap::FORCE_QUIT.matches(key) || DefaultKeymap::QUIT.matches(key) {
        return Some(AppMessage::Quit);
    }
    if DefaultKeymap::HELP.matches(key) || DefaultKeymap::HELP_F1.matches(key) {
        return Some(AppMessage::ShowHelp);
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(key) {
        return Some(AppMessage::ToggleFocus);
    }
    if DefaultKeymap::CLEAR.matches(key) {
        return Some(AppMessage::ClearForm);
    }

    operations
        .into_iter()
        .find(|(binding, _)| binding.matches(key))
        .map(|(_, operation)| AppMessage::Operation(operation))
}

/// 处理表单面板的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Down | KeyCode::Enter => FormMessage::NextField,
        KeyCode::Up | KeyCode::BackTab => FormMessage::PrevField,
        KeyCode::Right => FormMessage::NextOption,
        KeyCode::Left => FormMessage::PrevOption,
        KeyCode::Backspace => FormMessage::Backspace,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            FormMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

/// 处理结果面板的按键
fn handle_results_keys(key: KeyEvent, app: &App) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            return AppMessage::Results(ResultsMessage::SelectPrevious);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            return AppMessage::Results(ResultsMessage::SelectNext);
        }
        KeyCode::Home => return AppMessage::Results(ResultsMessage::SelectFirst),
        KeyCode::End => return AppMessage::Results(ResultsMessage::SelectLast),
        _ => {}
    }

    let Some(row) = app.results.selected_row() else {
        return AppMessage::Noop;
    };
    let controls = row.controls();

    if DefaultKeymap::VIEW_DETAILS.matches(&key) || key.code == KeyCode::Enter {
        return AppMessage::Operation(Operation::ViewDetails(row.id().clone()));
    }

    // 被禁用的按钮不产生消息
    let action = if DefaultKeymap::ACTIVATE.matches(&key) {
        LifecycleAction::Activate
    } else if DefaultKeymap::DEACTIVATE.matches(&key) {
        LifecycleAction::Deactivate
    } else {
        return AppMessage::Noop;
    };
    if controls.allows(action) {
        AppMessage::Operation(Operation::Transition(row.id().clone(), action))
    } else {
        AppMessage::Noop
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    let closes = DefaultKeymap::CLOSE.matches(&key)
        || DefaultKeymap::FORCE_QUIT.matches(&key)
        || matches!(key.code, KeyCode::Enter | KeyCode::Char('q'));
    if closes {
        AppMessage::Modal(ModalMessage::Close)
    } else {
        AppMessage::Noop
    }
}
