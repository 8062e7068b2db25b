//! 表单消息处理

use crate::message::FormMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: FormMessage) {
    let form = &mut app.form;
    match msg {
        FormMessage::NextField => form.focus_next(),
        FormMessage::PrevField => form.focus_prev(),
        FormMessage::Input(c) => form.input(c),
        FormMessage::Backspace => form.backspace(),
        FormMessage::NextOption => form.cycle_next(),
        FormMessage::PrevOption => form.cycle_prev(),
    }
}
