//! 弹窗消息处理

use crate::message::ModalMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
    }
}
