//! 结果表格消息处理

use crate::message::ResultsMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ResultsMessage) {
    let results = &mut app.results;
    match msg {
        ResultsMessage::SelectPrevious => results.select_previous(),
        ResultsMessage::SelectNext => results.select_next(),
        ResultsMessage::SelectFirst => results.select_first(),
        ResultsMessage::SelectLast => results.select_last(),
    }
}
