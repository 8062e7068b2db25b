//! 消息通道：状态栏上唯一的一行反馈文本

/// 消息类别（决定显示颜色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// 后写覆盖先写
#[derive(Debug, Default)]
pub struct MessageChannel {
    current: Option<StatusMessage>,
}

impl MessageChannel {
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set(MessageKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set(MessageKind::Error, text.into());
    }

    fn set(&mut self, kind: MessageKind, text: String) {
        self.current = Some(StatusMessage { kind, text });
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut channel = MessageChannel::default();
        channel.success("first");
        channel.error("second");
        let msg = channel.current().unwrap();
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, "second");

        channel.clear();
        assert_eq!(channel.text(), None);
    }
}
