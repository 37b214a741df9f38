// Outbound message model - 토스트/상태 메시지

/// 메시지 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    /// 정보성 알림
    Info,
    /// 진행 중 표시 (로딩)
    Progress,
}

impl MessageKind {
    /// 정보/진행 계열 여부 (데모 모드 게이트 대상)
    pub fn is_progress(self) -> bool {
        matches!(self, MessageKind::Info | MessageKind::Progress)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Warning => "warning",
            MessageKind::Info => "info",
            MessageKind::Progress => "progress",
        }
    }
}

/// 외부로 내보내는 메시지
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl OutboundMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, text)
    }

    pub fn progress(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Progress, text)
    }
}
