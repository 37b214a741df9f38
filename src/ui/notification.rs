// Notification gate - 데모 모드 메시지 필터
//
// 데모 모드에서는 변경 작업(삭제/수정/초기화/활성화)을 가리키는 진행 메시지를 숨긴다.
// 성공/오류/경고 같은 결과 메시지는 항상 전달한다.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::models::OutboundMessage;

/// 기본 제한 어휘 (대소문자 구분 부분 문자열)
///
/// "Deleting", "Deleted", "deletion" 이 모두 걸리도록 어간만 둔다.
pub const DEFAULT_RESTRICTED_WORDS: &[&str] = &[
    "Delet", "delet", "Updat", "updat", "Reset", "reset", "Activat", "activat", "Deactivat",
    "deactivat",
];

/// 데모 모드 플래그 읽기 핸들
///
/// 호스트가 소유하고, 게이트는 호출 시점의 값만 읽는다.
#[derive(Debug, Clone, Default)]
pub struct DemoModeFlag(Rc<Cell<bool>>);

impl DemoModeFlag {
    pub fn new(active: bool) -> Self {
        Self(Rc::new(Cell::new(active)))
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    #[cfg(test)]
    pub fn set(&self, active: bool) {
        self.0.set(active);
    }
}

/// 변경 작업을 나타내는 어휘 목록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictedVocabulary {
    words: Vec<String>,
}

impl Default for RestrictedVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_RESTRICTED_WORDS.iter().copied())
    }
}

impl RestrictedVocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(Into::into)
                .filter(|word: &String| !word.is_empty())
                .collect(),
        }
    }

    /// 처음 걸린 어휘
    pub fn find_match(&self, text: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|word| text.contains(word.as_str()))
            .map(String::as_str)
    }
}

/// 게이트 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Forwarded,
    Suppressed,
}

/// 알림 게이트
#[derive(Debug, Clone)]
pub struct NotificationGate {
    demo_mode: DemoModeFlag,
    vocabulary: RestrictedVocabulary,
}

impl NotificationGate {
    pub fn new(demo_mode: DemoModeFlag, vocabulary: RestrictedVocabulary) -> Self {
        Self {
            demo_mode,
            vocabulary,
        }
    }

    /// 전달 여부만 판정 (부수 효과 없음)
    pub fn decide(&self, message: &OutboundMessage) -> GateDecision {
        if !self.demo_mode.is_active() || !message.kind.is_progress() {
            return GateDecision::Forwarded;
        }
        match self.vocabulary.find_match(&message.text) {
            Some(word) => {
                debug!(kind = message.kind.as_str(), text = %message.text, word, "message suppressed in demo mode");
                GateDecision::Suppressed
            }
            None => GateDecision::Forwarded,
        }
    }

    /// 판정 후 전달. 숨긴 메시지는 `send`를 호출하지 않는다
    pub fn notify<F>(&self, message: &OutboundMessage, send: F) -> GateDecision
    where
        F: FnOnce(&OutboundMessage),
    {
        let decision = self.decide(message);
        if decision == GateDecision::Forwarded {
            send(message);
        }
        decision
    }
}
