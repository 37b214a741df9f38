//! 액션 시스템
//!
//! 키 바인딩과 커맨드바 항목이 이 모듈의 레지스트리를 참조합니다.

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

use crate::ui::CommandItem;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Layout
    ToggleSidebar,
    MirrorLayout,
    // Record operations (진행 -> 결과 메시지)
    LoadReport,
    UpdateRecord,
    DeleteRecord,
    ResetPassword,
    // System
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 커맨드바 항목 (priority 순으로 표시)
pub static COMMAND_BAR_ENTRIES: &[CommandBarEntry] = &[
    CommandBarEntry {
        key: "b",
        label: "Panel",
        priority: 10,
    },
    CommandBarEntry {
        key: "m",
        label: "Mirror",
        priority: 11,
    },
    CommandBarEntry {
        key: "r",
        label: "Report",
        priority: 20,
    },
    CommandBarEntry {
        key: "u",
        label: "Update",
        priority: 21,
    },
    CommandBarEntry {
        key: "d",
        label: "Delete",
        priority: 22,
    },
    CommandBarEntry {
        key: "x",
        label: "Reset",
        priority: 23,
    },
    CommandBarEntry {
        key: "q",
        label: "Quit",
        priority: 99,
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 패널
        KeyBinding {
            code: KeyCode::Char('b'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleSidebar,
        },
        KeyBinding {
            code: KeyCode::Char('b'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::ToggleSidebar,
        },
        KeyBinding {
            code: KeyCode::Char('m'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MirrorLayout,
        },
        // 레코드 작업
        KeyBinding {
            code: KeyCode::Char('r'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::LoadReport,
        },
        KeyBinding {
            code: KeyCode::Char('u'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::UpdateRecord,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::DeleteRecord,
        },
        KeyBinding {
            code: KeyCode::Char('x'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ResetPassword,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && binding
                    .modifiers
                    .map_or(true, |required| modifiers == required)
        })
        .map(|binding| binding.action)
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = COMMAND_BAR_ENTRIES.iter().collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}
