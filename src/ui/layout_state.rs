// Layout state controller - 사이드 패널 펼침 상태
//
// 영속 저장소에서 초기값을 읽고, 변경 시 저장소에 먼저 쓴 다음 구독자에게 알린다.
// 좁은 뷰포트에서는 영속 상태 대신 임시 오버레이 상태를 토글한다.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::system::{PreferenceStore, SIDEBAR_STATE_KEY};
use crate::ui::observer::{Subscribers, Subscription};

/// 저장된 문자열 해석. 정확히 `"false"`일 때만 접힘
pub fn decode_expanded(raw: Option<&str>) -> bool {
    !matches!(raw, Some("false"))
}

pub fn encode_expanded(expanded: bool) -> &'static str {
    if expanded {
        "true"
    } else {
        "false"
    }
}

/// 패널 상태 스냅샷
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// 영속 펼침 상태
    pub expanded: bool,
    /// compact 모드 오버레이 열림 여부 (저장하지 않음)
    pub overlay_open: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            expanded: true,
            overlay_open: false,
        }
    }
}

impl PanelState {
    pub fn label(&self) -> &'static str {
        if self.expanded {
            "expanded"
        } else {
            "collapsed"
        }
    }
}

/// 패널 상태 컨트롤러
///
/// 펼침 상태의 유일한 소유자. 외부에서는 `set_expanded`/`toggle`로만 바꾼다.
pub struct LayoutStateController {
    store: Rc<dyn PreferenceStore>,
    expanded: Cell<bool>,
    overlay_open: Cell<bool>,
    subscribers: Subscribers<PanelState>,
}

impl LayoutStateController {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            expanded: Cell::new(true),
            overlay_open: Cell::new(false),
            subscribers: Subscribers::new(),
        }
    }

    /// 저장소에서 펼침 상태를 읽어 메모리 상태를 맞춘다
    pub fn initialize(&self) -> bool {
        let raw = self.store.read(SIDEBAR_STATE_KEY);
        let expanded = decode_expanded(raw.as_deref());
        self.expanded.set(expanded);
        debug!(stored = ?raw, expanded, "panel state initialized");
        expanded
    }

    pub fn expanded(&self) -> bool {
        self.expanded.get()
    }

    #[cfg(test)]
    pub fn overlay_open(&self) -> bool {
        self.overlay_open.get()
    }

    pub fn snapshot(&self) -> PanelState {
        PanelState {
            expanded: self.expanded.get(),
            overlay_open: self.overlay_open.get(),
        }
    }

    /// 펼침 상태 변경 (메모리 -> 저장소 -> 브로드캐스트, 동기)
    pub fn set_expanded(&self, expanded: bool) {
        self.expanded.set(expanded);
        self.store.write(SIDEBAR_STATE_KEY, encode_expanded(expanded));
        info!(expanded, "panel state changed");
        self.subscribers.broadcast(self.snapshot());
    }

    /// 오버레이 열림 상태 변경
    pub fn set_overlay_open(&self, open: bool) {
        if self.overlay_open.replace(open) == open {
            return;
        }
        debug!(open, "panel overlay toggled");
        self.subscribers.broadcast(self.snapshot());
    }

    /// 패널 토글. compact 모드에서는 오버레이만 열고 닫는다
    pub fn toggle(&self, is_compact: bool) {
        if is_compact {
            self.set_overlay_open(!self.overlay_open.get());
        } else {
            self.set_expanded(!self.expanded.get());
        }
    }

    /// 뷰포트 분류 변경 반영 (regular 로 돌아오면 오버레이 닫기)
    pub fn on_viewport_change(&self, is_compact: bool) {
        if !is_compact {
            self.set_overlay_open(false);
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(PanelState) + 'static,
    {
        self.subscribers.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{MemoryStore, UnavailableStore};
    use std::cell::RefCell;

    fn controller_with(store: Rc<dyn PreferenceStore>) -> LayoutStateController {
        let controller = LayoutStateController::new(store);
        controller.initialize();
        controller
    }

    #[test]
    fn test_default_without_stored_value() {
        let store: Rc<dyn PreferenceStore> = Rc::new(MemoryStore::new());
        let controller = LayoutStateController::new(store);
        assert!(controller.initialize());
    }

    #[test]
    fn test_decode_expanded() {
        assert!(decode_expanded(None));
        assert!(decode_expanded(Some("true")));
        assert!(decode_expanded(Some("False")));
        assert!(decode_expanded(Some("0")));
        assert!(decode_expanded(Some("")));
        assert!(!decode_expanded(Some("false")));
    }

    #[test]
    fn test_round_trip_through_store() {
        let store: Rc<dyn PreferenceStore> = Rc::new(MemoryStore::new());
        for value in [false, true, false] {
            controller_with(Rc::clone(&store)).set_expanded(value);

            // 재시작 시뮬레이션
            let reloaded = LayoutStateController::new(Rc::clone(&store));
            assert_eq!(reloaded.initialize(), value);
        }
    }

    #[test]
    fn test_write_happens_before_broadcast() {
        let store = Rc::new(MemoryStore::new());
        let controller = controller_with(store.clone());
        let observed = Rc::new(RefCell::new(Vec::new()));

        let reader = Rc::clone(&store);
        let sink = Rc::clone(&observed);
        let _sub = controller.subscribe(move |state| {
            sink.borrow_mut()
                .push((state.expanded, reader.read(SIDEBAR_STATE_KEY)));
        });

        controller.set_expanded(false);

        assert_eq!(
            *observed.borrow(),
            vec![(false, Some("false".to_string()))]
        );
        assert!(!controller.expanded());
    }

    #[test]
    fn test_unpersisted_toggle_still_applies() {
        let controller = controller_with(Rc::new(UnavailableStore));
        controller.set_expanded(false);
        assert!(!controller.expanded());
        assert!(controller.initialize());
    }

    #[test]
    fn test_toggle_regular_flips_persisted_state() {
        let store = Rc::new(MemoryStore::new());
        let controller = controller_with(store.clone());

        controller.toggle(false);

        assert!(!controller.expanded());
        assert_eq!(store.read(SIDEBAR_STATE_KEY).as_deref(), Some("false"));
        assert!(!controller.overlay_open());
    }

    #[test]
    fn test_toggle_compact_only_touches_overlay() {
        let store = Rc::new(MemoryStore::new());
        let controller = controller_with(store.clone());

        controller.toggle(true);

        assert!(controller.overlay_open());
        assert!(controller.expanded());
        assert_eq!(store.read(SIDEBAR_STATE_KEY), None);

        // regular 복귀 시 오버레이 자동 닫힘
        controller.on_viewport_change(false);
        assert!(!controller.overlay_open());
    }

    #[test]
    fn test_overlay_broadcast_only_on_change() {
        let controller = controller_with(Rc::new(MemoryStore::new()));
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let _sub = controller.subscribe(move |_| counter.set(counter.get() + 1));

        controller.set_overlay_open(false);
        controller.set_overlay_open(true);
        controller.set_overlay_open(true);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_panel_state_label() {
        assert_eq!(PanelState::default().label(), "expanded");
        let collapsed = PanelState {
            expanded: false,
            overlay_open: false,
        };
        assert_eq!(collapsed.label(), "collapsed");
    }
}
