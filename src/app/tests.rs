use super::*;
use crate::models::{MessageKind, Orientation};
use crate::system::{FixedViewport, MemoryStore, SIDEBAR_STATE_KEY};
use crate::ui::GateDecision;
use tempfile::TempDir;

fn make_test_app_with(
    config: AppConfig,
    store: Rc<dyn PreferenceStore>,
    width: Option<u32>,
) -> App {
    App::with_parts(config, store, Box::new(FixedViewport(width)))
}

fn make_test_app() -> App {
    make_test_app_with(AppConfig::default(), Rc::new(MemoryStore::new()), Some(1280))
}

fn current_text(app: &App) -> Option<&str> {
    app.toast.current().map(|m| m.text.as_str())
}

fn demo_config() -> AppConfig {
    AppConfig {
        demo_mode: true,
        ..AppConfig::default()
    }
}

#[test]
fn test_end_to_end_session() {
    let store: Rc<MemoryStore> = Rc::new(MemoryStore::new());

    // 1) 저장된 값 없이 시작하면 펼침
    let app = make_test_app_with(AppConfig::default(), store.clone(), Some(500));
    assert!(app.layout_state.expanded());

    // 2) 너비 500 은 compact
    assert!(app.viewport.is_compact());

    // 3) 접힘 저장 후 재시작
    app.layout_state.set_expanded(false);
    drop(app);
    let app = make_test_app_with(AppConfig::default(), store.clone(), Some(500));
    assert!(!app.layout_state.expanded());
    assert_eq!(store.read(SIDEBAR_STATE_KEY).as_deref(), Some("false"));

    // 4) 데모 모드에서는 비밀번호 초기화 진행 메시지가 숨겨짐
    let mut demo = make_test_app_with(demo_config(), store, Some(500));
    let decision = demo.notify(OutboundMessage::progress("Resetting password"));
    assert_eq!(decision, GateDecision::Suppressed);
    assert!(demo.toast.current().is_none());
    assert!(demo.toast.recent().is_empty());
}

#[test]
fn test_toggle_in_regular_persists() {
    let store: Rc<MemoryStore> = Rc::new(MemoryStore::new());
    let mut app = make_test_app_with(AppConfig::default(), store.clone(), Some(1280));

    app.execute_action(Action::ToggleSidebar);

    assert!(!app.layout_state.expanded());
    assert!(!app.layout_state.overlay_open());
    assert_eq!(store.read(SIDEBAR_STATE_KEY).as_deref(), Some("false"));
    // 컨트롤러 브로드캐스트 -> 게이트 -> 토스트
    assert_eq!(current_text(&app), Some("Panel collapsed"));

    app.execute_action(Action::ToggleSidebar);
    assert_eq!(current_text(&app), Some("Panel expanded"));
}

#[test]
fn test_panel_change_outside_actions_reaches_toast_on_next_pump() {
    let mut app = make_test_app();
    app.layout_state.set_expanded(false);
    assert!(app.toast.current().is_none());

    app.handle_resize(200);
    assert_eq!(current_text(&app), Some("Panel collapsed"));
}

#[test]
fn test_toggle_in_compact_opens_overlay_only() {
    let store: Rc<MemoryStore> = Rc::new(MemoryStore::new());
    let mut app = make_test_app_with(AppConfig::default(), store.clone(), Some(400));

    app.execute_action(Action::ToggleSidebar);

    assert!(app.layout_state.overlay_open());
    assert!(app.layout_state.expanded());
    assert_eq!(store.read(SIDEBAR_STATE_KEY), None);
    assert_eq!(current_text(&app), Some("Panel overlay opened"));
}

#[test]
fn test_returning_to_regular_closes_overlay() {
    let mut app = make_test_app();
    app.handle_resize(60); // 480
    assert!(app.viewport.is_compact());
    app.execute_action(Action::ToggleSidebar);
    assert!(app.layout_state.overlay_open());

    app.handle_resize(120); // 960
    assert!(!app.viewport.is_compact());
    assert!(!app.layout_state.overlay_open());
    assert_eq!(current_text(&app), Some("Panel overlay closed"));
}

#[test]
fn test_resize_uses_cell_width() {
    let mut app = make_test_app();
    app.handle_resize(96);
    assert!(!app.viewport.is_compact());
    assert_eq!(app.viewport.width(), Some(768));

    app.handle_resize(95);
    assert!(app.viewport.is_compact());
}

#[test]
fn test_headless_viewport_is_regular() {
    let app = make_test_app_with(AppConfig::default(), Rc::new(MemoryStore::new()), None);
    assert!(!app.viewport.is_compact());
    assert_eq!(app.viewport.width(), None);
}

#[test]
fn test_mirror_layout() {
    let mut app = make_test_app();
    assert_eq!(app.layout_configuration().unwrap().position, Orientation::Left);

    app.execute_action(Action::MirrorLayout);
    let inputs = app.layout_inputs().unwrap();
    assert_eq!(inputs.position, Orientation::Right);
    // 구성 구독에서 나온 알림
    assert_eq!(app.toast.current().map(|m| m.kind), Some(MessageKind::Info));
    assert_eq!(current_text(&app), Some("Panel moved right"));

    app.execute_action(Action::MirrorLayout);
    assert_eq!(app.layout_configuration().unwrap().position, Orientation::Left);
    assert_eq!(current_text(&app), Some("Panel moved left"));
}

#[test]
fn test_nested_scope_change_is_not_announced_twice() {
    let mut app = make_test_app();
    {
        let _inner = app.layout_context.provide(Orientation::Left);
    }
    app.execute_action(Action::LoadReport);

    assert!(app
        .toast
        .recent()
        .iter()
        .all(|m| !m.text.starts_with("Panel moved")));
}

#[test]
fn test_configured_position_seeds_root_scope() {
    let config = AppConfig {
        sidebar_position: Orientation::Right,
        ..AppConfig::default()
    };
    let app = make_test_app_with(config, Rc::new(MemoryStore::new()), Some(1280));
    assert_eq!(app.layout_configuration().unwrap().effective_position, Orientation::Right);
}

#[test]
fn test_closed_root_scope_fails_fast() {
    let mut app = make_test_app();
    app.root_scope.close();

    assert_eq!(app.layout_configuration(), Err(ScopeError::NoProvider));
    assert_eq!(app.layout_inputs(), Err(ScopeError::NoProvider));

    app.execute_action(Action::MirrorLayout);
    let kinds: Vec<MessageKind> = app.toast.recent().iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MessageKind::Error, MessageKind::Warning]);
    assert_eq!(current_text(&app), Some("Layout scope closed"));
}

#[test]
fn test_record_operation_without_demo_mode() {
    let mut app = make_test_app();
    app.execute_action(Action::DeleteRecord);

    let recent: Vec<&str> = app.toast.recent().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(recent, vec!["Deleting record", "Record removed"]);
    assert_eq!(app.toast.current().map(|m| m.kind), Some(MessageKind::Success));
}

#[test]
fn test_record_operations_in_demo_mode() {
    let mut app = make_test_app_with(demo_config(), Rc::new(MemoryStore::new()), Some(1280));

    app.execute_action(Action::LoadReport);
    app.execute_action(Action::UpdateRecord);
    app.execute_action(Action::ResetPassword);

    let recent: Vec<&str> = app.toast.recent().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        recent,
        vec!["Loading report", "Report loaded", "Record saved", "Password sent"]
    );
}

#[test]
fn test_toast_expiry() {
    let mut slot = ToastSlot::default();
    let start = Instant::now();
    slot.show_at(OutboundMessage::success("Saved"), start);

    slot.clear_expired(start + Duration::from_secs(2));
    assert!(slot.current().is_some());

    slot.clear_expired(start + ToastSlot::TTL);
    assert!(slot.current().is_none());
    assert_eq!(slot.recent().len(), 1);
}

#[test]
fn test_toast_history_is_bounded() {
    let mut slot = ToastSlot::default();
    for i in 0..20 {
        slot.show(OutboundMessage::info(format!("message {i}")));
    }
    assert_eq!(slot.recent().len(), 8);
    assert_eq!(slot.recent().last().map(|m| m.text.as_str()), Some("message 19"));
    assert_eq!(slot.recent().first().map(|m| m.text.as_str()), Some("message 12"));
}

#[test]
fn test_quit_action() {
    let mut app = make_test_app();
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_file_store_survives_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("preferences.toml");

    let mut app = make_test_app_with(
        AppConfig::default(),
        Rc::new(FileStore::new(&path)),
        Some(1280),
    );
    app.execute_action(Action::ToggleSidebar);
    drop(app);

    let app = make_test_app_with(
        AppConfig::default(),
        Rc::new(FileStore::new(&path)),
        Some(1280),
    );
    assert!(!app.layout_state.expanded());
}

#[test]
fn test_unavailable_store_defaults_to_expanded() {
    let mut app = make_test_app_with(AppConfig::default(), Rc::new(UnavailableStore), Some(1280));
    assert!(app.layout_state.expanded());

    // 저장 실패해도 메모리 상태는 바뀜
    app.execute_action(Action::ToggleSidebar);
    assert!(!app.layout_state.expanded());
}
