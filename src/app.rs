use crate::config::AppConfig;
use crate::core::actions::Action;
use crate::models::{LayoutConfiguration, Orientation, OutboundMessage};
use crate::system::{
    columns_to_width, FileStore, MemoryStore, PreferenceStore, TerminalViewport,
    UnavailableStore, ViewportSource,
};
use crate::ui::{
    DemoModeFlag, LayoutContext, LayoutInputs, LayoutManager, LayoutStateController,
    NotificationGate, PanelState, ProviderScope, RestrictedVocabulary, ScopeError,
    Subscription, ViewportObserver,
};
use crate::utils::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

mod operations;

pub use operations::RecordOperation;

/// 토스트 한 줄 + 최근 메시지 기록
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<(OutboundMessage, Instant)>,
    recent: Vec<OutboundMessage>,
}

impl ToastSlot {
    /// 토스트 표시 시간
    pub const TTL: Duration = Duration::from_secs(3);
    const RECENT_LIMIT: usize = 8;

    pub fn show(&mut self, message: OutboundMessage) {
        self.show_at(message, Instant::now());
    }

    pub fn show_at(&mut self, message: OutboundMessage, now: Instant) {
        if self.recent.len() == Self::RECENT_LIMIT {
            self.recent.remove(0);
        }
        self.recent.push(message.clone());
        self.current = Some((message, now));
    }

    pub fn current(&self) -> Option<&OutboundMessage> {
        self.current.as_ref().map(|(message, _)| message)
    }

    /// 오래된 순서. 마지막이 최신
    pub fn recent(&self) -> &[OutboundMessage] {
        &self.recent
    }

    /// 만료된 토스트 제거
    pub fn clear_expired(&mut self, now: Instant) {
        if let Some((_, shown)) = &self.current {
            if now.saturating_duration_since(*shown) >= Self::TTL {
                self.current = None;
            }
        }
    }
}

/// 구독 콜백이 쌓아 두는 알림 (게이트를 거쳐 토스트로 나감)
type Inbox = Rc<RefCell<VecDeque<OutboundMessage>>>;

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    pub config: AppConfig,
    /// 사이드 패널 펼침/오버레이 상태
    pub layout_state: Rc<LayoutStateController>,
    /// 뷰포트 분류
    pub viewport: Rc<ViewportObserver>,
    pub layout_context: LayoutContext,
    /// 앱 전체를 감싸는 레이아웃 스코프
    pub root_scope: ProviderScope,
    pub demo_mode: DemoModeFlag,
    gate: NotificationGate,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast: ToastSlot,
    inbox: Inbox,
    /// 패널 상태 / 레이아웃 구성 구독 (drop 시 해제)
    _subscriptions: Vec<Subscription>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut persisted = true;
        let store: Rc<dyn PreferenceStore> = if !config.persist_preferences {
            debug!("preference persistence disabled; using session memory");
            Rc::new(MemoryStore::new())
        } else {
            match config.preferences_file.clone().or_else(FileStore::default_path) {
                Some(path) => {
                    let store = FileStore::new(path);
                    info!(path = %store.path().display(), "preferences file");
                    Rc::new(store)
                }
                None => {
                    warn!("no home directory; panel state will not persist");
                    persisted = false;
                    Rc::new(UnavailableStore)
                }
            }
        };
        let source = Box::new(TerminalViewport::new(config.cell_width));
        let mut app = Self::with_parts(config, store, source);
        if !persisted {
            app.notify(OutboundMessage::warning("Panel state will not be saved"));
        }
        Ok(app)
    }

    /// 저장소와 뷰포트 신호를 주입해서 생성
    pub fn with_parts(
        config: AppConfig,
        store: Rc<dyn PreferenceStore>,
        source: Box<dyn ViewportSource>,
    ) -> Self {
        let layout_state = Rc::new(LayoutStateController::new(store));
        layout_state.initialize();

        let viewport = Rc::new(ViewportObserver::new(source, config.breakpoint));

        // regular 로 돌아오면 오버레이를 닫는다 (앱 수명 동안 유지)
        let controller = Rc::clone(&layout_state);
        viewport
            .subscribe(move |class| controller.on_viewport_change(class.is_compact))
            .detach();

        let layout_context = LayoutContext::new();
        let root_scope = layout_context.provide(config.sidebar_position);

        let demo_mode = DemoModeFlag::new(config.demo_mode);
        let gate = NotificationGate::new(
            demo_mode.clone(),
            RestrictedVocabulary::new(config.restricted_words.iter().cloned()),
        );

        let inbox: Inbox = Rc::default();
        let subscriptions = vec![
            Self::watch_panel_state(&layout_state, &inbox),
            Self::watch_layout(&layout_context, config.sidebar_position, &inbox),
        ];

        info!(
            demo_mode = config.demo_mode,
            breakpoint = config.breakpoint,
            expanded = layout_state.expanded(),
            is_compact = viewport.is_compact(),
            "app initialized"
        );

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            config,
            layout_state,
            viewport,
            layout_context,
            root_scope,
            demo_mode,
            gate,
            toast: ToastSlot::default(),
            inbox,
            _subscriptions: subscriptions,
        }
    }

    /// 패널 펼침/오버레이 변경을 알림으로 변환
    fn watch_panel_state(controller: &LayoutStateController, inbox: &Inbox) -> Subscription {
        let inbox = Rc::clone(inbox);
        let last = Cell::new(controller.snapshot());
        controller.subscribe(move |state: PanelState| {
            let previous = last.replace(state);
            let text = if previous.expanded != state.expanded {
                format!("Panel {}", state.label())
            } else if previous.overlay_open != state.overlay_open {
                let verb = if state.overlay_open { "opened" } else { "closed" };
                format!("Panel overlay {verb}")
            } else {
                return;
            };
            inbox.borrow_mut().push_back(OutboundMessage::info(text));
        })
    }

    /// 레이아웃 구성 변경을 알림으로 변환
    fn watch_layout(context: &LayoutContext, initial: Orientation, inbox: &Inbox) -> Subscription {
        let inbox = Rc::clone(inbox);
        let last = Cell::new(Some(initial));
        context.subscribe(move |configuration: Option<LayoutConfiguration>| {
            let position = configuration.map(|c| c.effective_position);
            if last.replace(position) == position {
                return;
            }
            let message = match position {
                Some(position) => OutboundMessage::info(format!("Panel moved {}", position.as_str())),
                None => OutboundMessage::warning("Layout scope closed"),
            };
            inbox.borrow_mut().push_back(message);
        })
    }

    /// 쌓인 알림을 게이트로 내보냄
    fn pump_events(&mut self) {
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            match next {
                Some(message) => {
                    self.notify(message);
                }
                None => break,
            }
        }
    }

    /// 종료
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::ToggleSidebar => {
                self.layout_state.toggle(self.viewport.is_compact());
            }
            Action::MirrorLayout => self.mirror_layout(),
            Action::LoadReport => self.run_record_operation(RecordOperation::LoadReport),
            Action::UpdateRecord => self.run_record_operation(RecordOperation::UpdateRecord),
            Action::DeleteRecord => self.run_record_operation(RecordOperation::DeleteRecord),
            Action::ResetPassword => self.run_record_operation(RecordOperation::ResetPassword),
            Action::Quit => self.quit(),
        }
        self.pump_events();
    }

    /// 터미널 열 수 변경 반영
    pub fn handle_resize(&mut self, columns: u16) {
        self.viewport
            .handle_width(columns_to_width(columns, self.config.cell_width));
        self.pump_events();
    }

    /// 뷰포트 신호를 다시 읽음 (포커스 복귀 등)
    pub fn refresh_viewport(&mut self) {
        self.viewport.refresh();
        self.pump_events();
    }

    /// 사이드 패널을 반대편으로 옮김. 결과 알림은 구성 구독에서 나간다
    fn mirror_layout(&mut self) {
        let result = self
            .root_scope
            .configuration()
            .and_then(|current| self.root_scope.set_position(current.position.mirrored()));
        if let Err(err) = result {
            warn!(%err, "mirror layout failed");
            self.notify(OutboundMessage::error(err.to_string()));
        }
    }

    /// 현재 레이아웃 구성 (스코프 밖이면 오류)
    pub fn layout_configuration(&self) -> std::result::Result<LayoutConfiguration, ScopeError> {
        self.layout_context.use_current()
    }

    /// 레이아웃 계산 입력 수집
    pub fn layout_inputs(&self) -> std::result::Result<LayoutInputs, ScopeError> {
        let configuration = self.layout_configuration()?;
        Ok(LayoutInputs {
            is_compact: self.viewport.is_compact(),
            panel: self.layout_state.snapshot(),
            position: configuration.effective_position,
        })
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        self.toast.clear_expired(Instant::now());
    }

    /// 레이아웃 모드 문자열 반환
    pub fn layout_mode_str(&self) -> &'static str {
        self.layout.mode().as_str()
    }
}

#[cfg(test)]
mod tests;
