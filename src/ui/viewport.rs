// Viewport observer - 반응형 뷰포트 분류기
//
// 너비 < breakpoint 이면 compact, 아니면 regular.
// 분류가 실제로 바뀔 때만 구독자에게 알린다 (경계를 넘는 변화는 빠짐없이 전달).

use std::cell::Cell;

use tracing::{debug, info};

use crate::system::ViewportSource;
use crate::ui::observer::{Subscribers, Subscription};

/// 기본 breakpoint (너비 단위)
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// 뷰포트 분류 스냅샷
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportClassification {
    pub is_compact: bool,
}

/// 너비 분류
pub fn classify(width: u32, breakpoint: u32) -> bool {
    width < breakpoint
}

/// 뷰포트 관찰자
pub struct ViewportObserver {
    source: Box<dyn ViewportSource>,
    breakpoint: u32,
    initialized: Cell<bool>,
    is_compact: Cell<bool>,
    /// 마지막으로 관측한 너비 (신호가 한 번도 없었으면 None)
    width: Cell<Option<u32>>,
    subscribers: Subscribers<ViewportClassification>,
}

impl ViewportObserver {
    pub fn new(source: Box<dyn ViewportSource>, breakpoint: u32) -> Self {
        Self {
            source,
            breakpoint,
            initialized: Cell::new(false),
            is_compact: Cell::new(false),
            width: Cell::new(None),
            subscribers: Subscribers::new(),
        }
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// 현재 분류 (첫 조회 시 신호를 동기적으로 읽음)
    pub fn is_compact(&self) -> bool {
        self.ensure_initialized();
        self.is_compact.get()
    }

    /// 마지막으로 관측한 너비
    pub fn width(&self) -> Option<u32> {
        self.ensure_initialized();
        self.width.get()
    }

    /// 분류 변경 구독
    ///
    /// 첫 구독 전에 현재 분류를 즉시 계산하므로, 구독 직후 `is_compact()`는
    /// 이벤트를 기다리지 않고 정확한 값을 돌려준다.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(ViewportClassification) + 'static,
    {
        self.ensure_initialized();
        self.subscribers.subscribe(callback)
    }

    /// 너비 변경 이벤트 처리
    pub fn handle_width(&self, width: u32) {
        self.ensure_initialized();
        self.width.set(Some(width));

        let is_compact = classify(width, self.breakpoint);
        if is_compact == self.is_compact.get() {
            return;
        }
        self.is_compact.set(is_compact);
        info!(width, breakpoint = self.breakpoint, is_compact, "viewport reclassified");
        self.subscribers
            .broadcast(ViewportClassification { is_compact });
    }

    /// 신호 공급원을 다시 읽어 반영
    pub fn refresh(&self) {
        match self.source.current_width() {
            Some(width) => self.handle_width(width),
            None => {
                // 마지막 분류 유지, 구독자 호출 없음
                debug!(
                    is_compact = self.is_compact.get(),
                    "viewport signal unavailable; keeping classification"
                );
            }
        }
    }

    fn ensure_initialized(&self) {
        if self.initialized.replace(true) {
            return;
        }
        match self.source.current_width() {
            Some(width) => {
                self.width.set(Some(width));
                self.is_compact.set(classify(width, self.breakpoint));
            }
            None => {
                debug!("viewport signal unavailable; defaulting to regular");
                self.is_compact.set(false);
            }
        }
    }
}
