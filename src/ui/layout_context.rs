// Layout context - 명시적 스코프 스택 기반 레이아웃 구성 배포
//
// `provide()`로 스코프를 열면 프레임이 쌓이고, 가장 안쪽 스코프의 구성이 이긴다.
// 스코프 밖에서 읽으면 기본값 대신 `ScopeError`를 돌려준다.
// 구독자는 가장 안쪽 구성이 바뀔 때마다 `Some`, 마지막 스코프가 닫히면 `None`을 받는다.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use crate::models::{LayoutConfiguration, Orientation};
use crate::ui::observer::{Subscribers, Subscription};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeError {
    #[error("layout configuration read outside of any provider scope")]
    NoProvider,

    #[error("provider scope is already closed")]
    Closed,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    id: u64,
    configuration: LayoutConfiguration,
}

#[derive(Debug, Default)]
struct ScopeStack {
    next_id: u64,
    frames: Vec<Frame>,
}

type SharedStack = Rc<RefCell<ScopeStack>>;

/// 레이아웃 구성 배포 지점
///
/// 복제본은 같은 스코프 스택과 구독자 목록을 공유한다.
#[derive(Debug, Clone, Default)]
pub struct LayoutContext {
    stack: SharedStack,
    subscribers: Subscribers<Option<LayoutConfiguration>>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 스코프 열기
    pub fn provide(&self, position: Orientation) -> ProviderScope {
        let configuration = LayoutConfiguration::new(position);
        let (id, depth) = {
            let mut stack = self.stack.borrow_mut();
            let id = stack.next_id;
            stack.next_id += 1;
            stack.frames.push(Frame { id, configuration });
            (id, stack.frames.len())
        };
        debug!(depth, position = position.as_str(), "layout scope opened");
        self.subscribers.broadcast(Some(configuration));

        ProviderScope {
            stack: Rc::clone(&self.stack),
            subscribers: self.subscribers.clone(),
            id,
            depth,
            closed: Cell::new(false),
        }
    }

    /// 가장 안쪽 스코프의 구성
    pub fn use_current(&self) -> Result<LayoutConfiguration, ScopeError> {
        self.stack
            .borrow()
            .frames
            .last()
            .map(|frame| frame.configuration)
            .ok_or(ScopeError::NoProvider)
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.borrow().frames.len()
    }

    /// 가장 안쪽 구성이 바뀔 때마다 호출 (스코프가 모두 닫히면 `None`)
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<LayoutConfiguration>) + 'static,
    {
        self.subscribers.subscribe(callback)
    }
}

/// 열린 스코프 핸들
///
/// drop 또는 `close()` 시 스택을 자신의 깊이 이전으로 되돌린다 (LIFO).
#[must_use = "dropping a ProviderScope closes it immediately"]
#[derive(Debug)]
pub struct ProviderScope {
    stack: SharedStack,
    subscribers: Subscribers<Option<LayoutConfiguration>>,
    id: u64,
    /// 1부터 시작하는 스택 깊이
    depth: usize,
    closed: Cell<bool>,
}

impl ProviderScope {
    /// 스코프가 열려 있는지 (바깥 스코프가 닫히면 함께 닫힌 것으로 본다)
    pub fn is_open(&self) -> bool {
        !self.closed.get()
            && self
                .stack
                .borrow()
                .frames
                .get(self.depth - 1)
                .is_some_and(|frame| frame.id == self.id)
    }

    /// 이 스코프의 구성
    pub fn configuration(&self) -> Result<LayoutConfiguration, ScopeError> {
        if !self.is_open() {
            return Err(ScopeError::Closed);
        }
        Ok(self.stack.borrow().frames[self.depth - 1].configuration)
    }

    /// 이 스코프의 방향 교체. 가장 안쪽 스코프라면 구독자에게 알린다
    pub fn set_position(&self, position: Orientation) -> Result<LayoutConfiguration, ScopeError> {
        if !self.is_open() {
            return Err(ScopeError::Closed);
        }
        let configuration = LayoutConfiguration::new(position);
        let innermost = {
            let mut stack = self.stack.borrow_mut();
            stack.frames[self.depth - 1].configuration = configuration;
            stack.frames.len() == self.depth
        };
        debug!(depth = self.depth, position = position.as_str(), innermost, "layout scope updated");
        if innermost {
            self.subscribers.broadcast(Some(configuration));
        }
        Ok(configuration)
    }

    /// 스코프 닫기 (여러 번 호출해도 안전)
    pub fn close(&self) {
        if !self.is_open() {
            self.closed.set(true);
            return;
        }
        self.closed.set(true);
        let revealed = {
            let mut stack = self.stack.borrow_mut();
            stack.frames.truncate(self.depth - 1);
            stack.frames.last().map(|frame| frame.configuration)
        };
        debug!(depth = self.depth, "layout scope closed");
        self.subscribers.broadcast(revealed);
    }
}

impl Drop for ProviderScope {
    fn drop(&mut self) {
        self.close();
    }
}
