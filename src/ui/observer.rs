// Subscriber list - 단일 스레드 구독/브로드캐스트 기본 요소
//
// 뷰포트 관찰자, 패널 상태 컨트롤러, 레이아웃 컨텍스트가 공유하는 구독 목록.
// 브로드캐스트 도중의 구독/해제(재진입)를 허용한다.
// 콜백 안에서 다시 브로드캐스트하면 현재 전달이 끝난 뒤 발행 순서대로 전달한다.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(T)>;

struct Entry<T> {
    id: u64,
    callback: Callback<T>,
    /// 해제 즉시 false (진행 중인 브로드캐스트에서도 더 이상 호출되지 않음)
    live: Rc<Cell<bool>>,
}

struct Inner<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
    /// 전달 루프 실행 중
    dispatching: bool,
    /// 전달 대기 값 (FIFO)
    pending: VecDeque<T>,
}

/// 구독자 목록
///
/// 복제본은 같은 목록을 공유한다.
pub struct Subscribers<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Subscribers<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                entries: Vec::new(),
                dispatching: false,
                pending: VecDeque::new(),
            })),
        }
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.inner.borrow().entries.len())
            .finish()
    }
}

impl<T: Clone + 'static> Subscribers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 콜백 등록
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(T) + 'static,
    {
        let live = Rc::new(Cell::new(true));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push(Entry {
                id,
                callback: Rc::new(callback),
                live: Rc::clone(&live),
            });
            id
        };

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            live,
            remover: Cell::new(Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().entries.retain(|entry| entry.id != id);
                }
            }))),
        }
    }

    /// 모든 구독자에게 같은 값을 전달 (등록 순서)
    ///
    /// 콜백 안에서 호출되면 값을 큐에 넣고 바로 돌아온다. 바깥 전달 루프가
    /// 현재 값을 모두에게 전달한 다음 큐의 값을 차례로 전달하므로,
    /// 모든 구독자가 마지막으로 받는 값은 마지막으로 발행된 값이다.
    pub fn broadcast(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.pending.push_back(value);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }

        loop {
            // 콜백 안에서 subscribe/unsubscribe 가 가능하도록 빌림을 먼저 해제
            let (value, snapshot) = {
                let mut inner = self.inner.borrow_mut();
                let Some(value) = inner.pending.pop_front() else {
                    inner.dispatching = false;
                    return;
                };
                let snapshot: Vec<(Callback<T>, Rc<Cell<bool>>)> = inner
                    .entries
                    .iter()
                    .map(|entry| (Rc::clone(&entry.callback), Rc::clone(&entry.live)))
                    .collect();
                (value, snapshot)
            };

            for (callback, live) in snapshot {
                if live.get() {
                    callback(value.clone());
                }
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 구독 해제 핸들
///
/// `unsubscribe()`는 여러 번 호출해도 안전하며, 핸들이 drop 될 때도 해제된다.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    live: Rc<Cell<bool>>,
    remover: Cell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    /// 구독 해제. 반환 이후 콜백은 호출되지 않는다.
    pub fn unsubscribe(&self) {
        self.live.set(false);
        if let Some(remove) = self.remover.take() {
            remove();
        }
    }

    /// 구독 목록이 살아있는 동안 콜백 유지
    pub fn detach(self) {
        drop(self.remover.take());
    }

    pub fn is_active(&self) -> bool {
        self.live.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.remover.get_mut().is_some() {
            self.unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
