use futures::future::{AbortHandle, Abortable};
use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

/// Ties in-flight requests to the lifetime of the component that issued them.
///
/// Once [`RequestScope::close`] runs (typically from `on_cleanup`), pending
/// futures are aborted and later calls to [`RequestScope::run`] resolve to
/// `None` without polling their future.
#[derive(Clone, Default)]
pub struct RequestScope {
    inner: Rc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    closed: Cell<bool>,
    next_id: Cell<u64>,
    handles: RefCell<Vec<(u64, AbortHandle)>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.get()
    }

    pub fn in_flight(&self) -> usize {
        self.inner.handles.borrow().len()
    }

    pub async fn run<F>(&self, future: F) -> Option<F::Output>
    where
        F: Future,
    {
        if self.is_closed() {
            return None;
        }
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.handles.borrow_mut().push((id, handle));

        let output = Abortable::new(future, registration).await.ok();

        self.inner
            .handles
            .borrow_mut()
            .retain(|(handle_id, _)| *handle_id != id);
        if self.is_closed() {
            None
        } else {
            output
        }
    }

    pub fn close(&self) {
        if self.inner.closed.replace(true) {
            return;
        }
        let handles = std::mem::take(&mut *self.inner.handles.borrow_mut());
        log::debug!("request scope closed, aborting {} request(s)", handles.len());
        for (_, handle) in handles {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn open_scope_returns_output() {
        let scope = RequestScope::new();
        assert_eq!(block_on(scope.run(async { 7 })), Some(7));
        assert_eq!(scope.in_flight(), 0);
    }

    #[test]
    fn closed_scope_skips_future() {
        let scope = RequestScope::new();
        scope.close();
        let polled = Cell::new(false);
        let result = block_on(scope.run(async {
            polled.set(true);
        }));
        assert_eq!(result, None);
        assert!(!polled.get());
    }

    #[test]
    fn closing_aborts_in_flight_request() {
        let scope = RequestScope::new();
        let closer = scope.clone();
        let (result, ()) = block_on(async {
            futures::join!(scope.run(futures::future::pending::<u32>()), async move {
                closer.close();
            })
        });
        assert_eq!(result, None);
        assert!(scope.is_closed());
        assert_eq!(scope.in_flight(), 0);
    }
}
