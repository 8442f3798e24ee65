//! Single-flight deduplication for the token refresh call.
//!
//! When several requests fault with 401 at once, only one refresh may hit
//! the backend — the refresh endpoint rotates tokens on use, so duplicate
//! calls would invalidate each other. Concurrent callers share one
//! `futures::future::Shared` and observe the same outcome.
//!
//! The primitive is kept generic and free of browser types so the
//! deduplication guarantee is testable on the native target.

use std::cell::RefCell;
use std::future::Future;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

type Flight<T> = Shared<LocalBoxFuture<'static, T>>;

/// Collapses overlapping invocations of an async operation into one
/// underlying future. Single-threaded by design; the browser event loop is
/// the only scheduler here.
pub struct SingleFlight<T: Clone + 'static> {
    in_flight: RefCell<Option<Flight<T>>>,
}

impl<T: Clone + 'static> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            in_flight: RefCell::new(None),
        }
    }

    /// Run `factory` unless a flight is already underway, in which case the
    /// caller awaits the existing one. The slot is released on every exit
    /// path; the identity check keeps a late awaiter from releasing a newer
    /// flight that started after its own completed.
    pub async fn run<F, Fut>(&self, factory: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + 'static,
    {
        let handle = {
            let mut slot = self.in_flight.borrow_mut();
            match slot.as_ref() {
                Some(existing) => existing.clone(),
                None => {
                    let flight = factory().boxed_local().shared();
                    *slot = Some(flight.clone());
                    flight
                }
            }
        };

        let result = handle.clone().await;

        let mut slot = self.in_flight.borrow_mut();
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&handle)) {
            *slot = None;
        }

        result
    }

    /// Whether a flight is currently underway.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.borrow().is_some()
    }
}

impl<T: Clone + 'static> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;

    #[test]
    fn test_concurrent_callers_share_one_flight() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let flight = Rc::new(SingleFlight::new());
        let calls = Rc::new(Cell::new(0usize));
        let results = Rc::new(RefCell::new(Vec::new()));

        let (tx, rx) = oneshot::channel::<bool>();
        // Second channel exists only to catch a duplicate factory call: if
        // it were ever awaited the pool would stall with an incomplete task.
        let (_tx_unused, rx_unused) = oneshot::channel::<bool>();

        {
            let flight = flight.clone();
            let calls = calls.clone();
            let results = results.clone();
            spawner
                .spawn_local(async move {
                    let value = flight
                        .run(move || async move {
                            calls.set(calls.get() + 1);
                            rx.await.unwrap()
                        })
                        .await;
                    results.borrow_mut().push(value);
                })
                .unwrap();
        }
        {
            let flight = flight.clone();
            let calls = calls.clone();
            let results = results.clone();
            spawner
                .spawn_local(async move {
                    let value = flight
                        .run(move || async move {
                            calls.set(calls.get() + 1);
                            rx_unused.await.unwrap()
                        })
                        .await;
                    results.borrow_mut().push(value);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(calls.get(), 1, "only the first caller may start a flight");
        assert!(flight.is_in_flight());

        tx.send(true).unwrap();
        pool.run_until_stalled();

        assert_eq!(*results.borrow(), vec![true, true]);
        assert!(!flight.is_in_flight(), "slot must be released on completion");
    }

    #[test]
    fn test_slot_released_after_failure_outcome() {
        let flight = SingleFlight::new();
        let calls = Rc::new(Cell::new(0usize));

        let first = {
            let calls = calls.clone();
            block_on(flight.run(move || async move {
                calls.set(calls.get() + 1);
                false
            }))
        };
        assert!(!first);
        assert!(!flight.is_in_flight());

        // A later 401 must be able to trigger a fresh attempt.
        let second = {
            let calls = calls.clone();
            block_on(flight.run(move || async move {
                calls.set(calls.get() + 1);
                true
            }))
        };
        assert!(second);
        assert_eq!(calls.get(), 2);
    }
}
