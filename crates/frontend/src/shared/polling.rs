//! Cancellation-aware polling.
//!
//! The interval stops when the owning component is disposed, and every tick
//! carries a generation stamp: a response that finishes after a newer tick has
//! started is discarded, so overlapping polls cannot apply out of order.

use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

#[derive(Clone)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Start a new tick, invalidating all earlier ones.
    pub fn next_tick(&self) -> PollTick {
        let generation = self.generation.load(Ordering::Relaxed) + 1;
        self.generation.store(generation, Ordering::Relaxed);
        PollTick {
            handle: self.clone(),
            generation,
        }
    }
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamp handed to a tick's async work; results are applied only while the
/// tick is still current.
#[derive(Clone)]
pub struct PollTick {
    handle: PollHandle,
    generation: u64,
}

impl PollTick {
    pub fn is_current(&self) -> bool {
        self.handle.is_alive() && self.handle.generation.load(Ordering::Relaxed) == self.generation
    }
}

/// Run `tick` immediately and then every `interval_ms`, until the owning
/// reactive scope is cleaned up.
pub fn use_polling<F, Fut>(interval_ms: u32, tick: F)
where
    F: Fn(PollTick) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();

    on_cleanup({
        let handle = handle.clone();
        move || handle.stop()
    });

    wasm_bindgen_futures::spawn_local(async move {
        loop {
            if !handle.is_alive() {
                break;
            }
            tick(handle.next_tick()).await;
            TimeoutFuture::new(interval_ms).await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_is_current_until_superseded() {
        let handle = PollHandle::new();
        let first = handle.next_tick();
        assert!(first.is_current());

        let second = handle.next_tick();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_stop_invalidates_all_ticks() {
        let handle = PollHandle::new();
        let tick = handle.next_tick();
        handle.stop();
        assert!(!tick.is_current());
        assert!(!handle.is_alive());
    }
}
