//! Render admission control.
//!
//! A panel refresh takes around fifteen seconds, so at most one render may
//! be in flight. [`RenderGate`] hands out at most one [`RenderPass`] at a
//! time; further requests are refused until the pass is released. The gate
//! is cheap to clone and safe to poll from other threads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

type CompletionHook = Box<dyn Fn() + Send>;

struct GateInner {
    in_flight: AtomicBool,
    on_complete: Mutex<Option<CompletionHook>>,
}

/// Single-render admission gate.
#[derive(Clone)]
pub struct RenderGate {
    inner: Arc<GateInner>,
}

impl RenderGate {
    pub fn new() -> Self {
        RenderGate {
            inner: Arc::new(GateInner {
                in_flight: AtomicBool::new(false),
                on_complete: Mutex::new(None),
            }),
        }
    }

    /// Try to start a render. Returns `None` while another pass is live.
    pub fn try_begin(&self) -> Option<RenderPass> {
        self.inner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(RenderPass {
            inner: Arc::clone(&self.inner),
            released: false,
        })
    }

    /// Whether a pass is currently live.
    pub fn is_busy(&self) -> bool {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Install a hook run after every successfully finished pass.
    pub fn set_on_complete(&self, hook: impl Fn() + Send + 'static) {
        *self.inner.on_complete.lock().unwrap() = Some(Box::new(hook));
    }
}

impl Default for RenderGate {
    fn default() -> Self {
        RenderGate::new()
    }
}

/// The live render. Releases the gate on [`finish`](Self::finish) or drop;
/// only `finish` runs the completion hook, so an early error return skips
/// it.
pub struct RenderPass {
    inner: Arc<GateInner>,
    released: bool,
}

impl RenderPass {
    /// Mark the render complete: release the gate, then run the hook. The
    /// gate is already free inside the hook, so a hook may start the next
    /// render straight away.
    pub fn finish(mut self) {
        self.release();
        if let Some(hook) = self.inner.on_complete.lock().unwrap().as_ref() {
            hook();
        }
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.inner.in_flight.store(false, Ordering::Release);
        }
    }
}

impl Drop for RenderPass {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn only_one_pass_at_a_time() {
        let gate = RenderGate::new();
        let pass = gate.try_begin().unwrap();
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());
        assert!(gate.clone().try_begin().is_none());
        drop(pass);
        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn finish_runs_the_hook_and_releases() {
        let gate = RenderGate::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        gate.set_on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        gate.try_begin().unwrap().finish();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!gate.is_busy());

        gate.try_begin().unwrap().finish();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_without_finish_skips_the_hook() {
        let gate = RenderGate::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        gate.set_on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        drop(gate.try_begin().unwrap());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!gate.is_busy(), "gate released even on the error path");
    }

    #[test]
    fn the_hook_can_start_the_next_render() {
        let gate = RenderGate::new();
        let chained = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&chained);
        let inner = gate.clone();
        gate.set_on_complete(move || {
            *slot.lock().unwrap() = inner.try_begin();
        });

        gate.try_begin().unwrap().finish();
        let next = chained.lock().unwrap().take();
        assert!(next.is_some(), "gate must be free by the time the hook runs");
        assert!(gate.is_busy(), "the chained pass is live");
        drop(next);
        assert!(!gate.is_busy());
    }

    #[test]
    fn gate_clones_share_state_across_threads() {
        let gate = RenderGate::new();
        let pass = gate.try_begin().unwrap();
        let remote = gate.clone();
        let handle = std::thread::spawn(move || remote.try_begin().is_none());
        assert!(handle.join().unwrap());
        drop(pass);
    }
}
