//! Cancel-and-reschedule debouncing over an abstract timer host.
//!
//! At most one execution is ever pending. Every request replaces the pending
//! timer, so a burst collapses into a single run once the quiet period after
//! the last request has elapsed.

pub trait TimerHost {
    type Handle;

    /// Arms the host's tick callback `delay_ms` from now.
    fn schedule(&mut self, delay_ms: u32) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

pub struct Debouncer<H: TimerHost> {
    host: H,
    delay_ms: u32,
    pending: Option<H::Handle>,
}

impl<H: TimerHost> Debouncer<H> {
    pub fn new(host: H, delay_ms: u32) -> Self {
        Self {
            host,
            delay_ms,
            pending: None,
        }
    }

    pub fn request(&mut self) {
        self.cancel();
        self.pending = self.host.schedule(self.delay_ms);
    }

    /// Called from the host's tick. Returns whether the wrapped work should run.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: TimerHost> Drop for Debouncer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
