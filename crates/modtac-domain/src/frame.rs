/// Coalesces a burst of input events into at most one unit of work per frame.
///
/// Each request overwrites the pending value; the frame callback takes the
/// latest one. [`request`](FrameGate::request) reports whether a frame still
/// has to be scheduled, mirroring a single outstanding animation-frame handle.
#[derive(Debug, Clone)]
pub struct FrameGate<T> {
    pending: Option<T>,
}

impl<T> FrameGate<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Stores `value` and returns `true` if no frame was scheduled yet.
    pub fn request(&mut self, value: T) -> bool {
        let first = self.pending.is_none();
        self.pending = Some(value);
        first
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops pending work, e.g. when the listener is detached.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self::new()
    }
}
