// Animation-frame scheduling
//
// A controller asks for "the next frame" and gets a handle back. The host
// drains the queue once per frame and hands each (handle, owner) pair back to
// the owner. Requests made while a frame is running land in the next frame.

/// Opaque token for a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Capability to schedule and cancel frame callbacks
///
/// `T` identifies who should be called back when the frame fires.
pub trait FrameScheduler<T> {
    fn request_frame(&mut self, owner: T) -> FrameHandle;

    /// Cancel a pending request; unknown or already-fired handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// FIFO queue of pending frame callbacks
#[derive(Debug)]
pub struct FrameQueue<T> {
    next_id: u64,
    pending: Vec<(FrameHandle, T)>,
}

impl<T> FrameQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Take everything due in this frame, in request order
    pub fn begin_frame(&mut self) -> Vec<(FrameHandle, T)> {
        std::mem::take(&mut self.pending)
    }

    /// Number of callbacks waiting for the next frame
    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameScheduler<T> for FrameQueue<T> {
    fn request_frame(&mut self, owner: T) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, owner));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }
}
