//! FrameScheduler port - animation frame requests
//!
//! Transitions (panel open/close, carousel auto-scroll) are driven by frame
//! callbacks. Anything holding a handle must cancel it on disposal.

/// Opaque handle for a requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host facility for scheduling animation frames
pub trait FrameScheduler {
    /// Request a frame callback
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending frame; cancelling a fired or unknown handle is a no-op
    fn cancel_frame(&mut self, handle: FrameHandle);
}
