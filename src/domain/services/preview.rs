//! Preview shell state machine
//!
//! Desktop always shows the full preview. On mobile the preview panel opens
//! and closes with a measured-height transition:
//!
//! ```text
//! Closed --open--> Opening{height} --transition end--> Open (height released)
//!   ^                                                    |
//!   +------- transition end <-- Closing{from} <--close---+
//! ```
//!
//! While Opening, content growth keeps adjusting the target height. Once Open
//! the height constraint is released and resize events are ignored.

use crate::domain::ports::{FrameHandle, FrameScheduler};

/// Presentation chosen from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Desktop,
    Mobile,
}

impl DisplayMode {
    pub fn for_viewport(width: u32, mobile_breakpoint: u32) -> Self {
        if width < mobile_breakpoint {
            DisplayMode::Mobile
        } else {
            DisplayMode::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelState {
    Closed,
    Opening { height: f64 },
    Open,
    Closing { from: f64 },
}

/// Height the host should apply to the panel container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightConstraint {
    Collapsed,
    Animating { from: f64, to: f64 },
    Unconstrained,
}

/// Responsive container for the live preview
#[derive(Debug)]
pub struct PreviewShell {
    mode: DisplayMode,
    state: PanelState,
    pending_frame: Option<FrameHandle>,
    live_url: Option<String>,
    disposed: bool,
}

impl PreviewShell {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            state: match mode {
                DisplayMode::Desktop => PanelState::Open,
                DisplayMode::Mobile => PanelState::Closed,
            },
            pending_frame: None,
            live_url: None,
            disposed: false,
        }
    }

    /// Builder: set the public page this card is published at
    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = Some(url.into());
        self
    }

    pub fn set_live_url(&mut self, url: Option<String>) {
        self.live_url = url;
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Switch presentation after a viewport change
    pub fn set_mode(&mut self, mode: DisplayMode, frames: &mut dyn FrameScheduler) {
        if mode == self.mode {
            return;
        }
        self.cancel_pending(frames);
        self.mode = mode;
        self.state = match mode {
            DisplayMode::Desktop => PanelState::Open,
            DisplayMode::Mobile => PanelState::Closed,
        };
    }

    pub fn is_open(&self) -> bool {
        self.mode == DisplayMode::Desktop
            || matches!(self.state, PanelState::Open | PanelState::Opening { .. })
    }

    /// Open if closed/closing, close if open/opening
    pub fn toggle(&mut self, measured_height: f64, frames: &mut dyn FrameScheduler) {
        if self.is_open() {
            self.close(measured_height, frames);
        } else {
            self.open(measured_height, frames);
        }
    }

    /// Start opening towards the measured natural content height
    pub fn open(&mut self, measured_height: f64, frames: &mut dyn FrameScheduler) {
        if self.disposed || self.mode == DisplayMode::Desktop {
            return;
        }
        if matches!(self.state, PanelState::Closed | PanelState::Closing { .. }) {
            self.state = PanelState::Opening {
                height: measured_height.max(0.0),
            };
            self.schedule(frames);
        }
    }

    /// Start collapsing from the current rendered height
    pub fn close(&mut self, current_height: f64, frames: &mut dyn FrameScheduler) {
        if self.disposed || self.mode == DisplayMode::Desktop {
            return;
        }
        if matches!(self.state, PanelState::Open | PanelState::Opening { .. }) {
            self.state = PanelState::Closing {
                from: current_height.max(0.0),
            };
            self.schedule(frames);
        }
    }

    /// Content size observer callback.
    ///
    /// Returns true if the target height was adjusted.
    pub fn on_content_resized(&mut self, height: f64) -> bool {
        match &mut self.state {
            PanelState::Opening { height: target } => {
                *target = height.max(0.0);
                true
            }
            _ => false,
        }
    }

    /// Whether the content size observer should still be attached
    pub fn observing_content(&self) -> bool {
        matches!(self.state, PanelState::Opening { .. })
    }

    /// The scheduled frame fired; the CSS transition is now running
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame == Some(handle) {
            self.pending_frame = None;
        }
    }

    /// The height transition finished
    pub fn on_transition_end(&mut self) {
        self.state = match self.state {
            PanelState::Opening { .. } => PanelState::Open,
            PanelState::Closing { .. } => PanelState::Closed,
            other => other,
        };
    }

    pub fn height_constraint(&self) -> HeightConstraint {
        if self.mode == DisplayMode::Desktop {
            return HeightConstraint::Unconstrained;
        }
        match self.state {
            PanelState::Closed => HeightConstraint::Collapsed,
            PanelState::Opening { height } => HeightConstraint::Animating {
                from: 0.0,
                to: height,
            },
            PanelState::Open => HeightConstraint::Unconstrained,
            PanelState::Closing { from } => HeightConstraint::Animating { from, to: 0.0 },
        }
    }

    /// "Visit live page" target, if the card has been published
    pub fn live_page_url(&self) -> Option<&str> {
        self.live_url.as_deref()
    }

    /// Tear down: cancel any pending animation frame. Idempotent.
    pub fn dispose(&mut self, frames: &mut dyn FrameScheduler) {
        self.cancel_pending(frames);
        self.disposed = true;
    }

    fn schedule(&mut self, frames: &mut dyn FrameScheduler) {
        self.cancel_pending(frames);
        self.pending_frame = Some(frames.request_frame());
    }

    fn cancel_pending(&mut self, frames: &mut dyn FrameScheduler) {
        if let Some(handle) = self.pending_frame.take() {
            frames.cancel_frame(handle);
        }
    }
}

/// Join a public base URL and a profile handle
pub fn live_page_url(base_url: &str, handle: &str) -> Option<String> {
    let handle = handle.trim().trim_matches('/');
    if base_url.trim().is_empty() || handle.is_empty() {
        return None;
    }
    Some(format!("{}/{}", base_url.trim().trim_end_matches('/'), handle))
}

/// Position in the work-image carousel
#[derive(Debug, Default)]
pub struct CarouselCursor {
    index: usize,
    len: usize,
    auto_scroll: Option<FrameHandle>,
}

impl CarouselCursor {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            auto_scroll: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Follow a change in collection size, clamping the index
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_some()
    }

    pub fn start_auto_scroll(&mut self, frames: &mut dyn FrameScheduler) {
        if self.auto_scroll.is_none() && self.len > 1 {
            self.auto_scroll = Some(frames.request_frame());
        }
    }

    /// Auto-scroll tick: advance and schedule the next frame
    pub fn on_frame(&mut self, handle: FrameHandle, frames: &mut dyn FrameScheduler) {
        if self.auto_scroll != Some(handle) {
            return;
        }
        self.advance();
        self.auto_scroll = (self.len > 1).then(|| frames.request_frame());
    }

    pub fn stop(&mut self, frames: &mut dyn FrameScheduler) {
        if let Some(handle) = self.auto_scroll.take() {
            frames.cancel_frame(handle);
        }
    }
}
