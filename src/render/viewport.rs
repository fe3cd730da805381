//! Viewport size tracking.
//!
//! The render target is either [`TargetState::Valid`] for the current size or
//! [`TargetState::Stale`] after a resize. A stale target is rebuilt at the start of the next
//! frame, which is the only place the state goes back to valid.

use glam::UVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Valid,
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    size: UVec2,
    state: TargetState,
}

impl Viewport {
    /// A new viewport. The target starts stale so the first frame builds it.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: UVec2::new(width, height),
            state: TargetState::Stale,
        }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn state(&self) -> TargetState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == TargetState::Stale
    }

    /// Nothing can be drawn into a zero-sized target.
    pub fn is_drawable(&self) -> bool {
        self.size.x > 0 && self.size.y > 0
    }

    pub fn aspect(&self) -> f32 {
        self.size.x as f32 / self.size.y as f32
    }

    /// Records a new framebuffer size and marks the target stale.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = UVec2::new(width, height);
        self.state = TargetState::Stale;
    }

    /// Moves a stale target back to valid and returns the size to rebuild at.
    ///
    /// Returns `None` when the target is already valid, or when the viewport has no area, in
    /// which case it stays stale.
    pub fn take_rebuild(&mut self) -> Option<UVec2> {
        if self.state == TargetState::Valid || !self.is_drawable() {
            return None;
        }
        self.state = TargetState::Valid;
        Some(self.size)
    }
}
