// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the vertical scroll position of the section column and the sizes
//! needed to convert an absolute offset into a relative snap target.

/// Vertical scroll state of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    /// Current scroll offset from the top of the content.
    pub offset: f32,

    /// Visible height of the scrollable.
    pub height: f32,

    /// Total height of the scrolled content.
    pub content_height: f32,
}

impl ViewportState {
    /// Records the latest scroll event. Geometry changes are driven by
    /// window resizes, not by this.
    pub fn update(&mut self, offset: f32, height: f32, content_height: f32) {
        self.offset = offset;
        self.height = height;
        self.content_height = content_height;
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    /// Clamps an absolute offset into the reachable range.
    #[must_use]
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Converts an absolute offset into the `0.0..=1.0` range used by
    /// scrollable snap operations. `None` when the content does not scroll.
    #[must_use]
    pub fn relative(&self, offset: f32) -> Option<f32> {
        let max = self.max_offset();
        if max > 0.0 {
            Some(self.clamp(offset) / max)
        } else {
            None
        }
    }
}
