// SPDX-License-Identifier: MPL-2.0
//! Active-section detection over a one-dimensional scroll axis.
//!
//! Regions are half-open ranges `[start, start + extent)` in document
//! coordinates. The probe point is the vertical center of the viewport; the
//! first region in document order that contains it is the active one.

/// One named content region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region<K> {
    pub id: K,
    pub start: f32,
    pub extent: f32,
}

impl<K> Region<K> {
    pub fn new(id: K, start: f32, extent: f32) -> Self {
        Self { id, start, extent }
    }

    /// Exclusive end of the region.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.extent
    }

    /// Whether `point` lies in `[start, end)`. NaN is never contained.
    #[must_use]
    pub fn contains(&self, point: f32) -> bool {
        point >= self.start && point < self.end()
    }
}

/// Request for the view layer to bring a region into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest<K> {
    pub id: K,
    /// Scroll offset at which the region starts.
    pub target: f32,
}

/// Probe point for a scroll position: the middle of the viewport.
#[must_use]
pub fn probe(scroll_offset: f32, viewport_extent: f32) -> f32 {
    scroll_offset + viewport_extent / 2.0
}

/// First region, in slice order, containing `point`.
#[must_use]
pub fn locate<K>(regions: &[Region<K>], point: f32) -> Option<&Region<K>> {
    regions.iter().find(|region| region.contains(point))
}

/// Tracks which region the reader is looking at.
#[derive(Debug, Clone)]
pub struct SectionTracker<K> {
    regions: Vec<Region<K>>,
    active: K,
}

impl<K: Copy + PartialEq + std::fmt::Debug> SectionTracker<K> {
    /// Creates a tracker with no geometry, active on `initial`.
    pub fn new(initial: K) -> Self {
        Self {
            regions: Vec::new(),
            active: initial,
        }
    }

    /// Replaces the region geometry wholesale. The active id is untouched
    /// until the next scroll event.
    pub fn recompute_regions(&mut self, regions: Vec<Region<K>>) {
        self.regions = regions;
    }

    /// Updates the active region from a scroll position.
    ///
    /// Returns `true` when the active id changed. When no region contains
    /// the probe, the previous active id is kept.
    pub fn on_scroll(&mut self, scroll_offset: f32, viewport_extent: f32) -> bool {
        let point = probe(scroll_offset, viewport_extent);
        match locate(&self.regions, point) {
            Some(region) if region.id != self.active => {
                tracing::trace!(from = ?self.active, to = ?region.id, probe = point, "active section changed");
                self.active = region.id;
                true
            }
            _ => false,
        }
    }

    /// Makes `id` active immediately and returns where to scroll.
    ///
    /// Returns `None` when `id` has no known geometry; the id still becomes
    /// active and a later scroll event corrects it.
    pub fn navigate_to(&mut self, id: K) -> Option<ScrollRequest<K>> {
        self.active = id;
        self.regions
            .iter()
            .find(|region| region.id == id)
            .map(|region| ScrollRequest {
                id,
                target: region.start,
            })
    }

    #[must_use]
    pub fn active(&self) -> K {
        self.active
    }

    #[must_use]
    pub fn regions(&self) -> &[Region<K>] {
        &self.regions
    }

    /// Total extent covered by the regions, measured from zero.
    #[must_use]
    pub fn document_extent(&self) -> f32 {
        self.regions
            .iter()
            .map(Region::end)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Id {
        About,
        Experience,
        Projects,
    }

    fn scenario() -> SectionTracker<Id> {
        let mut tracker = SectionTracker::new(Id::About);
        tracker.recompute_regions(vec![
            Region::new(Id::About, 0.0, 800.0),
            Region::new(Id::Experience, 800.0, 1200.0),
            Region::new(Id::Projects, 2000.0, 1500.0),
        ]);
        tracker
    }

    #[test]
    fn scroll_scenario_selects_expected_sections() {
        let mut tracker = scenario();

        tracker.on_scroll(0.0, 600.0);
        assert_eq!(tracker.active(), Id::About);

        assert!(tracker.on_scroll(700.0, 600.0));
        assert_eq!(tracker.active(), Id::Experience);

        assert!(tracker.on_scroll(1900.0, 600.0));
        assert_eq!(tracker.active(), Id::Projects);
    }

    #[test]
    fn unchanged_section_reports_no_change() {
        let mut tracker = scenario();
        assert!(!tracker.on_scroll(0.0, 600.0));
        assert!(!tracker.on_scroll(100.0, 600.0));
    }

    #[test]
    fn boundaries_are_half_open() {
        let mut tracker = scenario();
        // probe = 500 + 300 = 800, the first pixel of experience
        tracker.on_scroll(500.0, 600.0);
        assert_eq!(tracker.active(), Id::Experience);

        // probe = 799.5 stays in about
        tracker.on_scroll(499.5, 600.0);
        assert_eq!(tracker.active(), Id::About);
    }

    #[test]
    fn probe_outside_all_regions_keeps_active() {
        let mut tracker = scenario();
        tracker.on_scroll(1900.0, 600.0);
        assert_eq!(tracker.active(), Id::Projects);

        assert!(!tracker.on_scroll(9000.0, 600.0));
        assert_eq!(tracker.active(), Id::Projects);

        assert!(!tracker.on_scroll(-5000.0, 600.0));
        assert_eq!(tracker.active(), Id::Projects);
    }

    #[test]
    fn overlapping_regions_prefer_document_order() {
        let mut tracker = SectionTracker::new(Id::Projects);
        tracker.recompute_regions(vec![
            Region::new(Id::About, 0.0, 1000.0),
            Region::new(Id::Experience, 500.0, 1000.0),
        ]);
        tracker.on_scroll(400.0, 400.0);
        assert_eq!(tracker.active(), Id::About);
    }

    #[test]
    fn navigate_sets_active_immediately() {
        let mut tracker = scenario();
        let request = tracker.navigate_to(Id::Projects);
        assert_eq!(tracker.active(), Id::Projects);
        assert_eq!(
            request,
            Some(ScrollRequest {
                id: Id::Projects,
                target: 2000.0
            })
        );
    }

    #[test]
    fn navigate_without_geometry_returns_no_request() {
        let mut tracker = SectionTracker::new(Id::About);
        assert_eq!(tracker.navigate_to(Id::Experience), None);
        assert_eq!(tracker.active(), Id::Experience);
    }

    #[test]
    fn later_scroll_corrects_navigation() {
        let mut tracker = scenario();
        tracker.navigate_to(Id::Projects);
        // the page could not scroll far enough to reach projects
        tracker.on_scroll(1200.0, 600.0);
        assert_eq!(tracker.active(), Id::Experience);
    }

    #[test]
    fn recompute_keeps_active_until_next_scroll() {
        let mut tracker = scenario();
        tracker.on_scroll(700.0, 600.0);
        tracker.recompute_regions(vec![Region::new(Id::About, 0.0, 5000.0)]);
        assert_eq!(tracker.active(), Id::Experience);

        tracker.on_scroll(700.0, 600.0);
        assert_eq!(tracker.active(), Id::About);
    }

    #[test]
    fn nan_probe_matches_nothing() {
        let mut tracker = scenario();
        assert!(!tracker.on_scroll(f32::NAN, 600.0));
        assert_eq!(tracker.active(), Id::About);
    }

    #[test]
    fn document_extent_is_furthest_end() {
        assert_eq!(scenario().document_extent(), 3500.0);
        assert_eq!(SectionTracker::new(Id::About).document_extent(), 0.0);
    }

    fn sorted_regions() -> impl Strategy<Value = Vec<Region<usize>>> {
        prop::collection::vec((0.0f32..500.0, 1.0f32..800.0), 1..8).prop_map(|spans| {
            let mut cursor = 0.0;
            spans
                .into_iter()
                .enumerate()
                .map(|(index, (gap, extent))| {
                    let region = Region::new(index, cursor + gap, extent);
                    cursor = region.end();
                    region
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn at_most_one_region_contains_any_probe(
            regions in sorted_regions(),
            point in -100.0f32..10_000.0,
        ) {
            let hits = regions.iter().filter(|region| region.contains(point)).count();
            prop_assert!(hits <= 1);
        }

        #[test]
        fn on_scroll_selects_containing_region_or_keeps_previous(
            regions in sorted_regions(),
            initial in 0usize..8,
            offset in -500.0f32..10_000.0,
            viewport in 0.0f32..2_000.0,
        ) {
            let mut tracker = SectionTracker::new(initial);
            tracker.recompute_regions(regions.clone());
            tracker.on_scroll(offset, viewport);

            let point = probe(offset, viewport);
            match regions.iter().find(|region| region.contains(point)) {
                Some(region) => prop_assert_eq!(tracker.active(), region.id),
                None => prop_assert_eq!(tracker.active(), initial),
            }
        }
    }
}
