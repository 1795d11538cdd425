/// Distance below the top of the viewport at which a section counts as current.
pub const ACTIVE_PROBE_OFFSET: f64 = 100.0;
/// Height of the fixed nav bar; smooth scrolling stops this far above a section.
pub const NAV_SCROLL_OFFSET: f64 = 70.0;
pub const PARALLAX_RATE: f64 = -0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.3;
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Returns the section containing `scroll_y + 100`.
///
/// When ranges overlap the last section in document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&SectionBounds> {
    let probe = scroll_y + ACTIVE_PROBE_OFFSET;
    sections.iter().rev().find(|section| section.contains(probe))
}

/// The currently highlighted nav link. A scroll position outside every
/// section keeps the previous highlight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavHighlight {
    active: Option<String>,
}

impl NavHighlight {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Returns `true` when the highlighted link changed.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64) -> bool {
        let Some(section) = active_section(sections, scroll_y) else {
            return false;
        };

        if self.is_active(&section.id) {
            return false;
        }

        self.active = Some(section.id.clone());
        true
    }
}

pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }

    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn parallax_offset(scroll_y: f64, orb_index: usize) -> f64 {
    let speed = (orb_index as f64 + 1.0) * PARALLAX_SPEED_STEP;
    scroll_y * PARALLAX_RATE * speed
}

pub fn nav_scroll_target(section_top: f64) -> f64 {
    section_top - NAV_SCROLL_OFFSET
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Throttled {
    Run,
    /// Suppressed; a trailing run is due after `delay_ms`.
    Defer { delay_ms: f64 },
}

/// Admits at most one scroll recomputation per interval.
#[derive(Clone, Debug)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last_admitted: Option<f64>,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE_MS)
    }
}

impl ScrollThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_admitted: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> Throttled {
        match self.last_admitted {
            Some(last) if now_ms - last < self.interval_ms => Throttled::Defer {
                delay_ms: (last + self.interval_ms - now_ms).max(0.0),
            },
            _ => {
                self.last_admitted = Some(now_ms);
                Throttled::Run
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("skills", 1400.0, 700.0),
        ]
    }

    #[test]
    fn contiguous_sections_resolve_to_the_containing_one() {
        let sections = page();

        assert_eq!(active_section(&sections, 0.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(active_section(&sections, 699.0).map(|s| s.id.as_str()), Some("home"));
        assert_eq!(active_section(&sections, 700.0).map(|s| s.id.as_str()), Some("about"));
        assert_eq!(active_section(&sections, 1999.0).map(|s| s.id.as_str()), Some("skills"));
        assert_eq!(active_section(&sections, 2000.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_last_match() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 2000.0),
            SectionBounds::new("inner", 500.0, 300.0),
        ];

        assert_eq!(active_section(&sections, 500.0).map(|s| s.id.as_str()), Some("inner"));
        assert_eq!(active_section(&sections, 900.0).map(|s| s.id.as_str()), Some("outer"));
    }

    #[test]
    fn highlight_survives_positions_outside_every_section() {
        let sections = page();
        let mut highlight = NavHighlight::default();

        assert!(highlight.update(&sections, 750.0));
        assert_eq!(highlight.active(), Some("about"));
        assert!(!highlight.update(&sections, 760.0));
        assert!(!highlight.update(&sections, 5000.0));
        assert_eq!(highlight.active(), Some("about"));
    }

    #[test]
    fn exactly_one_link_is_active_for_every_covered_position() {
        let sections = page();
        let mut highlight = NavHighlight::default();

        for scroll_y in (0..1900).step_by(37) {
            highlight.update(&sections, f64::from(scroll_y));
            let active_count = sections
                .iter()
                .filter(|section| highlight.is_active(&section.id))
                .count();
            assert_eq!(active_count, 1, "scroll_y = {scroll_y}");
        }
    }

    #[test]
    fn progress_stays_within_bounds() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(2600.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn progress_is_zero_when_nothing_scrolls() {
        assert_eq!(scroll_progress(0.0, 900.0, 900.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 900.0), 0.0);
    }

    #[test]
    fn parallax_speed_grows_with_orb_index() {
        assert!((parallax_offset(100.0, 0) - -15.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 1) - -30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(0.0, 2), 0.0);
    }

    #[test]
    fn nav_target_leaves_room_for_the_fixed_header() {
        assert_eq!(nav_scroll_target(800.0), 730.0);
    }

    #[test]
    fn throttle_admits_once_per_interval() {
        let mut throttle = ScrollThrottle::default();

        assert_eq!(throttle.admit(0.0), Throttled::Run);
        assert!(matches!(throttle.admit(8.0), Throttled::Defer { .. }));
        assert!(matches!(throttle.admit(15.9), Throttled::Defer { .. }));
        assert_eq!(throttle.admit(16.0), Throttled::Run);
        assert_eq!(throttle.admit(100.0), Throttled::Run);
    }

    #[test]
    fn burst_ends_in_trailing_run_at_interval_boundary() {
        let mut throttle = ScrollThrottle::default();

        assert_eq!(throttle.admit(100.0), Throttled::Run);
        assert_eq!(throttle.admit(104.0), Throttled::Defer { delay_ms: 12.0 });
        assert_eq!(throttle.admit(110.0), Throttled::Defer { delay_ms: 6.0 });

        // The last suppressed event still schedules a run, due when the
        // interval that started at 100 ms closes.
        let Throttled::Defer { delay_ms } = throttle.admit(115.0) else {
            panic!("event inside the interval must be deferred");
        };
        assert_eq!(115.0 + delay_ms, 116.0);
    }
}
