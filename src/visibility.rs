pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_CLASS: &str = "animate";
pub const SKILL_FILL_DELAY_MS: u32 = 200;
pub const COUNT_UP_DURATION_MS: u32 = 2_000;
pub const COUNT_UP_FRAME_MS: u32 = 16;
pub const CARD_STAGGER_MS: u32 = 100;

/// One-shot latch for a single observed element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Pending,
    Revealed,
}

impl RevealLatch {
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || *self == Self::Revealed {
            return false;
        }

        *self = Self::Revealed;
        true
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

/// Parses a `data-level` attribute into a 0-100 fill percentage.
pub fn parse_level(raw: &str) -> Option<u8> {
    let level = raw.trim().parse::<f64>().ok()?;
    if !level.is_finite() {
        return None;
    }

    Some(level.clamp(0.0, 100.0).round() as u8)
}

pub fn fill_width(level: u8) -> String {
    format!("{level}%")
}

pub fn card_stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(CARD_STAGGER_MS)
}

/// Where a stat's number comes from. Only static numbers are animated;
/// externally sourced ones arrive asynchronously and must not be counted up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Static,
    ViewCounter,
}

impl StatSource {
    pub fn animates(self) -> bool {
        matches!(self, Self::Static)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    suffix: &'static str,
    step: f64,
    current: f64,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u64, suffix: &'static str) -> Self {
        let frames = f64::from(COUNT_UP_DURATION_MS / COUNT_UP_FRAME_MS);
        Self {
            target,
            suffix,
            step: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }

    /// Reads the leading integer of a stat label such as `"500+"`, keeping
    /// a `+` suffix for every frame.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix = if trimmed.contains('+') { "+" } else { "" };

        Some(Self::new(target, suffix))
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current += self.step;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.finished = true;
            }
        }

        format!("{}{}", self.current.floor() as u64, self.suffix)
    }

    pub fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();

        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn level_is_clamped_to_percent_range() {
        assert_eq!(parse_level("90"), Some(90));
        assert_eq!(parse_level(" 72.6 "), Some(73));
        assert_eq!(parse_level("140"), Some(100));
        assert_eq!(parse_level("-5"), Some(0));
        assert_eq!(parse_level("high"), None);
        assert_eq!(parse_level("NaN"), None);
        assert_eq!(fill_width(85), "85%");
    }

    #[test]
    fn count_up_ends_on_target_with_suffix() {
        let mut counter = CountUp::parse("500+").expect("numeric label");
        let mut frames = Vec::new();
        while !counter.is_finished() {
            frames.push(counter.tick());
        }

        assert_eq!(frames.last().map(String::as_str), Some("500+"));
        assert!(frames.iter().all(|frame| frame.ends_with('+')));
        assert!(frames.len() <= 126);
    }

    #[test]
    fn count_up_is_monotonic() {
        let mut counter = CountUp::parse("37").expect("numeric label");
        let mut previous = 0;
        while !counter.is_finished() {
            let value: u64 = counter.tick().parse().expect("plain number");
            assert!(value >= previous);
            previous = value;
        }

        assert_eq!(previous, 37);
        assert_eq!(counter.final_text(), "37");
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut counter = CountUp::new(0, "");

        assert_eq!(counter.tick(), "0");
        assert!(counter.is_finished());
    }

    #[test]
    fn non_numeric_label_is_not_animated() {
        assert_eq!(CountUp::parse("many"), None);
        assert_eq!(CountUp::parse(""), None);
    }

    #[test]
    fn only_static_stats_animate() {
        assert!(StatSource::Static.animates());
        assert!(!StatSource::ViewCounter.animates());
    }

    #[test]
    fn cards_are_staggered_by_index() {
        assert_eq!(card_stagger_delay(0), 0);
        assert_eq!(card_stagger_delay(3), 300);
    }
}
