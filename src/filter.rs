pub const ALL: &str = "all";
pub const STAGGER_STEP_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// The item's category must equal the token.
    Exact,
    /// The item's category list must contain the token as a substring.
    Contains,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemVisibility {
    pub visible: bool,
    pub delay_ms: u32,
}

/// Selection state of one filter button group. Exactly one token is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterGroup {
    mode: MatchMode,
    active: String,
}

impl FilterGroup {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            active: ALL.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.active == token
    }

    pub fn select(&mut self, token: &str) {
        token.clone_into(&mut self.active);
    }

    pub fn matches(&self, category: &str) -> bool {
        if self.active == ALL {
            return true;
        }

        match self.mode {
            MatchMode::Exact => category == self.active,
            MatchMode::Contains => category.contains(self.active.as_str()),
        }
    }

    /// Visibility and re-entry delay for each item, in item order.
    pub fn apply<'a, I>(&self, categories: I) -> Vec<ItemVisibility>
    where
        I: IntoIterator<Item = &'a str>,
    {
        categories
            .into_iter()
            .enumerate()
            .map(|(index, category)| {
                let visible = self.matches(category);
                let delay_ms = if visible {
                    u32::try_from(index)
                        .unwrap_or(u32::MAX)
                        .saturating_mul(STAGGER_STEP_MS)
                } else {
                    0
                };
                ItemVisibility { visible, delay_ms }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILLS: [&str; 5] = ["frontend", "backend", "frontend", "tools", "backend"];
    const PROJECTS: [&str; 4] = ["web ai", "web", "mobile", "web"];

    fn visible(outcome: &[ItemVisibility]) -> Vec<usize> {
        outcome
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visible)
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn exact_mode_shows_matching_skills_only() {
        let mut group = FilterGroup::new(MatchMode::Exact);
        group.select("frontend");

        assert_eq!(visible(&group.apply(SKILLS)), vec![0, 2]);
        assert!(group.is_active("frontend"));
        assert!(!group.is_active(ALL));
    }

    #[test]
    fn contains_mode_matches_multi_category_cards() {
        let mut group = FilterGroup::new(MatchMode::Contains);
        group.select("ai");

        assert_eq!(visible(&group.apply(PROJECTS)), vec![0]);

        group.select("web");
        assert_eq!(visible(&group.apply(PROJECTS)), vec![0, 1, 3]);
    }

    #[test]
    fn all_shows_everything_regardless_of_prior_selection() {
        let mut group = FilterGroup::new(MatchMode::Exact);
        group.select("tools");
        group.select(ALL);

        assert_eq!(visible(&group.apply(SKILLS)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let mut group = FilterGroup::new(MatchMode::Contains);
        group.select("mobile");
        let once = group.apply(PROJECTS);
        group.select("mobile");

        assert_eq!(group.apply(PROJECTS), once);
    }

    #[test]
    fn visible_items_are_staggered_by_index() {
        let mut group = FilterGroup::new(MatchMode::Exact);
        group.select("backend");
        let outcome = group.apply(SKILLS);

        assert_eq!(outcome[1], ItemVisibility { visible: true, delay_ms: 100 });
        assert_eq!(outcome[4], ItemVisibility { visible: true, delay_ms: 400 });
        assert_eq!(outcome[0], ItemVisibility { visible: false, delay_ms: 0 });
    }

    #[test]
    fn new_group_starts_on_all() {
        let group = FilterGroup::new(MatchMode::Exact);

        assert_eq!(group.active(), ALL);
    }
}
