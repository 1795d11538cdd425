use crate::visibility::StatSource;

#[derive(Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "experience", label: "Experience" },
    NavSection { id: "contact", label: "Contact" },
];

#[derive(Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub token: &'static str,
    pub label: &'static str,
}

pub const SKILL_FILTERS: &[FilterOption] = &[
    FilterOption { token: "all", label: "All" },
    FilterOption { token: "frontend", label: "Frontend" },
    FilterOption { token: "backend", label: "Backend" },
    FilterOption { token: "tools", label: "Tools" },
];

pub const PROJECT_FILTERS: &[FilterOption] = &[
    FilterOption { token: "all", label: "All" },
    FilterOption { token: "web", label: "Web" },
    FilterOption { token: "mobile", label: "Mobile" },
    FilterOption { token: "ai", label: "AI" },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    /// Raw `data-level` attribute value.
    pub level: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", category: "frontend", level: "95" },
    Skill { name: "React", category: "frontend", level: "90" },
    Skill { name: "Vue.js", category: "frontend", level: "80" },
    Skill { name: "Node.js", category: "backend", level: "88" },
    Skill { name: "PostgreSQL", category: "backend", level: "78" },
    Skill { name: "Python", category: "backend", level: "75" },
    Skill { name: "Git", category: "tools", level: "92" },
    Skill { name: "Docker", category: "tools", level: "70" },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Stat {
    pub id: Option<&'static str>,
    pub value: &'static str,
    pub label: &'static str,
    pub source: StatSource,
}

pub const STATS: &[Stat] = &[
    Stat {
        id: None,
        value: "50+",
        label: "Projects Completed",
        source: StatSource::Static,
    },
    Stat {
        id: None,
        value: "5+",
        label: "Years Experience",
        source: StatSource::Static,
    },
    Stat {
        id: Some("view-counter"),
        value: "...",
        label: "Portfolio Views",
        source: StatSource::ViewCounter,
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub organisation: &'static str,
    pub summary: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2022 - Present",
        role: "Senior Full-Stack Developer",
        organisation: "Brightline Labs",
        summary: "Leading a team of four building real-time collaboration tools.",
    },
    TimelineEntry {
        period: "2020 - 2022",
        role: "Full-Stack Developer",
        organisation: "Northwind Commerce",
        summary: "Built the merchant dashboard and order pipeline used by 50+ stores.",
    },
    TimelineEntry {
        period: "2019 - 2020",
        role: "Frontend Developer",
        organisation: "Pixel & Co.",
        summary: "Shipped responsive marketing sites and a component library.",
    },
];

pub const GRADIENT_ORBS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::parse_level;

    #[test]
    fn every_skill_level_is_a_valid_percentage() {
        for skill in SKILLS {
            assert!(parse_level(skill.level).is_some(), "{}", skill.name);
        }
    }

    #[test]
    fn only_the_view_counter_is_externally_sourced() {
        let external: Vec<_> = STATS
            .iter()
            .filter(|stat| !stat.source.animates())
            .map(|stat| stat.id)
            .collect();

        assert_eq!(external, vec![Some("view-counter")]);
    }

    #[test]
    fn filter_groups_start_with_all() {
        assert_eq!(SKILL_FILTERS[0].token, crate::filter::ALL);
        assert_eq!(PROJECT_FILTERS[0].token, crate::filter::ALL);
    }
}
