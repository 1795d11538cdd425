use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon for the toggle: the sun offers the way back to light.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    store
        .read(THEME_KEY)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or(Theme::Light)
}

pub fn persist_theme(store: &impl KeyValueStore, theme: Theme) {
    store.write(THEME_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_preference_defaults_to_light() {
        let store = MemoryStore::default();

        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn unrecognised_preference_defaults_to_light() {
        let store = MemoryStore::with_entry(THEME_KEY, "sepia");

        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn toggle_round_trips_through_storage() {
        let store = MemoryStore::default();
        let next = load_theme(&store).toggled();
        persist_theme(&store, next);

        assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(load_theme(&store).toggled(), Theme::Light);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
