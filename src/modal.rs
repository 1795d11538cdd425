use crate::projects::{find_project, ProjectRecord};

pub const CLOSE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    project: Option<&'static ProjectRecord>,
}

impl ModalState {
    /// Opens the record for `id`. An unknown id leaves the state untouched
    /// and returns `None` so the caller can report it.
    pub fn open(&mut self, id: &str) -> Option<&'static ProjectRecord> {
        let project = find_project(id)?;
        self.project = Some(project);
        Some(project)
    }

    pub fn close(&mut self) {
        self.project = None;
    }

    /// Escape closes the overlay wherever focus is. Returns whether the
    /// key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != CLOSE_KEY {
            return false;
        }

        self.close();
        true
    }

    pub fn current(&self) -> Option<&'static ProjectRecord> {
        self.project
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_known_project_sets_title_and_visibility() {
        let mut modal = ModalState::default();
        let opened = modal.open("dashboard");

        assert_eq!(opened.map(|project| project.title), Some("E-commerce Dashboard"));
        assert!(modal.is_open());
        assert!(modal.scroll_locked());
    }

    #[test]
    fn open_unknown_project_leaves_state_unchanged() {
        let mut closed = ModalState::default();
        assert_eq!(closed.open("nonexistent-id"), None);
        assert_eq!(closed, ModalState::default());

        let mut opened = ModalState::default();
        opened.open("fitness-app");
        let before = opened;
        assert_eq!(opened.open("nonexistent-id"), None);
        assert_eq!(opened, before);
    }

    #[test]
    fn close_after_open_restores_scrolling() {
        for id in ["ai-generator", "dashboard", "nonexistent-id"] {
            let mut modal = ModalState::default();
            modal.open(id);
            modal.close();

            assert!(!modal.is_open());
            assert!(!modal.scroll_locked());
        }
    }

    #[test]
    fn escape_closes_and_other_keys_do_not() {
        let mut modal = ModalState::default();
        modal.open("task-manager");

        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }
}
