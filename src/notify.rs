pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;
/// When the CSS fade-out begins; it runs for the remaining 300 ms.
pub const NOTIFICATION_FADE_START_MS: u32 = 4_700;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            created_at_ms: now_ms,
        });
        id
    }

    pub fn expire(&mut self, now_ms: f64) {
        let lifetime = f64::from(NOTIFICATION_LIFETIME_MS);
        self.items
            .retain(|item| now_ms - item.created_at_ms < lifetime);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_notification_carries_success_class() {
        let mut center = NotificationCenter::default();
        center.push("x", Severity::Success, 0.0);

        assert_eq!(center.items().len(), 1);
        assert_eq!(
            center.items()[0].severity.class_name(),
            "notification notification-success"
        );
    }

    #[test]
    fn notification_is_removed_after_lifetime() {
        let mut center = NotificationCenter::default();
        center.push("x", Severity::Success, 1_000.0);

        center.expire(5_999.0);
        assert_eq!(center.items().len(), 1);

        center.expire(6_000.0);
        assert!(center.items().is_empty());
    }

    #[test]
    fn concurrent_notifications_are_independent() {
        let mut center = NotificationCenter::default();
        let first = center.push("same", Severity::Info, 0.0);
        let second = center.push("same", Severity::Info, 2_000.0);

        assert_ne!(first, second);
        assert_eq!(center.items().len(), 2);

        center.expire(5_000.0);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].id, second);
    }

    #[test]
    fn dismiss_removes_a_single_entry() {
        let mut center = NotificationCenter::default();
        let error = center.push("failed", Severity::Error, 0.0);
        center.push("ok", Severity::Success, 0.0);
        center.dismiss(error);

        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].severity, Severity::Success);
    }

    #[test]
    fn scheduled_removal_by_id_ignores_clock_skew() {
        let mut center = NotificationCenter::default();
        let id = center.push("x", Severity::Success, 1_000.0);
        center.push("later", Severity::Info, 1_500.0);

        // A timer firing a millisecond early would miss with `expire`.
        center.expire(5_999.0);
        assert_eq!(center.items().len(), 2);

        center.dismiss(id);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "later");
    }

    #[test]
    fn fade_starts_before_removal() {
        assert!(NOTIFICATION_FADE_START_MS + 300 <= NOTIFICATION_LIFETIME_MS);
    }
}
