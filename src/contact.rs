use thiserror::Error;
use url::{form_urlencoded, Url};

use crate::config::SiteConfig;
use crate::notify::Severity;

pub const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Error sending message. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub const FIELDS: [&'static str; 4] = ["name", "email", "subject", "message"];

    /// Builds a message from named form fields; unknown names are ignored.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut message = Self::default();
        for (name, value) in fields {
            match name {
                "name" => message.name = value,
                "email" => message.email = value,
                "subject" => message.subject = value,
                "message" => message.message = value,
                _ => {}
            }
        }
        message
    }

    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.name)
            .append_pair("email", &self.email)
            .append_pair("subject", &self.subject)
            .append_pair("message", &self.message)
            .finish()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("form request failed: {0}")]
    Network(String),
    #[error("form endpoint rejected submission with status {0}")]
    Rejected(u16),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Stand-in for a real service: wait, then report success.
    Simulated { delay_ms: u32 },
    Endpoint(Url),
}

impl Delivery {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.form_endpoint {
            Some(url) => Self::Endpoint(url.clone()),
            None => Self::Simulated {
                delay_ms: config.submit_delay_ms,
            },
        }
    }
}

/// The submit control: disabled and relabelled while a submission runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    idle_label: String,
    sending: bool,
}

impl SubmitButton {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            idle_label: idle_label.into(),
            sending: false,
        }
    }

    pub fn label(&self) -> &str {
        if self.sending {
            PENDING_LABEL
        } else {
            &self.idle_label
        }
    }

    pub fn disabled(&self) -> bool {
        self.sending
    }

    /// Returns `false` if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.sending {
            return false;
        }

        self.sending = true;
        true
    }

    pub fn finish(&mut self) {
        self.sending = false;
    }
}

pub fn outcome_notice(outcome: &Result<(), FormError>) -> (&'static str, Severity) {
    match outcome {
        Ok(()) => (SUCCESS_MESSAGE, Severity::Success),
        Err(_) => (ERROR_MESSAGE, Severity::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage::from_fields([
            ("name", "Ada Lovelace".to_string()),
            ("email", "ada@example.com".to_string()),
            ("subject", "Hello & welcome".to_string()),
            ("message", "Line one\nline two".to_string()),
            ("honeypot", "ignored".to_string()),
        ])
    }

    #[test]
    fn fields_are_collected_by_name() {
        let message = message();

        assert_eq!(message.name, "Ada Lovelace");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.subject, "Hello & welcome");
    }

    #[test]
    fn form_body_is_url_encoded() {
        assert_eq!(
            message().to_form_body(),
            "name=Ada+Lovelace&email=ada%40example.com&subject=Hello+%26+welcome&message=Line+one%0Aline+two"
        );
    }

    #[test]
    fn submit_button_rejects_double_submission() {
        let mut button = SubmitButton::new("Send Message");

        assert!(button.begin());
        assert_eq!(button.label(), PENDING_LABEL);
        assert!(button.disabled());
        assert!(!button.begin());

        button.finish();
        assert_eq!(button.label(), "Send Message");
        assert!(!button.disabled());
    }

    #[test]
    fn outcome_maps_to_notification() {
        assert_eq!(outcome_notice(&Ok(())), (SUCCESS_MESSAGE, Severity::Success));
        assert_eq!(
            outcome_notice(&Err(FormError::Rejected(422))),
            (ERROR_MESSAGE, Severity::Error)
        );
    }

    #[test]
    fn delivery_is_simulated_without_form_id() {
        let config = SiteConfig::default();

        assert_eq!(
            Delivery::from_config(&config),
            Delivery::Simulated { delay_ms: 2_000 }
        );
    }

    #[test]
    fn delivery_uses_configured_endpoint() {
        let config = SiteConfig::from_lookup(|name| {
            (name == "PORTFOLIO_FORM_ID").then(|| "abc123".to_string())
        });

        match Delivery::from_config(&config) {
            Delivery::Endpoint(url) => assert_eq!(url.as_str(), "https://formspree.io/f/abc123"),
            other => panic!("expected endpoint delivery, got {other:?}"),
        }
    }
}
