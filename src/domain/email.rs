use crate::domain::params::{ParamValue, Params};
use crate::domain::validation::ValidationError;

/// Individual email message for the `sendEmail` operation.
///
/// A plain field collector: setters accumulate state and
/// [`EmailMessage::into_params`] checks the required fields and flattens the
/// message into an argument bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailMessage {
    email: String,
    sender_email: String,
    sender_name: String,
    subject: String,
    body: String,
    attachments: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

/// Message headers the service honors; everything else is dropped.
const ALLOWED_HEADERS: &[&str] = &["Reply-To", "Priority"];

impl EmailMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipient address. A display name is allowed:
    /// `Vasya Pupkin <vpupkin@example.com>`.
    pub fn to(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sender email address.
    pub fn from(mut self, sender_email: impl Into<String>) -> Self {
        self.sender_email = sender_email.into();
        self
    }

    /// Sender display name.
    pub fn from_name(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = sender_name.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Message body, HTML.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach a file by name and content.
    pub fn attachment(mut self, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        self.attachments.push((file_name.into(), content.into()));
        self
    }

    /// Add a message header. Only `Reply-To` and `Priority` are honored;
    /// anything else is silently dropped. A value of the form
    /// `Name: value` is split and re-checked against the allow-list.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(header) = check_header(&name.into(), &value.into()) {
            self.headers.push(header);
        }
        self
    }

    /// Replace all headers, filtering each through the allow-list.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.clear();
        for (name, value) in headers {
            self = self.header(name, value);
        }
        self
    }

    /// Flatten the message into an argument bag for `sendEmail`.
    ///
    /// Fails with a missing-field error when any of the required fields
    /// (recipient, sender email, sender name, subject, body) is empty.
    pub fn into_params(self) -> Result<Params, ValidationError> {
        for (field, value) in [
            ("email", &self.email),
            ("sender_name", &self.sender_name),
            ("sender_email", &self.sender_email),
            ("subject", &self.subject),
            ("body", &self.body),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }

        let mut params = Params::new()
            .with("email", self.email)
            .with("sender_email", self.sender_email)
            .with("sender_name", self.sender_name)
            .with("subject", self.subject)
            .with("body", self.body);

        if !self.attachments.is_empty() {
            params.set("attachments", ParamValue::map(self.attachments));
        }

        if !self.headers.is_empty() {
            let joined = self
                .headers
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join("\n");
            params.set("headers", joined);
        }

        Ok(params)
    }
}

fn check_header(name: &str, value: &str) -> Option<(String, String)> {
    let (name, value) = match value.split_once(':') {
        Some((embedded_name, embedded_value)) => (embedded_name, embedded_value),
        None => (name, value),
    };

    let name = name.trim();
    if ALLOWED_HEADERS.contains(&name) {
        Some((name.to_owned(), value.trim().to_owned()))
    } else {
        None
    }
}
