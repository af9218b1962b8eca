use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// UniSender `api_key` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by UniSender (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// API locale: the language segment of the endpoint URL and the language of
/// error messages returned by the service.
pub enum Locale {
    #[default]
    Ru,
    En,
    Ua,
}

impl Locale {
    /// Parse a locale string, case-insensitively.
    ///
    /// Returns `None` for anything outside the fixed set; configuration
    /// treats that as "keep the current locale", never as an error.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "ru" => Some(Self::Ru),
            "en" => Some(Self::En),
            "ua" => Some(Self::Ua),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::Ua => "ua",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kind of contact a subscription operation addresses (`contact_type`).
pub enum ContactType {
    Email,
    Phone,
}

impl ContactType {
    /// Form field name used by UniSender (`contact_type`).
    pub const FIELD: &'static str = "contact_type";

    const ALLOWED: &'static [&'static str] = &["email", "phone"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Parse from the wire representation; anything but `email`/`phone` is
    /// rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(ValidationError::UnexpectedValue {
                field: Self::FIELD,
                allowed: Self::ALLOWED,
                actual: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Contact-type filter of the contact-count query (`params[type]`).
///
/// Distinct from [`ContactType`]: the count endpoint filters on `address`
/// (email address) or `phone`.
pub enum ContactSearchType {
    Address,
    Phone,
}

impl ContactSearchType {
    /// Form field name used by UniSender (`type`).
    pub const FIELD: &'static str = "type";

    const ALLOWED: &'static [&'static str] = &["address", "phone"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Phone => "phone",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input {
            "address" => Ok(Self::Address),
            "phone" => Ok(Self::Phone),
            other => Err(ValidationError::UnexpectedValue {
                field: Self::FIELD,
                allowed: Self::ALLOWED,
                actual: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Email delivery status filter (`email_status`).
pub enum EmailStatus {
    New,
    Invited,
    Active,
    Inactive,
    Unsubscribed,
    Blocked,
    ActivationRequested,
}

impl EmailStatus {
    /// Form field name used by UniSender (`email_status`).
    pub const FIELD: &'static str = "email_status";

    const ALLOWED: &'static [&'static str] = &[
        "new",
        "invited",
        "active",
        "inactive",
        "unsubscribed",
        "blocked",
        "activation_requested",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Invited => "invited",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unsubscribed => "unsubscribed",
            Self::Blocked => "blocked",
            Self::ActivationRequested => "activation_requested",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input {
            "new" => Ok(Self::New),
            "invited" => Ok(Self::Invited),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "unsubscribed" => Ok(Self::Unsubscribed),
            "blocked" => Ok(Self::Blocked),
            "activation_requested" => Ok(Self::ActivationRequested),
            other => Err(ValidationError::UnexpectedValue {
                field: Self::FIELD,
                allowed: Self::ALLOWED,
                actual: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Phone delivery status filter (`phone_status`).
pub enum PhoneStatus {
    New,
    Active,
    Inactive,
    Unsubscribed,
    Blocked,
}

impl PhoneStatus {
    /// Form field name used by UniSender (`phone_status`).
    pub const FIELD: &'static str = "phone_status";

    const ALLOWED: &'static [&'static str] =
        &["new", "active", "inactive", "unsubscribed", "blocked"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unsubscribed => "unsubscribed",
            Self::Blocked => "blocked",
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input {
            "new" => Ok(Self::New),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "unsubscribed" => Ok(Self::Unsubscribed),
            "blocked" => Ok(Self::Blocked),
            other => Err(ValidationError::UnexpectedValue {
                field: Self::FIELD,
                allowed: Self::ALLOWED,
                actual: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Subscription confirmation mode (`double_optin`).
///
/// Invariant: one of `0`, `3` or `4`.
pub struct DoubleOptin(u8);

impl DoubleOptin {
    /// Form field name used by UniSender (`double_optin`).
    pub const FIELD: &'static str = "double_optin";

    /// Values the service accepts.
    pub const ALLOWED: &'static [u8] = &[0, 3, 4];

    /// Create a validated [`DoubleOptin`].
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !Self::ALLOWED.contains(&value) {
            return Err(ValidationError::DoubleOptinOutOfSet { actual: value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Field/tag overwrite mode of the subscribe operation (`overwrite`).
///
/// Invariant: `0..=2`.
pub struct OverwriteMode(u8);

impl OverwriteMode {
    /// Form field name used by UniSender (`overwrite`).
    pub const FIELD: &'static str = "overwrite";

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 2;

    /// Create a validated [`OverwriteMode`].
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::OverwriteOutOfRange { actual: value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Contact tags (`tags`).
///
/// The service honors at most [`Tags::MAX`] tags per contact; excess entries
/// are dropped on construction rather than rejected.
pub struct Tags(Vec<String>);

impl Tags {
    /// Form field name used by UniSender (`tags`).
    pub const FIELD: &'static str = "tags";

    /// Maximum number of tags the service accepts.
    pub const MAX: usize = 10;

    /// Collect tags, keeping only the first [`Tags::MAX`] entries.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().take(Self::MAX).map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined wire representation.
    pub fn join(&self) -> String {
        self.0.join(",")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Collection of mailing-list ids (`list_ids`).
///
/// Encoded as comma-joined decimal integers.
pub struct ListIds(Vec<u64>);

impl ListIds {
    /// Form field name used by UniSender (`list_ids`).
    pub const FIELD: &'static str = "list_ids";

    pub fn new(ids: Vec<u64>) -> Self {
        Self(ids)
    }

    /// Collect ids from string input, silently dropping entries that are not
    /// decimal integers.
    pub fn from_strs<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            ids.into_iter()
                .filter_map(|id| id.as_ref().trim().parse::<u64>().ok())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Comma-joined wire representation.
    pub fn join(&self) -> String {
        self.0
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<Vec<u64>> for ListIds {
    fn from(ids: Vec<u64>) -> Self {
        Self::new(ids)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Callback URL the export-contacts notification is delivered to
/// (`notify_url`).
///
/// Invariant: a parseable absolute URL.
pub struct NotifyUrl(String);

impl NotifyUrl {
    /// Form field name used by UniSender (`notify_url`).
    pub const FIELD: &'static str = "notify_url";

    /// Create a validated [`NotifyUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            field: Self::FIELD,
            input: trimmed.to_owned(),
        })?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
