use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    MissingField {
        field: &'static str,
    },
    UnexpectedValue {
        field: &'static str,
        allowed: &'static [&'static str],
        actual: String,
    },
    DoubleOptinOutOfSet {
        actual: u8,
    },
    OverwriteOutOfRange {
        actual: u8,
    },
    MissingCountFilter,
    SearchRequiresContactType,
    InvalidUrl {
        field: &'static str,
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingField { field } => {
                write!(f, "missing required parameter: {field}")
            }
            Self::UnexpectedValue {
                field,
                allowed,
                actual,
            } => {
                write!(
                    f,
                    "{field} accepts only {}: got {actual:?}",
                    allowed.join(", ")
                )
            }
            Self::DoubleOptinOutOfSet { actual } => {
                write!(f, "double_optin accepts only 0, 3 or 4: got {actual}")
            }
            Self::OverwriteOutOfRange { actual } => {
                write!(f, "overwrite accepts only values 0..=2: got {actual}")
            }
            Self::MissingCountFilter => {
                write!(
                    f,
                    "at least one of tag_id or contact type filter is required"
                )
            }
            Self::SearchRequiresContactType => {
                write!(f, "the search filter requires a contact type filter")
            }
            Self::InvalidUrl { field, input } => {
                write!(f, "{field} is not a valid absolute URL: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
