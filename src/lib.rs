//! Typed Rust client for the UniSender email/SMS marketing HTTP API.
//!
//! The crate is split into a domain layer of strong types (the method
//! registry, validated argument values, typed requests), a transport layer
//! for wire-format quirks, and a small client layer orchestrating dispatch.
//! Every documented API method is reachable: the common contact-list
//! operations through typed requests, everything else through
//! [`UnisenderClient::call`] with a hand-built [`Params`] bag.
//!
//! ```rust,no_run
//! use unisender::{ApiKey, ContactType, Subscribe, Tags, UnisenderClient, Unsubscribe};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unisender::UnisenderError> {
//!     let client = UnisenderClient::new(ApiKey::new("...")?);
//!
//!     let request = Subscribe::new(vec![1], [("email", "user@example.com")])?
//!         .tags(Tags::new(["customers"]));
//!     let _resp = client.subscribe(request).await?;
//!
//!     let request = Unsubscribe::new(ContactType::Email, "user@example.com")?;
//!     let _resp = client.unsubscribe(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{UnisenderClient, UnisenderClientBuilder, UnisenderError};
pub use domain::{
    ApiKey, ContactSearchType, ContactType, CreateList, DeleteList, DoubleOptin, EmailMessage,
    EmailStatus, Exclude, ExportContacts, GetContact, GetContactCount, GetTotalContactsCount,
    ImportContacts, JsonObject, ListIds, Locale, Method, NotifyUrl, OverwriteMode, ParamValue,
    Params, PhoneStatus, Subscribe, Tags, Unsubscribe, UpdateList, ValidationError,
};
