//! Domain layer: strong types with validation and invariants (no I/O).

mod email;
mod method;
mod params;
mod request;
mod response;
mod validation;
mod value;

pub use email::EmailMessage;
pub use method::Method;
pub use params::{ParamValue, Params};
pub use response::JsonObject;
pub use request::{
    CreateList, DeleteList, Exclude, ExportContacts, GetContact, GetContactCount,
    GetTotalContactsCount, ImportContacts, Subscribe, Unsubscribe, UpdateList,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ContactSearchType, ContactType, DoubleOptin, EmailStatus, ListIds, Locale, NotifyUrl,
    OverwriteMode, PhoneStatus, Tags,
};
