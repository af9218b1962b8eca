use crate::domain::params::{ParamValue, Params};
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ContactSearchType, ContactType, DoubleOptin, EmailStatus, ListIds, NotifyUrl, OverwriteMode,
    PhoneStatus, Tags,
};

fn validated_url(field: &'static str, input: String) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
        field,
        input: trimmed.to_owned(),
    })?;
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Create a new contact list (`createList`).
pub struct CreateList {
    title: String,
    before_subscribe_url: Option<String>,
    after_subscribe_url: Option<String>,
}

impl CreateList {
    /// Create a request with a non-empty list title.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        Ok(Self {
            title,
            before_subscribe_url: None,
            after_subscribe_url: None,
        })
    }

    /// Redirect URL for the "before subscription" page.
    pub fn before_subscribe_url(mut self, url: impl Into<String>) -> Result<Self, ValidationError> {
        self.before_subscribe_url = Some(validated_url("before_subscribe_url", url.into())?);
        Ok(self)
    }

    /// Redirect URL for the "after subscription" page.
    pub fn after_subscribe_url(mut self, url: impl Into<String>) -> Result<Self, ValidationError> {
        self.after_subscribe_url = Some(validated_url("after_subscribe_url", url.into())?);
        Ok(self)
    }

    pub fn into_params(self) -> Params {
        let mut params = Params::new().with("title", self.title);
        if let Some(url) = self.before_subscribe_url {
            params.set("before_subscribe_url", url);
        }
        if let Some(url) = self.after_subscribe_url {
            params.set("after_subscribe_url", url);
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Change the properties of an existing contact list (`updateList`).
pub struct UpdateList {
    list_id: u64,
    title: Option<String>,
    before_subscribe_url: Option<String>,
    after_subscribe_url: Option<String>,
}

impl UpdateList {
    pub fn new(list_id: u64) -> Self {
        Self {
            list_id,
            title: None,
            before_subscribe_url: None,
            after_subscribe_url: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn before_subscribe_url(mut self, url: impl Into<String>) -> Result<Self, ValidationError> {
        self.before_subscribe_url = Some(validated_url("before_subscribe_url", url.into())?);
        Ok(self)
    }

    pub fn after_subscribe_url(mut self, url: impl Into<String>) -> Result<Self, ValidationError> {
        self.after_subscribe_url = Some(validated_url("after_subscribe_url", url.into())?);
        Ok(self)
    }

    pub fn into_params(self) -> Params {
        let mut params = Params::new().with("list_id", self.list_id);
        if let Some(title) = self.title {
            params.set("title", title);
        }
        if let Some(url) = self.before_subscribe_url {
            params.set("before_subscribe_url", url);
        }
        if let Some(url) = self.after_subscribe_url {
            params.set("after_subscribe_url", url);
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Delete a contact list (`deleteList`).
pub struct DeleteList {
    list_id: u64,
}

impl DeleteList {
    pub fn new(list_id: u64) -> Self {
        Self { list_id }
    }

    pub fn into_params(self) -> Params {
        Params::new().with("list_id", self.list_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Exclude a contact from one or more lists without marking it unsubscribed
/// (`exclude`).
pub struct Exclude {
    contact_type: ContactType,
    contact: String,
    list_ids: ListIds,
}

impl Exclude {
    pub fn new(
        contact_type: ContactType,
        contact: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let contact = contact.into();
        if contact.trim().is_empty() {
            return Err(ValidationError::Empty { field: "contact" });
        }
        Ok(Self {
            contact_type,
            contact,
            list_ids: ListIds::default(),
        })
    }

    /// Restrict the exclusion to the given lists; all lists when empty.
    pub fn list_ids(mut self, list_ids: impl Into<ListIds>) -> Self {
        self.list_ids = list_ids.into();
        self
    }

    pub fn into_params(self) -> Params {
        let mut params = Params::new()
            .with(ContactType::FIELD, self.contact_type.as_str())
            .with("contact", self.contact);
        if !self.list_ids.is_empty() {
            params.set(ListIds::FIELD, self.list_ids.join());
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Unsubscribe a contact and mark it as opted out (`unsubscribe`).
///
/// The unsubscribed status cannot be reverted through the API.
pub struct Unsubscribe {
    contact_type: ContactType,
    contact: String,
    list_ids: ListIds,
}

impl Unsubscribe {
    pub fn new(
        contact_type: ContactType,
        contact: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let contact = contact.into();
        if contact.trim().is_empty() {
            return Err(ValidationError::Empty { field: "contact" });
        }
        Ok(Self {
            contact_type,
            contact,
            list_ids: ListIds::default(),
        })
    }

    /// Restrict the unsubscription to the given lists; all lists when empty.
    pub fn list_ids(mut self, list_ids: impl Into<ListIds>) -> Self {
        self.list_ids = list_ids.into();
        self
    }

    pub fn into_params(self) -> Params {
        let mut params = Params::new()
            .with(ContactType::FIELD, self.contact_type.as_str())
            .with("contact", self.contact);
        if !self.list_ids.is_empty() {
            params.set(ListIds::FIELD, self.list_ids.join());
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Add a contact to one or more lists, optionally setting fields and tags
/// (`subscribe`).
pub struct Subscribe {
    list_ids: ListIds,
    fields: Vec<(String, String)>,
    tags: Tags,
    double_optin: DoubleOptin,
    overwrite: OverwriteMode,
}

impl Subscribe {
    /// Create a request targeting at least one list.
    ///
    /// `fields` carries the contact data (`email`, `phone`, custom fields) as
    /// ordered name/value pairs.
    pub fn new<I, K, V>(list_ids: impl Into<ListIds>, fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let list_ids = list_ids.into();
        if list_ids.is_empty() {
            return Err(ValidationError::Empty {
                field: ListIds::FIELD,
            });
        }
        Ok(Self {
            list_ids,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            tags: Tags::default(),
            double_optin: DoubleOptin::default(),
            overwrite: OverwriteMode::default(),
        })
    }

    /// Tag the contact. Entries beyond [`Tags::MAX`] are dropped.
    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    pub fn double_optin(mut self, double_optin: DoubleOptin) -> Self {
        self.double_optin = double_optin;
        self
    }

    pub fn overwrite(mut self, overwrite: OverwriteMode) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn into_params(self) -> Params {
        let mut params = Params::new()
            .with(ListIds::FIELD, self.list_ids.join())
            .with("fields", ParamValue::map(self.fields))
            .with(DoubleOptin::FIELD, self.double_optin.value())
            .with(OverwriteMode::FIELD, self.overwrite.value());
        if !self.tags.is_empty() {
            params.set(Tags::FIELD, self.tags.join());
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Count contacts in a list by tag, contact type, or substring search
/// (`getContactCount`).
pub struct GetContactCount {
    list_id: u64,
    tag_id: Option<u64>,
    contact_type: Option<ContactSearchType>,
    search: Option<String>,
}

impl GetContactCount {
    /// Create a request.
    ///
    /// At least one of `tag_id` and `contact_type` must be given, and
    /// `search` only makes sense together with `contact_type`; both rules are
    /// enforced here, before any dispatch.
    pub fn new(
        list_id: u64,
        tag_id: Option<u64>,
        contact_type: Option<ContactSearchType>,
        search: Option<String>,
    ) -> Result<Self, ValidationError> {
        if search.is_some() && contact_type.is_none() {
            return Err(ValidationError::SearchRequiresContactType);
        }
        if tag_id.is_none() && contact_type.is_none() {
            return Err(ValidationError::MissingCountFilter);
        }
        Ok(Self {
            list_id,
            tag_id,
            contact_type,
            search,
        })
    }

    /// Count by tag only.
    pub fn by_tag(list_id: u64, tag_id: u64) -> Self {
        Self {
            list_id,
            tag_id: Some(tag_id),
            contact_type: None,
            search: None,
        }
    }

    /// Count by contact type, optionally narrowed by a substring search.
    pub fn by_type(list_id: u64, contact_type: ContactSearchType, search: Option<String>) -> Self {
        Self {
            list_id,
            tag_id: None,
            contact_type: Some(contact_type),
            search,
        }
    }

    pub fn into_params(self) -> Params {
        let mut filter = Vec::new();
        if let Some(tag_id) = self.tag_id {
            filter.push(("tagId".to_owned(), ParamValue::from(tag_id)));
        }
        if let Some(contact_type) = self.contact_type {
            filter.push((
                ContactSearchType::FIELD.to_owned(),
                ParamValue::from(contact_type.as_str()),
            ));
        }
        if let Some(search) = self.search {
            filter.push(("search".to_owned(), ParamValue::from(search)));
        }
        Params::new()
            .with("list_id", self.list_id)
            .with("params", ParamValue::Map(filter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Total size of the contact base for an account login
/// (`getTotalContactsCount`).
pub struct GetTotalContactsCount {
    login: String,
}

impl GetTotalContactsCount {
    pub fn new(login: impl Into<String>) -> Result<Self, ValidationError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(ValidationError::Empty { field: "login" });
        }
        Ok(Self { login })
    }

    pub fn into_params(self) -> Params {
        Params::new().with("login", self.login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Bulk import/synchronization of contact data (`importContacts`).
pub struct ImportContacts {
    field_names: Vec<String>,
    data: Vec<Vec<String>>,
    overwrite_tags: bool,
    overwrite_lists: bool,
}

impl ImportContacts {
    /// Create a request from column names and row data.
    ///
    /// Empty `field_names` falls back to the single `email` column.
    pub fn new<I, S>(field_names: I, data: Vec<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field_names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        if field_names.is_empty() {
            field_names.push("email".to_owned());
        }
        Self {
            field_names,
            data,
            overwrite_tags: false,
            overwrite_lists: false,
        }
    }

    /// Replace existing tags instead of only adding new ones.
    pub fn overwrite_tags(mut self, overwrite: bool) -> Self {
        self.overwrite_tags = overwrite;
        self
    }

    /// Replace all list membership data with the imported values.
    pub fn overwrite_lists(mut self, overwrite: bool) -> Self {
        self.overwrite_lists = overwrite;
        self
    }

    pub fn into_params(self) -> Params {
        Params::new()
            .with("field_names", ParamValue::seq(self.field_names))
            .with(
                "data",
                ParamValue::Seq(self.data.into_iter().map(ParamValue::seq).collect()),
            )
            .with("overwrite_tags", self.overwrite_tags)
            .with("overwrite_lists", self.overwrite_lists)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fetch information about a single contact by email (`getContact`).
pub struct GetContact {
    email: String,
    include_lists: bool,
    include_fields: bool,
    include_details: bool,
}

impl GetContact {
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        Ok(Self {
            email,
            include_lists: false,
            include_fields: false,
            include_details: false,
        })
    }

    pub fn include_lists(mut self, include: bool) -> Self {
        self.include_lists = include;
        self
    }

    pub fn include_fields(mut self, include: bool) -> Self {
        self.include_fields = include;
        self
    }

    pub fn include_details(mut self, include: bool) -> Self {
        self.include_details = include;
        self
    }

    pub fn into_params(self) -> Params {
        Params::new()
            .with("email", self.email)
            .with("include_lists", self.include_lists)
            .with("include_fields", self.include_fields)
            .with("include_details", self.include_details)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Asynchronous export of contact data (`exportContacts`).
///
/// The service prepares a file and delivers a readiness notification to
/// `notify_url`; the call itself only schedules the export.
pub struct ExportContacts {
    notify_url: NotifyUrl,
    list_id: Option<u64>,
    field_names: Vec<String>,
    email: Option<String>,
    phone: Option<String>,
    tag: Option<String>,
    email_status: Option<EmailStatus>,
    phone_status: Option<PhoneStatus>,
}

impl ExportContacts {
    pub fn new(notify_url: NotifyUrl) -> Self {
        Self {
            notify_url,
            list_id: None,
            field_names: Vec::new(),
            email: None,
            phone: None,
            tag: None,
            email_status: None,
            phone_status: None,
        }
    }

    /// Export a single list instead of all of them.
    pub fn list_id(mut self, list_id: u64) -> Self {
        self.list_id = Some(list_id);
        self
    }

    /// System and custom field names to include in the export file.
    pub fn field_names<I, S>(mut self, field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_names = field_names.into_iter().map(Into::into).collect();
        self
    }

    /// Narrow the export to the single contact with this email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Narrow the export to the single contact with this phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Only export contacts carrying this tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn email_status(mut self, status: EmailStatus) -> Self {
        self.email_status = Some(status);
        self
    }

    pub fn phone_status(mut self, status: PhoneStatus) -> Self {
        self.phone_status = Some(status);
        self
    }

    pub fn into_params(self) -> Params {
        let mut params = Params::new().with(NotifyUrl::FIELD, self.notify_url.as_str());
        if let Some(list_id) = self.list_id {
            params.set("list_id", list_id);
        }
        if !self.field_names.is_empty() {
            params.set("field_names", ParamValue::seq(self.field_names));
        }
        if let Some(email) = self.email {
            params.set("email", email);
        }
        if let Some(phone) = self.phone {
            params.set("phone", phone);
        }
        if let Some(tag) = self.tag {
            params.set("tag", tag);
        }
        if let Some(status) = self.email_status {
            params.set(EmailStatus::FIELD, status.as_str());
        }
        if let Some(status) = self.phone_status {
            params.set(PhoneStatus::FIELD, status.as_str());
        }
        params
    }
}
