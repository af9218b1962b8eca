/// Remote procedure names recognized by the UniSender API.
///
/// The set is closed and mirrors the documented API surface; dispatch never
/// infers membership at run time. Unknown names are rejected before any
/// network I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Method {
    // Contact lists
    CreateList,
    DeleteList,
    Exclude,
    ExportContacts,
    GetContactCount,
    GetLists,
    GetTotalContactsCount,
    ImportContacts,
    Subscribe,
    Unsubscribe,
    UpdateList,
    GetContact,
    IsContactInLists,
    // Messages and campaigns
    CancelCampaign,
    CheckEmail,
    CheckSms,
    CreateCampaign,
    CreateEmailMessage,
    CreateSmsMessage,
    DeleteMessage,
    GetActualMessageVersion,
    GetWebVersion,
    SendEmail,
    SendSms,
    SendTestEmail,
    UpdateEmailMessage,
    UpdateOptInEmail,
    GetSenderDomainList,
    // Statistics
    GetCampaignCommonStats,
    GetCampaignDeliveryStats,
    GetCampaignStatus,
    GetMessages,
    GetVisitedLinks,
    ListMessages,
    GetCampaigns,
    GetMessage,
    // Templates
    CreateEmailTemplate,
    DeleteTemplate,
    GetTemplate,
    GetTemplates,
    ListTemplates,
    UpdateEmailTemplate,
    // Custom fields and tags
    CreateField,
    DeleteField,
    DeleteTag,
    GetFields,
    GetTags,
    UpdateField,
    GetContactFieldValues,
    // Subscriber notes
    CreateSubscriberNote,
    UpdateSubscriberNote,
    DeleteSubscriberNote,
    GetSubscriberNote,
    GetSubscriberNotes,
}

impl Method {
    /// Every recognized method, in registry order.
    pub const ALL: &'static [Method] = &[
        Self::CreateList,
        Self::DeleteList,
        Self::Exclude,
        Self::ExportContacts,
        Self::GetContactCount,
        Self::GetLists,
        Self::GetTotalContactsCount,
        Self::ImportContacts,
        Self::Subscribe,
        Self::Unsubscribe,
        Self::UpdateList,
        Self::GetContact,
        Self::IsContactInLists,
        Self::CancelCampaign,
        Self::CheckEmail,
        Self::CheckSms,
        Self::CreateCampaign,
        Self::CreateEmailMessage,
        Self::CreateSmsMessage,
        Self::DeleteMessage,
        Self::GetActualMessageVersion,
        Self::GetWebVersion,
        Self::SendEmail,
        Self::SendSms,
        Self::SendTestEmail,
        Self::UpdateEmailMessage,
        Self::UpdateOptInEmail,
        Self::GetSenderDomainList,
        Self::GetCampaignCommonStats,
        Self::GetCampaignDeliveryStats,
        Self::GetCampaignStatus,
        Self::GetMessages,
        Self::GetVisitedLinks,
        Self::ListMessages,
        Self::GetCampaigns,
        Self::GetMessage,
        Self::CreateEmailTemplate,
        Self::DeleteTemplate,
        Self::GetTemplate,
        Self::GetTemplates,
        Self::ListTemplates,
        Self::UpdateEmailTemplate,
        Self::CreateField,
        Self::DeleteField,
        Self::DeleteTag,
        Self::GetFields,
        Self::GetTags,
        Self::UpdateField,
        Self::GetContactFieldValues,
        Self::CreateSubscriberNote,
        Self::UpdateSubscriberNote,
        Self::DeleteSubscriberNote,
        Self::GetSubscriberNote,
        Self::GetSubscriberNotes,
    ];

    /// The logical method name as documented by UniSender.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreateList => "createList",
            Self::DeleteList => "deleteList",
            Self::Exclude => "exclude",
            Self::ExportContacts => "exportContacts",
            Self::GetContactCount => "getContactCount",
            Self::GetLists => "getLists",
            Self::GetTotalContactsCount => "getTotalContactsCount",
            Self::ImportContacts => "importContacts",
            Self::Subscribe => "subscribe",
            Self::Unsubscribe => "unsubscribe",
            Self::UpdateList => "updateList",
            Self::GetContact => "getContact",
            Self::IsContactInLists => "isContactInLists",
            Self::CancelCampaign => "cancelCampaign",
            Self::CheckEmail => "checkEmail",
            Self::CheckSms => "checkSms",
            Self::CreateCampaign => "createCampaign",
            Self::CreateEmailMessage => "createEmailMessage",
            Self::CreateSmsMessage => "createSmsMessage",
            Self::DeleteMessage => "deleteMessage",
            Self::GetActualMessageVersion => "getActualMessageVersion",
            Self::GetWebVersion => "getWebVersion",
            Self::SendEmail => "sendEmail",
            Self::SendSms => "sendSms",
            Self::SendTestEmail => "sendTestEmail",
            Self::UpdateEmailMessage => "updateEmailMessage",
            Self::UpdateOptInEmail => "updateOptInEmail",
            Self::GetSenderDomainList => "getSenderDomainList",
            Self::GetCampaignCommonStats => "getCampaignCommonStats",
            Self::GetCampaignDeliveryStats => "getCampaignDeliveryStats",
            Self::GetCampaignStatus => "getCampaignStatus",
            Self::GetMessages => "getMessages",
            Self::GetVisitedLinks => "getVisitedLinks",
            Self::ListMessages => "listMessages",
            Self::GetCampaigns => "getCampaigns",
            Self::GetMessage => "getMessage",
            Self::CreateEmailTemplate => "createEmailTemplate",
            Self::DeleteTemplate => "deleteTemplate",
            Self::GetTemplate => "getTemplate",
            Self::GetTemplates => "getTemplates",
            Self::ListTemplates => "listTemplates",
            Self::UpdateEmailTemplate => "updateEmailTemplate",
            Self::CreateField => "createField",
            Self::DeleteField => "deleteField",
            Self::DeleteTag => "deleteTag",
            Self::GetFields => "getFields",
            Self::GetTags => "getTags",
            Self::UpdateField => "updateField",
            Self::GetContactFieldValues => "getContactFieldValues",
            Self::CreateSubscriberNote => "createSubscriberNote",
            Self::UpdateSubscriberNote => "updateSubscriberNote",
            Self::DeleteSubscriberNote => "deleteSubscriberNote",
            Self::GetSubscriberNote => "getSubscriberNote",
            Self::GetSubscriberNotes => "getSubscriberNotes",
        }
    }

    /// The URL path segment the method is dispatched to.
    ///
    /// Identical to [`Method::name`] for every method except contact export,
    /// which UniSender serves from its asynchronous endpoint.
    pub fn wire_path(self) -> &'static str {
        match self {
            Self::ExportContacts => "async/exportContacts",
            other => other.name(),
        }
    }

    /// Look a method up by its logical name. Exact, case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }

    /// Membership test against the registry.
    pub fn is_known(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Method;

    #[test]
    fn registry_covers_every_documented_method() {
        assert_eq!(Method::ALL.len(), 54);
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for method in Method::ALL.iter().copied() {
            assert_eq!(Method::from_name(method.name()), Some(method));
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(Method::from_name("subscribe"), Some(Method::Subscribe));
        assert_eq!(Method::from_name("Subscribe"), None);
        assert_eq!(Method::from_name("subscrib"), None);
        assert!(!Method::is_known("getSms"));
    }

    #[test]
    fn export_contacts_dispatches_to_async_endpoint() {
        assert_eq!(Method::ExportContacts.name(), "exportContacts");
        assert_eq!(Method::ExportContacts.wire_path(), "async/exportContacts");
        assert_eq!(Method::GetLists.wire_path(), "getLists");
    }
}
