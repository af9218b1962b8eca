//! Client layer: orchestrates dispatch — envelope construction, transport
//! calls, and response classification.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::domain::{
    ApiKey, CreateList, DeleteList, EmailMessage, Exclude, ExportContacts, GetContact,
    GetContactCount, GetTotalContactsCount, ImportContacts, JsonObject, Locale, Method, Params,
    Subscribe, Unsubscribe, UpdateList, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://api.unisender.com";
const RESPONSE_FORMAT: &str = "json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type TransportFactory = Arc<dyn Fn() -> Result<Arc<dyn HttpTransport>, BoxError> + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpRequest {
    url: String,
    content_type: &'static str,
    body: String,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    reason: Option<String>,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(request.url.as_str())
                .header(reqwest::header::CONTENT_TYPE, request.content_type)
                .body(request.body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let reason = response.status().canonical_reason().map(str::to_owned);
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                reason,
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UnisenderClient`].
///
/// Every failure of a call surfaces as exactly one of these variants; the
/// client never retries and never swallows anything.
pub enum UnisenderError {
    /// The operation name is not in the method registry. No request was
    /// issued.
    #[error("unknown method: {name}")]
    MethodNotFound { name: String },

    /// No HTTP transport could be resolved.
    #[error("no HTTP transport available: {0}")]
    DependencyMissing(#[source] BoxError),

    /// A domain constructor rejected an invalid value. No request was
    /// issued.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a 4xx status.
    #[error("HTTP client error: {status}")]
    ClientHttp {
        status: u16,
        reason: Option<String>,
        body: String,
    },

    /// The server answered with a 5xx status.
    #[error("HTTP server error: {status}")]
    ServerHttp {
        status: u16,
        reason: Option<String>,
        body: String,
    },

    /// Response body could not be decoded as a JSON object.
    #[error("error parsing response: {0}")]
    Parse(#[source] BoxError),

    /// The service rejected an argument (`code == "invalid_arg"`). The
    /// message is cleaned of the service's internal prefix.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Any other domain failure reported by the service.
    #[error("API error: {message}")]
    Api {
        code: Option<String>,
        message: String,
    },
}

#[derive(Clone)]
/// Builder for [`UnisenderClient`].
///
/// Use this when you need a non-default locale, endpoint, timeout, or
/// user-agent.
pub struct UnisenderClientBuilder {
    api_key: ApiKey,
    locale: Locale,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl UnisenderClientBuilder {
    /// Create a builder with the default endpoint and locale.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            locale: Locale::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Select the API locale.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Select the API locale from a string, case-insensitively.
    ///
    /// A value outside the fixed set is ignored and the current locale kept;
    /// an unknown locale is never a construction error.
    pub fn lang(mut self, lang: impl AsRef<str>) -> Self {
        if let Some(locale) = Locale::parse(lang.as_ref()) {
            self.locale = locale;
        }
        self
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`UnisenderClient`]. Performs no I/O; the HTTP transport is
    /// resolved on first dispatch.
    pub fn build(self) -> UnisenderClient {
        UnisenderClient {
            api_key: self.api_key,
            locale: self.locale,
            base_url: self.base_url,
            options: Arc::new(RwLock::new(BTreeMap::new())),
            http: Arc::new(OnceCell::new()),
            http_factory: reqwest_factory(self.timeout, self.user_agent),
        }
    }
}

fn reqwest_factory(timeout: Option<Duration>, user_agent: Option<String>) -> TransportFactory {
    Arc::new(move || {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent.as_ref() {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().map_err(|err| Box::new(err) as BoxError)?;
        Ok(Arc::new(ReqwestTransport { client }) as Arc<dyn HttpTransport>)
    })
}

#[derive(Clone)]
/// High-level UniSender API client.
///
/// Dispatches calls to `https://api.unisender.com/{locale}/api/{method}` as
/// form-encoded POST requests and decodes JSON responses. Cheap to clone;
/// clones share the transport handle and the auxiliary options map.
pub struct UnisenderClient {
    api_key: ApiKey,
    locale: Locale,
    base_url: String,
    options: Arc<RwLock<BTreeMap<String, serde_json::Value>>>,
    http: Arc<OnceCell<Arc<dyn HttpTransport>>>,
    http_factory: TransportFactory,
}

impl UnisenderClient {
    /// Create a client with the default endpoint and locale.
    ///
    /// For more customization, use [`UnisenderClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        UnisenderClientBuilder::new(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> UnisenderClientBuilder {
        UnisenderClientBuilder::new(api_key)
    }

    /// The locale the client dispatches through.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Read an auxiliary option previously stored with
    /// [`UnisenderClient::set_option`].
    pub fn option(&self, key: &str) -> Option<serde_json::Value> {
        let options = self.options.read().unwrap_or_else(|err| err.into_inner());
        options.get(key).cloned()
    }

    /// Store an arbitrary auxiliary key/value pair. Unvalidated and shared
    /// across clones; the client itself never reads these.
    pub fn set_option(&self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        let mut options = self.options.write().unwrap_or_else(|err| err.into_inner());
        options.insert(key.into(), value.into());
    }

    /// The transport handle is resolved at most once for the lifetime of the
    /// client; concurrent first uses race to a single initialization.
    fn transport(&self) -> Result<&Arc<dyn HttpTransport>, UnisenderError> {
        self.http
            .get_or_try_init(|| (self.http_factory)())
            .map_err(UnisenderError::DependencyMissing)
    }

    /// Dispatch one API call by name.
    ///
    /// Unknown names fail with [`UnisenderError::MethodNotFound`] before any
    /// request is issued. Known names delegate to [`UnisenderClient::invoke`].
    pub async fn call(&self, name: &str, params: Params) -> Result<JsonObject, UnisenderError> {
        let method = Method::from_name(name).ok_or_else(|| UnisenderError::MethodNotFound {
            name: name.to_owned(),
        })?;
        self.invoke(method, params).await
    }

    /// Dispatch one API call: inject the authentication and format fields,
    /// encode the argument bag, POST it, and classify the response.
    ///
    /// The injected `api_key`/`format` values overwrite any caller-supplied
    /// ones. The success value is the decoded response object, returned
    /// unvalidated.
    pub async fn invoke(
        &self,
        method: Method,
        mut params: Params,
    ) -> Result<JsonObject, UnisenderError> {
        params.set(ApiKey::FIELD, self.api_key.as_str());
        params.set("format", RESPONSE_FORMAT);

        let request = HttpRequest {
            url: format!(
                "{}/{}/api/{}",
                self.base_url,
                self.locale.as_str(),
                method.wire_path()
            ),
            content_type: FORM_CONTENT_TYPE,
            body: crate::transport::encode_form(&params),
        };

        let http = self.transport()?;
        let response = http.send(request).await.map_err(UnisenderError::Transport)?;

        if (400..500).contains(&response.status) {
            return Err(UnisenderError::ClientHttp {
                status: response.status,
                reason: response.reason,
                body: response.body,
            });
        }
        if (500..600).contains(&response.status) {
            return Err(UnisenderError::ServerHttp {
                status: response.status,
                reason: response.reason,
                body: response.body,
            });
        }

        let object = crate::transport::decode_json_object(&response.body)
            .map_err(|err| UnisenderError::Parse(Box::new(err)))?;

        if let Some(failure) = crate::transport::extract_api_failure(&object) {
            let error = if failure.code.as_deref() == Some("invalid_arg") {
                UnisenderError::InvalidArgument {
                    message: failure.message,
                }
            } else {
                UnisenderError::Api {
                    code: failure.code,
                    message: failure.message,
                }
            };
            return Err(error);
        }

        Ok(object)
    }

    /// Create a new contact list.
    pub async fn create_list(&self, request: CreateList) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::CreateList, request.into_params()).await
    }

    /// Change the properties of a contact list.
    pub async fn update_list(&self, request: UpdateList) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::UpdateList, request.into_params()).await
    }

    /// Delete a contact list.
    pub async fn delete_list(&self, request: DeleteList) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::DeleteList, request.into_params()).await
    }

    /// Fetch all mailing lists with their ids.
    pub async fn get_lists(&self) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::GetLists, Params::new()).await
    }

    /// Exclude a contact from lists without marking it unsubscribed.
    pub async fn exclude(&self, request: Exclude) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::Exclude, request.into_params()).await
    }

    /// Unsubscribe a contact and mark it as opted out.
    pub async fn unsubscribe(&self, request: Unsubscribe) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::Unsubscribe, request.into_params())
            .await
    }

    /// Add a contact to one or more lists.
    pub async fn subscribe(&self, request: Subscribe) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::Subscribe, request.into_params()).await
    }

    /// Count contacts in a list. The service rate-limits this call.
    pub async fn get_contact_count(
        &self,
        request: GetContactCount,
    ) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::GetContactCount, request.into_params())
            .await
    }

    /// Total size of the contact base for an account login.
    pub async fn get_total_contacts_count(
        &self,
        request: GetTotalContactsCount,
    ) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::GetTotalContactsCount, request.into_params())
            .await
    }

    /// Bulk import/synchronization of contact data.
    pub async fn import_contacts(
        &self,
        request: ImportContacts,
    ) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::ImportContacts, request.into_params())
            .await
    }

    /// Fetch information about a single contact.
    pub async fn get_contact(&self, request: GetContact) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::GetContact, request.into_params()).await
    }

    /// Schedule an asynchronous export of contact data.
    pub async fn export_contacts(
        &self,
        request: ExportContacts,
    ) -> Result<JsonObject, UnisenderError> {
        self.invoke(Method::ExportContacts, request.into_params())
            .await
    }

    /// Send one individual email message.
    ///
    /// Fails with [`UnisenderError::Validation`] before any dispatch when a
    /// required message field is missing.
    pub async fn send_email(&self, message: EmailMessage) -> Result<JsonObject, UnisenderError> {
        let params = message.into_params()?;
        self.invoke(Method::SendEmail, params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::{ContactSearchType, ContactType, ParamValue};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_request: Option<HttpRequest>,
        response_status: u16,
        response_reason: Option<String>,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_request: None,
                    response_status,
                    response_reason: Some("irrelevant".to_owned()),
                    response_body: response_body.into(),
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> HttpRequest {
            self.state
                .lock()
                .unwrap()
                .last_request
                .clone()
                .expect("no request recorded")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let (status, reason, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_request = Some(request);
                    (
                        state.response_status,
                        state.response_reason.clone(),
                        state.response_body.clone(),
                    )
                };
                Ok(HttpResponse {
                    status,
                    reason,
                    body,
                })
            })
        }
    }

    struct FailingTransport;

    impl HttpTransport for FailingTransport {
        fn send<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move { Err("connection refused".into()) })
        }
    }

    fn make_client(transport: impl HttpTransport + 'static) -> UnisenderClient {
        let http = OnceCell::new();
        let _ = http.set(Arc::new(transport) as Arc<dyn HttpTransport>);
        UnisenderClient {
            api_key: ApiKey::new("test_key").unwrap(),
            locale: Locale::default(),
            base_url: "https://example.invalid".to_owned(),
            options: Arc::new(RwLock::new(BTreeMap::new())),
            http: Arc::new(http),
            http_factory: Arc::new(|| Err("no factory in tests".into())),
        }
    }

    #[tokio::test]
    async fn invoke_injects_auth_and_format_fields() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let client = make_client(transport.clone());

        client.get_lists().await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.url, "https://example.invalid/ru/api/getLists");
        assert_eq!(
            request.content_type,
            "application/x-www-form-urlencoded; charset=utf-8"
        );
        assert_eq!(request.body, "api_key=test_key&format=json");
    }

    #[tokio::test]
    async fn caller_supplied_auth_fields_are_overwritten_not_duplicated() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let client = make_client(transport.clone());

        let params = Params::new()
            .with("api_key", "stolen")
            .with("format", "xml")
            .with("list_id", 5u64);
        client.invoke(Method::DeleteList, params).await.unwrap();

        let body = transport.last_request().body;
        assert_eq!(body.matches("api_key=").count(), 1);
        assert_eq!(body.matches("format=").count(), 1);
        assert!(body.contains("api_key=test_key"));
        assert!(body.contains("format=json"));
        assert!(!body.contains("stolen"));
        assert!(!body.contains("xml"));
    }

    #[tokio::test]
    async fn unknown_method_names_fail_without_any_request() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let client = make_client(transport.clone());

        let err = client.call("noSuchMethod", Params::new()).await.unwrap_err();
        assert!(matches!(
            err,
            UnisenderError::MethodNotFound { ref name } if name == "noSuchMethod"
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn known_method_names_dispatch_through_the_registry() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let client = make_client(transport.clone());

        client
            .call("getTags", Params::new())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/ru/api/getTags"
        );
    }

    #[tokio::test]
    async fn export_contacts_uses_the_async_endpoint() {
        let transport = FakeTransport::new(200, r#"{"result": "scheduled"}"#);
        let client = make_client(transport.clone());

        let request = ExportContacts::new(
            crate::domain::NotifyUrl::new("https://example.com/hook").unwrap(),
        );
        client.export_contacts(request).await.unwrap();

        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/ru/api/async/exportContacts"
        );
    }

    #[tokio::test]
    async fn identical_calls_produce_identical_bodies() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let client = make_client(transport.clone());

        let params = Params::new()
            .with("list_ids", "1,2")
            .with("fields", ParamValue::map([("email", "user@example.com")]));

        client
            .invoke(Method::Subscribe, params.clone())
            .await
            .unwrap();
        let first = transport.last_request().body;

        client.invoke(Method::Subscribe, params).await.unwrap();
        let second = transport.last_request().body;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn http_4xx_maps_to_client_error() {
        let transport = FakeTransport::new(404, "not found");
        let client = make_client(transport);

        let err = client.get_lists().await.unwrap_err();
        match err {
            UnisenderError::ClientHttp { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_5xx_wins_even_with_a_valid_json_body() {
        let transport = FakeTransport::new(503, r#"{"result": "fine"}"#);
        let client = make_client(transport);

        let err = client.get_lists().await.unwrap_err();
        assert!(matches!(
            err,
            UnisenderError::ServerHttp { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn non_error_statuses_proceed_to_json_decoding() {
        let transport = FakeTransport::new(302, r#"{"result": "moved"}"#);
        let client = make_client(transport);

        let object = client.get_lists().await.unwrap();
        assert_eq!(object["result"], serde_json::json!("moved"));
    }

    #[tokio::test]
    async fn invalid_arg_code_maps_to_invalid_argument_with_cleaned_message() {
        let transport = FakeTransport::new(
            200,
            r#"{"error": "OB13012016 [Can't find user]", "code": "invalid_arg"}"#,
        );
        let client = make_client(transport);

        let err = client.get_lists().await.unwrap_err();
        match err {
            UnisenderError::InvalidArgument { message } => {
                assert_eq!(message, "Can't find user");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_without_code_maps_to_api_error() {
        let transport = FakeTransport::new(200, r#"{"error": "Unknown failure"}"#);
        let client = make_client(transport);

        let err = client.get_lists().await.unwrap_err();
        match err {
            UnisenderError::Api { code, message } => {
                assert_eq!(code, None);
                assert_eq!(message, "Unknown failure");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_key_wins_even_on_success_status() {
        let transport =
            FakeTransport::new(200, r#"{"error": "down", "code": "maintenance"}"#);
        let client = make_client(transport);

        let err = client.get_lists().await.unwrap_err();
        assert!(matches!(
            err,
            UnisenderError::Api { code: Some(ref code), .. } if code == "maintenance"
        ));
    }

    #[tokio::test]
    async fn malformed_json_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client.get_lists().await.unwrap_err();
        assert!(matches!(err, UnisenderError::Parse(_)));
    }

    #[tokio::test]
    async fn big_integers_in_results_are_not_truncated() {
        let transport = FakeTransport::new(200, r#"{"id": 90071992547409934}"#);
        let client = make_client(transport);

        let object = client.get_lists().await.unwrap();
        assert_eq!(object["id"].to_string(), "90071992547409934");
    }

    #[tokio::test]
    async fn transport_failures_surface_as_transport_errors() {
        let client = make_client(FailingTransport);

        let err = client.get_lists().await.unwrap_err();
        assert!(matches!(err, UnisenderError::Transport(_)));
    }

    #[tokio::test]
    async fn send_email_validates_before_dispatch() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let client = make_client(transport.clone());

        let incomplete = EmailMessage::new().to("user@example.com");
        let err = client.send_email(incomplete).await.unwrap_err();
        assert!(matches!(err, UnisenderError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn contact_count_filters_ride_in_a_nested_map() {
        let transport = FakeTransport::new(200, r#"{"result": {"count": 3}}"#);
        let client = make_client(transport.clone());

        let request = GetContactCount::by_type(
            9,
            ContactSearchType::Address,
            Some("@example.com".to_owned()),
        );
        client.get_contact_count(request).await.unwrap();

        let body = transport.last_request().body;
        assert!(body.contains("list_id=9"));
        assert!(body.contains("params%5Btype%5D=address"));
        assert!(body.contains("params%5Bsearch%5D=%40example.com"));
    }

    #[tokio::test]
    async fn unsubscribe_round_trips_typed_arguments() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let client = make_client(transport.clone());

        let request = Unsubscribe::new(ContactType::Email, "user@example.com")
            .unwrap()
            .list_ids(vec![1, 2]);
        client.unsubscribe(request).await.unwrap();

        let body = transport.last_request().body;
        assert!(body.contains("contact_type=email"));
        assert!(body.contains("contact=user%40example.com"));
        assert!(body.contains("list_ids=1%2C2"));
    }

    #[tokio::test]
    async fn transport_factory_runs_at_most_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let factory_calls = Arc::clone(&calls);
        let client = UnisenderClient {
            api_key: ApiKey::new("test_key").unwrap(),
            locale: Locale::default(),
            base_url: "https://example.invalid".to_owned(),
            options: Arc::new(RwLock::new(BTreeMap::new())),
            http: Arc::new(OnceCell::new()),
            http_factory: Arc::new(move || {
                factory_calls.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(FakeTransport::new(200, r#"{"result": []}"#))
                    as Arc<dyn HttpTransport>)
            }),
        };

        client.get_lists().await.unwrap();
        client.get_lists().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_transport_maps_to_dependency_missing() {
        let client = UnisenderClient {
            api_key: ApiKey::new("test_key").unwrap(),
            locale: Locale::default(),
            base_url: "https://example.invalid".to_owned(),
            options: Arc::new(RwLock::new(BTreeMap::new())),
            http: Arc::new(OnceCell::new()),
            http_factory: Arc::new(|| Err("no client on this target".into())),
        };

        let err = client.get_lists().await.unwrap_err();
        assert!(matches!(err, UnisenderError::DependencyMissing(_)));
    }

    #[tokio::test]
    async fn locale_selects_the_url_segment() {
        let transport = FakeTransport::new(200, r#"{"result": []}"#);
        let mut client = make_client(transport.clone());
        client.locale = Locale::En;

        client.get_lists().await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/en/api/getLists"
        );
    }

    #[test]
    fn builder_lang_ignores_unknown_locales() {
        let builder = UnisenderClient::builder(ApiKey::new("key").unwrap());
        let client = builder.clone().lang("EN").build();
        assert_eq!(client.locale(), Locale::En);

        let client = builder.clone().lang("xx").build();
        assert_eq!(client.locale(), Locale::Ru);

        let client = builder.lang("ua").lang("xx").build();
        assert_eq!(client.locale(), Locale::Ua);
    }

    #[test]
    fn builder_base_url_trims_trailing_slashes() {
        let client = UnisenderClient::builder(ApiKey::new("key").unwrap())
            .base_url("https://example.invalid/")
            .build();
        assert_eq!(client.base_url, "https://example.invalid");
    }

    #[test]
    fn options_are_shared_across_clones() {
        let client = UnisenderClient::new(ApiKey::new("key").unwrap());
        let clone = client.clone();

        client.set_option("compression", true);
        assert_eq!(clone.option("compression"), Some(serde_json::json!(true)));
        assert_eq!(clone.option("missing"), None);
    }
}
