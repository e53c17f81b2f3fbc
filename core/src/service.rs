//! Client resource facade.
//!
//! Each operation issues exactly one request through the `Transport` and then
//! applies its failure policy before handing the error back:
//!
//! | Operation | On failure |
//! |---|---|
//! | `get_clients`, `get_clients_by_name` | propagate |
//! | `create_client`, `update_client` | 400 propagates untouched, anything else alerts + logs |
//! | `get_client` | navigate to the fallback route, alert, log |
//! | `delete_client` | alert, log |

use crate::api::ClientsApi;
use crate::config::{ClientsConfig, DEFAULT_FALLBACK_ROUTE};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Client, ServerResponse};
use crate::ui::{Alert, Alerter, LogAlerter, LogNavigator, Navigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailurePolicy {
    AlertUnlessBadRequest,
    Alert,
    NavigateAndAlert,
}

pub struct ClientService<T, N, A> {
    api: ClientsApi,
    transport: T,
    navigator: N,
    alerter: A,
    fallback_route: String,
}

impl<N: Navigator, A: Alerter> ClientService<ReqwestTransport, N, A> {
    pub fn from_config(config: &ClientsConfig, navigator: N, alerter: A) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::new(ClientsApi::new(config.api_url.as_str()), transport, navigator, alerter)
            .with_fallback_route(config.fallback_route.clone()))
    }
}

impl ClientService<ReqwestTransport, LogNavigator, LogAlerter> {
    /// A service that reports failures through `tracing` only.
    pub fn headless(config: &ClientsConfig) -> Result<Self, ApiError> {
        Self::from_config(config, LogNavigator, LogAlerter)
    }
}

impl<T: Transport, N: Navigator, A: Alerter> ClientService<T, N, A> {
    pub fn new(api: ClientsApi, transport: T, navigator: N, alerter: A) -> Self {
        Self {
            api,
            transport,
            navigator,
            alerter,
            fallback_route: DEFAULT_FALLBACK_ROUTE.to_string(),
        }
    }

    pub fn with_fallback_route(mut self, route: impl Into<String>) -> Self {
        self.fallback_route = route.into();
        self
    }

    pub fn api(&self) -> &ClientsApi {
        &self.api
    }

    pub fn fallback_route(&self) -> &str {
        &self.fallback_route
    }

    /// One page of the client listing.
    pub async fn get_clients(&self, page: u32) -> Result<ServerResponse, ApiError> {
        let response = self.send(self.api.build_list_clients(page)).await?;
        self.api.parse_list_clients(response)
    }

    pub async fn get_clients_by_name(&self, name: &str) -> Result<Vec<Client>, ApiError> {
        let response = self.send(self.api.build_find_clients_by_name(name)).await?;
        self.api.parse_find_clients_by_name(response)
    }

    pub async fn create_client(&self, client: &Client) -> Result<Client, ApiError> {
        let result: Result<Client, ApiError> = async {
            let response = self.send(self.api.build_create_client(client)?).await?;
            self.api.parse_create_client(response)
        }
        .await;
        result.map_err(|e| self.handle_failure("create_client", FailurePolicy::AlertUnlessBadRequest, e))
    }

    pub async fn get_client(&self, id: i64) -> Result<Client, ApiError> {
        let result: Result<Client, ApiError> = async {
            let response = self.send(self.api.build_get_client(id)).await?;
            self.api.parse_get_client(response)
        }
        .await;
        result.map_err(|e| self.handle_failure("get_client", FailurePolicy::NavigateAndAlert, e))
    }

    pub async fn update_client(&self, client: &Client) -> Result<Client, ApiError> {
        let result: Result<Client, ApiError> = async {
            let response = self.send(self.api.build_update_client(client)?).await?;
            self.api.parse_update_client(response)
        }
        .await;
        result.map_err(|e| self.handle_failure("update_client", FailurePolicy::AlertUnlessBadRequest, e))
    }

    /// Returns the removed record when the server sends one back.
    pub async fn delete_client(&self, id: i64) -> Result<Option<Client>, ApiError> {
        let result: Result<Option<Client>, ApiError> = async {
            let response = self.send(self.api.build_delete_client(id)).await?;
            self.api.parse_delete_client(response)
        }
        .await;
        result.map_err(|e| self.handle_failure("delete_client", FailurePolicy::Alert, e))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        self.transport.execute(request).await
    }

    fn handle_failure(&self, operation: &'static str, policy: FailurePolicy, err: ApiError) -> ApiError {
        match policy {
            FailurePolicy::AlertUnlessBadRequest if err.is_bad_request() => return err,
            FailurePolicy::NavigateAndAlert => self.navigator.navigate_by_url(&self.fallback_route),
            _ => {}
        }
        let message = err.user_message();
        self.alerter.fire(&Alert::error(message.as_str()));
        tracing::error!(operation, status = ?err.status(), "{message}");
        err
    }
}
