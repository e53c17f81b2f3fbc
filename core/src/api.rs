//! Stateless HTTP request builder and response parser for the clients API.
//!
//! # Design
//! `ClientsApi` holds only a base URL. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Whoever sits in between does the I/O, so this
//! layer stays deterministic.

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Client, ServerResponse};

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

#[derive(Debug, Clone)]
pub struct ClientsApi {
    base_url: String,
}

impl ClientsApi {
    /// `base_url` is the API root; the resource lives at `{base_url}clients`.
    /// A trailing slash is added when missing.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_clients(&self, page: u32) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            format!("{}clients/list/page/{page}", self.base_url),
            None,
        )
    }

    pub fn build_find_clients_by_name(&self, name: &str) -> HttpRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("name", name)
            .finish();
        self.request(
            HttpMethod::Get,
            format!("{}clients/list?{query}", self.base_url),
            None,
        )
    }

    pub fn build_create_client(&self, client: &Client) -> Result<HttpRequest, ApiError> {
        let body = to_json(client)?;
        Ok(self.request(
            HttpMethod::Post,
            format!("{}clients", self.base_url),
            Some(body),
        ))
    }

    pub fn build_get_client(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, self.client_url(id), None)
    }

    pub fn build_update_client(&self, client: &Client) -> Result<HttpRequest, ApiError> {
        let id = client.id.ok_or(ApiError::MissingId)?;
        let body = to_json(client)?;
        Ok(self.request(HttpMethod::Put, self.client_url(id), Some(body)))
    }

    pub fn build_delete_client(&self, id: i64) -> HttpRequest {
        let mut req = self.request(HttpMethod::Delete, self.client_url(id), None);
        req.headers.push(json_header());
        req
    }

    pub fn parse_list_clients(&self, response: HttpResponse) -> Result<ServerResponse, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_find_clients_by_name(&self, response: HttpResponse) -> Result<Vec<Client>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_client(&self, response: HttpResponse) -> Result<Client, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Servers answer a delete either with the removed record or with no body.
    pub fn parse_delete_client(&self, response: HttpResponse) -> Result<Option<Client>, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        from_json(&response.body).map(Some)
    }

    fn client_url(&self, id: i64) -> String {
        format!("{}clients/{id}", self.base_url)
    }

    fn request(&self, method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
        let headers = if body.is_some() {
            vec![json_header()]
        } else {
            Vec::new()
        };
        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }
}

fn json_header() -> (String, String) {
    (JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())
}

fn to_json(client: &Client) -> Result<String, ApiError> {
    serde_json::to_string(client).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Any 2xx is a success; everything else maps to an `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_status(response.status, response.body.clone()))
}
