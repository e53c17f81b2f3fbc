//! Full lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every operation
//! over real HTTP: once through the I/O-free `ClientsApi` with ureq doing the
//! round-trip, once through `ClientService` on `ReqwestTransport`.

use std::net::SocketAddr;

use clients_core::{
    ApiError, Client, ClientService, ClientsApi, ClientsConfig, HttpMethod, HttpRequest,
    HttpResponse, LogAlerter, LogNavigator,
};
use serde_json::json;

fn spawn_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data so `ClientsApi` interprets them.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse::new(status, body)
}

#[test]
fn crud_lifecycle_over_ureq() {
    let addr = spawn_mock_server();
    let api = ClientsApi::new(&format!("http://{addr}/api"));

    // Step 1: first page is empty.
    let page = api.parse_list_clients(execute(api.build_list_clients(0))).unwrap();
    assert!(page.clients().is_empty(), "expected empty page");

    // Step 2: invalid create is a bad request.
    let invalid = Client::from_fields(json!({"name": "", "email": "nope"}));
    let err = api
        .parse_create_client(execute(api.build_create_client(&invalid).unwrap()))
        .unwrap_err();
    assert!(err.is_bad_request());

    // Step 3: create.
    let input = Client::from_fields(json!({"name": "Ada", "surname": "Lovelace", "email": "ada@example.com"}));
    let created = api
        .parse_create_client(execute(api.build_create_client(&input).unwrap()))
        .unwrap();
    let id = created.id.expect("server assigns an id");
    assert_eq!(created.get_str("name"), Some("Ada"));

    // Step 4: get.
    let fetched = api.parse_get_client(execute(api.build_get_client(id))).unwrap();
    assert_eq!(fetched, created);

    // Step 5: search by name, case-insensitive.
    let found = api
        .parse_find_clients_by_name(execute(api.build_find_clients_by_name("ada")))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(id));

    // Step 6: update.
    let mut changed = fetched.clone();
    changed.fields.insert("email".to_string(), json!("ada@analytical.engine"));
    let updated = api
        .parse_update_client(execute(api.build_update_client(&changed).unwrap()))
        .unwrap();
    assert_eq!(updated.get_str("email"), Some("ada@analytical.engine"));

    // Step 7: delete.
    let deleted = api.parse_delete_client(execute(api.build_delete_client(id))).unwrap();
    assert!(deleted.is_none());

    // Step 8: get after delete.
    let err = api.parse_get_client(execute(api.build_get_client(id))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.server_message(), Some(format!("client {id} does not exist").as_str()));
}

#[tokio::test]
async fn crud_lifecycle_over_reqwest() {
    let addr = spawn_mock_server();
    let config = ClientsConfig::new(&format!("http://{addr}/api/")).unwrap();
    let service = ClientService::from_config(&config, LogNavigator, LogAlerter).unwrap();

    let input = Client::from_fields(json!({"name": "Grace", "email": "grace@example.com"}));
    let created = service.create_client(&input).await.unwrap();
    let id = created.id.expect("server assigns an id");

    let page = service.get_clients(0).await.unwrap();
    assert_eq!(page.clients().len(), 1);
    assert_eq!(page.total_elements, Some(1));
    assert_eq!((page.first, page.last), (Some(true), Some(true)));

    let found = service.get_clients_by_name("GRACE").await.unwrap();
    assert_eq!(found.len(), 1);

    let err = service
        .update_client(&Client::from_fields(json!({"id": id, "name": "Grace", "email": "x"})))
        .await
        .unwrap_err();
    assert!(err.is_bad_request());

    assert!(service.delete_client(id).await.unwrap().is_none());

    let err = service.get_client(id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));

    let err = service.delete_client(id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let config = ClientsConfig::new(&format!("http://{addr}/api/")).unwrap();
    let service = ClientService::headless(&config).unwrap();

    let err = service.get_client(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
