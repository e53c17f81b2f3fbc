use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

pub const PAGE_SIZE: usize = 4;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ClientInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
}

impl ClientInput {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("the field 'name' must not be empty".to_string());
        }
        if !self.email.contains('@') {
            errors.push("the field 'email' is not a well-formed email address".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    clients: BTreeMap<i64, Client>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/clients", post(create_client))
        .route("/api/clients/list", get(find_clients_by_name))
        .route("/api/clients/list/page/{page}", get(list_clients))
        .route(
            "/api/clients/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(id: i64) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("client {id} does not exist") })),
    )
        .into_response()
}

fn bad_request(errors: Vec<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}

async fn list_clients(State(db): State<Db>, Path(page): Path<usize>) -> Json<serde_json::Value> {
    let store = db.read().await;
    let total = store.clients.len();
    let total_pages = total.div_ceil(PAGE_SIZE);
    let content: Vec<Client> = store
        .clients
        .values()
        .skip(page.saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    Json(json!({
        "numberOfElements": content.len(),
        "content": content,
        "totalPages": total_pages,
        "totalElements": total,
        "number": page,
        "size": PAGE_SIZE,
        "first": page == 0,
        "last": page.saturating_add(1) >= total_pages,
        "empty": total == 0,
    }))
}

async fn find_clients_by_name(
    State(db): State<Db>,
    Query(query): Query<NameQuery>,
) -> Json<Vec<Client>> {
    let needle = query.name.to_lowercase();
    let store = db.read().await;
    Json(
        store
            .clients
            .values()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

async fn create_client(State(db): State<Db>, Json(input): Json<ClientInput>) -> Response {
    if let Err(errors) = input.validate() {
        return bad_request(errors);
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let client = Client {
        id: store.next_id,
        name: input.name,
        surname: input.surname,
        email: input.email,
    };
    store.clients.insert(client.id, client.clone());
    tracing::info!(id = client.id, "client created");
    (StatusCode::CREATED, Json(client)).into_response()
}

async fn get_client(State(db): State<Db>, Path(id): Path<i64>) -> Response {
    let store = db.read().await;
    match store.clients.get(&id) {
        Some(client) => Json(client.clone()).into_response(),
        None => not_found(id),
    }
}

async fn update_client(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ClientInput>,
) -> Response {
    if let Err(errors) = input.validate() {
        return bad_request(errors);
    }
    let mut store = db.write().await;
    let Some(client) = store.clients.get_mut(&id) else {
        return not_found(id);
    };
    client.name = input.name;
    client.surname = input.surname;
    client.email = input.email;
    Json(client.clone()).into_response()
}

async fn delete_client(State(db): State<Db>, Path(id): Path<i64>) -> Response {
    let mut store = db.write().await;
    match store.clients.remove(&id) {
        Some(_) => {
            tracing::info!(id, "client deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(id),
    }
}
