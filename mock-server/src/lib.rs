use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

/// Header Jellyfin clients send their access token in.
pub const TOKEN_HEADER: &str = "x-emby-token";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub production_year: Option<i64>,
    #[serde(default)]
    pub provider_ids: BTreeMap<String, Value>,
    /// Image slots filled through remote image downloads.
    #[serde(default)]
    pub image_tags: BTreeMap<String, String>,
    #[serde(default)]
    pub refresh_count: u32,
}

/// One request as the server saw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub token: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct Library {
    pub items: BTreeMap<String, Item>,
    pub requests: Vec<RecordedRequest>,
}

impl Library {
    /// Add an item under a fresh Jellyfin-style id and return the id.
    pub fn insert(&mut self, name: &str) -> String {
        let id = Uuid::new_v4().simple().to_string();
        self.items.insert(
            id.clone(),
            Item {
                id: id.clone(),
                name: name.to_string(),
                ..Default::default()
            },
        );
        id
    }

    fn record(&mut self, method: &Method, uri: &Uri, headers: &HeaderMap, body: Option<Value>) {
        let query = Query::<BTreeMap<String, String>>::try_from_uri(uri)
            .map(|Query(q)| q)
            .unwrap_or_default();
        let request = RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query,
            token: headers
                .get(TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        };
        debug!(method = %request.method, path = %request.path, "recorded request");
        self.requests.push(request);
    }
}

pub type Db = Arc<RwLock<Library>>;

pub fn app() -> Router {
    app_with_library(Arc::new(RwLock::new(Library::default())))
}

/// Router over a caller-owned library, so tests can seed items and inspect
/// recorded requests.
pub fn app_with_library(db: Db) -> Router {
    Router::new()
        .route("/Items/{id}", get(get_item).delete(delete_item))
        .route("/Items/{id}/Refresh", post(refresh_item))
        .route("/Items/{id}/ExternalIdInfos", get(external_id_infos))
        .route("/Items/{id}/RemoteImages", get(remote_images))
        .route("/Items/{id}/RemoteImages/Download", post(download_remote_image))
        .route("/Items/RemoteSearch/Apply/{id}", post(apply_search_result))
        .route("/__requests", get(list_requests))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_library(db)).await
}

async fn list_requests(State(db): State<Db>) -> Json<Vec<RecordedRequest>> {
    Json(db.read().await.requests.clone())
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<Item>, StatusCode> {
    let mut lib = db.write().await;
    lib.record(&method, &uri, &headers, None);
    lib.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let mut lib = db.write().await;
    lib.record(&method, &uri, &headers, None);
    lib.items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn refresh_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let mut lib = db.write().await;
    lib.record(&method, &uri, &headers, None);
    let item = lib.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    item.refresh_count += 1;
    Ok(StatusCode::NO_CONTENT)
}

async fn external_id_infos(
    State(db): State<Db>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    let mut lib = db.write().await;
    lib.record(&method, &uri, &headers, None);
    if !lib.items.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!([
        {"Name": "IMDb", "Key": "Imdb", "Type": null, "UrlFormatString": "https://www.imdb.com/title/{0}"},
        {"Name": "TheMovieDb", "Key": "Tmdb", "Type": "Movie", "UrlFormatString": "https://www.themoviedb.org/movie/{0}"},
    ])))
}

async fn remote_images(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(query): Query<BTreeMap<String, String>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    let mut lib = db.write().await;
    lib.record(&method, &uri, &headers, None);
    if !lib.items.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let kind = query.get("type").cloned().unwrap_or_else(|| "Primary".to_string());
    Ok(Json(json!({
        "Images": [{"ProviderName": "TheMovieDb", "Url": format!("https://img.example/{id}.jpg"), "Type": kind}],
        "TotalRecordCount": 1,
        "Providers": ["TheMovieDb"],
    })))
}

async fn download_remote_image(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(query): Query<BTreeMap<String, String>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let mut lib = db.write().await;
    lib.record(&method, &uri, &headers, None);
    let (Some(kind), Some(url)) = (query.get("type"), query.get("imageUrl")) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let item = lib.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    item.image_tags.insert(kind.clone(), url.clone());
    Ok(StatusCode::NO_CONTENT)
}

async fn apply_search_result(
    State(db): State<Db>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<StatusCode, StatusCode> {
    let mut lib = db.write().await;
    lib.record(&method, &uri, &headers, Some(body.clone()));
    let item = lib.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = body["Name"].as_str() {
        item.name = name.to_string();
    }
    if let Some(year) = body["ProductionYear"].as_i64() {
        item.production_year = Some(year);
    }
    if let Some(ids) = body["ProviderIds"].as_object() {
        item.provider_ids = ids.clone().into_iter().collect();
    }
    Ok(StatusCode::NO_CONTENT)
}
