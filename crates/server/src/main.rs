// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use adoptnest_api::{
    AdoptionResponse, ApiError, BookingResponse, CreateBookingRequest, CreatePetRequest,
    DeletedResponse, ListPetsRequest, ListPetsResponse, PetResponse, SubmitAdoptionRequest,
    SubmitSurrenderRequest, SurrenderResponse, UpdateAdoptionStatusRequest, UpdateBookingRequest,
    UpdatePetRequest, UpdateSurrenderStatusRequest, authenticate, handlers,
};
use adoptnest_core::NoopImageStore;
use adoptnest_domain::Actor;
use adoptnest_persistence::SqliteStore;

/// AdoptNest Server - HTTP server for the AdoptNest adoption service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex to allow safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The backing store for pets, adoption requests, bookings, and
    /// surrenders.
    store: Arc<Mutex<SqliteStore>>,
}

/// A request body carrying the gateway-forwarded identity alongside its
/// payload.
///
/// The gateway validates the session upstream and forwards the caller's
/// id and role with every request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct Authed<T> {
    /// The caller's user id, as forwarded by the gateway.
    actor_id: i64,
    /// The caller's role ("admin" or "user").
    actor_role: String,
    /// The operation payload.
    #[serde(flatten)]
    payload: T,
}

/// Identity query parameters for read and delete endpoints.
#[derive(Debug, Deserialize)]
struct ActorQuery {
    /// The caller's user id, as forwarded by the gateway.
    actor_id: i64,
    /// The caller's role ("admin" or "user").
    actor_role: String,
}

/// Identity plus an optional status filter, for the scoped listings.
#[derive(Debug, Deserialize)]
struct ScopedListQuery {
    /// The caller's user id, as forwarded by the gateway.
    actor_id: i64,
    /// The caller's role ("admin" or "user").
    actor_role: String,
    /// Restrict the listing to one status.
    status: Option<String>,
}

/// Identity-only request body for endpoints without a payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorRequest {
    /// The caller's user id, as forwarded by the gateway.
    actor_id: i64,
    /// The caller's role ("admin" or "user").
    actor_role: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// The stable machine kind of the error.
    kind: String,
    /// A human-readable message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The stable machine kind of the error.
    kind: String,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            kind: self.kind,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } | ApiError::ImageRequired => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } | ApiError::PetNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            kind: String::from(err.kind()),
            message: err.to_string(),
        }
    }
}

/// Resolves the forwarded identity or fails with 401.
fn resolve_actor(actor_id: i64, actor_role: &str) -> Result<Actor, HttpError> {
    authenticate(actor_id, actor_role).map_err(|e| HttpError::from(ApiError::from(e)))
}

/// Handler for POST `/pets` endpoint.
async fn handle_create_pet(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<Authed<CreatePetRequest>>,
) -> Result<Json<PetResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        name = %req.payload.name,
        "Handling create_pet request"
    );

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: PetResponse = handlers::create_pet(&mut *store, &actor, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/pets` endpoint.
///
/// Pet listings are public; no identity is required.
async fn handle_list_pets(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ListPetsRequest>,
) -> Result<Json<ListPetsResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: ListPetsResponse = handlers::list_pets(&mut *store, params)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/pets/{pet_id}` endpoint.
async fn handle_get_pet(
    AxumState(app_state): AxumState<AppState>,
    Path(pet_id): Path<i64>,
) -> Result<Json<PetResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: PetResponse = handlers::get_pet(&mut *store, pet_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for PUT `/pets/{pet_id}` endpoint.
async fn handle_update_pet(
    AxumState(app_state): AxumState<AppState>,
    Path(pet_id): Path<i64>,
    Json(req): Json<Authed<UpdatePetRequest>>,
) -> Result<Json<PetResponse>, HttpError> {
    info!(actor_id = req.actor_id, pet_id, "Handling update_pet request");

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: PetResponse = handlers::update_pet(&mut *store, &actor, pet_id, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for DELETE `/pets/{pet_id}` endpoint.
async fn handle_delete_pet(
    AxumState(app_state): AxumState<AppState>,
    Path(pet_id): Path<i64>,
    Query(params): Query<ActorQuery>,
) -> Result<Json<DeletedResponse>, HttpError> {
    info!(
        actor_id = params.actor_id,
        pet_id, "Handling delete_pet request"
    );

    let actor: Actor = resolve_actor(params.actor_id, &params.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: DeletedResponse =
        handlers::delete_pet(&mut *store, &NoopImageStore, &actor, pet_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/adoptions` endpoint.
async fn handle_submit_adoption(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<Authed<SubmitAdoptionRequest>>,
) -> Result<Json<AdoptionResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        pet_id = req.payload.pet_id,
        "Handling submit_adoption request"
    );

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: AdoptionResponse = handlers::submit_adoption(&mut *store, &actor, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/adoptions` endpoint.
async fn handle_list_adoptions(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ScopedListQuery>,
) -> Result<Json<Vec<AdoptionResponse>>, HttpError> {
    let actor: Actor = resolve_actor(params.actor_id, &params.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: Vec<AdoptionResponse> =
        handlers::list_adoptions(&mut *store, &actor, params.status.as_deref())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/adoptions/{request_id}` endpoint.
async fn handle_get_adoption(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Query(params): Query<ActorQuery>,
) -> Result<Json<AdoptionResponse>, HttpError> {
    let actor: Actor = resolve_actor(params.actor_id, &params.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: AdoptionResponse = handlers::get_adoption(&mut *store, &actor, request_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/adoptions/{request_id}/status` endpoint.
async fn handle_update_adoption_status(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Json(req): Json<Authed<UpdateAdoptionStatusRequest>>,
) -> Result<Json<AdoptionResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        request_id,
        status = %req.payload.status,
        "Handling update_adoption_status request"
    );

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: AdoptionResponse =
        handlers::update_adoption_status(&mut *store, &actor, request_id, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/bookings` endpoint.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<Authed<CreateBookingRequest>>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        service = %req.payload.service,
        "Handling create_booking request"
    );

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: BookingResponse = handlers::create_booking(&mut *store, &actor, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/bookings` endpoint.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ScopedListQuery>,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    let actor: Actor = resolve_actor(params.actor_id, &params.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: Vec<BookingResponse> =
        handlers::list_bookings(&mut *store, &actor, params.status.as_deref())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/bookings/{booking_id}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Query(params): Query<ActorQuery>,
) -> Result<Json<BookingResponse>, HttpError> {
    let actor: Actor = resolve_actor(params.actor_id, &params.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: BookingResponse = handlers::get_booking(&mut *store, &actor, booking_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for PUT `/bookings/{booking_id}` endpoint.
async fn handle_update_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<Authed<UpdateBookingRequest>>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        booking_id, "Handling update_booking request"
    );

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: BookingResponse =
        handlers::update_booking(&mut *store, &actor, booking_id, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/cancel` endpoint.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ActorRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        booking_id, "Handling cancel_booking request"
    );

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: BookingResponse = handlers::cancel_booking(&mut *store, &actor, booking_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/surrenders` endpoint.
async fn handle_submit_surrender(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<Authed<SubmitSurrenderRequest>>,
) -> Result<Json<SurrenderResponse>, HttpError> {
    info!(actor_id = req.actor_id, "Handling submit_surrender request");

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: SurrenderResponse =
        handlers::submit_surrender(&mut *store, &actor, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/surrenders` endpoint.
async fn handle_list_surrenders(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ScopedListQuery>,
) -> Result<Json<Vec<SurrenderResponse>>, HttpError> {
    let actor: Actor = resolve_actor(params.actor_id, &params.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: Vec<SurrenderResponse> =
        handlers::list_surrenders(&mut *store, &actor, params.status.as_deref())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/surrenders/{surrender_id}` endpoint.
async fn handle_get_surrender(
    AxumState(app_state): AxumState<AppState>,
    Path(surrender_id): Path<i64>,
    Query(params): Query<ActorQuery>,
) -> Result<Json<SurrenderResponse>, HttpError> {
    let actor: Actor = resolve_actor(params.actor_id, &params.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: SurrenderResponse = handlers::get_surrender(&mut *store, &actor, surrender_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/surrenders/{surrender_id}/status` endpoint.
async fn handle_update_surrender_status(
    AxumState(app_state): AxumState<AppState>,
    Path(surrender_id): Path<i64>,
    Json(req): Json<Authed<UpdateSurrenderStatusRequest>>,
) -> Result<Json<SurrenderResponse>, HttpError> {
    info!(
        actor_id = req.actor_id,
        surrender_id,
        status = %req.payload.status,
        "Handling update_surrender_status request"
    );

    let actor: Actor = resolve_actor(req.actor_id, &req.actor_role)?;
    let mut store = app_state.store.lock().await;
    let response: SurrenderResponse =
        handlers::update_surrender_status(&mut *store, &actor, surrender_id, req.payload)?;
    drop(store);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/pets", post(handle_create_pet))
        .route("/pets", get(handle_list_pets))
        .route("/pets/{pet_id}", get(handle_get_pet))
        .route("/pets/{pet_id}", put(handle_update_pet))
        .route("/pets/{pet_id}", delete(handle_delete_pet))
        .route("/adoptions", post(handle_submit_adoption))
        .route("/adoptions", get(handle_list_adoptions))
        .route("/adoptions/{request_id}", get(handle_get_adoption))
        .route(
            "/adoptions/{request_id}/status",
            post(handle_update_adoption_status),
        )
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_bookings))
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .route("/bookings/{booking_id}", put(handle_update_booking))
        .route("/bookings/{booking_id}/cancel", post(handle_cancel_booking))
        .route("/surrenders", post(handle_submit_surrender))
        .route("/surrenders", get(handle_list_surrenders))
        .route("/surrenders/{surrender_id}", get(handle_get_surrender))
        .route(
            "/surrenders/{surrender_id}/status",
            post(handle_update_surrender_status),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing AdoptNest Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
