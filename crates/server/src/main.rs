// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bookit::{
    BookingEngine, CatalogSeed, DEFAULT_MAX_REFERENCE_ATTEMPTS, DEFAULT_TAX_FLAT, EngineConfig,
    StaticCatalog, StaticPromoDirectory, Storefront,
};
use bookit_api::{
    ApiError, BookingInfo, CreateBookingRequest, CreateBookingResponse, ExperienceDetailResponse,
    ExperienceInfo, QuoteRequest, QuoteResponse, ValidatePromoRequest, ValidatePromoResponse,
    create_booking, get_booking, get_experience, list_experiences, quote_booking, validate_promo,
};
use bookit_domain::{Availability, RandomReferenceGenerator};
use bookit_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

/// `BookIt` Server - HTTP server for the `BookIt` booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Flat tax added to every booking
    #[arg(long, default_value_t = DEFAULT_TAX_FLAT)]
    tax: u64,

    /// Reference candidates tried per booking before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_REFERENCE_ATTEMPTS)]
    reference_attempts: u32,

    /// Upper bound in milliseconds on any wait for the booking store
    #[arg(long, default_value_t = 5000)]
    store_timeout_ms: u64,

    /// JSON catalog seed with `experiences` and `promoCodes`. Uses the built-in seed if omitted.
    #[arg(short, long)]
    catalog: Option<String>,
}

/// The engine as wired by this server.
type Engine =
    BookingEngine<StaticCatalog, StaticPromoDirectory, Persistence, RandomReferenceGenerator>;

/// The engine's read-only half.
type EngineStorefront = Storefront<StaticCatalog, StaticPromoDirectory>;

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The booking engine. One lock serialises access to its connection.
    engine: Arc<Mutex<Engine>>,
    /// Catalog, promo and pricing lookups. Never locked.
    storefront: Arc<EngineStorefront>,
    /// The slot grid offered for every experience.
    availability: Arc<Availability>,
    /// How long a request may wait for the engine before failing.
    store_timeout: Duration,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Machine-readable error kind.
    kind: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The machine-readable error kind.
    kind: &'static str,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            kind: self.kind.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } | ApiError::PriceMismatch { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } | ApiError::PromoNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::SlotConflict { .. } => StatusCode::CONFLICT,
            ApiError::ReferenceExhausted { .. }
            | ApiError::StoreUnavailable { .. }
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(kind = err.kind(), error = %err, "Request failed");
        }

        Self {
            status,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "validation_error",
            message: rejection.body_text(),
        }
    }
}

/// Acquires the engine, failing with `StoreUnavailable` after the store timeout.
async fn lock_engine(app_state: &AppState) -> Result<MutexGuard<'_, Engine>, HttpError> {
    tokio::time::timeout(app_state.store_timeout, app_state.engine.lock())
        .await
        .map_err(|_| {
            HttpError::from(ApiError::StoreUnavailable {
                message: format!(
                    "Booking store unavailable: no access within {} ms",
                    app_state.store_timeout.as_millis()
                ),
            })
        })
}

/// Handler for POST `/api/promo/validate` endpoint.
async fn handle_validate_promo(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<ValidatePromoRequest>, JsonRejection>,
) -> Result<Json<ValidatePromoResponse>, HttpError> {
    let Json(req) = payload?;

    let response: ValidatePromoResponse = validate_promo(&*app_state.storefront, &req)?;

    Ok(Json(response))
}

/// Handler for POST `/api/bookings/quote` endpoint.
async fn handle_quote(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, HttpError> {
    let Json(req) = payload?;

    let response: QuoteResponse = quote_booking(&*app_state.storefront, &req)?;

    Ok(Json(response))
}

/// Handler for POST `/api/bookings` endpoint.
///
/// Creates a booking and answers 201 on success.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), HttpError> {
    let Json(req) = payload?;

    info!(
        experience_id = %req.experience_id,
        date = %req.date,
        time = %req.time,
        "Handling create_booking request"
    );

    let mut engine = lock_engine(&app_state).await?;
    let response: CreateBookingResponse = create_booking(&mut engine, req)?;
    drop(engine);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/api/bookings/{reference}` endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<BookingInfo>, HttpError> {
    let mut engine = lock_engine(&app_state).await?;
    let booking: BookingInfo = get_booking(&mut engine, &reference)?;
    drop(engine);

    Ok(Json(booking))
}

/// Handler for GET `/api/experiences` endpoint.
async fn handle_list_experiences(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<ExperienceInfo>> {
    Json(list_experiences(&*app_state.storefront))
}

/// Handler for GET `/api/experiences/{id}` endpoint.
async fn handle_get_experience(
    AxumState(app_state): AxumState<AppState>,
    Path(experience_id): Path<String>,
) -> Result<Json<ExperienceDetailResponse>, HttpError> {
    let mut engine = lock_engine(&app_state).await?;
    let detail: ExperienceDetailResponse =
        get_experience(&mut engine, &experience_id, &app_state.availability)?;
    drop(engine);

    Ok(Json(detail))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .route("/promo/validate", post(handle_validate_promo))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings/quote", post(handle_quote))
        .route("/bookings/{reference}", get(handle_get_booking))
        .route("/experiences", get(handle_list_experiences))
        .route("/experiences/{id}", get(handle_get_experience));

    Router::new().nest("/api", api).with_state(app_state)
}

/// Loads the catalog seed from a JSON file, or the built-in seed.
fn load_catalog(path: Option<&str>) -> Result<CatalogSeed, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        info!("Using built-in catalog");
        return Ok(CatalogSeed::builtin());
    };

    info!("Loading catalog from: {}", path);
    let json: String = std::fs::read_to_string(path)?;
    Ok(CatalogSeed::from_json(&json)?)
}

/// Resolves when the process is asked to stop.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
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

    info!("Initializing BookIt Server");

    let store_timeout: Duration = Duration::from_millis(args.store_timeout_ms);

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file_and_timeout(db_path, store_timeout)?
    } else {
        info!("Using in-memory database");
        let mut persistence: Persistence = Persistence::new_in_memory()?;
        persistence.set_busy_timeout(store_timeout)?;
        persistence
    };

    let seed: CatalogSeed = load_catalog(args.catalog.as_deref())?;
    info!(
        experiences = seed.experiences.len(),
        promo_codes = seed.promo_codes.len(),
        "Catalog loaded"
    );
    let (catalog, promos): (StaticCatalog, StaticPromoDirectory) = seed.into_parts();

    let config: EngineConfig = EngineConfig {
        tax_flat: args.tax,
        max_reference_attempts: args.reference_attempts,
    };
    info!(
        tax_flat = config.tax_flat,
        max_reference_attempts = config.max_reference_attempts,
        store_timeout_ms = args.store_timeout_ms,
        "Engine configured"
    );

    let engine: Engine =
        BookingEngine::new(catalog, promos, persistence, RandomReferenceGenerator, config);

    let app_state: AppState = AppState {
        storefront: engine.shared_storefront(),
        engine: Arc::new(Mutex::new(engine)),
        availability: Arc::new(Availability::standard()),
        store_timeout,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
