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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Parser, builder::NonEmptyStringValueParser};
use results_portal_api::{
    ApiError, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ResultResponse,
    SemesterSummaryResponse, TokenConfig, list_results, login, register, seed_demo_data,
    summarize_results,
};
use results_portal_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, error, info};

use crate::session::SessionAccount;

/// Student Results Portal - HTTP server for registration, login and results
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "PORTAL_DATABASE")]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 5001)]
    port: u16,

    /// Address to bind the server to
    #[arg(long, env = "PORTAL_BIND", default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Secret used to sign session tokens (HS256)
    #[arg(
        long,
        env = "JWT_SECRET",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    jwt_secret: String,

    /// Do not insert demo data into an empty database
    #[arg(long, env = "PORTAL_SKIP_SEED")]
    skip_seed: bool,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The single database handle. The mutex serializes store access.
    persistence: Arc<Mutex<Persistence>>,
    /// Token signing settings.
    tokens: Arc<TokenConfig>,
}

/// Error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always `true`.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::Conflict { .. }
            | ApiError::NotFound { .. }
            | ApiError::InvalidCredentials
            | ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken { .. } => StatusCode::FORBIDDEN,
            ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Handler for POST `/auth/register`.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), HttpError> {
    let Json(req): Json<RegisterRequest> = payload?;
    info!(username = %req.username, "Handling register request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterResponse = register(&mut persistence, &req)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/auth/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, HttpError> {
    let Json(req): Json<LoginRequest> = payload?;
    info!("Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &app_state.tokens, &req)?;

    Ok(Json(response))
}

/// Handler for GET `/results`.
async fn handle_list_results(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
) -> Result<Json<Vec<ResultResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let rows: Vec<ResultResponse> = list_results(&mut persistence, &account)?;

    Ok(Json(rows))
}

/// Handler for GET `/results/summary`.
async fn handle_results_summary(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
) -> Result<Json<Vec<SemesterSummaryResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let summary: Vec<SemesterSummaryResponse> = summarize_results(&mut persistence, &account)?;

    Ok(Json(summary))
}

/// Routes served both at the root and under `/api`.
fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handle_register))
        .route("/auth/login", post(handle_login))
        .route("/results", get(handle_list_results))
        .route("/results/summary", get(handle_results_summary))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(portal_routes())
        .nest("/api", portal_routes())
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Student Results Portal server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.skip_seed {
        info!("Demo seed disabled");
    } else {
        seed_demo_data(&mut persistence)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        tokens: Arc::new(TokenConfig::new(args.jwt_secret)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
