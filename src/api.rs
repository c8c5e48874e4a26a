use axum::{
    body::Body,
    extract::{rejection::FormRejection, Extension, State},
    http::{HeaderName, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::ai::TextGenerator;
use crate::itinerary::generate_itinerary;
use crate::messages::{INVALID_FORM, RATE_LIMITED};
use crate::tips::TipRotation;
use crate::trip::{TripForm, TripRequest};

#[derive(Debug, Serialize, Deserialize)]
struct TipResponse {
    tip: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct InfoResponse {
    info: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    pub rate_limit_per_second: Option<u64>,
}

/// Shared handles for all requests.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub tips: Arc<TipRotation>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            tips: Arc::new(TipRotation::default()),
        }
    }
}

#[derive(Clone, Debug)]
struct RequestContext {
    request_id: String,
}

/// Sliding-window limiter shared by every route.
#[derive(Debug)]
struct RateLimiter {
    limit: u64,
    window: Duration,
    timestamps: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    fn per_second(limit: u64) -> Self {
        Self {
            limit,
            window: Duration::from_secs(1),
            timestamps: Mutex::new(VecDeque::new()),
        }
    }

    /// Record a request at `now` if the window has room for it.
    async fn try_acquire(&self, now: Instant) -> bool {
        let mut timestamps = self.timestamps.lock().await;
        while timestamps
            .front()
            .is_some_and(|ts| now.saturating_duration_since(*ts) >= self.window)
        {
            timestamps.pop_front();
        }
        if timestamps.len() as u64 >= self.limit {
            return false;
        }
        timestamps.push_back(now);
        true
    }
}

pub fn router(state: AppState, config: ApiConfig) -> Router {
    let request_id_layer = middleware::from_fn(assign_request_id);
    let mut router = Router::new()
        .route("/generate", post(generate))
        .route("/tip", get(get_tip))
        .route("/info", get(get_info))
        .with_state(state);

    if let Some(rate_limit) = config.rate_limit_per_second {
        let limiter = Arc::new(RateLimiter::per_second(rate_limit));
        let rate_limit_layer = middleware::from_fn_with_state(limiter, rate_limit_requests);
        router = router.layer(rate_limit_layer);
    }

    router.layer(request_id_layer)
}

async fn generate(
    State(state): State<AppState>,
    Extension(request): Extension<RequestContext>,
    form: Result<Form<TripForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(err) => {
            tracing::debug!(
                request_id = %request.request_id,
                error = %err,
                "Rejected unreadable form"
            );
            return bad_request_response(INVALID_FORM);
        }
    };

    let trip = match TripRequest::try_from(form) {
        Ok(trip) => trip,
        Err(err) => {
            tracing::debug!(
                request_id = %request.request_id,
                error = %err,
                "Rejected trip request"
            );
            return bad_request_response(err.to_string());
        }
    };

    let itinerary = generate_itinerary(state.generator.as_ref(), &trip).await;
    tracing::info!(
        request_id = %request.request_id,
        city = %trip.city,
        has_maps_link = !itinerary.maps_link.is_empty(),
        "Generated itinerary"
    );
    (StatusCode::OK, Json(itinerary)).into_response()
}

async fn get_tip(
    State(state): State<AppState>,
    Extension(request): Extension<RequestContext>,
) -> Response {
    let tip = state.tips.next_tip().await.unwrap_or_default();
    tracing::debug!(request_id = %request.request_id, tip, "Served tip");
    (
        StatusCode::OK,
        Json(TipResponse {
            tip: tip.to_string(),
        }),
    )
        .into_response()
}

async fn get_info() -> Response {
    (
        StatusCode::OK,
        Json(InfoResponse {
            info: crate::system_info::get_system_info(),
        }),
    )
        .into_response()
}

async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let mut response = next.run(req).await;
    let status = response.status();
    if let Ok(header_value) = request_id.parse() {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), header_value);
    }
    tracing::debug!(
        request_id,
        method = %method,
        uri = %uri,
        status = %status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );
    response
}

async fn rate_limit_requests(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let request_id = req
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.request_id.as_str())
        .unwrap_or("unknown");
    if !limiter.try_acquire(Instant::now()).await {
        tracing::debug!(request_id, limit = limiter.limit, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: RATE_LIMITED.to_string(),
            }),
        )
            .into_response();
    }
    next.run(req).await
}

fn bad_request_response(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
