use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use roastgram_app::domain::{Biodata, Language, Profile, Roast};
use roastgram_app::AppContext;
use roastgram_errors::AppError;
use serde::Deserialize;
use serde_json::Value;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

const CLIENT_IP_HEADER: &str = "x-forwarded-for";

#[derive(Debug, Deserialize)]
struct RoastBody {
    username: Option<String>,
    profile: Option<Value>,
}

/// Raw query pairs. Repeated keys are allowed and the first value wins.
#[derive(Debug, Default)]
struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn from_extracted(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Self {
        match query {
            Ok(Query(pairs)) => Self(pairs),
            Err(rejection) => {
                tracing::debug!("Unreadable query string: {}", rejection);
                Self::default()
            }
        }
    }

    fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/profile", get(get_profile))
        .route(
            "/roast",
            get(get_roast).post(post_roast).options(roast_preflight),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn get_profile(
    State(ctx): State<AppContext>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Profile>, AppError> {
    let params = QueryParams::from_extracted(query);
    let username = non_empty(params.first("username"))
        .ok_or_else(|| AppError::invalid_input("Username is required"))?;

    let profile = ctx.fetch_profile.execute(&username).await?;
    Ok(Json(profile))
}

/// Body-based roast: Indonesian only, no rate limiting.
async fn post_roast(
    State(ctx): State<AppContext>,
    payload: Result<Json<RoastBody>, JsonRejection>,
) -> Result<Json<Roast>, AppError> {
    let required = || AppError::invalid_input("Username and profile data are required");

    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!("Rejected roast body: {}", rejection);
        required()
    })?;
    let username = non_empty(body.username).ok_or_else(required)?;
    let profile = match body.profile {
        Some(Value::Object(profile)) => profile,
        _ => return Err(required()),
    };

    let biodata = Biodata::from_object(profile).without("profile_pic_url");
    let roast = ctx
        .generate_roast
        .execute(&username, Language::Indonesian, &biodata)
        .await?;
    Ok(Json(roast))
}

/// Query-based roast: rate limited per client, language selectable, CORS enabled.
async fn get_roast(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let params = QueryParams::from_extracted(query);
    let result = roast_from_query(&ctx, &headers, &params).await;
    with_cors(result.map(Json).into_response())
}

async fn roast_from_query(
    ctx: &AppContext,
    headers: &HeaderMap,
    params: &QueryParams,
) -> Result<Roast, AppError> {
    let client_ip = headers
        .get(CLIENT_IP_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::invalid_input("Invalid client IP."))?;

    if let Err(e) = ctx.rate_limiter.consume(client_ip) {
        tracing::warn!("Rate limited {}: {}", client_ip, e);
        return Err(AppError::RateLimited);
    }

    let username = non_empty(params.first("username"));
    let raw_biodata = non_empty(params.first("biodata"));
    let (username, raw_biodata) = match (username, raw_biodata) {
        (Some(username), Some(biodata)) => (username, biodata),
        _ => return Err(AppError::invalid_input("Username and biodata are required")),
    };

    let biodata = Biodata::from_json_str(&raw_biodata)?.without("avatar");
    let language = Language::from_selector(params.first("language").as_deref());

    ctx.generate_roast
        .execute(&username, language, &biodata)
        .await
}

async fn roast_preflight() -> Response {
    with_cors(StatusCode::NO_CONTENT.into_response())
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
