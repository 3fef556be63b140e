//! Backend API client
//!
//! Thin typed wrappers over `reqwasm` fetch calls against the fixed backend
//! origin. Credential placement follows the backend's convention: privileged
//! GETs carry the admin password in an `admin-password` header, every other
//! privileged verb carries it in the JSON body. End-user auth endpoints use
//! the session cookie instead.

use reqwasm::http::{Method, Request, RequestCredentials, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};

use uniscape_types::models::{
    ApiStatus, BackgroundEnvelope, Booking, BookingsEnvelope, LoginPayload, RefundRequest,
    RefundsEnvelope, RegisterPayload, RoutePayload, RoutesEnvelope, TransactionsEnvelope,
    Transaction, TransportRoute, Trip, TripStatus, TripUpdate, User, UsersEnvelope,
};
use uniscape_types::{AdminCommand, ApiError, CommandVerb, formatting};

/// Backend origin; varies by deployment, baked in at build time.
pub const API_BASE: &str = "https://gotravelup-backend.onrender.com";

/// Resolve a backend-relative media path (trip images, background) to a
/// full URL. Empty paths stay empty.
pub fn media_url(path: &str) -> String {
    formatting::media_url(API_BASE, path)
}

fn url_for(path: &str) -> String {
    format!("{}/{}", API_BASE.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn transport(err: reqwasm::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Pull the server's message out of a non-2xx body when it carries the
/// standard envelope; otherwise report the bare status.
async fn error_from(resp: Response) -> ApiError {
    let status = resp.status();
    if let Ok(text) = resp.text().await {
        if let Ok(envelope) = serde_json::from_str::<ApiStatus>(&text) {
            if let Some(message) = envelope.message {
                return ApiError::Server(message);
            }
        }
    }
    ApiError::Http(status)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    let text = resp.text().await.map_err(transport)?;
    serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&url_for(path)).send().await.map_err(transport)?;
    decode(resp).await
}

async fn get_json_admin<T: DeserializeOwned>(path: &str, password: &str) -> Result<T, ApiError> {
    let resp = Request::get(&url_for(path))
        .header("admin-password", password)
        .send()
        .await
        .map_err(transport)?;
    decode(resp).await
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    let resp = Request::new(&url_for(path))
        .method(method)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(transport)?;
    decode(resp).await
}

async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    // The browser supplies the multipart boundary; no Content-Type here.
    let resp = Request::post(&url_for(path))
        .body(JsValue::from(form))
        .send()
        .await
        .map_err(transport)?;
    decode(resp).await
}

/// Collapse a `{success, message}` envelope into a Result.
fn expect_success(envelope: ApiStatus) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Server(
            envelope.message.unwrap_or_else(|| "Request failed".to_string()),
        ))
    }
}

#[derive(Serialize)]
struct Credential<'a> {
    password: &'a str,
}

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a str,
    password: &'a str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session Gate
// ─────────────────────────────────────────────────────────────────────────────

/// Validate the admin credential. `Ok(false)` is a rejected password;
/// `Err` is a connectivity failure (terminal for the gate either way).
pub async fn verify_admin(password: &str) -> Result<bool, ApiError> {
    let payload = serde_json::to_string(&Credential { password })
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let resp = Request::post(&url_for("/api/admin/verify"))
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(transport)?;
    Ok(resp.ok())
}

// ─────────────────────────────────────────────────────────────────────────────
// Resource Loaders
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /api/trips`: public, legacy bare-array response.
pub async fn fetch_trips() -> Result<Vec<Trip>, ApiError> {
    get_json("/api/trips").await
}

pub async fn fetch_users(password: &str) -> Result<Vec<User>, ApiError> {
    let env: UsersEnvelope = get_json_admin("/api/admin/users", password).await?;
    expect_success(ApiStatus { success: env.success, message: env.message })?;
    Ok(env.users)
}

/// Credential-gated list endpoints POST the password in the body.
pub async fn fetch_pending_transactions(password: &str) -> Result<Vec<Transaction>, ApiError> {
    let env: TransactionsEnvelope =
        send_json(Method::POST, "/api/admin/pending-transactions", &Credential { password }).await?;
    expect_success(ApiStatus { success: env.success, message: env.message })?;
    Ok(env.transactions)
}

pub async fn fetch_refunds(password: &str) -> Result<Vec<RefundRequest>, ApiError> {
    let env: RefundsEnvelope = get_json_admin("/api/admin/refunds", password).await?;
    expect_success(ApiStatus { success: env.success, message: env.message })?;
    Ok(env.refunds)
}

pub async fn fetch_routes(password: &str) -> Result<Vec<TransportRoute>, ApiError> {
    let env: RoutesEnvelope = get_json_admin("/api/admin/transport", password).await?;
    expect_success(ApiStatus { success: env.success, message: env.message })?;
    Ok(env.routes)
}

pub async fn fetch_bookings(trip_id: &str, password: &str) -> Result<Vec<Booking>, ApiError> {
    let path = format!("/api/admin/trips/{trip_id}/bookings");
    let env: BookingsEnvelope = get_json_admin(&path, password).await?;
    expect_success(ApiStatus { success: env.success, message: env.message })?;
    Ok(env.bookings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Execute one typed admin command. The body is always just the credential;
/// everything else the command needs is in its path.
pub async fn run_command(command: &AdminCommand, password: &str) -> Result<(), ApiError> {
    let method = match command.verb() {
        CommandVerb::Post => Method::POST,
        CommandVerb::Delete => Method::DELETE,
    };
    let env: ApiStatus = send_json(method, &command.path(), &Credential { password }).await?;
    expect_success(env)
}

// ─────────────────────────────────────────────────────────────────────────────
// Trips
// ─────────────────────────────────────────────────────────────────────────────

/// `POST /api/admin/trips`: multipart, image plus scalar fields plus the
/// JSON-encoded payment breakdown; credential travels as a form field.
pub async fn create_trip(form: web_sys::FormData) -> Result<(), ApiError> {
    let env: ApiStatus = post_multipart("/api/admin/trips", form).await?;
    expect_success(env)
}

pub async fn update_trip(trip_id: &str, update: &TripUpdate) -> Result<(), ApiError> {
    let path = format!("/api/admin/trips/{trip_id}");
    let env: ApiStatus = send_json(Method::PUT, &path, update).await?;
    expect_success(env)
}

pub async fn set_trip_status(
    trip_id: &str,
    status: TripStatus,
    password: &str,
) -> Result<(), ApiError> {
    let path = format!("/api/admin/trips/{trip_id}/status");
    let body = StatusBody { status: status.as_str(), password };
    let env: ApiStatus = send_json(Method::PUT, &path, &body).await?;
    expect_success(env)
}

// ─────────────────────────────────────────────────────────────────────────────
// Transport Routes
// ─────────────────────────────────────────────────────────────────────────────

pub async fn create_route(payload: &RoutePayload) -> Result<(), ApiError> {
    let env: ApiStatus = send_json(Method::POST, "/api/admin/transport", payload).await?;
    expect_success(env)
}

pub async fn update_route(route_id: &str, payload: &RoutePayload) -> Result<(), ApiError> {
    let path = format!("/api/admin/transport/{route_id}");
    let env: ApiStatus = send_json(Method::PUT, &path, payload).await?;
    expect_success(env)
}

pub async fn set_route_status(
    route_id: &str,
    status: TripStatus,
    password: &str,
) -> Result<(), ApiError> {
    let path = format!("/api/admin/transport/{route_id}/status");
    let body = StatusBody { status: status.as_str(), password };
    let env: ApiStatus = send_json(Method::PUT, &path, &body).await?;
    expect_success(env)
}

// ─────────────────────────────────────────────────────────────────────────────
// Background Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Public read of the site background media path.
pub async fn fetch_background() -> Result<Option<String>, ApiError> {
    let env: BackgroundEnvelope = get_json("/api/settings/background").await?;
    Ok(env.background)
}

pub async fn update_background(form: web_sys::FormData) -> Result<(), ApiError> {
    let env: ApiStatus = post_multipart("/api/admin/settings/background", form).await?;
    expect_success(env)
}

// ─────────────────────────────────────────────────────────────────────────────
// CSV Export
// ─────────────────────────────────────────────────────────────────────────────

/// Fetch the user CSV export and hand it to the browser as a download via
/// a synthetic anchor click.
pub async fn download_users_csv(password: &str) -> Result<(), ApiError> {
    let resp = Request::get(&url_for("/api/admin/users/download"))
        .header("admin-password", password)
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    let bytes = resp.binary().await.map_err(transport)?;
    trigger_download(&bytes, "uniscape_users.csv")
}

fn js_failure(context: &str) -> ApiError {
    ApiError::Transport(format!("browser rejected {context}"))
}

fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), ApiError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|_| js_failure("blob construction"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| js_failure("object url"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| js_failure("document access"))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| js_failure("anchor creation"))?
        .dyn_into()
        .map_err(|_| js_failure("anchor cast"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// End-User Auth (session cookie)
// ─────────────────────────────────────────────────────────────────────────────

async fn post_auth<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let payload = serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    let resp = Request::post(&url_for(path))
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include)
        .body(payload)
        .send()
        .await
        .map_err(transport)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(error_from(resp).await)
    }
}

pub async fn register(payload: &RegisterPayload) -> Result<(), ApiError> {
    post_auth("/api/register", payload).await
}

pub async fn login(payload: &LoginPayload) -> Result<(), ApiError> {
    post_auth("/api/login", payload).await
}

pub async fn validate_referral(code: &str) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct ReferralBody<'a> {
        #[serde(rename = "referralCode")]
        referral_code: &'a str,
    }
    post_auth("/api/validate-referral", &ReferralBody { referral_code: code }).await
}

/// Silent session probe; `true` means a session cookie is live.
pub async fn check_profile() -> Result<bool, ApiError> {
    let resp = Request::get(&url_for("/api/profile"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport)?;
    Ok(resp.ok())
}

pub async fn logout() -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct Empty {}
    post_auth("/api/logout", &Empty {}).await
}
