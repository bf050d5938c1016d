use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use lazy_static::lazy_static;
use log::{error, info};
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use crate::common::common::{current_time_millis, parse_query};
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracker_failure::TrackerFailure;
use crate::tracker::structs::user::User;

/// Margin subtracted from the write timeout to form the request deadline,
/// leaving room to still write the deadline reply.
const DEADLINE_MARGIN_MS: u64 = 200;

lazy_static! {
    static ref ERR_INVALID_PASSKEY: Vec<u8> = TrackerFailure::new("Your passkey is invalid", 3600).encode();
    static ref ERR_DEADLINE_EXCEEDED: Vec<u8> = TrackerFailure::new("Request context deadline exceeded", 300).encode();
    static ref ERR_SCRAPE_DISABLED: Vec<u8> = TrackerFailure::new("Scrape is disabled", 0).encode();
    static ref ERR_UNKNOWN_REQUEST: Vec<u8> = TrackerFailure::new("unknown request", 0).encode();
}

#[tracing::instrument(level = "debug")]
pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/alive")
            .route(web::get().to(http_service_alive))
        );
        cfg.service(web::resource("/{passkey}/announce")
            .route(web::get().to(http_service_announce))
        );
        cfg.service(web::resource("/{passkey}/scrape")
            .route(web::get().to(http_service_scrape))
        );
        cfg.service(web::resource("/{passkey}/metrics")
            .route(web::get().to(http_service_metrics))
        );
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

#[tracing::instrument(level = "debug")]
pub async fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    info!("[HTTP] Starting server listener on {addr}");
    let read_timeout = data.config.http.timeout.read;
    let idle_timeout = data.config.http.timeout.idle;
    let service_data = Arc::new(HttpServiceData { torrent_tracker: data.clone() });
    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(idle_timeout))
        .client_request_timeout(Duration::from_secs(read_timeout))
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();
    (server.handle(), server)
}

/// Runs handler work on its own task, raced against the request deadline.
/// A panic is recovered and counted; on deadline the reply goes out and the
/// task's eventual result is discarded (its queue writes still commit).
async fn http_run_with_deadline<F>(tracker: Arc<TorrentTracker>, work: F) -> HttpResponse
where
    F: FnOnce() -> Result<Vec<u8>, TrackerFailure> + Send + 'static,
{
    let deadline = Duration::from_secs(tracker.config.http.timeout.write)
        .saturating_sub(Duration::from_millis(DEADLINE_MARGIN_MS));
    let handle = tokio::spawn(async move { work() });
    match tokio::time::timeout(deadline, handle).await {
        Ok(Ok(Ok(body))) => HttpResponse::Ok().content_type(ContentType::plaintext()).body(body),
        Ok(Ok(Err(failure))) => http_service_failure(&tracker, &failure),
        Ok(Err(join_error)) => {
            tracker.update_stats(StatsEvent::PanicsRecovered, 1);
            error!("[HTTP] Recovered handler panic: {join_error}");
            HttpResponse::InternalServerError().finish()
        }
        Err(_) => {
            tracker.update_stats(StatsEvent::DeadlinesExceeded, 1);
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(ERR_DEADLINE_EXCEEDED.clone())
        }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_alive(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let now = current_time_millis();
    let started = data.torrent_tracker.stats.started.load(std::sync::atomic::Ordering::Relaxed) * 1000;
    HttpResponse::Ok().json(serde_json::json!({
        "now": now,
        "uptime": now - started
    }))
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_announce(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = data.torrent_tracker.clone();
    tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
    let user = match http_service_resolve_user(&tracker, path.into_inner()) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let remote_addr = request.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let proxy_header = request.headers()
        .get(&tracker.config.http.proxy_header)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let query_string = request.query_string().to_string();
    let worker_tracker = tracker.clone();
    http_run_with_deadline(tracker, move || {
        let query = parse_query(Some(query_string))
            .map_err(|e| TrackerFailure::new(&e.message, 3600))?;
        let announce = worker_tracker.validate_announce(remote_addr, proxy_header.as_deref(), query)?;
        worker_tracker.handle_announce(worker_tracker.clone(), announce, user)
    }).await
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_scrape(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = data.torrent_tracker.clone();
    tracker.update_stats(StatsEvent::ScrapesHandled, 1);
    let user = match http_service_resolve_user(&tracker, path.into_inner()) {
        Ok(user) => user,
        Err(response) => return response,
    };
    if !tracker.config.enable_scrape {
        tracker.update_stats(StatsEvent::Failures, 1);
        return HttpResponse::Ok().content_type(ContentType::plaintext()).body(ERR_SCRAPE_DISABLED.clone());
    }
    let query_string = request.query_string().to_string();
    let worker_tracker = tracker.clone();
    http_run_with_deadline(tracker, move || {
        let query = parse_query(Some(query_string))
            .map_err(|e| TrackerFailure::new(&e.message, 3600))?;
        let scrape = worker_tracker.validate_scrape(query)?;
        Ok(worker_tracker.handle_scrape(user, scrape))
    }).await
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_metrics(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = data.torrent_tracker.clone();
    if !tracker.config.enable_metrics {
        return http_service_not_found_response(&tracker);
    }
    if let Err(response) = http_service_resolve_user(&tracker, path.into_inner()) {
        return response;
    }
    let admin = request.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| !tracker.config.admin_token.is_empty() && token == tracker.config.admin_token)
        .unwrap_or(false);
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(tracker.render_metrics(admin))
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_not_found(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_not_found_response(&data.torrent_tracker)
}

fn http_service_not_found_response(tracker: &Arc<TorrentTracker>) -> HttpResponse
{
    tracker.update_stats(StatsEvent::NotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(ERR_UNKNOWN_REQUEST.clone())
}

/// Looks up the path passkey in the users snapshot; any shape or lookup
/// failure maps to the one-hour "invalid passkey" reply.
fn http_service_resolve_user(tracker: &Arc<TorrentTracker>, passkey: String) -> Result<Arc<User>, HttpResponse>
{
    let invalid = || {
        tracker.update_stats(StatsEvent::Failures, 1);
        HttpResponse::Ok().content_type(ContentType::plaintext()).body(ERR_INVALID_PASSKEY.clone())
    };
    let passkey = passkey.parse::<Passkey>().map_err(|_| invalid())?;
    tracker.get_user(passkey).ok_or_else(invalid)
}

fn http_service_failure(tracker: &Arc<TorrentTracker>, failure: &TrackerFailure) -> HttpResponse
{
    tracker.update_stats(StatsEvent::Failures, 1);
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(failure.encode())
}
