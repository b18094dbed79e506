use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, HttpResponse, HttpServer};
use actix_web::dev::{Server, ServerHandle};
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::config::structs::https_server_config::HttpsServerConfig;
use crate::http::structs::certificate_status::CertificateStatus;
use crate::ssl::structs::certificate_reloader::CertificateReloader;
use crate::ssl::structs::certificate_store::CertificateStore;

pub fn http_service_routes(store: Arc<CertificateStore>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(store.clone()));
        cfg.service(web::resource("/certificate").route(web::get().to(http_service_certificate)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds an HTTPS listener whose certificate follows `reloader`.
pub fn https_service(
    addr: SocketAddr,
    reloader: &CertificateReloader,
    config: &HttpsServerConfig
) -> std::io::Result<(ServerHandle, Server)>
{
    info!("[HTTPS] Starting server listener with SSL on {} ({})", addr, reloader.paths());
    let tls_config = reloader.server_config().map_err(std::io::Error::other)?;
    let store = reloader.store();

    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(store.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive.unwrap_or(60)))
        .client_request_timeout(Duration::from_secs(config.request_timeout.unwrap_or(15)))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout.unwrap_or(15)))
        .workers(config.threads.unwrap_or(1).max(1) as usize)
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_certificate(data: Data<Arc<CertificateStore>>) -> HttpResponse
{
    let bundle = data.get();
    debug!("[HTTPS] Certificate status requested, serving {}", bundle.fingerprint);
    HttpResponse::Ok().json(CertificateStatus::from(bundle.as_ref()))
}

pub async fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().json(serde_json::json!({"status": "not found"}))
}
