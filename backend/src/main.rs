mod config;
mod error;
mod services;
mod upstream;

use crate::config::Config;
use crate::upstream::{HttpUpstream, Upstream};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded Yew bundle. Unknown paths get `index.html` so the
/// client can pick the page from the location.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let dotenv = dotenvy::dotenv();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let upstream = HttpUpstream::new(config.upstream.clone()).map_err(|e| {
        error!("Cannot build upstream client: {}", e);
        io::Error::other(e.to_string())
    })?;
    let upstream: Arc<dyn Upstream> = Arc::new(upstream);
    let upstream = web::Data::from(upstream);

    let url = config.bind_url();
    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open a browser: {}", e);
            }
        });
    }

    info!("Forwarding API calls to {}", config.upstream.base_url);
    info!("Server running at {}", url);

    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .configure(|cfg| services::configure(cfg, upstream.clone(), json_limit))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
