use crate::app::App;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use env_logger::Env;
use std::net::SocketAddr;

mod app;
mod domain;
mod errors;
mod forms;
mod geos;
mod params;
mod remote;
mod responses;
mod router;
mod settings;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // 1️⃣ Load configuration (defaults, site.toml, SITE_* env)
    let settings = match settings::get_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("❌ Failed to read configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the remote clients shared by all workers
    let app = match App::from_settings(&settings) {
        Ok(app) => app,
        Err(e) => {
            log::error!("❌ Failed to build remote clients: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr: SocketAddr = match settings.server.address().parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("❌ Invalid server address {}: {e}", settings.server.address());
            std::process::exit(1);
        }
    };
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(settings.server.max_workers);

    // 4️⃣ Serve requests, passing the app handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("request failed: {err}");
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
