//! SSR host for the rating console.
//!
//! Serves the server-rendered shell for every client route and the compiled
//! WASM/CSS bundle under `/pkg`. The rating backend itself runs elsewhere;
//! the browser calls it directly at the configured API base.

#[cfg(feature = "ssr")]
mod host {
    use std::path::PathBuf;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use rating_console::app::{App, shell};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    /// Leptos SSR routes plus static assets.
    pub fn app(leptos_options: LeptosOptions) -> Router {
        let routes = generate_route_list(App);
        let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

        Router::new()
            .leptos_routes(&leptos_options, routes, {
                let opts = leptos_options.clone();
                move || shell(opts.clone())
            })
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
            .layer(TraceLayer::new_for_http())
            .with_state(leptos_options)
    }

    fn port_override() -> Option<u16> {
        let raw = std::env::var("PORT").ok()?;
        match raw.trim().parse() {
            Ok(port) => Some(port),
            Err(e) => {
                tracing::warn!(%raw, error = %e, "ignoring invalid PORT");
                None
            }
        }
    }

    /// Load configuration, bind, and serve until the listener fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded (missing or
    /// malformed `Cargo.toml` `[package.metadata.leptos]` section) or the
    /// address cannot be bound.
    pub async fn run() -> Result<(), String> {
        let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
        let leptos_options = conf.leptos_options;
        let mut addr = leptos_options.site_addr;
        if let Some(port) = port_override() {
            addr.set_port(port);
        }

        let app = app(leptos_options);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| format!("failed to bind {addr}: {e}"))?;

        tracing::info!(%addr, "rating console listening");
        axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = host::run().await {
        tracing::error!(error = %e, "rating console stopped");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {}
