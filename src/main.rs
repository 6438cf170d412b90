//! SSR host: serves the Leptos app shell, hydration bundle, and static assets.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use axum::routing::get;
    use interview_ui::app::{App, shell};
    use interview_ui::config::ServerConfig;
    use interview_ui::error::ConfigError;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::trace::TraceLayer;

    tracing_subscriber::fmt::init();

    let conf = match get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string())) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let server = match ServerConfig::from_env(leptos_options.site_addr) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);
    let app = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(server.site_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %server.site_addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.site_addr, "interview-ui listening");
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!(error = %e, "server failed");
    }
}

#[cfg(feature = "ssr")]
async fn healthz() -> &'static str {
    "ok"
}

#[cfg(not(feature = "ssr"))]
fn main() {}
