//! Development server.
//!
//! Pages are rendered straight from the in-memory registry on every request,
//! so no on-disk build is needed. Files that do exist in the output
//! directory (a previous `build`) are still served for asset-like paths.

mod lifecycle;
mod path;
mod response;

use crate::{
    config::{SiteConfig, cfg},
    core::RouteKey,
    embed, log,
    registry::Registry,
    render::{RenderContext, render_topic},
};
use anyhow::Result;
use crossbeam::channel;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    shutdown_rx: channel::Receiver<()>,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    crate::core::register_server(Arc::clone(&server), shutdown_tx);

    log!("serve"; "http://{}", addr);

    Ok(BoundServer {
        server,
        addr,
        shutdown_rx,
    })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking until shutdown).
    pub fn run(self, registry: Arc<Registry>) -> Result<()> {
        run_request_loop(&self.server, registry);
        // Drain the shutdown signal so Ctrl+C before unblock is not lost
        let _ = self.shutdown_rx.try_recv();
        Ok(())
    }
}

fn run_request_loop(server: &Server, registry: Arc<Registry>) {
    // Use thread pool to handle requests concurrently
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let registry = Arc::clone(&registry);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &registry) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, registry: &Registry) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let config = cfg();

    // Serve the stylesheet from memory (doesn't depend on a build)
    if request.url() == embed::stylesheet_href() {
        return response::respond_stylesheet(request);
    }

    // Asset-like paths are served from a previous build, if present
    if let Some(file) = path::resolve_asset(request.url(), &config.build.output) {
        return response::respond_file(request, &file);
    }

    // Page resolution: every route renders something
    let key = RouteKey::from_browser(request.url());
    let stylesheet = embed::stylesheet_href();
    let ctx = RenderContext {
        site_title: &config.site.title,
        stylesheet: &stylesheet,
    };

    match registry.get(&key) {
        Some(topic) => response::respond_page(request, 200, render_topic(topic, &ctx)),
        None => response::respond_page(request, 404, render_topic(registry.fallback(), &ctx)),
    }
}
