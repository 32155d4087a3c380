//! Server binding with port retry.

use anyhow::{Result, anyhow};
use std::net::{IpAddr, SocketAddr};
use tiny_http::Server;

use crate::log;

/// How many consecutive ports to try when the configured one is taken.
const PORT_RETRY_LIMIT: u16 = 10;

/// Bind the HTTP server, walking up from the configured port if it is busy.
pub fn bind_with_retry(interface: IpAddr, port: u16) -> Result<(Server, SocketAddr)> {
    let mut last_err = None;

    for offset in 0..PORT_RETRY_LIMIT {
        let Some(candidate) = port.checked_add(offset) else {
            break;
        };
        let addr = SocketAddr::new(interface, candidate);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} busy, using {}", port, candidate);
                }
                return Ok((server, addr));
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(anyhow!(
        "failed to bind {}:{}..{}: {}",
        interface,
        port,
        port.saturating_add(PORT_RETRY_LIMIT - 1),
        last_err.map(|e| e.to_string()).unwrap_or_default()
    ))
}
