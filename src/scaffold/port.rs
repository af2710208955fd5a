//! Dev-server port probing

use tokio::net::TcpListener;

/// True when the port can currently be bound on the loopback interface
async fn port_is_free(port: u16) -> bool {
    match TcpListener::bind(("127.0.0.1", port)).await {
        Ok(listener) => {
            drop(listener);
            true
        }
        Err(_) => false,
    }
}

/// Find the smallest free port at or above `base`.
///
/// Probes one port at a time, incrementing while the port is occupied.
/// Unbounded in principle, terminates in practice well before the u16
/// range runs out.
pub async fn get_an_available_port(base: u16) -> u16 {
    let mut port = base;
    while !port_is_free(port).await {
        port += 1;
    }
    port
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_base_when_free() {
        // High base to stay clear of anything the host is running
        let port = get_an_available_port(49600).await;
        assert!(port >= 49600);
        assert!(port_is_free(port).await);
    }

    #[tokio::test]
    async fn skips_occupied_ports() {
        let base = 49700;
        let _first = TcpListener::bind(("127.0.0.1", base)).await.unwrap();
        let _second = TcpListener::bind(("127.0.0.1", base + 1)).await.unwrap();

        let port = get_an_available_port(base).await;
        assert_eq!(port, base + 2);
    }
}
