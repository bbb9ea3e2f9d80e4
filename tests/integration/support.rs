//! Shared fixtures for the integration tests.

use std::net::SocketAddr;

use hello_vibe::server;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A hello server running on a background task.
pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn the server on 127.0.0.1 with an OS-assigned port.
    pub async fn spawn() -> Self {
        let (addr, handle) = server::spawn(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("failed to start test server");

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An address on which nothing is listening.
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

/// A listener that accepts connections and never writes a byte.
///
/// Accepted sockets are held open until the task is aborted.
pub struct SilentServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl SilentServer {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        Self { addr, handle }
    }
}

impl Drop for SilentServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
