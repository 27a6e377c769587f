//! Stop signal shared by `main`, the signal listener and the HTTP server.
//!
//! ```text
//! signals::spawn_listener ──trigger()──▶ broadcast ──▶ HttpServer::run
//!                                                     (stop accepting,
//!                                                      finish open POSTs)
//! ```
//!
//! Tests fire the same signal by hand through `TestServer::shutdown`.

use tokio::sync::broadcast;

/// Handle on the service-wide stop signal. Clones fire the same signal.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // one slot: the only message ever sent is "stop"
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver to hand to [`wait`]. Subscribe before triggering, or the
    /// signal is missed.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. Returns how many were listening; zero
    /// means the server already exited or never started.
    pub fn trigger(&self) -> usize {
        let listening = self.tx.send(()).unwrap_or(0);
        tracing::debug!(listening, "Stop signal sent");
        listening
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Graceful-shutdown future for `axum::serve`. Completes on the stop signal,
/// and also once every [`Shutdown`] handle is dropped.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}
