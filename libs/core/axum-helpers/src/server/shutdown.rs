use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::info;

/// Fan-out for graceful shutdown.
///
/// One clone waits for the OS signal; every subsystem that must wind down
/// holds a subscription and reacts when the broadcast fires.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe before shutdown can be triggered, or the broadcast may be
    /// missed.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::Relaxed)
    }

    /// Flip the shutdown flag and notify subscribers. Only the first call
    /// broadcasts; repeats are no-ops.
    pub fn shutdown(&self) {
        let first = self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();

        if first {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Park until SIGINT or SIGTERM arrives, then trigger shutdown.
    pub async fn wait_for_signal(&self) {
        let received = sigint_or_sigterm().await;
        info!("Received {}, shutting down gracefully", received);
        self.shutdown();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve when the process receives SIGINT or SIGTERM, naming which one.
async fn sigint_or_sigterm() -> &'static str {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT (Ctrl+C)",
        _ = terminate => "SIGTERM",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shutdown_notifies_subscribers() {
        let coordinator = ShutdownCoordinator::new();
        let mut rx = coordinator.subscribe();
        assert!(!coordinator.is_shutting_down());

        coordinator.shutdown();

        assert!(coordinator.is_shutting_down());
        rx.recv().await.expect("subscriber should be notified");
    }

    #[tokio::test]
    async fn repeated_shutdown_broadcasts_once() {
        let coordinator = ShutdownCoordinator::new();
        let mut rx = coordinator.subscribe();

        coordinator.shutdown();
        coordinator.shutdown();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn clones_share_shutdown_state() {
        let coordinator = ShutdownCoordinator::new();
        let observer = coordinator.clone();

        coordinator.shutdown();

        assert!(observer.is_shutting_down());
    }
}
