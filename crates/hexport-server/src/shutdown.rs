//! Graceful shutdown signal handling.
//!
//! A [`ShutdownSignal`] coordinates termination across tasks: the process
//! subscribes to it once at startup, something triggers it (an OS signal,
//! a test), and every waiter wakes up. Triggering is idempotent - a
//! signal that arrives twice has no further effect.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// A cloneable, one-shot termination signal.
///
/// All clones share the same state; any of them can trigger, and all
/// waiters observe the same single transition.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    triggered: Arc<AtomicBool>,
    sender: broadcast::Sender<()>,
}

impl ShutdownSignal {
    /// Create a signal that has not been triggered yet.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self {
            triggered: Arc::new(AtomicBool::new(false)),
            sender,
        }
    }

    /// Create a signal wired to the process's termination requests
    /// (SIGTERM, and Ctrl-C as the interactive equivalent).
    ///
    /// Registers the OS handlers once; the spawned listener ends with the
    /// process.
    ///
    /// # Panics
    ///
    /// Panics if the OS signal handlers cannot be registered.
    pub fn from_os_signals() -> Self {
        let signal = Self::new();
        let trigger = signal.clone();

        tokio::spawn(async move {
            wait_for_os_signal().await;
            trigger.trigger();
        });

        signal
    }

    /// Trigger the signal. Safe to call more than once; only the first
    /// call notifies waiters.
    pub fn trigger(&self) {
        if self
            .triggered
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            // No receivers is fine - the flag already records the state.
            let _ = self.sender.send(());
        }
    }

    /// Whether the signal has been triggered.
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Wait until the signal is triggered. Completes immediately if it
    /// already was.
    pub async fn recv(&self) {
        if self.is_triggered() {
            return;
        }
        let mut receiver = self.sender.subscribe();
        // The flag is set before the broadcast, so a trigger that raced
        // the subscription above is visible here.
        if self.is_triggered() {
            return;
        }
        let _ = receiver.recv().await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Block until the process receives a termination request.
///
/// On Unix this is SIGTERM or SIGINT; elsewhere only Ctrl-C is available.
async fn wait_for_os_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => tracing::info!("received SIGTERM"),
            _ = sigint.recv() => tracing::info!("received SIGINT"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to wait for Ctrl-C");
        tracing::info!("received Ctrl-C");
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
