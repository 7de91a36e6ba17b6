//! Timer-based coalescing of rapid successive edits.
//!
//! Values pushed into a [`Debouncer`] are handed to its handler only once the
//! input has been quiet for the configured delay, and only the last value of
//! each burst is delivered. Superseded values are dropped, never cancelled
//! mid-flight.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    worker: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Starts the worker task. Must be called from within a tokio runtime.
    pub fn spawn<F>(delay: Duration, handler: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(debounce_worker(rx, delay, handler));
        Debouncer { tx, worker }
    }

    /// Queues a value. Returns `false` if the worker has already stopped.
    pub fn call(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    /// Closes the input, delivers any pending value without waiting for the
    /// delay, and waits for the worker to stop.
    pub async fn finish(self) {
        let Debouncer { tx, worker } = self;
        drop(tx);
        if let Err(e) = worker.await {
            debug!("Debounce worker ended abnormally: {}", e);
        }
    }
}

async fn debounce_worker<T, F>(mut rx: mpsc::UnboundedReceiver<T>, delay: Duration, mut handler: F)
where
    F: FnMut(T),
{
    loop {
        // Wait for the first value of a burst
        let Some(mut latest) = rx.recv().await else {
            return;
        };

        loop {
            tokio::select! {
                next = rx.recv() => match next {
                    Some(value) => latest = value,
                    None => {
                        // Input closed, flush what we have
                        handler(latest);
                        return;
                    }
                },
                _ = tokio::time::sleep(delay) => break,
            }
        }

        handler(latest);
    }
}
