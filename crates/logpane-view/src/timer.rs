use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use log::trace;

/// A cancelable one-shot timer backed by a named thread.
///
/// The callback runs exactly once after `delay` unless the timer is
/// cancelled first. Cancelling after the callback already ran is a no-op,
/// and dropping the handle cancels implicitly, so a torn-down owner can
/// never observe a stale firing.
pub struct OneShotTimer {
    cancel: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl OneShotTimer {
    pub fn spawn<F>(name: &str, delay: Duration, callback: F) -> Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel, signal) = mpsc::channel::<()>();
        let timer_name = name.to_string();

        let handle = thread::Builder::new().name(name.to_string()).spawn(move || {
            match signal.recv_timeout(delay) {
                Err(RecvTimeoutError::Timeout) => {
                    trace!("timer {timer_name} fired");
                    callback();
                }
                // Explicit cancel, or the owning handle was dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    trace!("timer {timer_name} cancelled");
                }
            }
        })?;

        Ok(Self {
            cancel,
            handle: Some(handle),
        })
    }

    /// Cancel the pending callback and wait for the timer thread to exit.
    /// No-op if the callback already fired.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Send fails when the thread already finished; either way the join
        // below returns promptly.
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for OneShotTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
