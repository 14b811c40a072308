use std::{fmt, future::Future, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

/// Runs a fetch on a fixed interval and publishes the latest successful
/// result. A failed fetch is logged and leaves the previous value in place.
///
/// The first fetch starts immediately. Dropping the poller stops the task.
pub struct Poller<T> {
    receiver: watch::Receiver<Option<T>>,
    handle: JoinHandle<()>,
}

impl<T> Poller<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn spawn<F, Fut, E>(name: &'static str, interval: Duration, mut fetch: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: fmt::Display + Send + 'static,
    {
        let (sender, receiver) = watch::channel(None);

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match fetch().await {
                    Ok(value) => {
                        debug!(poller = name, "poll succeeded");
                        sender.send_replace(Some(value));
                    }
                    Err(err) => {
                        warn!(poller = name, error = %err, "poll failed, keeping previous value");
                    }
                }
            }
        });

        Self {
            receiver,
            handle,
        }
    }

    /// Latest value, `None` until the first successful fetch
    pub fn current(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }

    /// Receiver notified on every successful fetch
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.receiver.clone()
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
