//! Expiry driven by tokio timers, for hosts that run an async event loop
//! instead of a frame loop.

use crate::expiry::ExpiryTimers;
use crate::notification::{NotificationId, NotificationRequest};
use crate::settings::NotificationSettings;
use crate::store::NotificationCenter;
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

pub type SharedCenter = Arc<Mutex<NotificationCenter>>;

pub fn shared(center: NotificationCenter) -> SharedCenter {
    Arc::new(Mutex::new(center))
}

/// Locks the center, recovering the list if a holder panicked.
pub fn lock(center: &SharedCenter) -> MutexGuard<'_, NotificationCenter> {
    center.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Aborts the timer task when dropped.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Debug)]
struct Fired {
    id: NotificationId,
    removed: bool,
}

/// Owns one tokio timer per active notification.
///
/// Every timer is cancelled when the driver is dropped or shut down, so no
/// expiry can fire against a list whose surface is gone.
pub struct ExpiryDriver {
    center: SharedCenter,
    timers: ExpiryTimers,
    tasks: Vec<AbortOnDrop>,
    fired_tx: UnboundedSender<Fired>,
    fired_rx: UnboundedReceiver<Fired>,
}

impl ExpiryDriver {
    pub fn new(center: SharedCenter, settings: &NotificationSettings) -> Self {
        let (fired_tx, fired_rx) = unbounded_channel();
        Self {
            center,
            timers: ExpiryTimers::new(settings.policy, settings.timeout()),
            tasks: Vec::new(),
            fired_tx,
            fired_rx,
        }
    }

    pub fn center(&self) -> SharedCenter {
        Arc::clone(&self.center)
    }

    /// Shows a notification and arms timers for the new list.
    pub fn show(&mut self, request: impl Into<NotificationRequest>) -> NotificationId {
        let now = tokio::time::Instant::now().into_std();
        let id = lock(&self.center).show_at(request, now);
        self.sync();
        id
    }

    pub fn remove(&mut self, id: &NotificationId) -> bool {
        let removed = lock(&self.center).remove(id);
        self.sync();
        removed
    }

    /// Render pass: re-arms timers if the list changed since the last pass.
    /// Must be called from within a tokio runtime.
    ///
    /// Expiries nobody waited for are discarded here, so the fired queue
    /// stays bounded for hosts that never call [`ExpiryDriver::run_until_empty`].
    pub fn sync(&mut self) {
        self.discard_fired();
        self.rearm();
    }

    fn rearm(&mut self) {
        let now = tokio::time::Instant::now().into_std();
        let changed = {
            let center = lock(&self.center);
            self.timers.observe(&center, now)
        };
        if !changed {
            return;
        }
        self.tasks.clear();
        let tasks: Vec<AbortOnDrop> = self
            .timers
            .iter()
            .map(|(id, deadline)| self.spawn_timer(id.clone(), deadline))
            .collect();
        self.tasks = tasks;
    }

    fn spawn_timer(&self, id: NotificationId, deadline: Instant) -> AbortOnDrop {
        let center = Arc::clone(&self.center);
        let fired = self.fired_tx.clone();
        AbortOnDrop(tokio::spawn(async move {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
            let removed = lock(&center).remove(&id);
            let _ = fired.send(Fired { id, removed });
        }))
    }

    /// Number of timer tasks that have not fired yet.
    pub fn armed(&self) -> usize {
        self.tasks.iter().filter(|task| !task.0.is_finished()).count()
    }

    fn discard_fired(&mut self) {
        let mut stale = 0;
        while self.fired_rx.try_recv().is_ok() {
            stale += 1;
        }
        if stale > 0 {
            debug!("discarded {stale} unobserved expiries");
        }
    }

    /// Waits until every notification has expired or was removed.
    ///
    /// `on_expired` is called for each notification this driver's timers
    /// removed during the wait, in the order they fired. Expiries that
    /// happened before the call are not reported.
    pub async fn run_until_empty(&mut self, mut on_expired: impl FnMut(&NotificationId)) {
        self.discard_fired();
        loop {
            self.rearm();
            if lock(&self.center).is_empty() {
                break;
            }
            let Some(fired) = self.fired_rx.recv().await else {
                break;
            };
            if fired.removed {
                on_expired(&fired.id);
            }
        }
    }

    /// Cancels every outstanding timer.
    pub fn shutdown(&mut self) {
        if !self.tasks.is_empty() {
            debug!("cancelling {} expiry timers", self.tasks.len());
        }
        self.tasks.clear();
        self.timers.cancel_all();
    }
}

impl Drop for ExpiryDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}
