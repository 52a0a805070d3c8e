//! Auto-expiry of active notifications.
//!
//! [`ExpiryTimers`] is a timer table driven by the caller's clock: a rendering
//! surface calls [`ExpiryTimers::observe`] on every pass and
//! [`ExpiryTimers::expire`] whenever it wakes up. No threads are involved, so
//! the table can live on a UI thread and be tested with synthetic instants.

use crate::notification::NotificationId;
use crate::store::NotificationCenter;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// When an active notification's expiry timer starts counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryPolicy {
    /// Every change to the observed list re-arms a full timeout for each
    /// item still present.
    #[default]
    RearmOnRender,
    /// Each item expires a fixed timeout after it was shown.
    FromCreation,
}

impl std::str::FromStr for ExpiryPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rearm-on-render" => Ok(ExpiryPolicy::RearmOnRender),
            "from-creation" => Ok(ExpiryPolicy::FromCreation),
            other => Err(format!(
                "policy must be 'rearm-on-render' or 'from-creation' (got '{other}')"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpiryTimers {
    policy: ExpiryPolicy,
    timeout: Duration,
    /// Armed deadlines, kept in display order of the last observation
    armed: Vec<(NotificationId, Instant)>,
    /// Center revision seen by the last observation
    observed_revision: Option<u64>,
}

impl ExpiryTimers {
    pub fn new(policy: ExpiryPolicy, timeout: Duration) -> Self {
        Self {
            policy,
            timeout,
            armed: Vec::new(),
            observed_revision: None,
        }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs a render pass over the center's current list.
    ///
    /// Does nothing when the list is unchanged since the last pass. Otherwise
    /// cancels timers of items that are gone and arms timers for the present
    /// ones according to the policy. Returns true if timers were re-evaluated.
    pub fn observe(&mut self, center: &NotificationCenter, now: Instant) -> bool {
        let revision = center.revision();
        if self.observed_revision == Some(revision) {
            return false;
        }
        self.observed_revision = Some(revision);

        let previous = std::mem::take(&mut self.armed);
        for item in center.items() {
            let deadline = match self.policy {
                ExpiryPolicy::RearmOnRender => now + self.timeout,
                ExpiryPolicy::FromCreation => previous
                    .iter()
                    .find(|(id, _)| id == &item.id)
                    .map(|(_, deadline)| *deadline)
                    .unwrap_or(item.created_at + self.timeout),
            };
            self.armed.push((item.id.clone(), deadline));
        }
        debug!(
            "expiry timers re-evaluated: {} armed (revision {revision})",
            self.armed.len()
        );
        true
    }

    /// Disarms and returns every timer whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.armed)
            .into_iter()
            .partition(|(_, deadline)| *deadline <= now);
        self.armed = pending;
        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Fires due timers against the center and returns the ids actually removed.
    pub fn expire(&mut self, center: &mut NotificationCenter, now: Instant) -> Vec<NotificationId> {
        self.take_due(now)
            .into_iter()
            .filter(|id| center.remove(id))
            .inspect(|id| debug!("notification {id} expired"))
            .collect()
    }

    pub fn deadline(&self, id: &NotificationId) -> Option<Instant> {
        self.armed
            .iter()
            .find(|(armed, _)| armed == id)
            .map(|(_, deadline)| *deadline)
    }

    /// Armed timers in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&NotificationId, Instant)> + '_ {
        self.armed.iter().map(|(id, deadline)| (id, *deadline))
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Time left until the earliest deadline, zero if it already passed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn armed(&self) -> usize {
        self.armed.len()
    }

    pub fn is_idle(&self) -> bool {
        self.armed.is_empty()
    }

    /// Cancels every timer. The next observation re-arms from scratch.
    pub fn cancel_all(&mut self) {
        self.armed.clear();
        self.observed_revision = None;
    }
}
