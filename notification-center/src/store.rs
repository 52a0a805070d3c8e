use crate::id::{IdGenerator, RandomIds};
use crate::notification::{Notification, NotificationId, NotificationRequest};
use log::{debug, warn};
use std::time::Instant;

const MAX_ID_ATTEMPTS: usize = 16;

/// Session-scoped list of active notifications.
///
/// The center is the single owner of the notification list. Rendering
/// surfaces read it through [`NotificationCenter::items`] and expire entries
/// through [`NotificationCenter::remove`]; nothing else mutates it.
pub struct NotificationCenter {
    /// Active notifications in display (insertion) order
    items: Vec<Notification>,
    /// Id source for new notifications
    ids: Box<dyn IdGenerator>,
    /// Bumped on every effective mutation
    revision: u64,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("items", &self.items)
            .field("revision", &self.revision)
            .finish()
    }
}

impl NotificationCenter {
    /// Creates an empty center that assigns random ids.
    pub fn new() -> Self {
        Self::with_ids(RandomIds)
    }

    /// Creates an empty center with a custom id generator.
    ///
    /// # Parameters
    /// - `ids`: generator asked for a fresh id on every `show`
    pub fn with_ids(ids: impl IdGenerator + 'static) -> Self {
        Self {
            items: Vec::new(),
            ids: Box::new(ids),
            revision: 0,
        }
    }

    /// Shows a notification and returns its id.
    ///
    /// The notification is appended at the end of the list, so it is
    /// displayed after every notification that is already active.
    ///
    /// # Parameters
    /// - `request`: title plus optional description and status
    ///
    /// # Behavior
    /// - Never fails; an empty title is accepted as-is
    /// - The returned id is distinct from every other active id
    /// - Timestamps the notification with the current instant
    pub fn show(&mut self, request: impl Into<NotificationRequest>) -> NotificationId {
        self.show_at(request, Instant::now())
    }

    /// Shows a notification stamped with a creation instant from the
    /// caller's clock.
    pub fn show_at(
        &mut self,
        request: impl Into<NotificationRequest>,
        created_at: Instant,
    ) -> NotificationId {
        let request = request.into();
        let id = self.fresh_id();
        debug!("show notification {id}: {}", request.title);
        self.items.push(Notification {
            id: id.clone(),
            title: request.title,
            description: request.description,
            status: request.status,
            created_at,
        });
        self.bump();
        id
    }

    /// Shows a success notification.
    pub fn success(&mut self, title: &str, description: Option<&str>) -> NotificationId {
        self.show(with_description(NotificationRequest::success(title), description))
    }

    /// Shows an error notification.
    pub fn error(&mut self, title: &str, description: Option<&str>) -> NotificationId {
        self.show(with_description(NotificationRequest::error(title), description))
    }

    /// Shows an informational notification.
    pub fn info(&mut self, title: &str, description: Option<&str>) -> NotificationId {
        self.show(with_description(NotificationRequest::info(title), description))
    }

    /// Removes the notification with the given id.
    ///
    /// Returns true if it was active. Removing an unknown (or already removed)
    /// id leaves the list and its revision untouched.
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        let Some(index) = self.items.iter().position(|item| &item.id == id) else {
            return false;
        };
        self.items.remove(index);
        self.bump();
        debug!("removed notification {id}");
        true
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump();
    }

    /// Active notifications in display order.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Owned copy of the active notifications.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.clone()
    }

    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mutation counter. Two equal revisions mean the list did not change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn fresh_id(&mut self) -> NotificationId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.contains(&id) {
                return id;
            }
        }
        warn!("id generator kept returning active ids, falling back to random ids");
        loop {
            let id = RandomIds.next_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

fn with_description(request: NotificationRequest, description: Option<&str>) -> NotificationRequest {
    match description {
        Some(description) => request.description(description),
        None => request,
    }
}
