use crate::notification::NotificationId;

/// Source of fresh notification ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> NotificationId;
}

/// Random v4 UUIDs in simple (hyphen-free) form.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> NotificationId {
        NotificationId::new(uuid::Uuid::new_v4().simple().to_string())
    }
}

/// Monotonic `<prefix>-<n>` ids, starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("toast")
    }
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NotificationId {
        let id = NotificationId::new(format!("{}-{}", self.prefix, self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}
