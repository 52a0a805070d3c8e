//! Toast notification center for the Unindo Destinos front-end.
//!
//! [`NotificationCenter`] holds the session's active notifications.
//! [`ExpiryTimers`] removes them after a timeout on behalf of whatever
//! surface renders them, and [`driver::ExpiryDriver`] does the same with
//! tokio timers.

pub mod expiry;
pub mod id;
pub mod notification;
pub mod settings;
pub mod store;

#[cfg(feature = "tokio")]
pub mod driver;

pub use expiry::{ExpiryPolicy, ExpiryTimers};
pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use notification::{Notification, NotificationId, NotificationRequest, NotificationStatus};
pub use settings::{NotificationError, NotificationSettings, DEFAULT_TIMEOUT_MS};
pub use store::NotificationCenter;
