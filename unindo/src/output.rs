use notification_center::{Notification, NotificationId};

pub fn print_notification(notification: &Notification) {
    match serde_json::to_string(notification) {
        Ok(line) => println!("{line}"),
        Err(err) => print_error(&format!("failed to encode notification: {err}")),
    }
}

pub fn print_expired(id: &NotificationId) {
    println!("expired {id}");
}

pub fn print_active(count: usize) {
    println!("{count} active");
}

pub fn print_error(message: &str) {
    eprintln!("[Unindo][ERROR]: {message}");
}
