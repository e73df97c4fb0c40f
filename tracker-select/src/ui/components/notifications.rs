use crate::state::{Notification, NotificationKind};

fn symbol(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
        NotificationKind::Warning => "!",
    }
}

pub fn render_notification(notification: &Notification) -> String {
    format!("{} {}", symbol(notification.kind), notification.message)
}
