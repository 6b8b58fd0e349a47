use shared_types::Notification;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Notifications a `MemoryNotifier` keeps before dropping the oldest
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 200;

/// Fire-and-forget sink for user-facing toasts
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::info!(
            title = %notification.title,
            "{}",
            notification.description
        );
    }
}

/// Keeps the most recent notifications in memory until drained
pub struct MemoryNotifier {
    notifications: Mutex<VecDeque<Notification>>,
    limit: usize,
}

impl Default for MemoryNotifier {
    fn default() -> Self {
        Self::with_limit(DEFAULT_NOTIFICATION_LIMIT)
    }
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` notifications; older ones are dropped first
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            notifications: Mutex::new(VecDeque::with_capacity(limit.min(64))),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Take every recorded notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        let taken = match self.notifications.lock() {
            Ok(mut notifications) => std::mem::take(&mut *notifications),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        Vec::from(taken)
    }

    fn record(&self, notifications: &mut VecDeque<Notification>, notification: &Notification) {
        notifications.push_back(notification.clone());
        while notifications.len() > self.limit {
            if let Some(dropped) = notifications.pop_front() {
                tracing::debug!(title = %dropped.title, "Dropped oldest notification");
            }
        }
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::debug!(title = %notification.title, "Recording notification");
        match self.notifications.lock() {
            Ok(mut notifications) => self.record(&mut notifications, notification),
            Err(poisoned) => self.record(&mut poisoned.into_inner(), notification),
        }
    }
}
