//! Toast notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Fire-and-forget receiver of user-visible error messages.
pub trait NotificationSink: Send + Sync {
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
}

/// Toasts waiting to be drawn. Oldest first, bounded.
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Toast>>,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Drop toasts older than `ttl`.
    pub fn expire(&self, now: Instant, ttl: Duration) {
        self.toasts
            .lock()
            .retain(|toast| now.saturating_duration_since(toast.created_at) < ttl);
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.lock().iter().cloned().collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts
            .lock()
            .iter()
            .map(|toast| toast.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.lock().is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(5)
    }
}

impl NotificationSink for ToastQueue {
    fn error(&self, message: &str) {
        tracing::info!(%message, "Toast");
        let mut toasts = self.toasts.lock();
        if toasts.len() >= self.capacity {
            toasts.pop_front();
        }
        toasts.push_back(Toast {
            message: message.to_string(),
            created_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_drops_oldest() {
        let queue = ToastQueue::new(2);
        queue.error("one");
        queue.error("two");
        queue.error("three");
        assert_eq!(queue.messages(), vec!["two", "three"]);
    }

    #[test]
    fn expire_removes_old_toasts() {
        let queue = ToastQueue::default();
        queue.error("stale");
        let later = Instant::now() + Duration::from_secs(10);
        queue.expire(later, Duration::from_secs(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn expire_keeps_fresh_toasts() {
        let queue = ToastQueue::default();
        queue.error("fresh");
        queue.expire(Instant::now(), Duration::from_secs(3));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.visible()[0].message, "fresh");
    }
}
