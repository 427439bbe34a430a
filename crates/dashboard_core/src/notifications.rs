use std::time::{Duration, Instant};

/// How long a notification stays up unless dismissed earlier.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// Clock reading of the last tick before the push; stamped by the next
    /// sweep when no tick has been seen yet.
    pub created_at: Option<Instant>,
}

/// Stack of transient messages. No deduplication, no rate limiting.
///
/// Time only enters through [`NotificationCenter::expire_older_than`]; the
/// center never reads a clock itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: NotificationId,
    clock: Option<Instant>,
}

impl NotificationCenter {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            created_at: self.clock,
        });
        id
    }

    /// Removes the notification if it is still there. Returns whether anything
    /// was removed; an unknown id is not an error.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Drops everything whose age reached [`NOTIFICATION_TTL`] at `now`, and
    /// advances the clock used to stamp later pushes.
    pub fn expire_older_than(&mut self, now: Instant) -> usize {
        self.clock = Some(now);
        let before = self.items.len();
        self.items.retain_mut(|item| {
            let created_at = *item.created_at.get_or_insert(now);
            now.saturating_duration_since(created_at) < NOTIFICATION_TTL
        });
        before - self.items.len()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
