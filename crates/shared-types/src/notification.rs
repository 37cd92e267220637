use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A user's notifications split by read status.
///
/// Every fetched notification lands in exactly one list. Mutations are
/// applied only after the matching API call succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationInbox {
    pub unread: Vec<Notification>,
    pub read: Vec<Notification>,
}

impl NotificationInbox {
    /// Partition a fetched list, newest first within each side.
    pub fn from_fetched(mut fetched: Vec<Notification>) -> Self {
        fetched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let (read, unread) = fetched.into_iter().partition(|n| n.read);
        Self { unread, read }
    }

    /// Badge count.
    pub fn unread_count(&self) -> usize {
        self.unread.len()
    }

    pub fn total(&self) -> usize {
        self.unread.len() + self.read.len()
    }

    pub fn has_unread(&self) -> bool {
        !self.unread.is_empty()
    }

    /// Move one notification to the read list. Returns false when it was not
    /// unread.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let Some(pos) = self.unread.iter().position(|n| n.id == id) else {
            return false;
        };
        let mut n = self.unread.remove(pos);
        n.read = true;
        self.read.insert(0, n);
        true
    }

    /// Move everything unread to the read list. Returns how many moved.
    pub fn mark_all_read(&mut self) -> usize {
        let moved = self.unread.len();
        let mut drained: Vec<Notification> = self
            .unread
            .drain(..)
            .map(|mut n| {
                n.read = true;
                n
            })
            .collect();
        drained.append(&mut self.read);
        self.read = drained;
        moved
    }

    /// Remove one read notification. Unread items are never deleted here.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.read.len();
        self.read.retain(|n| n.id != id);
        self.read.len() != before
    }

    /// Clear the read list. Returns how many were removed.
    pub fn delete_all_read(&mut self) -> usize {
        let removed = self.read.len();
        self.read.clear();
        removed
    }
}
