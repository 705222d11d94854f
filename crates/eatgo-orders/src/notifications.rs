//! # Notification Fan-out
//!
//! A per-user, in-memory feed of order status changes, read by polling.
//!
//! ## Storage
//!
//! The feed is sharded by user: an outer `RwLock` over the user map is held only
//! long enough to find (or insert) a user's shard, and every read-modify-write
//! of a feed locks that user's shard alone. Two transitions on different orders
//! of the same client therefore both land in the feed, while transitions for
//! different clients never contend.
//!
//! Each feed is kept most-recent-first and truncated to the configured retention
//! (50 by default), evicting the oldest entries. Nothing is persisted.

use crate::model::{OrderId, OrderStatus, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderNotification {
    /// Process-wide sequence number.
    pub id: u64,
    pub order_id: OrderId,
    pub user_id: UserId,
    pub previous_status: OrderStatus,
    pub new_status: OrderStatus,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl OrderNotification {
    fn recency(&self) -> (DateTime<Utc>, u64) {
        (self.created_at, self.id)
    }
}

pub fn status_change_message(order_id: OrderId, from: OrderStatus, to: OrderStatus) -> String {
    format!(
        "Order #{}: status changed from {} to {}",
        order_id.0,
        from.label(),
        to.label()
    )
}

type Feed = VecDeque<OrderNotification>;

pub struct NotificationFeed {
    retention: usize,
    sequence: AtomicU64,
    shards: RwLock<HashMap<UserId, Arc<Mutex<Feed>>>>,
}

impl NotificationFeed {
    pub fn new(retention: usize) -> Self {
        Self {
            retention,
            sequence: AtomicU64::new(1),
            shards: RwLock::new(HashMap::new()),
        }
    }

    /// Records a committed transition in the owner's feed.
    ///
    /// Returns `None` without touching any feed when the status did not change or
    /// the order has no resolvable owner.
    pub fn record_transition(
        &self,
        owner: Option<UserId>,
        order_id: OrderId,
        previous: OrderStatus,
        new: OrderStatus,
    ) -> Option<u64> {
        let user_id = owner?;
        if previous == new {
            return None;
        }

        let notification = OrderNotification {
            id: self.sequence.fetch_add(1, Ordering::Relaxed),
            order_id,
            user_id,
            previous_status: previous,
            new_status: new,
            message: status_change_message(order_id, previous, new),
            read: false,
            created_at: Utc::now(),
        };
        let id = notification.id;

        let shard = self.shard_or_insert(user_id);
        let mut feed = lock(&shard);
        // Entries from racing transitions can arrive slightly out of order.
        let position = feed
            .iter()
            .position(|existing| existing.recency() < notification.recency())
            .unwrap_or(feed.len());
        feed.insert(position, notification);
        feed.truncate(self.retention);

        debug!(%user_id, %order_id, notification_id = id, size = feed.len(), "Notification recorded");
        Some(id)
    }

    /// The user's feed, most recent first.
    pub fn list_for_user(&self, user_id: UserId) -> Vec<OrderNotification> {
        match self.shard(user_id) {
            Some(shard) => lock(&shard).iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn unread_count(&self, user_id: UserId) -> usize {
        match self.shard(user_id) {
            Some(shard) => lock(&shard).iter().filter(|n| !n.read).count(),
            None => 0,
        }
    }

    pub fn mark_all_read(&self, user_id: UserId) {
        if let Some(shard) = self.shard(user_id) {
            lock(&shard).iter_mut().for_each(|n| n.read = true);
        }
    }

    /// Drops the user's whole feed.
    pub fn clear_for_user(&self, user_id: UserId) {
        let removed = self
            .shards
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&user_id);
        // A writer that fetched the shard before removal still holds it; its
        // entry goes with the dropped shard.
        if let Some(shard) = removed {
            lock(&shard).clear();
        }
    }

    fn shard(&self, user_id: UserId) -> Option<Arc<Mutex<Feed>>> {
        self.shards
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
            .cloned()
    }

    fn shard_or_insert(&self, user_id: UserId) -> Arc<Mutex<Feed>> {
        if let Some(shard) = self.shard(user_id) {
            return shard;
        }
        self.shards
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(user_id)
            .or_default()
            .clone()
    }
}

// A panic while holding a shard cannot leave a feed half-updated: every
// mutation is a single insert, truncate or flag flip.
fn lock(shard: &Mutex<Feed>) -> MutexGuard<'_, Feed> {
    shard.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus::*;

    const ALICE: UserId = UserId(1);
    const BOB: UserId = UserId(2);

    #[test]
    fn records_newest_first_with_readable_message() {
        let feed = NotificationFeed::new(50);
        feed.record_transition(Some(ALICE), OrderId(7), Placed, Accepted);
        feed.record_transition(Some(ALICE), OrderId(7), Accepted, Cooking);

        let entries = feed.list_for_user(ALICE);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].new_status, Cooking);
        assert_eq!(
            entries[0].message,
            "Order #7: status changed from Accepted to In preparation"
        );
        assert!(entries[0].id > entries[1].id);
        assert!(feed.list_for_user(BOB).is_empty());
    }

    #[test]
    fn skips_no_op_and_ownerless_transitions() {
        let feed = NotificationFeed::new(50);
        assert_eq!(feed.record_transition(Some(ALICE), OrderId(1), Ready, Ready), None);
        assert_eq!(feed.record_transition(None, OrderId(1), Ready, Cancelled), None);
        assert!(feed.list_for_user(ALICE).is_empty());
    }

    #[test]
    fn evicts_oldest_beyond_retention() {
        let feed = NotificationFeed::new(50);
        for order in 1..=60 {
            feed.record_transition(Some(ALICE), OrderId(order), Placed, Accepted);
        }
        let entries = feed.list_for_user(ALICE);
        assert_eq!(entries.len(), 50);
        assert_eq!(entries.first().map(|n| n.order_id), Some(OrderId(60)));
        assert_eq!(entries.last().map(|n| n.order_id), Some(OrderId(11)));
    }

    #[test]
    fn unread_count_and_mark_all_read() {
        let feed = NotificationFeed::new(50);
        feed.record_transition(Some(ALICE), OrderId(1), Placed, Accepted);
        feed.record_transition(Some(ALICE), OrderId(1), Accepted, Cancelled);
        assert_eq!(feed.unread_count(ALICE), 2);

        feed.mark_all_read(ALICE);
        feed.mark_all_read(ALICE);
        assert_eq!(feed.unread_count(ALICE), 0);
        assert_eq!(feed.list_for_user(ALICE).len(), 2);

        feed.record_transition(Some(ALICE), OrderId(2), Placed, Accepted);
        assert_eq!(feed.unread_count(ALICE), 1);
        assert_eq!(feed.unread_count(BOB), 0);
    }

    #[test]
    fn clear_only_touches_one_user() {
        let feed = NotificationFeed::new(50);
        feed.record_transition(Some(ALICE), OrderId(1), Placed, Accepted);
        feed.record_transition(Some(BOB), OrderId(2), Placed, Accepted);

        feed.clear_for_user(ALICE);
        assert!(feed.list_for_user(ALICE).is_empty());
        assert_eq!(feed.list_for_user(BOB).len(), 1);

        feed.record_transition(Some(ALICE), OrderId(1), Accepted, Cooking);
        assert_eq!(feed.list_for_user(ALICE).len(), 1);
    }

    #[test]
    fn concurrent_appends_for_one_user_are_not_lost() {
        let feed = Arc::new(NotificationFeed::new(1000));
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let feed = feed.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        feed.record_transition(Some(ALICE), OrderId(worker * 100 + i), Placed, Accepted);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = feed.list_for_user(ALICE);
        assert_eq!(entries.len(), 400);
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].recency() > pair[1].recency()));
    }
}
