//! Transient success/failure messages.
//!
//! Each notification goes through `Entering -> Shown -> Leaving` and is then
//! removed. [`NotificationQueue::drive`] walks one notification through that
//! lifecycle given three timers, so the page only needs to spawn one future
//! per message.

use futures_signals::signal::{Mutable, Signal, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVec};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen
    Entering,
    /// Slid in
    Shown,
    /// Sliding out, about to be removed
    Leaving,
}

/// A queued message. Clones share the same phase, so the list only changes
/// when a notification is added or removed.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    phase: Mutable<Phase>,
}

impl Notification {
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_shown(&self) -> bool {
        self.phase() == Phase::Shown
    }

    pub fn shown_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.phase.signal().map(|phase| phase == Phase::Shown).dedupe()
    }
}

struct Inner {
    items: MutableVec<Notification>,
    next_id: AtomicU64,
}

#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Inner>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                items: MutableVec::new(),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.items.lock_mut().push_cloned(Notification {
            id,
            kind,
            message: message.into(),
            phase: Mutable::new(Phase::Entering),
        });
        id
    }

    pub fn reveal(&self, id: NotificationId) {
        self.set_phase(id, Phase::Shown);
    }

    pub fn expire(&self, id: NotificationId) {
        self.set_phase(id, Phase::Leaving);
    }

    pub fn remove(&self, id: NotificationId) {
        self.inner.items.lock_mut().retain(|n| n.id != id);
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.items.lock_ref().to_vec()
    }

    pub fn signal_vec(&self) -> impl SignalVec<Item = Notification> + use<> {
        self.inner.items.signal_vec_cloned()
    }

    /// Run notification `id` through its lifecycle. The timers must already
    /// be running and complete at the reveal, expire and removal deadlines
    /// respectively (see `NotificationTimings::deadlines`).
    pub async fn drive<F>(self, id: NotificationId, [reveal, expire, remove]: [F; 3])
    where
        F: Future<Output = ()>,
    {
        reveal.await;
        self.reveal(id);
        expire.await;
        self.expire(id);
        remove.await;
        self.remove(id);
    }

    fn set_phase(&self, id: NotificationId, phase: Phase) {
        let items = self.inner.items.lock_ref();
        if let Some(notification) = items.iter().find(|n| n.id == id) {
            notification.phase.set_neq(phase);
        }
    }
}
