//! Toast state: a small queue of transient notifications.

use std::time::{Duration, Instant};

use crate::mutations::ToastMutation;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created: Instant,
}

/// All live toasts, oldest first. Expiry is driven by ticks, not threads.
#[derive(Debug, Clone)]
pub struct ToastState {
    entries: Vec<Toast>,
    ttl: Duration,
}

impl ToastState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.entries.push(Toast {
            kind,
            message: message.into(),
            created: Instant::now(),
        });
    }

    /// Drops toasts older than the TTL. Returns true if any were removed.
    pub fn expire(&mut self) -> bool {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|toast| toast.created.elapsed() < ttl);
        self.entries.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn apply(&mut self, mutation: ToastMutation) {
        match mutation {
            ToastMutation::Push { kind, message } => self.push(kind, message),
        }
    }
}
