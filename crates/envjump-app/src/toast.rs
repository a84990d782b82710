//! Toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// At most this many toasts are kept; older ones are dropped first
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    /// Informational
    Default,
    /// Error styling
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Queue of visible toasts, newest last
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_VISIBLE_TOASTS),
            duration,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, variant: ToastVariant) {
        self.push_at(title, variant, Instant::now());
    }

    pub fn push_at(&mut self, title: impl Into<String>, variant: ToastVariant, now: Instant) {
        if self.toasts.len() == MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            title: title.into(),
            variant,
            created_at: now,
        });
    }

    /// Drop toasts older than the configured duration
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created_at) < duration);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
