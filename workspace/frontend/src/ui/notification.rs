use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.name())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check",
            NotificationKind::Error => "fas fa-times",
            NotificationKind::Info => "fas fa-info",
        }
    }
}

/// Where a notification is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Inserted,
    Shown,
    Hiding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: NotificationPhase,
}

/// Durations of the notification cycle. `display` counts from insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub show_delay: Duration,
    pub display: Duration,
    pub hide_transition: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(100),
            display: Duration::from_millis(3_000),
            hide_transition: Duration::from_millis(300),
        }
    }
}

/// Stack of transient pop-ups, each driven by its own timer task.
#[derive(Debug)]
pub struct NotificationCenter {
    entries: Arc<Mutex<Vec<Notification>>>,
    timers: Mutex<Vec<JoinHandle<()>>>,
    next_id: AtomicU64,
    timings: NotificationTimings,
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            timers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            timings,
        }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Info, message)
    }

    /// Insert a notification and schedule its show, hide and removal.
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let message = message.into();
        tracing::debug!("Notification #{} ({}): {}", id, kind.name(), message);

        self.entries.lock().push(Notification {
            id,
            kind,
            message,
            phase: NotificationPhase::Inserted,
        });

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime, notification #{} will stay until cleared", id);
            return id;
        };

        let entries = Arc::clone(&self.entries);
        let timings = self.timings;
        let timer = runtime.spawn(async move {
            tokio::time::sleep(timings.show_delay).await;
            set_phase(&entries, id, NotificationPhase::Shown);

            tokio::time::sleep(timings.display.saturating_sub(timings.show_delay)).await;
            set_phase(&entries, id, NotificationPhase::Hiding);

            tokio::time::sleep(timings.hide_transition).await;
            entries.lock().retain(|entry| entry.id != id);
            tracing::trace!("Notification #{} removed", id);
        });

        let mut timers = self.timers.lock();
        timers.retain(|handle| !handle.is_finished());
        timers.push(timer);
        id
    }

    /// Notifications currently on the page, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    /// Remove every notification and cancel pending timers.
    pub fn clear(&self) {
        for timer in self.timers.lock().drain(..) {
            timer.abort();
        }
        self.entries.lock().clear();
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationTimings::default())
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        for timer in self.timers.get_mut().drain(..) {
            timer.abort();
        }
    }
}

fn set_phase(entries: &Mutex<Vec<Notification>>, id: u64, phase: NotificationPhase) {
    if let Some(entry) = entries.lock().iter_mut().find(|entry| entry.id == id) {
        entry.phase = phase;
    }
}
