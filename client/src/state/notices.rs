//! Transient success/error notifications.
//!
//! Pages push notices after create/update/delete; `NoticeStack` renders them
//! and schedules auto-dismissal.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// How long a notice stays on screen before auto-dismissal.
pub const NOTICE_AUTO_CLOSE_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier for the notice element.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Ordered notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticesState {
    items: Vec<Notice>,
    next_id: u64,
}

impl NoticesState {
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    /// Remove a notice; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }
}
