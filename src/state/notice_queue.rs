// ============================================================================
// NOTICE QUEUE - Ordered, append-only toast messages
// ============================================================================
// Any component may enqueue. A notice is never edited after it is queued;
// the only way to remove one is to dismiss it by id.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::{Notice, NoticeId, NoticeSeverity};
use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Clone, PartialEq)]
pub struct NoticeQueue {
    notices: ReactiveState<Vec<Notice>>,
    next_id: Rc<Cell<NoticeId>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self {
            notices: ReactiveState::new(Vec::new()),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    /// Appends a notice with the default timeout for its severity
    pub fn enqueue(&self, severity: NoticeSeverity, message: impl Into<String>) -> NoticeId {
        let timeout_ms = match severity {
            NoticeSeverity::Success | NoticeSeverity::Info => {
                CONFIG.notice_config.success_timeout_ms
            }
            NoticeSeverity::Warning | NoticeSeverity::Error => {
                CONFIG.notice_config.error_timeout_ms
            }
        };
        self.enqueue_with_timeout(severity, message, timeout_ms)
    }

    pub fn enqueue_with_timeout(
        &self,
        severity: NoticeSeverity,
        message: impl Into<String>,
        timeout_ms: u32,
    ) -> NoticeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let notice = Notice {
            id,
            severity,
            message: message.into(),
            timeout_ms,
        };
        log::debug!("🔔 [NOTICE] #{} {:?}: {}", id, severity, notice.message);
        self.notices.update(|list| list.push(notice));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> NoticeId {
        self.enqueue(NoticeSeverity::Success, message)
    }

    pub fn info(&self, message: impl Into<String>) -> NoticeId {
        self.enqueue(NoticeSeverity::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> NoticeId {
        self.enqueue(NoticeSeverity::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> NoticeId {
        self.enqueue(NoticeSeverity::Error, message)
    }

    /// Removes a notice. Unknown ids are ignored (already dismissed).
    pub fn dismiss(&self, id: NoticeId) {
        if self.notices.borrow().iter().any(|n| n.id == id) {
            self.notices.update(|list| list.retain(|n| n.id != id));
        }
    }

    /// Notices in enqueue order
    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices.get()
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.notices.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.notices.unsubscribe(id);
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}
