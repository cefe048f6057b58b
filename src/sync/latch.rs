//! Self-suspend / external-resume for a task.
//!
//! Only the owning task suspends itself ([`TaskLatch::suspend_while`]);
//! another task resumes it ([`TaskLatch::resume`]).  A resume is latched
//! until the owner consumes it, so a resume racing a suspend is never
//! lost.  The owner re-checks its run condition after every wake, so a
//! resume left over from an earlier cycle cannot keep it running.
//!
//! ```text
//!  owner:   suspend_while(off?) ──┬─ off? no  ─▶ return
//!                                 └─ off? yes ─▶ wait(resume) ─▶ re-check
//!  other:   resume() ───────────────────────────▲ (latched)
//! ```

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

pub struct TaskLatch {
    resume: Signal<CriticalSectionRawMutex, ()>,
    suspended: AtomicBool,
    resumes: AtomicU32,
}

impl TaskLatch {
    pub const fn new() -> Self {
        Self {
            resume: Signal::new(),
            suspended: AtomicBool::new(false),
            resumes: AtomicU32::new(0),
        }
    }

    /// Make the owner runnable.  Idempotent if it already is.
    pub fn resume(&self) {
        self.resumes.fetch_add(1, Ordering::Relaxed);
        self.resume.signal(());
    }

    /// Park the calling task for as long as `keep_suspended` returns true.
    /// Returns immediately if it is already false.
    pub async fn suspend_while(&self, mut keep_suspended: impl FnMut() -> bool) {
        if !keep_suspended() {
            return;
        }
        self.suspended.store(true, Ordering::Release);
        while keep_suspended() {
            self.resume.wait().await;
        }
        self.suspended.store(false, Ordering::Release);
    }

    /// Whether the owner is currently parked.
    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Acquire)
    }

    /// Total resume requests issued.
    pub fn resume_count(&self) -> u32 {
        self.resumes.load(Ordering::Relaxed)
    }
}

impl Default for TaskLatch {
    fn default() -> Self {
        Self::new()
    }
}
