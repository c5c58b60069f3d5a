//! Ctrl+C 处理：检查阶段立即退出，写文件期间推迟到写完

use std::sync::atomic::{AtomicBool, Ordering};
use crate::utils::{ProvcheckError, Result};

pub const EXIT_CODE: i32 = 130;

pub static STATE: InterruptState = InterruptState::new();

pub struct InterruptState {
    interrupted: AtomicBool,
    writing: AtomicBool,
}

impl InterruptState {
    pub const fn new() -> Self {
        InterruptState {
            interrupted: AtomicBool::new(false),
            writing: AtomicBool::new(false),
        }
    }

    /// Records the interrupt; true when the process may exit right away.
    pub fn interrupt(&self) -> bool {
        self.interrupted.store(true, Ordering::SeqCst);
        !self.writing.load(Ordering::SeqCst)
    }

    /// Runs `f` with exits deferred until it returns.
    ///
    /// An interrupt that arrived before the section starts skips `f`; one that
    /// arrives during it is reported once `f` has finished.
    pub fn critical<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.writing.store(true, Ordering::SeqCst);
        if self.interrupted.load(Ordering::SeqCst) {
            self.writing.store(false, Ordering::SeqCst);
            return Err(ProvcheckError::Interrupted);
        }

        let out = f();
        self.writing.store(false, Ordering::SeqCst);

        if self.interrupted.load(Ordering::SeqCst) {
            return Err(ProvcheckError::Interrupted);
        }
        out
    }
}

/// Installs the process-wide Ctrl+C handler.
pub fn install() -> std::result::Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        if STATE.interrupt() {
            eprintln!("\ninterrupted, no report written");
            std::process::exit(EXIT_CODE);
        }
    })
}
