// src/exit.rs
//! Standardized process exit codes for `context-map`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::ContextError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ContextExit {
    /// Document rendered to stdout.
    Success = 0,
    /// Generic failure (unreadable file mid-scan, walk error, output error).
    Error = 1,
    /// Input validation failed (missing keyword, missing root, bad config).
    InvalidInput = 2,
    /// Nothing to do: no file matched, or the selection was empty.
    NothingToDo = 3,
}

impl ContextExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Maps a run failure onto its exit code.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ContextError>() {
            Some(e) if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for ContextExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
