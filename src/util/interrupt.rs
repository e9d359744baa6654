//! Ctrl-C handling.
//!
//! The handler only raises a flag. Long-running steps poll it through
//! [`check`] so an interruption surfaces as an ordinary error and the
//! binary can exit with a clean message instead of dying on the signal.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// The user pressed Ctrl-C.
#[derive(Debug, Clone, Copy, Error)]
#[error("interrupted by user")]
pub struct Interrupted;

/// Install the process-wide Ctrl-C handler.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
}

/// Fail with [`Interrupted`] if Ctrl-C has been pressed.
pub fn check() -> Result<(), Interrupted> {
    if INTERRUPTED.load(Ordering::SeqCst) {
        Err(Interrupted)
    } else {
        Ok(())
    }
}

/// Whether an error was caused by a user interruption anywhere in its chain.
pub fn is_interruption(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Interrupted>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::process::ProcessError;

    #[test]
    fn test_check_passes_without_signal() {
        assert!(check().is_ok());
    }

    #[test]
    fn test_interruption_found_through_process_error() {
        let err = anyhow::Error::new(ProcessError::Interrupted {
            command: "bazel build //tools/eclipse:classpath".to_string(),
            source: Interrupted,
        })
        .context("building classpath");

        assert!(is_interruption(&err));
    }

    #[test]
    fn test_other_errors_are_not_interruptions() {
        let err = anyhow::anyhow!("bazel exploded");
        assert!(!is_interruption(&err));
    }
}
