use std::panic::{self, AssertUnwindSafe};

/// Runs `run`, returning the message it panicked with, or [`None`] if it returned normally.
pub(crate) fn panic_message<R>(run: impl FnOnce() -> R) -> Option<String> {
    let payload = panic::catch_unwind(AssertUnwindSafe(run)).err()?;
    let message = match payload.downcast_ref::<String>() {
        Some(message) => message.clone(),
        None => payload.downcast_ref::<&str>().map(|message| message.to_string()).unwrap_or_default(),
    };
    Some(message)
}

/// Asserts that a block panics, optionally with a message containing the provided text.
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            $crate::util::panic::panic_message(|| $run).is_some(),
            "assertion failed to panic"
        )
    };
    ($run:block, $expected:literal) => {
        match $crate::util::panic::panic_message(|| $run) {
            Some(message) => assert!(
                message.contains($expected),
                "panicked with {message:?}, expected {:?}",
                $expected
            ),
            None => panic!("assertion failed to panic with {:?}", $expected),
        }
    };
}

pub(crate) use assert_panics;
