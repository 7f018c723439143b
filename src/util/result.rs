use std::fmt::Display;

/// Turns the `try_*` methods of the collections into their panicking counterparts.
pub(crate) trait ResultExtension<T> {
    /// Returns the success value, or panics with the error's own message (such as
    /// `"list is empty"`) rather than its Debug form.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Display> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
