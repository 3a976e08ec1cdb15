use std::fmt::Display;

/// Turns the fallible half of a `x` / `try_x` method pair into the panicking half.
pub(crate) trait ResultExtension<T> {
    fn throw(self) -> T;
}

impl<T, E: Display> ResultExtension<T> for Result<T, E> {
    /// Unwraps an [`Ok`], or panics with the error's own [`Display`] message, so that a failed
    /// `get` reports the same text that `try_get` would have returned.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    #[track_caller]
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
