use solid_core::DesignResult;

/// Write-only destination for formatted entries.
///
/// ## Contract
///
/// - `write` performs one emission per call and returns nothing on success.
/// - Every valid entry is accepted; implementations must not narrow inputs.
/// - Failures come only from the underlying output channel and are propagated,
///   never retried.
pub trait Sink {
    /// Label of the destination, e.g. `"File"`.
    fn destination(&self) -> &str;

    fn write(&self, entry: &str) -> DesignResult<()>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn destination(&self) -> &str {
        (**self).destination()
    }

    fn write(&self, entry: &str) -> DesignResult<()> {
        (**self).write(entry)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn destination(&self) -> &str {
        (**self).destination()
    }

    fn write(&self, entry: &str) -> DesignResult<()> {
        (**self).write(entry)
    }
}
