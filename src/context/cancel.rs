use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A token to request cancellation of a proof attempt.
///
/// Clones of a token share the same flag, so a clone may be kept by the caller (or passed to some other thread) and cancelled while a proof attempt holds the original.
/// Cancellation is noted between resolution steps, never during a step.
///
/// ```rust
/// # use clausal::context::CancelToken;
/// let token = CancelToken::default();
/// let clone = token.clone();
///
/// clone.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Withdraws any request for cancellation, so the token may be reused.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
