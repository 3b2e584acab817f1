/*!
Callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use crate::reports::ProofStep;

use super::Context;

/// A callback on each resolution step taken, as taken.
pub type CallbackStep = dyn FnMut(&ProofStep);

impl Context {
    /// Sets a callback to be made on each step of a proof attempt.
    ///
    /// The callback is made when a resolvent is stored, regardless of whether steps are [recorded](crate::config::Config::record_steps).
    pub fn set_callback_step(&mut self, callback: Box<CallbackStep>) {
        self.callback_step = Some(callback);
    }

    pub(crate) fn make_callback_step(&mut self, step: &ProofStep) {
        if let Some(callback) = &mut self.callback_step {
            callback(step);
        }
    }
}
