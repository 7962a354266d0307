//! References to running effect instances.

use crate::backend::InstanceId;

/// Lightweight reference to one running instance inside the backend's
/// instance pool.
///
/// Pure reference semantics: the backend owns the instance and retires it
/// on its own once the effect finishes playing, so a handle may go stale at
/// any time. Liveness is always a live query through
/// [`EffectCoordinator::exists`] — never cached here — and stale handles
/// degrade gracefully: `stop` on a finished instance is a no-op, not an
/// error.
///
/// [`EffectCoordinator::exists`]: crate::effects::EffectCoordinator::exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackHandle {
    id: InstanceId,
}

impl PlaybackHandle {
    pub(crate) fn new(id: InstanceId) -> Self {
        Self { id }
    }

    /// The backend's token for this instance.
    pub fn id(&self) -> InstanceId {
        self.id
    }
}
