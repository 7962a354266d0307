//! Loaded effect definitions.

use crate::backend::EffectId;

/// Immutable handle to a loaded effect definition.
///
/// Created by [`EffectCoordinator::load_effect`] and released with
/// [`EffectCoordinator::unload_effect`]; the backend-internal definition
/// object it names is never mutated and may be reused across many `play`
/// calls. The backend pins the definition for any frame in which it was
/// used to spawn an instance, so releasing an asset does not tear running
/// instances out from under the renderer.
///
/// [`EffectCoordinator::load_effect`]: crate::effects::EffectCoordinator::load_effect
/// [`EffectCoordinator::unload_effect`]: crate::effects::EffectCoordinator::unload_effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectAsset {
    id: EffectId,
}

impl EffectAsset {
    pub(crate) fn new(id: EffectId) -> Self {
        Self { id }
    }

    /// The backend's token for this definition.
    pub fn id(&self) -> EffectId {
        self.id
    }
}
