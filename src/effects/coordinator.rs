//! The effect-playback coordinator.

use glam::{Mat4, Vec3};

use crate::backend::{EffectRenderer, InstanceId, SimulationBackend};
use crate::config::CoordinatorConfig;
use crate::core::error::EffectResult;
use crate::host::HostContext;

use super::asset::EffectAsset;
use super::camera;
use super::clock::FrameClock;
use super::handle::PlaybackHandle;
use super::loader::{DefinitionLoaderBridge, TextureLoaderBridge};

/// Single owner of the backend simulation manager and renderer.
///
/// All simulation-time and render-state coordination passes through this
/// type: it decouples the host's variable frame rate from the backend's
/// fixed-rate clock, converts the host's screen-space transforms into the
/// backend's camera conventions, and preserves the host's bound shader
/// program across the backend's render pass.
///
/// One coordinator is created at graphics-subsystem initialization and
/// destroyed at shutdown; per graphics context if the host ever runs more
/// than one. Everything runs on the thread that owns the backend — the
/// render pass is non-reentrant, which `&mut self` on [`draw`] enforces at
/// compile time.
///
/// [`draw`]: EffectCoordinator::draw
pub struct EffectCoordinator {
    config: CoordinatorConfig,
    host: HostContext,
    backend: Box<dyn SimulationBackend>,
    renderer: Box<dyn EffectRenderer>,
    clock: FrameClock,
}

impl EffectCoordinator {
    /// Wires the loader bridges into the backend and validates the
    /// configuration.
    ///
    /// Construction failure is fatal to the subsystem: the caller must
    /// abort startup rather than continue with a half-initialized
    /// coordinator. Backend adapters that fail to build their manager or
    /// renderer report [`EffectError::BackendInit`] before ever reaching
    /// this point.
    ///
    /// [`EffectError::BackendInit`]: crate::core::error::EffectError::BackendInit
    pub fn new(
        config: CoordinatorConfig,
        host: HostContext,
        mut backend: Box<dyn SimulationBackend>,
        renderer: Box<dyn EffectRenderer>,
    ) -> EffectResult<Self> {
        config.validate()?;

        backend.set_effect_loader(Box::new(DefinitionLoaderBridge::new(
            host.clone(),
            config.max_resource_name,
        )));
        backend.set_texture_loader(Box::new(TextureLoaderBridge::new(
            host.clone(),
            config.max_resource_name,
        )));

        log::info!(
            "effect coordinator started: {} instances max, {} fps simulation",
            config.max_instances,
            config.simulation_fps
        );

        let clock = FrameClock::new(config.simulation_fps);
        Ok(Self {
            config,
            host,
            backend,
            renderer,
            clock,
        })
    }

    /// Loads the named effect definition through the backend, which pulls
    /// the bytes (and any referenced textures) back through the loader
    /// bridges.
    ///
    /// A failed load aborts cleanly: no asset is returned and the backend
    /// discards the in-progress definition.
    pub fn load_effect(&mut self, name: &str) -> EffectResult<EffectAsset> {
        let id = self.backend.create_effect(name)?;
        log::debug!("loaded effect {name} as asset {id}");
        Ok(EffectAsset::new(id))
    }

    /// Releases a loaded definition. Instances already playing keep their
    /// pinned resources until the backend retires them.
    pub fn unload_effect(&mut self, asset: EffectAsset) {
        self.backend.destroy_effect(asset.id());
    }

    /// Spawns a new instance of `asset` at the origin.
    ///
    /// The instance's render scale is set to `(s, -s, 1)`: `s` compensates
    /// for the backend's native unit scale, and the negated y flips the
    /// effect into the host's top-left-origin, y-down screen convention.
    ///
    /// Fails only if the backend rejects the asset; it never silently
    /// no-ops.
    pub fn play(&mut self, asset: EffectAsset) -> EffectResult<PlaybackHandle> {
        self.play_at(asset, Vec3::ZERO)
    }

    /// Spawns a new instance of `asset` at an explicit position.
    pub fn play_at(&mut self, asset: EffectAsset, position: Vec3) -> EffectResult<PlaybackHandle> {
        let instance = self.backend.spawn(asset.id(), position)?;
        let s = self.config.render_scale;
        self.backend.set_instance_scale(instance, s, -s, 1.0);
        Ok(PlaybackHandle::new(instance))
    }

    /// Requests termination of one instance. Idempotent: a stale handle or
    /// an already-finished instance is a no-op, since the backend retiring
    /// finished instances on its own is routine, not an error.
    pub fn stop(&mut self, handle: PlaybackHandle) {
        self.backend.stop(handle.id());
    }

    /// Terminates every active instance; used on scene teardown.
    pub fn stop_all(&mut self) {
        log::debug!("stopping all effect instances");
        self.backend.stop_all();
    }

    /// Live liveness query for a handle. Never cached: the backend may have
    /// retired the instance since the last call.
    pub fn exists(&self, handle: PlaybackHandle) -> bool {
        self.backend.exists(handle.id())
    }

    /// Accumulates host delta-time and advances the backend clock once a
    /// whole simulation frame has accrued.
    ///
    /// At most one frame unit is flushed per call (bounded catch-up); see
    /// [`FrameClock::advance`] for the policy.
    pub fn update(&mut self, dt: f32) {
        if let Some(frames) = self.clock.advance(dt) {
            self.backend.advance(frames);
        }
    }

    /// Pushes a screen-space projection for the given viewport size to the
    /// renderer.
    pub fn set_projection(&mut self, width: u32, height: u32) {
        self.renderer.set_projection(camera::screen_projection(
            width as f32,
            height as f32,
            self.config.depth_near,
            self.config.depth_far,
        ));
    }

    /// Renders every active instance. See [`draw_instance`] for the pass
    /// shape.
    ///
    /// [`draw_instance`]: EffectCoordinator::draw_instance
    pub fn draw(&mut self, transform: Mat4) -> EffectResult<()> {
        self.draw_pass(transform, None)
    }

    /// Renders a single instance; a stale handle draws nothing.
    pub fn draw_instance(&mut self, handle: PlaybackHandle, transform: Mat4) -> EffectResult<()> {
        self.draw_pass(transform, Some(handle.id()))
    }

    /// The backend render pass: save the bound program, flush host draws so
    /// they are not reordered past the effect pass, refresh the projection
    /// from the live viewport, compose the camera from the host transform
    /// stack and the per-draw transform, then begin/draw/end and restore
    /// the program. The backend pass leaves an unrelated program bound, so
    /// restoration is mandatory even when the pass fails to open.
    fn draw_pass(&mut self, transform: Mat4, only: Option<InstanceId>) -> EffectResult<()> {
        let (saved_program, width, height, camera) = {
            let mut gfx = self.host.graphics.borrow_mut();
            let saved = gfx.bound_program();
            gfx.flush_pending_draws();
            let (width, height) = gfx.viewport_size();
            let camera = gfx.current_transform() * transform;
            (saved, width, height, camera)
        };

        self.set_projection(width, height);
        self.renderer.set_camera(camera::to_backend_matrix(&camera));

        let opened = self.renderer.begin_pass();
        if opened.is_ok() {
            match only {
                Some(instance) => self.backend.draw_instance(instance),
                None => self.backend.draw_all(),
            }
            self.renderer.end_pass();
        }

        self.host.graphics.borrow_mut().bind_program(saved_program);
        opened
    }

    /// Residual sub-frame time, in simulation-frame units.
    pub fn time_residue(&self) -> f32 {
        self.clock.residue()
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }
}
