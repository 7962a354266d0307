//! Fixed-rate simulation time accumulation.
//!
//! The backend's clock is quantized to whole simulation frames (60 per
//! second by default), while the host hands us variable frame-time deltas.
//! Feeding arbitrary sub-frame deltas straight through would either starve
//! or double-advance the simulation, so sub-frame time is buffered here and
//! flushed only once a whole frame unit has accrued.

/// Default backend simulation rate, in frames per second.
pub const SIMULATION_FPS: f32 = 60.0;

/// Accumulates host delta-time into backend simulation-frame units.
#[derive(Debug, Clone)]
pub struct FrameClock {
    rate: f32,
    residue: f32,
}

impl FrameClock {
    pub fn new(rate: f32) -> Self {
        Self { rate, residue: 0.0 }
    }

    /// Accumulates `dt` seconds and reports the frame units to feed to the
    /// backend, if a whole unit has accrued.
    ///
    /// Flushing is bounded to one frame unit per call: after a pathological
    /// delta (resuming from a long stall) the simulation drains the backlog
    /// one frame per call and lags real time instead of jumping. The
    /// fractional remainder is always retained, so no sub-frame time is ever
    /// lost.
    ///
    /// Non-finite and non-positive deltas are ignored.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if !dt.is_finite() {
            log::warn!("ignoring non-finite frame delta: {dt}");
            return None;
        }
        if dt <= 0.0 {
            return None;
        }
        self.residue += dt * self.rate;
        if self.residue >= 1.0 {
            self.residue -= 1.0;
            Some(1.0)
        } else {
            None
        }
    }

    /// Sub-frame time still buffered, in frame units (always below 1.0
    /// between calls unless a large delta left a backlog).
    pub fn residue(&self) -> f32 {
        self.residue
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIMULATION_FPS)
    }
}
