/// Parameters for a [`Spring`] (unit mass).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    /// The spring is at rest once both its distance to the target and its speed fall below this.
    pub rest_epsilon: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        // Close to critically damped: 2 * sqrt(170) ~= 26.08.
        Self {
            stiffness: 170.0,
            damping: 26.0,
            rest_epsilon: 0.001,
        }
    }
}

/// A damped spring interpolating a scalar toward a target, for adapter-driven settling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl Spring {
    const MAX_SUBSTEP_S: f32 = 1.0 / 120.0;
    const MAX_FRAME_MS: u64 = 1_000;

    pub fn new(from: f32, to: f32, config: SpringConfig) -> Self {
        Self {
            position: from,
            velocity: 0.0,
            target: to,
            config,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn is_settled(&self) -> bool {
        let eps = self.config.rest_epsilon;
        (self.position - self.target).abs() < eps && self.velocity.abs() < eps
    }

    /// Advances the spring by `dt_ms` and returns the new position.
    ///
    /// Integration uses fixed sub-steps (semi-implicit Euler), so results do not depend on the
    /// adapter's frame rate. Frames longer than a second are truncated. Once at rest, the
    /// position snaps exactly onto the target.
    pub fn step(&mut self, dt_ms: u64) -> f32 {
        let mut remaining = dt_ms.min(Self::MAX_FRAME_MS) as f32 / 1000.0;
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(Self::MAX_SUBSTEP_S);
            let accel = -self.config.stiffness * (self.position - self.target)
                - self.config.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    /// Moves the target while keeping the current position and velocity.
    pub fn retarget(&mut self, to: f32) {
        self.target = to;
    }
}
