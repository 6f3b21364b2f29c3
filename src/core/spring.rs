//! Damped spring for hover lift on buttons and cards
//!
//! Each hovered element owns a [`HoverSpring`] animating two channels
//! (scale and vertical offset) toward a target pose. The DOM layer steps it
//! once per animation frame and stops requesting frames once it is at rest.

/// Button pose while hovered
pub const BUTTON_HOVER: Pose = Pose { scale: 1.02, y: -2.0 };
/// Card pose while hovered
pub const CARD_HOVER: Pose = Pose { scale: 1.01, y: -6.0 };
/// Resting pose
pub const REST: Pose = Pose { scale: 1.0, y: 0.0 };

pub const BUTTON_SPRING: SpringConfig = SpringConfig {
    stiffness: 400.0,
    damping: 25.0,
    mass: 1.0,
};

pub const CARD_SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 20.0,
    mass: 1.0,
};

/// Largest step fed to the integrator; longer frames are subdivided
const MAX_STEP_S: f64 = 1.0 / 120.0;
/// Below both of these the spring snaps to its target
const REST_DISTANCE: f64 = 0.0005;
const REST_VELOCITY: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: f64,
    pub y: f64,
}

impl Pose {
    pub fn transform(&self) -> String {
        format!("translateY({}px) scale({})", self.y, self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Channel {
    value: f64,
    velocity: f64,
    target: f64,
}

impl Channel {
    fn at(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Semi-implicit Euler step
    fn step(&mut self, config: &SpringConfig, dt: f64) {
        let force = -config.stiffness * (self.value - self.target) - config.damping * self.velocity;
        self.velocity += force / config.mass * dt;
        self.value += self.velocity * dt;
    }

    fn settle(&mut self) -> bool {
        let resting = (self.value - self.target).abs() < REST_DISTANCE
            && self.velocity.abs() < REST_VELOCITY;
        if resting {
            self.value = self.target;
            self.velocity = 0.0;
        }
        resting
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSpring {
    config: SpringConfig,
    scale: Channel,
    y: Channel,
}

impl HoverSpring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            scale: Channel::at(REST.scale),
            y: Channel::at(REST.y),
        }
    }

    pub fn set_target(&mut self, pose: Pose) {
        self.scale.target = pose.scale;
        self.y.target = pose.y;
    }

    pub fn pose(&self) -> Pose {
        Pose {
            scale: self.scale.value,
            y: self.y.value,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.scale.value == self.scale.target
            && self.y.value == self.y.target
            && self.scale.velocity == 0.0
            && self.y.velocity == 0.0
    }

    /// Advance by `dt_s` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt_s: f64) -> bool {
        let mut remaining = dt_s.clamp(0.0, 0.1);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_S);
            self.scale.step(&self.config, dt);
            self.y.step(&self.config, dt);
            remaining -= dt;
        }
        let scale_rest = self.scale.settle();
        let y_rest = self.y.settle();
        !(scale_rest && y_rest)
    }
}
