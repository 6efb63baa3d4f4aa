//! Physics tuning handed to the scroll gesture handler every frame.

use std::fmt;
use std::time::Duration;

use glide_animation::TransitionType;

pub const DEFAULT_DRAG_FLICK_DECELERATION: f32 = 200.0 * 100.0;
pub const DEFAULT_DRAG_END_ANIM_TIME_MULTIPLIER: f32 = 4.0;
pub const DEFAULT_SPRING_STIFFNESS: f32 = 5.0;
pub const DEFAULT_BOUNCE_ANIMATION_TIME: Duration = Duration::from_millis(1000);

/// Hooke's law stiffness per axis. Values below 1 disable the spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStiffness {
    pub x: f32,
    pub y: f32,
}

impl SpringStiffness {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn uniform(value: f32) -> Self {
        Self { x: value, y: value }
    }
}

impl Default for SpringStiffness {
    fn default() -> Self {
        Self::uniform(DEFAULT_SPRING_STIFFNESS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NegativeDeceleration,
    NonFiniteValue(&'static str),
    NegativeTimeMultiplier,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeDeceleration => {
                write!(f, "drag flick deceleration must not be negative")
            }
            ConfigError::NonFiniteValue(field) => write!(f, "{} must be finite", field),
            ConfigError::NegativeTimeMultiplier => {
                write!(f, "drag end animation time multiplier must not be negative")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGestureAnimationConfig {
    /// dp/s²
    pub drag_flick_deceleration: f32,
    pub drag_flick_transition_type: TransitionType,
    /// Scales the analytic time-to-rest into the flick animation duration.
    pub drag_end_anim_time_multiplier: f32,
    pub bounce_spring_stiffness: SpringStiffness,
    pub bounce_animation_time: Duration,
    pub bounce_transition_type: TransitionType,
}

impl Default for ScrollGestureAnimationConfig {
    fn default() -> Self {
        Self {
            drag_flick_deceleration: DEFAULT_DRAG_FLICK_DECELERATION,
            drag_flick_transition_type: TransitionType::EaseOutSine,
            drag_end_anim_time_multiplier: DEFAULT_DRAG_END_ANIM_TIME_MULTIPLIER,
            bounce_spring_stiffness: SpringStiffness::default(),
            bounce_animation_time: DEFAULT_BOUNCE_ANIMATION_TIME,
            bounce_transition_type: TransitionType::EaseInOutQuad,
        }
    }
}

impl ScrollGestureAnimationConfig {
    /// Content stops hard at the edges: no spring and no bounce animation.
    pub fn no_bounce() -> Self {
        Self::default()
            .with_bounce_spring_stiffness(SpringStiffness::uniform(0.0))
            .with_bounce_animation_time(Duration::ZERO)
    }

    pub fn with_drag_flick_deceleration(mut self, value: f32) -> Self {
        self.drag_flick_deceleration = value;
        self
    }

    pub fn with_drag_flick_transition_type(mut self, value: TransitionType) -> Self {
        self.drag_flick_transition_type = value;
        self
    }

    pub fn with_drag_end_anim_time_multiplier(mut self, value: f32) -> Self {
        self.drag_end_anim_time_multiplier = value;
        self
    }

    pub fn with_bounce_spring_stiffness(mut self, value: SpringStiffness) -> Self {
        self.bounce_spring_stiffness = value;
        self
    }

    pub fn with_bounce_animation_time(mut self, value: Duration) -> Self {
        self.bounce_animation_time = value;
        self
    }

    pub fn with_bounce_transition_type(mut self, value: TransitionType) -> Self {
        self.bounce_transition_type = value;
        self
    }

    /// A zero deceleration is accepted; the handler then resolves releases
    /// without a flick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("drag flick deceleration", self.drag_flick_deceleration),
            (
                "drag end animation time multiplier",
                self.drag_end_anim_time_multiplier,
            ),
            ("bounce spring stiffness x", self.bounce_spring_stiffness.x),
            ("bounce spring stiffness y", self.bounce_spring_stiffness.y),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFiniteValue(*field));
        }
        if self.drag_flick_deceleration < 0.0 {
            return Err(ConfigError::NegativeDeceleration);
        }
        if self.drag_end_anim_time_multiplier < 0.0 {
            return Err(ConfigError::NegativeTimeMultiplier);
        }
        Ok(())
    }
}
