use glam::Vec2;

const VELOCITY_DECAY: f32 = 0.9;
const VELOCITY_EPSILON: f32 = 0.001;

pub enum MouseButton {
    Left,
    Right,
    Other,
}

/// Last cursor position in surface pixels plus drag state.
pub struct MouseState {
    pub x: f64,
    pub y: f64,
    pub dragging: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dragging: false,
        }
    }
}

/// Pointer-driven uniform source: normalized cursor position and per-event
/// movement delta that bleeds off over subsequent frames.
pub struct PointerTrail {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl PointerTrail {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    /// Record a pointer move: position normalized into [0, 1], raw pixel
    /// delta kept as velocity until decay drains it.
    pub fn track(&mut self, x: f64, y: f64, dx: f64, dy: f64, width: f64, height: f64) {
        self.position = Vec2::new((x / width) as f32, (y / height) as f32);
        self.velocity = Vec2::new(dx as f32, dy as f32);
    }

    /// Once per frame: scale velocity down, snap to zero once negligible.
    pub fn decay(&mut self) {
        self.velocity.x = decay_component(self.velocity.x);
        self.velocity.y = decay_component(self.velocity.y);
    }
}

fn decay_component(v: f32) -> f32 {
    if v.abs() > VELOCITY_EPSILON {
        v * VELOCITY_DECAY
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_normalizes_position() {
        let mut trail = PointerTrail::new();
        trail.track(250.0, 125.0, 4.0, -2.0, 500.0, 500.0);
        assert_eq!(trail.position, Vec2::new(0.5, 0.25));
        assert_eq!(trail.velocity, Vec2::new(4.0, -2.0));
    }

    #[test]
    fn velocity_decays_to_exact_zero() {
        let mut trail = PointerTrail::new();
        trail.track(0.0, 0.0, 8.0, -8.0, 500.0, 500.0);
        for _ in 0..200 {
            trail.decay();
        }
        assert_eq!(trail.velocity, Vec2::ZERO);
    }

    #[test]
    fn decay_is_geometric_above_epsilon() {
        let mut trail = PointerTrail::new();
        trail.track(0.0, 0.0, 10.0, 0.0, 500.0, 500.0);
        trail.decay();
        assert!((trail.velocity.x - 9.0).abs() < 1e-6);
    }
}
