use std::f64::consts::TAU;

/// Angle between successive spiral points, 2π/φ with φ = (1+√5)/2.
/// φ is maximally irrational, so no integer number of steps lands back on a
/// previous angle and the packing stays visually uniform.
pub fn golden_angle() -> f64 {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    TAU / phi
}

/// Fermat-spiral point layout plus a parallel per-point index attribute.
/// Rebuilt in full whenever the aspect ratio changes, never patched in place.
pub struct PointField {
    pub positions: Vec<f32>,
    pub indices: Vec<f32>,
    count: usize,
}

impl PointField {
    /// Point n sits at radius sqrt(n/count) * inset and angle n * 2π/φ.
    /// Aspect correction scales the short axis so the spiral stays circular
    /// in clip space regardless of viewport proportions.
    pub fn generate(count: usize, aspect_ratio: f32, inset: f32) -> Self {
        let angle = golden_angle();
        let (sx, sy) = aspect_scale(aspect_ratio);
        let mut positions = Vec::with_capacity(count * 3);
        let mut indices = Vec::with_capacity(count);
        for n in 0..count {
            let r = (n as f64 / count as f64).sqrt() * inset as f64;
            let theta = n as f64 * angle;
            positions.push((r * theta.cos() * sx) as f32);
            positions.push((r * theta.sin() * sy) as f32);
            positions.push(0.0);
            indices.push(n as f32);
        }
        Self {
            positions,
            indices,
            count,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

fn aspect_scale(aspect_ratio: f32) -> (f64, f64) {
    if aspect_ratio > 1.0 {
        (1.0 / aspect_ratio as f64, 1.0)
    } else {
        (1.0, aspect_ratio as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius(field: &PointField, n: usize) -> f64 {
        let x = field.positions[n * 3] as f64;
        let y = field.positions[n * 3 + 1] as f64;
        (x * x + y * y).sqrt()
    }

    #[test]
    fn parallel_lengths() {
        let field = PointField::generate(1000, 1.0, 1.0);
        assert_eq!(field.positions.len(), 3000);
        assert_eq!(field.indices.len(), 1000);
        assert_eq!(field.count(), 1000);
    }

    #[test]
    fn empty_field() {
        let field = PointField::generate(0, 1.0, 1.0);
        assert!(field.positions.is_empty());
        assert!(field.indices.is_empty());
    }

    #[test]
    fn center_point_at_origin() {
        let field = PointField::generate(1000, 1.0, 1.0);
        assert_eq!(&field.positions[0..3], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn radius_monotonic() {
        let field = PointField::generate(1000, 1.0, 1.0);
        let mut previous = 0.0;
        for n in 0..field.count() {
            let r = radius(&field, n);
            assert!(r >= previous - 1e-7, "radius shrank at point {}", n);
            previous = r;
        }
    }

    #[test]
    fn last_point_near_unit_radius() {
        let field = PointField::generate(1000, 1.0, 1.0);
        let expected = (999.0_f64 / 1000.0).sqrt();
        assert!((radius(&field, 999) - expected).abs() < 1e-5);
    }

    #[test]
    fn inset_scales_radius() {
        let full = PointField::generate(100, 1.0, 1.0);
        let inset = PointField::generate(100, 1.0, 0.9);
        for n in 0..100 {
            let expected = radius(&full, n) * 0.9;
            assert!((radius(&inset, n) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn z_always_zero() {
        let field = PointField::generate(500, 2.0, 0.9);
        for n in 0..field.count() {
            assert_eq!(field.positions[n * 3 + 2], 0.0);
        }
    }

    #[test]
    fn wide_aspect_shrinks_x() {
        let square = PointField::generate(64, 1.0, 1.0);
        let wide = PointField::generate(64, 2.0, 1.0);
        for n in 0..64 {
            assert!((wide.positions[n * 3] - square.positions[n * 3] * 0.5).abs() < 1e-6);
            assert!((wide.positions[n * 3 + 1] - square.positions[n * 3 + 1]).abs() < 1e-6);
        }
    }

    #[test]
    fn tall_aspect_shrinks_y() {
        let square = PointField::generate(64, 1.0, 1.0);
        let tall = PointField::generate(64, 0.5, 1.0);
        for n in 0..64 {
            assert!((tall.positions[n * 3] - square.positions[n * 3]).abs() < 1e-6);
            assert!((tall.positions[n * 3 + 1] - square.positions[n * 3 + 1] * 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn index_attribute_counts_up() {
        let field = PointField::generate(256, 1.0, 1.0);
        for (n, idx) in field.indices.iter().enumerate() {
            assert_eq!(*idx, n as f32);
        }
    }

    // The golden angle never lines two points up radially: for any index
    // difference d, d * 2π/φ stays away from a multiple of 2π. The closest
    // approaches happen at Fibonacci differences (~4e-4 rad for d = 6765).
    #[test]
    fn golden_angle_never_aligns() {
        let angle = golden_angle();
        for d in 1..=10000u32 {
            let wrapped = (d as f64 * angle).rem_euclid(TAU);
            let distance = wrapped.min(TAU - wrapped);
            assert!(distance > 1e-4, "near-alignment at difference {}", d);
        }
    }
}
