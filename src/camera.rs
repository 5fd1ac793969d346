use glam::{Mat4, Quat, Vec3};

const ROTATION_SPEED: f64 = 0.05;
const ZOOM_SPEED: f64 = 0.03;

/// Orbit camera: eye on the z axis at `distance`, scene rotated under it.
/// Distance is clamped to [min, max] on every zoom.
pub struct OrbitCamera {
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    rotation: Mat4,
}

impl OrbitCamera {
    pub fn new(distance: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            distance: distance.clamp(min_distance, max_distance),
            min_distance,
            max_distance,
            rotation: Mat4::IDENTITY,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn rotate_from_pointer(&mut self, dx: f64, dy: f64) {
        let x_rad = (dy * ROTATION_SPEED) as f32;
        let y_rad = (dx * ROTATION_SPEED) as f32;

        // transform x / y axis by inverse of current rotation
        // to get rotation axis perpendicular to current view
        let inv_mat = self.rotation.inverse();
        let x_axis = inv_mat.transform_vector3(Vec3::X);
        let y_axis = inv_mat.transform_vector3(Vec3::Y);

        let x_rot = Mat4::from_quat(Quat::from_axis_angle(x_axis, x_rad));
        let y_rot = Mat4::from_quat(Quat::from_axis_angle(y_axis, y_rad));

        self.rotation = self.rotation.mul_mat4(&x_rot.mul_mat4(&y_rot));
    }

    pub fn zoom_from_scroll(&mut self, delta: f64) {
        let scale = 1.0 - (delta * ZOOM_SPEED) as f32;
        self.distance = (self.distance * scale).clamp(self.min_distance, self.max_distance);
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = Vec3::new(0.0, 0.0, self.distance);
        Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y).mul_mat4(&self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_clamped_at_construction() {
        let camera = OrbitCamera::new(10.0, 1.0, 3.0);
        assert_eq!(camera.distance(), 3.0);
    }

    #[test]
    fn zoom_clamped_to_bounds() {
        let mut camera = OrbitCamera::new(2.0, 1.0, 3.0);
        for _ in 0..100 {
            camera.zoom_from_scroll(-10.0);
        }
        assert_eq!(camera.distance(), 3.0);
        for _ in 0..100 {
            camera.zoom_from_scroll(10.0);
        }
        assert_eq!(camera.distance(), 1.0);
    }

    #[test]
    fn default_view_is_look_at() {
        let camera = OrbitCamera::new(2.0, 1.0, 3.0);
        let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Y);
        let diff: f32 = camera
            .view_matrix()
            .to_cols_array()
            .iter()
            .zip(expected.to_cols_array().iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        assert!(diff < 1e-6);
    }

    #[test]
    fn rotation_preserves_rigidity() {
        let mut camera = OrbitCamera::new(2.0, 1.0, 3.0);
        camera.rotate_from_pointer(12.0, -7.0);
        camera.rotate_from_pointer(-3.0, 20.0);
        // view stays a rigid transform: determinant 1
        assert!((camera.view_matrix().determinant() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn drag_changes_view() {
        let mut camera = OrbitCamera::new(2.0, 1.0, 3.0);
        let before = camera.view_matrix();
        camera.rotate_from_pointer(10.0, 0.0);
        assert_ne!(before, camera.view_matrix());
    }
}
