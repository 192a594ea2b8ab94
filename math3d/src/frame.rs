
use crate::vec::{Vec3, Vec4};
use crate::mat::{Mat3, Mat4};

/// An orthonormal frame of reference, consisting of a position and two direction vectors. The
/// third axis is derived from the other two. Frames are used both to place objects in the world
/// and as cameras.
///
/// All angles are in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub(crate) origin: Vec3<f32>,
    pub(crate) forward: Vec3<f32>,
    pub(crate) up: Vec3<f32>,
}

impl Default for Frame {
    /// A frame at the world origin, looking down the negative z axis with positive y up
    fn default() -> Frame {
        Frame {
            origin:  Vec3::new(0.0, 0.0, 0.0),
            forward: Vec3::new(0.0, 0.0, -1.0),
            up:      Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl Frame {
    pub fn new() -> Frame {
        Frame::default()
    }

    pub fn origin(&self) -> Vec3<f32> { self.origin }
    pub fn set_origin(&mut self, origin: Vec3<f32>) { self.origin = origin; }

    pub fn forward(&self) -> Vec3<f32> { self.forward }
    pub fn set_forward(&mut self, forward: Vec3<f32>) { self.forward = forward; }

    pub fn up(&self) -> Vec3<f32> { self.up }
    pub fn set_up(&mut self, up: Vec3<f32>) { self.up = up; }

    /// `up × forward`
    pub fn x_axis(&self) -> Vec3<f32> { Vec3::cross(self.up, self.forward) }
    pub fn y_axis(&self) -> Vec3<f32> { self.up }
    pub fn z_axis(&self) -> Vec3<f32> { self.forward }

    pub fn translate_world(&mut self, delta: Vec3<f32>) {
        self.origin += delta;
    }

    /// Moves `delta.z` along the forward vector, `delta.y` along the up vector and `delta.x`
    /// along the x axis.
    pub fn translate_local(&mut self, delta: Vec3<f32>) {
        self.move_forward(delta.z);
        self.move_up(delta.y);
        self.move_right(delta.x);
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.origin += self.forward * distance;
    }

    pub fn move_up(&mut self, distance: f32) {
        self.origin += self.up * distance;
    }

    /// Moves along `up × forward`
    pub fn move_right(&mut self, distance: f32) {
        self.origin += self.x_axis() * distance;
    }

    // The rotation part of the actor matrix
    fn rotation(&self) -> Mat3<f32> {
        let mut result = Mat3::zero();
        result.set_column(0, self.x_axis());
        result.set_column(1, self.up);
        result.set_column(2, self.forward);
        result
    }

    /// The transform which takes points from this frames local space to world space. The
    /// columns are the x axis, up, forward and the origin. If `rotation_only` is set the last
    /// column is left at zero.
    pub fn matrix(&self, rotation_only: bool) -> Mat4<f32> {
        let mut result = Mat4::from(self.rotation());
        if !rotation_only {
            result.set_column(3, Vec4::from3(self.origin, 1.0));
        }
        result
    }

    /// The view transform for a camera placed at this frame, looking along the forward vector.
    pub fn camera_matrix(&self, rotation_only: bool) -> Mat4<f32> {
        let z = -self.forward;
        let x = Vec3::cross(self.up, z);

        let rotation = Mat4::with_values(
            x.x,       x.y,       x.z,       0.0,
            self.up.x, self.up.y, self.up.z, 0.0,
            z.x,       z.y,       z.z,       0.0,
            0.0,       0.0,       0.0,       1.0,
        );

        if rotation_only {
            rotation
        } else {
            rotation * Mat4::translation(-self.origin)
        }
    }

    /// Rotates around the local x axis, tilting both the forward and the up vector.
    pub fn rotate_local_x(&mut self, angle: f32) {
        let rotation = Mat3::rotation(angle, self.x_axis());
        self.forward = rotation * self.forward;
        self.up = rotation * self.up;
    }

    /// Turns the forward vector around the up vector.
    pub fn rotate_local_y(&mut self, angle: f32) {
        let rotation = Mat3::rotation(angle, self.up);
        self.forward = rotation * self.forward;
    }

    /// Rolls the up vector around the forward vector.
    pub fn rotate_local_z(&mut self, angle: f32) {
        let rotation = Mat3::rotation(angle, self.forward);
        self.up = rotation * self.up;
    }

    /// Rotates around an axis given in world space.
    pub fn rotate_world(&mut self, angle: f32, axis: Vec3<f32>) {
        let rotation = Mat3::rotation(angle, axis);
        self.up = rotation * self.up;
        self.forward = rotation * self.forward;
    }

    /// Rotates around an axis given in the local space of this frame.
    pub fn rotate_local(&mut self, angle: f32, axis: Vec3<f32>) {
        let world_axis = self.rotate_vector(axis);
        self.rotate_world(angle, world_axis);
    }

    /// Makes the up and forward vectors unit length and perpendicular again. Should be called
    /// every now and then when a frame has been rotated many times, as small errors pile up.
    pub fn normalize(&mut self) {
        let cross = Vec3::cross(self.up, self.forward);
        self.forward = Vec3::cross(cross, self.up);

        self.up = self.up.normalize();
        self.forward = self.forward.normalize();
    }

    /// Takes a point from this frames local space to world space.
    pub fn local_to_world(&self, p: Vec3<f32>) -> Vec3<f32> {
        self.rotation() * p + self.origin
    }

    /// Takes a point from world space to this frames local space.
    pub fn world_to_local(&self, p: Vec3<f32>) -> Vec3<f32> {
        // The rotation is orthonormal, so its transpose is its inverse
        self.rotation().transpose() * (p - self.origin)
    }

    /// Applies the full actor transform to the given point. Same as `local_to_world`, but goes
    /// through the 4x4 matrix.
    pub fn transform_point(&self, p: Vec3<f32>) -> Vec3<f32> {
        self.matrix(false).transform_point(p)
    }

    /// Rotates a vector from local space into world space, ignoring the origin.
    pub fn rotate_vector(&self, v: Vec3<f32>) -> Vec3<f32> {
        self.rotation() * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec3<f32>, b: Vec3<f32>) {
        let diff = (a - b).len();
        assert!(diff < 0.001, "{} and {} differ by {}", a, b, diff);
    }

    #[test]
    fn defaults() {
        let frame = Frame::new();
        assert_eq!(Vec3::new(0.0, 0.0, 0.0), frame.origin());
        assert_eq!(Vec3::new(0.0, 0.0, -1.0), frame.forward());
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), frame.up());
        assert_eq!(Vec3::new(-1.0, 0.0, 0.0), frame.x_axis());
        assert_eq!(Mat4::identity(), frame.camera_matrix(true));
    }

    #[test]
    fn movement() {
        let mut frame = Frame::new();
        frame.move_forward(2.0);
        assert_close(Vec3::new(0.0, 0.0, -2.0), frame.origin());

        frame.move_up(1.0);
        frame.move_right(3.0);
        assert_close(Vec3::new(-3.0, 1.0, -2.0), frame.origin());

        let mut other = Frame::new();
        other.translate_local(Vec3::new(3.0, 1.0, 2.0));
        assert_close(frame.origin(), other.origin());

        other.translate_world(Vec3::new(3.0, -1.0, 2.0));
        assert_close(Vec3::new(0.0, 0.0, 0.0), other.origin());
    }

    #[test]
    fn turning() {
        let mut frame = Frame::new();
        frame.rotate_local_y(FRAC_PI_2);
        assert_close(Vec3::new(-1.0, 0.0, 0.0), frame.forward());
        assert_close(Vec3::new(0.0, 1.0, 0.0), frame.up());

        let mut frame = Frame::new();
        frame.rotate_local_x(FRAC_PI_2);
        assert_close(Vec3::new(0.0, -1.0, 0.0), frame.forward());
        assert_close(Vec3::new(0.0, 0.0, -1.0), frame.up());

        let mut frame = Frame::new();
        frame.rotate_local_z(FRAC_PI_2);
        assert_close(Vec3::new(0.0, 0.0, -1.0), frame.forward());
        assert_close(Vec3::new(1.0, 0.0, 0.0), frame.up());
    }

    #[test]
    fn local_and_world_rotation_agree() {
        let mut a = Frame::new();
        a.rotate_local_y(0.7);
        a.rotate_local_x(0.3);

        let mut b = a;
        a.rotate_local(0.5, Vec3::new(0.0, 1.0, 0.0));
        b.rotate_world(0.5, b.up());

        assert_close(a.forward(), b.forward());
        assert_close(a.up(), b.up());
    }

    #[test]
    fn camera() {
        let mut frame = Frame::new();
        frame.set_origin(Vec3::new(0.0, 0.0, 5.0));
        let view = frame.camera_matrix(false);
        assert_close(Vec3::new(0.0, 0.0, -5.0), view.transform_point(Vec3::zero()));

        // Something in front of the camera ends up in front of it in eye space
        frame.rotate_local_y(0.9);
        frame.move_forward(3.0);
        let ahead = frame.origin() + frame.forward() * 10.0;
        let eye = frame.camera_matrix(false).transform_point(ahead);
        assert_close(Vec3::new(0.0, 0.0, -10.0), eye);
    }

    #[test]
    fn coordinate_conversion() {
        let mut frame = Frame::new();
        frame.set_origin(Vec3::new(1.0, 2.0, 3.0));
        frame.rotate_local_y(1.2);
        frame.rotate_local_z(-0.4);

        let p = Vec3::new(4.0, -1.0, 0.5);
        let world = frame.local_to_world(p);
        assert_close(world, frame.transform_point(p));
        assert_close(p, frame.world_to_local(world));
        assert_close(world - frame.origin(), frame.rotate_vector(p));
    }

    #[test]
    fn normalize() {
        let mut frame = Frame::new();
        frame.set_forward(Vec3::new(0.1, 0.2, -3.0));
        frame.set_up(Vec3::new(0.0, 2.0, 0.1));
        frame.normalize();

        assert!((frame.forward().len() - 1.0).abs() < 0.001);
        assert!((frame.up().len() - 1.0).abs() < 0.001);
        assert!(Vec3::dot(frame.forward(), frame.up()).abs() < 0.001);
    }
}
