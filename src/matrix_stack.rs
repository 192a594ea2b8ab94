
//! A replacement for the legacy OpenGL matrix stack, which core contexts no longer have

use math3d::{Mat3, Mat4, Vec3};

const STACK_SIZE: usize = 32;

/// A matrix stack containing a single projection matrix and stacks of model and view matrices.
/// Transforms are applied to the top of a stack by post-multiplying, the same way
/// `glTranslatef` and friends did.
#[derive(Clone)]
pub struct MatrixStack {
    model_stack: [Mat4<f32>; STACK_SIZE],
    model_pointer: usize,
    view_stack: [Mat4<f32>; STACK_SIZE],
    view_pointer: usize,
    projection: Mat4<f32>,
}

impl MatrixStack {
    pub fn new() -> MatrixStack {
        MatrixStack {
            model_stack: [Mat4::identity(); STACK_SIZE],
            model_pointer: 0,
            view_stack: [Mat4::identity(); STACK_SIZE],
            view_pointer: 0,
            projection: Mat4::identity(),
        }
    }

    /// Sets the projection matrix to a orthographic projection with the given parameters
    pub fn ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        self.projection = Mat4::ortho(left, right, bottom, top, near, far);
    }

    /// Sets the projection matrix to a perspective projection with the given parameters.
    /// `fov` is the vertical field of view and should be given in degrees.
    pub fn perspective(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.projection = Mat4::perspective(fov, aspect, near, far);
    }

    /// Pushes one frame onto the model stack
    fn push_private(&mut self) {
        if self.model_pointer >= STACK_SIZE - 1 {
            panic!("Stack overflow in MatrixStack::push(&mut self)");
        }

        let old_top = self.model_stack[self.model_pointer];
        self.model_pointer += 1;
        self.model_stack[self.model_pointer] = old_top;
    }

    /// Pops one frame of the model stack
    fn pop_private(&mut self) {
        if self.model_pointer == 0 {
            panic!("Stack underflow in MatrixStack::pop(&mut self)");
        }
        self.model_pointer -= 1;
    }

    /// Pushes one frame onto the view stack
    fn view_push_private(&mut self) {
        if self.view_pointer >= STACK_SIZE - 1 {
            panic!("Stack overflow in MatrixStack::push_view(&mut self)");
        }

        let old_top = self.view_stack[self.view_pointer];
        self.view_pointer += 1;
        self.view_stack[self.view_pointer] = old_top;
    }

    /// Pops one frame of the view stack
    fn view_pop_private(&mut self) {
        if self.view_pointer == 0 {
            panic!("Stack underflow in MatrixStack::pop_view(&mut self)");
        }
        self.view_pointer -= 1;
    }

    /// Pushes a frame onto the model stack, executes the given action and pops the frame
    /// back off again. All model transforms that are executed within the action will be
    /// reset after it returns.
    ///
    /// Note that only the model matrix is affected by this, and modifications to the
    /// projection matrix will persist even after this operation.
    ///
    /// By wrapping the code in a closure we can guarantee that there will never be unbalanced
    /// push-pops.
    ///
    /// # Example
    /// ```rust
    /// use superbible::MatrixStack;
    /// use math3d::Vec3;
    ///
    /// let mut matrix_stack = MatrixStack::new();
    ///
    /// matrix_stack.push(|matrix_stack| {
    ///     matrix_stack.translate(Vec3::new(2.0, 5.0, 3.0));
    ///
    ///     matrix_stack.push(|matrix_stack| {
    ///         // Nested pushing works just fine
    ///     });
    /// });
    /// // All translations that happened in the above block are reset here
    /// assert_eq!(math3d::Mat4::identity(), matrix_stack.model());
    /// ```
    pub fn push<F, R>(&mut self, action: F) -> R where F: FnOnce(&mut Self) -> R {
        self.push_private();
        let result = action(self);
        self.pop_private();
        result
    }

    /// Equal to `push`, but saves and restores the view matrix rather than the model matrix.
    pub fn push_view<F, R>(&mut self, action: F) -> R where F: FnOnce(&mut Self) -> R {
        self.view_push_private();
        let result = action(self);
        self.view_pop_private();
        result
    }

    /// Sets the top of the model and view stacks to a identity matrix
    pub fn load_identity(&mut self) {
        self.view_stack[self.view_pointer] = Mat4::identity();
        self.model_stack[self.model_pointer] = Mat4::identity();
    }

    /// Applies the given translation to the top of the model stack
    pub fn translate(&mut self, translation: Vec3<f32>) {
        self.multiply(Mat4::translation(translation));
    }

    /// Applies the given scaling to the top of the model stack
    pub fn scale(&mut self, scale: Vec3<f32>) {
        self.multiply(Mat4::scaling(scale));
    }

    /// Applies a rotation of `angle` degrees around the given axis to the top of the model stack,
    /// like `glRotatef` did.
    pub fn rotate(&mut self, angle: f32, axis: Vec3<f32>) {
        self.multiply(Mat4::rotation(angle.to_radians(), axis));
    }

    /// Post-multiplies the top of the model stack with the given matrix
    pub fn multiply(&mut self, matrix: Mat4<f32>) {
        self.model_stack[self.model_pointer] *= matrix;
    }

    /// Returns the top of the model stack
    pub fn model(&self) -> Mat4<f32> {
        self.model_stack[self.model_pointer]
    }

    /// Replaces the top of the view stack, usually with the matrix of a camera
    pub fn set_view(&mut self, view: Mat4<f32>) {
        self.view_stack[self.view_pointer] = view;
    }

    /// Post-multiplies the top of the view stack with the given matrix
    pub fn multiply_view(&mut self, matrix: Mat4<f32>) {
        self.view_stack[self.view_pointer] *= matrix;
    }

    /// Returns the top of the view stack
    pub fn view(&self) -> Mat4<f32> {
        self.view_stack[self.view_pointer]
    }

    pub fn projection(&self) -> Mat4<f32> {
        self.projection
    }

    /// Transforms from model space to eye space
    pub fn model_view(&self) -> Mat4<f32> {
        self.view() * self.model()
    }

    /// Returns the model-view-projection matrix
    pub fn mvp(&self) -> Mat4<f32> {
        self.projection * self.model_view()
    }

    /// The inverse transpose of the model-view matrix, which transforms normals to eye space.
    /// Falls back to the model-view matrix itself if it can not be inverted (e.g. while a
    /// shadow projection is applied).
    pub fn normal_matrix(&self) -> Mat3<f32> {
        let model_view = self.model_view();
        match model_view.inverse() {
            Some(inverse) => Mat3::from(inverse.transpose()),
            None => Mat3::from(model_view),
        }
    }
}

impl Default for MatrixStack {
    fn default() -> MatrixStack { MatrixStack::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use math3d::planar_shadow_matrix;
    use math3d::Vec4;

    fn assert_close(a: Vec3<f32>, b: Vec3<f32>) {
        assert!((a - b).len() < 0.001, "{} != {}", a, b);
    }

    #[test]
    fn push_restores_model() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::new(1.0, 0.0, 0.0));

        let inner = stack.push(|stack| {
            stack.translate(Vec3::new(0.0, 2.0, 0.0));
            stack.model().transform_point(Vec3::zero())
        });

        assert_close(Vec3::new(1.0, 2.0, 0.0), inner);
        assert_close(Vec3::new(1.0, 0.0, 0.0), stack.model().transform_point(Vec3::zero()));
    }

    #[test]
    fn transforms_apply_in_legacy_order() {
        let mut stack = MatrixStack::new();
        // Rotate first, then translate along the rotated x axis
        stack.rotate(90.0, Vec3::new(0.0, 0.0, 1.0));
        stack.translate(Vec3::new(1.0, 0.0, 0.0));

        assert_close(Vec3::new(0.0, 1.0, 0.0), stack.model().transform_point(Vec3::zero()));
    }

    #[test]
    fn view_is_applied_after_model() {
        let mut stack = MatrixStack::new();
        stack.set_view(Mat4::translation(Vec3::new(0.0, 0.0, -10.0)));
        stack.scale(Vec3::new(2.0, 2.0, 2.0));

        assert_close(Vec3::new(2.0, 0.0, -10.0), stack.model_view().transform_point(Vec3::new(1.0, 0.0, 0.0)));

        stack.push_view(|stack| {
            stack.multiply_view(Mat4::translation(Vec3::new(0.0, 0.0, -5.0)));
            assert_close(Vec3::new(0.0, 0.0, -15.0), stack.model_view().transform_point(Vec3::zero()));
        });
        assert_close(Vec3::new(0.0, 0.0, -10.0), stack.model_view().transform_point(Vec3::zero()));
    }

    #[test]
    fn normal_matrix_undoes_scaling() {
        let mut stack = MatrixStack::new();
        stack.scale(Vec3::new(1.0, 4.0, 1.0));

        let normal = stack.normal_matrix() * Vec3::new(0.0, 1.0, 0.0);
        assert_close(Vec3::new(0.0, 0.25, 0.0), normal);
    }

    #[test]
    fn normal_matrix_of_shadow() {
        let mut stack = MatrixStack::new();
        let plane = Vec4::new(0.0, 1.0, 0.0, 0.0);
        stack.multiply(planar_shadow_matrix(plane, Vec4::new(0.0, 10.0, 0.0, 1.0)));

        // Singular, but still usable
        let _ = stack.normal_matrix();
    }

    #[test]
    #[should_panic(expected = "Stack overflow")]
    fn overflow_panics() {
        fn recurse(stack: &mut MatrixStack) {
            stack.push(recurse);
        }

        let mut stack = MatrixStack::new();
        recurse(&mut stack);
    }

    #[test]
    fn identity() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::new(1.0, 2.0, 3.0));
        stack.set_view(Mat4::rotation_x(1.0));
        stack.load_identity();

        assert_eq!(Mat4::identity(), stack.model_view());
    }
}
