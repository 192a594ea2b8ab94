
//! Tests that different ways of building the same rotation agree with each other

extern crate math3d;

use math3d::{Vec3, Vec4, Mat3, Mat4, Frame};

// Random angles between -π and π
const TEST_ANGLES: [f32; 40] = [
    2.7004, 2.512, 2.3236, -1.57, -1.6328, -2.8888, -0.942, 2.1352, 2.7004, 1.6956,
    -2.6376, -2.512, 2.826, 3.14, -3.14, -0.8164, -2.3864, 1.256, 1.6328, 0.942,
    -1.884, -1.57, -2.7004, -1.0676, 3.14, 2.6376, -0.1256, 0.4396, 1.1304, -2.2608,
    2.198, 1.3188, 1.7584, 0.6908, -1.57, -1.3188, -2.1352, 3.0772, 0.3768, 1.3816,
];

fn test_equal_v3(a: Vec3<f32>, b: Vec3<f32>) {
    let diff = (a - b).len();
    assert!(diff < 0.001, "Expected a = {} and b = {} to be equal.", a, b);
}

fn test_equal_m4(a: Mat4<f32>, b: Mat4<f32>) {
    for i in 0..16 {
        let diff = (a.a[i] - b.a[i]).abs();
        assert!(diff < 0.001, "Expected a = {:?} and b = {:?} to be equal.", a, b);
    }
}

#[test]
fn axis_rotations_match_arbitrary_rotation() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    let z = Vec3::new(0.0, 0.0, 1.0);

    for &angle in TEST_ANGLES.iter() {
        test_equal_m4(Mat4::rotation_x(angle), Mat4::rotation(angle, x));
        test_equal_m4(Mat4::rotation_y(angle), Mat4::rotation(angle, y));
        test_equal_m4(Mat4::rotation_z(angle), Mat4::rotation(angle, z));
    }
}

#[test]
fn matrix_vector_rotation() {
    let axis = Vec3::new(0.3, -1.0, 0.6);

    let mut a = Vec3::new(1.0, 0.0, 0.0);
    let mut b = Vec4::from3(a, 1.0);

    for &angle in TEST_ANGLES.iter() {
        a = Mat3::rotation(angle, axis) * a;
        b = Mat4::rotation(angle, axis) * b;
        test_equal_v3(a, b.xyz());

        // Rotations keep lengths
        assert!((a.len() - 1.0).abs() < 0.001);
    }

    // Rotating back and forth ends up where we started
    let mut c = a;
    for &angle in TEST_ANGLES.iter().rev() {
        c = Mat3::rotation(-angle, axis) * c;
    }
    test_equal_v3(Vec3::new(1.0, 0.0, 0.0), c);
}

#[test]
fn frame_rotation_matches_matrix() {
    let mut frame = Frame::new();
    let mut expected = frame.matrix(true);

    let axes = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
    ];

    for (i, &angle) in TEST_ANGLES.iter().enumerate() {
        let axis = axes[i % axes.len()];

        frame.rotate_world(angle, axis);
        expected = Mat4::rotation(angle, axis) * expected;

        test_equal_m4(expected, frame.matrix(true));
    }
}

#[test]
fn frame_local_rotations_match_world_rotations() {
    let mut a = Frame::new();
    let mut b = Frame::new();

    for &angle in TEST_ANGLES.iter() {
        let up = b.up();
        a.rotate_local_y(angle);
        b.rotate_world(angle, up);
        test_equal_v3(a.forward(), b.forward());

        let right = b.x_axis();
        a.rotate_local_x(angle * 0.5);
        b.rotate_world(angle * 0.5, right);
        test_equal_v3(a.forward(), b.forward());
        test_equal_v3(a.up(), b.up());

        a.rotate_local_z(angle);
        b.rotate_local(angle, Vec3::new(0.0, 0.0, 1.0));
        test_equal_v3(a.up(), b.up());

        a.normalize();
        b.normalize();
    }
}

#[test]
fn camera_undoes_actor_transform() {
    let mut frame = Frame::new();
    frame.set_origin(Vec3::new(3.0, -2.0, 10.0));

    // The camera looks down its negative z axis, so x and z end up flipped
    let flip = Mat4::with_values(
        -1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, -1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    for &angle in TEST_ANGLES.iter() {
        frame.rotate_local_y(angle);
        frame.rotate_local_x(angle * 0.25);
        frame.move_forward(1.0);

        test_equal_m4(flip, frame.camera_matrix(false) * frame.matrix(false));
    }
}
