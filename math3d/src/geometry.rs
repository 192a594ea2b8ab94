
//! Planes, normals and the projection used for flat shadows.

use crate::vec::{Vec3, Vec4};
use crate::mat::Mat4;

/// Finds the plane equation `(a, b, c, d)` through the three given points, such that
/// `a*x + b*y + c*z + d = 0` for every point on the plane. `(a, b, c)` is the unit normal of the
/// plane, facing towards the side from which the points appear clockwise.
///
/// Returns `None` if the points lie on one line, in which case they do not define a plane.
pub fn plane_equation(p1: Vec3<f32>, p2: Vec3<f32>, p3: Vec3<f32>) -> Option<Vec4<f32>> {
    let normal = Vec3::cross(p3 - p1, p2 - p1);
    if normal.len_sqr() == 0.0 {
        return None;
    }
    let normal = normal.normalize();
    let d = -Vec3::dot(normal, p3);

    Some(Vec4::from3(normal, d))
}

/// Signed distance from the given plane to the given point. Only meaningful when the normal
/// part of `plane` has unit length, which is the case for planes from `plane_equation`.
pub fn plane_distance(plane: Vec4<f32>, p: Vec3<f32>) -> f32 {
    Vec3::dot(plane.xyz(), p) + plane.w
}

/// Calculates the normal of a triangle. The result is not normalized. Counterclockwise
/// triangles get a normal facing towards the viewer.
pub fn find_normal(p1: Vec3<f32>, p2: Vec3<f32>, p3: Vec3<f32>) -> Vec3<f32> {
    Vec3::cross(p1 - p2, p2 - p3)
}

/// Creates a matrix which flattens geometry onto `plane` along the direction given by `light`.
/// Drawing a model with this matrix applied after its usual transform gives its shadow on the
/// plane. Only the `xyz` part of `light` is used.
pub fn planar_shadow_matrix(plane: Vec4<f32>, light: Vec4<f32>) -> Mat4<f32> {
    let Vec4 { x: a, y: b, z: c, w: d } = plane;
    let dx = -light.x;
    let dy = -light.y;
    let dz = -light.z;

    Mat4::from_array([
        b*dy + c*dz, -a*dy,        -a*dz,        0.0,
        -b*dx,       a*dx + c*dz,  -b*dz,        0.0,
        -c*dx,       -c*dy,        a*dx + b*dy,  0.0,
        -d*dx,       -d*dy,        -d*dz,        a*dx + b*dy + c*dz,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        let diff = (a - b).abs();
        assert!(diff < 0.001, "{} and {} differ by {}", a, b, diff);
    }

    #[test]
    fn ground_plane() {
        let plane = plane_equation(
            Vec3::new(0.0, -0.4, 0.0),
            Vec3::new(10.0, -0.4, 0.0),
            Vec3::new(5.0, -0.4, -5.0),
        ).unwrap();
        assert_eq!(Vec4::new(0.0, -1.0, 0.0, -0.4), plane);

        let plane = plane_equation(
            Vec3::new(0.0, -149.0, 0.0),
            Vec3::new(10.0, -149.0, 0.0),
            Vec3::new(5.0, -149.0, -5.0),
        ).unwrap();
        assert_close(-1.0, plane.y);
        assert_close(-149.0, plane.w);

        assert_close(0.0, plane_distance(plane, Vec3::new(30.0, -149.0, 7.0)));
        assert_close(-1.0, plane_distance(plane, Vec3::new(0.0, -148.0, 0.0)));
    }

    #[test]
    fn collinear_points() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(None, plane_equation(p, p * 2.0, p * 3.0));
        assert_eq!(None, plane_equation(p, p, p));
    }

    #[test]
    fn normal() {
        let n = find_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), n);

        // Not normalized
        let n = find_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        );
        assert_eq!(4.0, n.len());
    }

    #[test]
    fn shadow_lands_on_plane() {
        let plane = plane_equation(
            Vec3::new(-30.0, -149.0, -20.0),
            Vec3::new(-30.0, -149.0, 20.0),
            Vec3::new(40.0, -149.0, 20.0),
        ).unwrap();
        let light = Vec4::new(-75.0, 150.0, -50.0, 0.0);
        let shadow = planar_shadow_matrix(plane, light);

        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(15.0, 60.0, -30.0),
            Vec3::new(-40.0, -20.0, 10.0),
        ];
        for &p in points.iter() {
            let projected = shadow * Vec4::from3(p, 1.0);
            let flat = projected.xyz() / projected.w;

            assert_close(0.0, plane_distance(plane, flat));

            // The point moved along the light direction
            let moved = p - flat;
            let cross = Vec3::cross(moved, light.xyz());
            assert!(cross.len() < 0.01 * moved.len().max(1.0) * light.xyz().len());
        }
    }
}
