
//! Builders for the meshes used by the demos. Everything here produces plain vertex lists,
//! which are uploaded once into a static `VertexBuffer` and drawn as triangles.

use std::f32::consts::PI;

use math3d::{find_normal, Vec2, Vec3};
use rand::Rng;
use superbible_derive::Vertex;

use crate::color::Color;
use crate::points::PointVertex;
use crate::region::Region;

/// The vertex type used by `FixedPipeline`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Vertex)]
pub struct MeshVertex {
    pub position: Vec3<f32>,
    pub normal: Vec3<f32>,
    pub uv: Vec2<f32>,
    pub color: Color,
}

impl MeshVertex {
    /// A white vertex, so lighting and textures show their own colors
    pub fn new(position: Vec3<f32>, normal: Vec3<f32>, uv: Vec2<f32>) -> MeshVertex {
        MeshVertex { position, normal, uv, color: Color::WHITE }
    }
}

/// Converts a triangle strip to a list of separate triangles. Every second triangle is flipped,
/// so all triangles keep the winding of the first one.
pub fn strip_to_triangles(strip: &[MeshVertex]) -> Vec<MeshVertex> {
    if strip.len() < 3 {
        return Vec::new();
    }

    let mut triangles = Vec::with_capacity((strip.len() - 2) * 3);
    for i in 0..strip.len() - 2 {
        if i % 2 == 0 {
            triangles.extend_from_slice(&[strip[i], strip[i + 1], strip[i + 2]]);
        } else {
            triangles.extend_from_slice(&[strip[i + 1], strip[i], strip[i + 2]]);
        }
    }
    triangles
}

/// Sets the color of all given vertices
pub fn paint(vertices: &mut [MeshVertex], color: Color) {
    for vertex in vertices.iter_mut() {
        vertex.color = color;
    }
}

/// Two triangles covering the given corners, which should be in counterclockwise order when
/// seen from the side `normal` points to.
pub fn quad(positions: [Vec3<f32>; 4], uvs: [Vec2<f32>; 4], normal: Vec3<f32>) -> [MeshVertex; 6] {
    let v = |i: usize| MeshVertex::new(positions[i], normal, uvs[i]);
    [v(0), v(1), v(2), v(0), v(2), v(3)]
}

/// A torus lying in the xy-plane around the origin. `major` is the radius of the ring, `minor`
/// the radius of the tube. The tube is split into `num_major` segments around the ring, each
/// of which is split into `num_minor` quads around the tube.
pub fn torus(major: f32, minor: f32, num_major: usize, num_minor: usize) -> Vec<MeshVertex> {
    let major_step = 2.0 * PI / num_major as f32;
    let minor_step = 2.0 * PI / num_minor as f32;

    let mut result = Vec::with_capacity(num_major * num_minor * 6);
    let mut strip = Vec::with_capacity((num_minor + 1) * 2);

    for i in 0..num_major {
        let a0 = i as f32 * major_step;
        let a1 = a0 + major_step;
        let (y0, x0) = a0.sin_cos();
        let (y1, x1) = a1.sin_cos();

        strip.clear();
        for j in 0..=num_minor {
            let b = j as f32 * minor_step;
            let c = b.cos();
            let r = minor*c + major;
            let z = minor * b.sin();
            let v = j as f32 / num_minor as f32;

            strip.push(MeshVertex::new(
                Vec3::new(x0*r, y0*r, z),
                Vec3::new(x0*c, y0*c, z / minor).normalize(),
                Vec2::new(i as f32 / num_major as f32, v),
            ));
            strip.push(MeshVertex::new(
                Vec3::new(x1*r, y1*r, z),
                Vec3::new(x1*c, y1*c, z / minor).normalize(),
                Vec2::new((i + 1) as f32 / num_major as f32, v),
            ));
        }

        result.extend(strip_to_triangles(&strip));
    }

    result
}

/// A sphere around the origin, with its poles on the z-axis. Texture coordinates wrap once
/// around the sphere along `s`, and go from 1 at the top to 0 at the bottom along `t`.
pub fn sphere(radius: f32, slices: usize, stacks: usize) -> Vec<MeshVertex> {
    let drho = PI / stacks as f32;
    let dtheta = 2.0 * PI / slices as f32;
    let ds = 1.0 / slices as f32;
    let dt = 1.0 / stacks as f32;

    let mut result = Vec::with_capacity(slices * stacks * 6);
    let mut strip = Vec::with_capacity((slices + 1) * 2);

    let mut t = 1.0;
    for i in 0..stacks {
        let rho = i as f32 * drho;
        let (srho, crho) = rho.sin_cos();
        let (srhodrho, crhodrho) = (rho + drho).sin_cos();

        strip.clear();
        let mut s = 0.0;
        for j in 0..=slices {
            // The seam uses exactly the same positions as the start
            let theta = if j == slices { 0.0 } else { j as f32 * dtheta };
            let stheta = -theta.sin();
            let ctheta = theta.cos();

            let normal = Vec3::new(stheta*srho, ctheta*srho, crho);
            strip.push(MeshVertex::new(normal * radius, normal, Vec2::new(s, t)));

            let normal = Vec3::new(stheta*srhodrho, ctheta*srhodrho, crhodrho);
            strip.push(MeshVertex::new(normal * radius, normal, Vec2::new(s, t - dt)));

            s += ds;
        }

        result.extend(strip_to_triangles(&strip));
        t -= dt;
    }

    result
}

/// A cube from `-size` to `size` on every axis, where every corner is colored by its position:
/// `(-size, -size, -size)` is black, `(size, size, size)` white, and so on.
pub fn color_cube(size: f32) -> Vec<MeshVertex> {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    let z = Vec3::new(0.0, 0.0, 1.0);

    // (normal, u, v) with u × v = normal, so the faces wind counterclockwise from outside
    let faces = [
        (x, y, z),
        (-x, z, y),
        (y, z, x),
        (-y, x, z),
        (z, x, y),
        (-z, y, x),
    ];

    let mut result = Vec::with_capacity(36);
    for &(normal, u, v) in faces.iter() {
        let corner = |a: f32, b: f32| {
            let position = (normal + u*a + v*b) * size;
            let mut vertex = MeshVertex::new(position, normal, Vec2::new((a + 1.0) / 2.0, (b + 1.0) / 2.0));
            vertex.color = Color::rgb(
                (position.x / size + 1.0) / 2.0,
                (position.y / size + 1.0) / 2.0,
                (position.z / size + 1.0) / 2.0,
            );
            vertex
        };

        let quad = [corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0)];
        result.extend_from_slice(&[quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]]);
    }

    result
}

const JET_TRIANGLES: [[[f32; 3]; 3]; 17] = [
    // Nose
    [[0.0, 0.0, 60.0], [-15.0, 0.0, 30.0], [15.0, 0.0, 30.0]],
    [[15.0, 0.0, 30.0], [0.0, 15.0, 30.0], [0.0, 0.0, 60.0]],
    [[0.0, 0.0, 60.0], [0.0, 15.0, 30.0], [-15.0, 0.0, 30.0]],
    // Body
    [[15.0, 0.0, 30.0], [-15.0, 0.0, 30.0], [0.0, 0.0, -56.0]],
    [[-15.0, 0.0, 30.0], [0.0, 15.0, 30.0], [0.0, 0.0, -56.0]],
    [[0.0, 0.0, -56.0], [0.0, 15.0, 30.0], [15.0, 0.0, 30.0]],
    // Wings
    [[0.0, 2.0, 27.0], [-60.0, 2.0, -8.0], [60.0, 2.0, -8.0]],
    [[60.0, 2.0, -8.0], [0.0, 7.0, -8.0], [0.0, 2.0, 27.0]],
    [[60.0, 2.0, -8.0], [-60.0, 2.0, -8.0], [0.0, 7.0, -8.0]],
    [[0.0, 2.0, 27.0], [0.0, 7.0, -8.0], [-60.0, 2.0, -8.0]],
    // Tail
    [[-30.0, -0.5, -57.0], [30.0, -0.5, -57.0], [0.0, -0.5, -40.0]],
    [[0.0, -0.5, -40.0], [30.0, -0.5, -57.0], [0.0, 4.0, -57.0]],
    [[0.0, 4.0, -57.0], [-30.0, -0.5, -57.0], [0.0, -0.5, -40.0]],
    [[30.0, -0.5, -57.0], [-30.0, -0.5, -57.0], [0.0, 4.0, -57.0]],
    // Fin
    [[0.0, 0.5, -40.0], [3.0, 0.5, -57.0], [0.0, 25.0, -65.0]],
    [[0.0, 25.0, -65.0], [-3.0, 0.5, -57.0], [0.0, 0.5, -40.0]],
    [[3.0, 0.5, -57.0], [-3.0, 0.5, -57.0], [0.0, 25.0, -65.0]],
];

/// The jet from the lighting chapter: 17 flat shaded triangles, with the nose pointing down the
/// positive z-axis.
pub fn jet(color: Color) -> Vec<MeshVertex> {
    let mut result = Vec::with_capacity(JET_TRIANGLES.len() * 3);

    for triangle in JET_TRIANGLES.iter() {
        let [a, b, c] = [Vec3::from(triangle[0]), Vec3::from(triangle[1]), Vec3::from(triangle[2])];
        let normal = find_normal(a, b, c).normalize();

        for &position in [a, b, c].iter() {
            result.push(MeshVertex { position, normal, uv: Vec2::zero(), color });
        }
    }

    result
}

/// A flat, upward facing grid of `step` sized cells in the plane at height `y`, reaching
/// from `-extent` to `extent` along x and z. Texture coordinates advance by `tex_repeat` per
/// cell.
pub fn ground_grid(extent: i32, step: i32, y: f32, tex_repeat: f32) -> Vec<MeshVertex> {
    let up = Vec3::new(0.0, 1.0, 0.0);
    let step_by = step.max(1) as usize;

    let mut result = Vec::new();
    let mut strip = Vec::new();
    let mut s = 0.0;

    for x in (-extent..=extent).step_by(step_by) {
        strip.clear();
        let mut t = 0.0;

        let mut z = extent;
        while z > -extent {
            strip.push(MeshVertex::new(Vec3::new(x as f32, y, z as f32), up, Vec2::new(s, t)));
            strip.push(MeshVertex::new(Vec3::new((x + step) as f32, y, z as f32), up, Vec2::new(s + tex_repeat, t)));
            t += tex_repeat;
            z -= step_by as i32;
        }

        result.extend(strip_to_triangles(&strip));
        s += tex_repeat;
    }

    result
}

/// Half the width and height of the tunnel, and the length of a single segment
pub const TUNNEL_SIZE: f32 = 10.0;

/// The parts of a tunnel, which use different textures
#[derive(Debug, Clone, Default)]
pub struct Tunnel {
    pub floor: Vec<MeshVertex>,
    pub ceiling: Vec<MeshVertex>,
    pub walls: Vec<MeshVertex>,
}

/// A square tunnel along the z-axis. The first segment starts at `z = segments * TUNNEL_SIZE`
/// and the last one ends at `z = 0`. Every face has the full texture and faces inward.
pub fn tunnel(segments: usize) -> Tunnel {
    let h = TUNNEL_SIZE;
    let uvs = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)];
    let mut tunnel = Tunnel::default();

    for i in (1..=segments).rev() {
        let near = i as f32 * h;
        let far = near - h;

        tunnel.floor.extend_from_slice(&quad(
            [Vec3::new(-h, -h, near), Vec3::new(h, -h, near), Vec3::new(h, -h, far), Vec3::new(-h, -h, far)],
            uvs, Vec3::new(0.0, 1.0, 0.0),
        ));
        tunnel.ceiling.extend_from_slice(&quad(
            [Vec3::new(-h, h, far), Vec3::new(h, h, far), Vec3::new(h, h, near), Vec3::new(-h, h, near)],
            [uvs[3], uvs[2], uvs[1], uvs[0]], Vec3::new(0.0, -1.0, 0.0),
        ));
        tunnel.walls.extend_from_slice(&quad(
            [Vec3::new(-h, -h, near), Vec3::new(-h, -h, far), Vec3::new(-h, h, far), Vec3::new(-h, h, near)],
            uvs, Vec3::new(1.0, 0.0, 0.0),
        ));
        tunnel.walls.extend_from_slice(&quad(
            [Vec3::new(h, h, near), Vec3::new(h, h, far), Vec3::new(h, -h, far), Vec3::new(h, -h, near)],
            [uvs[3], uvs[2], uvs[1], uvs[0]], Vec3::new(-1.0, 0.0, 0.0),
        ));
    }

    tunnel
}

/// Like `quad`, but flips the corners when needed so the front face points along `normal`
fn facing_quad(positions: [Vec3<f32>; 4], normal: Vec3<f32>, color: Color) -> [MeshVertex; 6] {
    let [a, b, c, d] = positions;
    let face = Vec3::cross(b - a, c - a);
    let positions = if Vec3::dot(face, normal) < 0.0 { [a, d, c, b] } else { positions };

    let uvs = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)];
    let mut result = quad(positions, uvs, normal);
    paint(&mut result, color);
    result
}

/// A cone standing on the xy-plane with its tip at `z = height`, like `glutSolidCone`. The side
/// is split into `slices` around and `stacks` along the z-axis. The base is closed.
pub fn cone(base: f32, height: f32, slices: usize, stacks: usize) -> Vec<MeshVertex> {
    let slices = slices.max(3);
    let stacks = stacks.max(1);
    let step = 2.0 * PI / slices as f32;
    let slope = Vec2::new(height, base).normalize();

    let ring = |k: usize, angle: f32| {
        let t = k as f32 / stacks as f32;
        let (sin, cos) = angle.sin_cos();
        Vec3::new(cos * base * (1.0 - t), sin * base * (1.0 - t), height * t)
    };
    let side_normal = |angle: f32| {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(cos * slope.x, sin * slope.x, slope.y)
    };

    let mut result = Vec::with_capacity(slices * (stacks * 6 + 3));
    for i in 0..slices {
        let a0 = i as f32 * step;
        let a1 = a0 + step;

        for k in 0..stacks {
            let v = |k: usize, angle: f32| MeshVertex::new(ring(k, angle), side_normal(angle), Vec2::zero());
            let (p0, p1, p2, p3) = (v(k, a0), v(k, a1), v(k + 1, a1), v(k + 1, a0));
            result.extend_from_slice(&[p0, p1, p2, p0, p2, p3]);
        }

        let down = Vec3::new(0.0, 0.0, -1.0);
        result.extend_from_slice(&[
            MeshVertex::new(Vec3::zero(), down, Vec2::zero()),
            MeshVertex::new(ring(0, a1), down, Vec2::zero()),
            MeshVertex::new(ring(0, a0), down, Vec2::zero()),
        ]);
    }

    result
}

/// The textured pyramid from the texturing chapter: a square base of size 1 on the xz-plane and
/// its tip at `y = 0.8`. Every face shows the whole texture.
pub fn pyramid() -> Vec<MeshVertex> {
    let top = Vec3::new(0.0, 0.8, 0.0);
    let back_left = Vec3::new(-0.5, 0.0, -0.5);
    let back_right = Vec3::new(0.5, 0.0, -0.5);
    let front_right = Vec3::new(0.5, 0.0, 0.5);
    let front_left = Vec3::new(-0.5, 0.0, 0.5);

    let down = Vec3::new(0.0, -1.0, 0.0);
    let uv = Vec2::new;

    let mut result = vec![
        MeshVertex::new(back_right, down, uv(1.0, 1.0)),
        MeshVertex::new(front_left, down, uv(0.0, 0.0)),
        MeshVertex::new(back_left, down, uv(0.0, 1.0)),
        MeshVertex::new(back_right, down, uv(1.0, 1.0)),
        MeshVertex::new(front_right, down, uv(1.0, 0.0)),
        MeshVertex::new(front_left, down, uv(0.0, 0.0)),
    ];

    let sides = [
        (front_left, front_right),
        (back_left, front_left),
        (back_right, back_left),
        (front_right, back_right),
    ];
    for &(left, right) in sides.iter() {
        let normal = find_normal(top, left, right).normalize();
        result.push(MeshVertex::new(top, normal, uv(0.5, 1.0)));
        result.push(MeshVertex::new(left, normal, uv(0.0, 0.0)));
        result.push(MeshVertex::new(right, normal, uv(1.0, 0.0)));
    }

    result
}

/// A square tube along the z-axis, 100 units wide and 200 long, with a 70 unit hole. The outside
/// is red and the inside light gray. Shows the difference between orthographic and perspective
/// projection.
pub fn square_tube() -> Vec<MeshVertex> {
    let (outer, inner, front) = (50.0, 35.0, 100.0);
    let red = Color::rgb(1.0, 0.0, 0.0);
    let gray = Color::rgb(0.75, 0.75, 0.75);
    let p = Vec3::new;

    let mut result = Vec::with_capacity(16 * 6);

    // Frames around the hole at both ends
    for &z in [front, -front].iter() {
        let normal = p(0.0, 0.0, f32::signum(z));
        let panels = [
            (-outer, -outer, -inner, outer),
            (inner, -outer, outer, outer),
            (-inner, inner, inner, outer),
            (-inner, -outer, inner, -inner),
        ];
        for &(x0, y0, x1, y1) in panels.iter() {
            result.extend_from_slice(&facing_quad([p(x0, y0, z), p(x1, y0, z), p(x1, y1, z), p(x0, y1, z)], normal, red));
        }
    }

    // The outside faces away from the axis, the inside towards it
    for &(size, color, sign) in [(outer, red, 1.0), (inner, gray, -1.0)].iter() {
        let f = front;
        let faces = [
            ([p(-size, size, f), p(size, size, f), p(size, size, -f), p(-size, size, -f)], p(0.0, sign, 0.0)),
            ([p(-size, -size, f), p(size, -size, f), p(size, -size, -f), p(-size, -size, -f)], p(0.0, -sign, 0.0)),
            ([p(size, -size, f), p(size, size, f), p(size, size, -f), p(size, -size, -f)], p(sign, 0.0, 0.0)),
            ([p(-size, -size, f), p(-size, size, f), p(-size, size, -f), p(-size, -size, -f)], p(-sign, 0.0, 0.0)),
        ];
        for &(corners, normal) in faces.iter() {
            result.extend_from_slice(&facing_quad(corners, normal, color));
        }
    }

    result
}

/// A flat, upward facing checkerboard of `step` sized cells in the plane at height `y`,
/// reaching from `-extent` to `extent` along x and z. Cells alternate between the two colors.
pub fn checker_floor(extent: f32, step: f32, y: f32, colors: [Color; 2]) -> Vec<MeshVertex> {
    let step = step.max(0.001);
    let cells = (2.0 * extent / step).round().max(0.0) as usize;
    let up = Vec3::new(0.0, 1.0, 0.0);

    let mut result = Vec::with_capacity(cells * cells * 6);
    for i in 0..cells {
        for j in 0..cells {
            let x = -extent + i as f32 * step;
            let z = extent - j as f32 * step;
            let corners = [
                Vec3::new(x, y, z),
                Vec3::new(x + step, y, z),
                Vec3::new(x + step, y, z - step),
                Vec3::new(x, y, z - step),
            ];
            result.extend_from_slice(&facing_quad(corners, up, colors[(i + j) % 2]));
        }
    }

    result
}

/// The jet, with its nose green, its body and wings in two shades of gray, its tail yellow and
/// its fin red
pub fn colored_jet() -> Vec<MeshVertex> {
    let sections = [
        (0..3, Color::rgb(0.0, 1.0, 0.0)),
        (3..6, Color::from_u8(192, 192, 192, 255)),
        (6..10, Color::from_u8(64, 64, 64, 255)),
        (10..14, Color::rgb(1.0, 1.0, 0.0)),
        (14..17, Color::rgb(1.0, 0.0, 0.0)),
    ];

    let mut result = jet(Color::WHITE);
    for (triangles, color) in sections.iter() {
        paint(&mut result[triangles.start * 3 .. triangles.end * 3], *color);
    }
    result
}

/// A filled circle as a triangle fan: the center followed by `segments + 1` points on the rim,
/// the last of which closes the circle
pub fn circle_fan(center: Vec2<f32>, radius: f32, segments: usize) -> Vec<PointVertex> {
    let step = 2.0 * PI / segments.max(3) as f32;

    let mut result = Vec::with_capacity(segments + 2);
    result.push(PointVertex { position: center });
    for i in 0..=segments.max(3) {
        let (sin, cos) = (i as f32 * step).sin_cos();
        result.push(PointVertex { position: center + Vec2::new(cos, sin) * radius });
    }
    result
}

pub fn line_strip(points: &[(f32, f32)]) -> Vec<PointVertex> {
    points.iter().map(|&(x, y)| PointVertex::new(x, y)).collect()
}

/// `count` points at random positions inside `area`
pub fn scatter_points<R: Rng>(count: usize, area: Region, rng: &mut R) -> Vec<PointVertex> {
    (0..count)
        .map(|_| PointVertex { position: area.random_point(rng) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_close(a: f32, b: f32) {
        let diff = (a - b).abs();
        assert!(diff < 0.001, "{} and {} differ by {}", a, b, diff);
    }

    /// Checks that every triangle which is not degenerate winds counterclockwise when seen from
    /// the side its vertex normals point to.
    fn assert_front_faces_out(vertices: &[MeshVertex]) {
        for triangle in vertices.chunks(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]];
            let face = Vec3::cross(b.position - a.position, c.position - a.position);
            if face.len() < 1e-6 {
                continue;
            }
            assert!(Vec3::dot(face, a.normal + b.normal + c.normal) > 0.0, "Inverted triangle {:?}", triangle);
        }
    }

    #[test]
    fn strips() {
        let v = |x: f32| MeshVertex::new(Vec3::new(x, 0.0, 0.0), Vec3::zero(), Vec2::zero());
        let strip = [v(0.0), v(1.0), v(2.0), v(3.0)];

        let triangles = strip_to_triangles(&strip);
        let xs: Vec<f32> = triangles.iter().map(|v| v.position.x).collect();
        assert_eq!(vec![0.0, 1.0, 2.0, 2.0, 1.0, 3.0], xs);

        assert!(strip_to_triangles(&strip[..2]).is_empty());
    }

    #[test]
    fn torus_shape() {
        let (major, minor) = (0.35, 0.15);
        let vertices = torus(major, minor, 61, 37);
        assert_eq!(61 * 37 * 6, vertices.len());

        for vertex in vertices.iter() {
            assert_close(1.0, vertex.normal.len());

            // Every point lies on the surface of the tube
            let p = vertex.position;
            let ring_distance = Vec2::new(p.x, p.y).len() - major;
            assert_close(minor, Vec2::new(ring_distance, p.z).len());
        }

        assert_front_faces_out(&vertices);
    }

    #[test]
    fn sphere_shape() {
        let vertices = sphere(0.3, 21, 11);
        assert_eq!(21 * 11 * 6, vertices.len());

        for vertex in vertices.iter() {
            assert_close(1.0, vertex.normal.len());
            assert_close(0.3, vertex.position.len());
            assert!(vertex.uv.x >= 0.0 && vertex.uv.x <= 1.001);
            assert!(vertex.uv.y >= -0.001 && vertex.uv.y <= 1.0);
        }

        assert_front_faces_out(&vertices);
    }

    #[test]
    fn color_cube_corners() {
        let vertices = color_cube(50.0);
        assert_eq!(36, vertices.len());

        for vertex in vertices.iter() {
            let p = vertex.position;
            let expected = |c: f32| if c > 0.0 { 1.0 } else { 0.0 };
            assert_eq!(50.0, p.x.abs());
            assert_eq!(Color::rgb(expected(p.x), expected(p.y), expected(p.z)), vertex.color);
        }

        assert_front_faces_out(&vertices);
    }

    #[test]
    fn jet_shape() {
        let gray = Color::from_u8(128, 128, 128, 255);
        let vertices = jet(gray);
        assert_eq!(17 * 3, vertices.len());
        assert!(vertices.iter().all(|v| v.color == gray));

        // The bottoms of the nose, body and tail face down
        for &triangle in [0, 3, 10].iter() {
            let normal = vertices[triangle * 3].normal;
            assert_close(-1.0, normal.y);
        }

        for vertex in vertices.iter() {
            assert_close(1.0, vertex.normal.len());
        }
    }

    #[test]
    fn ground_faces_up() {
        let vertices = ground_grid(20, 1, -0.4, 1.0 / (20.0 * 0.075));

        // 41 strips of 39 quads each
        assert_eq!(41 * 39 * 6, vertices.len());
        assert!(vertices.iter().all(|v| v.position.y == -0.4));
        assert_front_faces_out(&vertices);
    }

    #[test]
    fn tunnel_faces_inward() {
        let tunnel = tunnel(6);
        assert_eq!(6 * 6, tunnel.floor.len());
        assert_eq!(6 * 6, tunnel.ceiling.len());
        assert_eq!(6 * 12, tunnel.walls.len());

        let max_z = tunnel.floor.iter().map(|v| v.position.z).fold(0.0, f32::max);
        assert_eq!(60.0, max_z);

        assert_front_faces_out(&tunnel.floor);
        assert_front_faces_out(&tunnel.ceiling);
        assert_front_faces_out(&tunnel.walls);
    }

    #[test]
    fn cone_shape() {
        let vertices = cone(4.0, 6.0, 15, 15);
        assert_eq!(15 * (15 * 6 + 3), vertices.len());

        for vertex in vertices.iter() {
            let p = vertex.position;
            assert!(p.z >= 0.0 && p.z <= 6.0);
            // Inside the slanted side
            assert!(Vec2::new(p.x, p.y).len() <= 4.0 * (1.0 - p.z / 6.0) + 0.001);
            assert_close(1.0, vertex.normal.len());
        }

        assert_front_faces_out(&vertices);
    }

    #[test]
    fn pyramid_shape() {
        let vertices = pyramid();
        assert_eq!(6 * 3, vertices.len());

        // Two triangles on the bottom, then the front face
        assert!(vertices[..6].iter().all(|v| v.position.y == 0.0));
        assert!(vertices[6].normal.z > 0.0 && vertices[6].normal.y > 0.0);
        assert_eq!(Vec2::new(0.5, 1.0), vertices[6].uv);

        assert_front_faces_out(&vertices);
    }

    #[test]
    fn square_tube_shape() {
        let vertices = square_tube();
        assert_eq!(16 * 6, vertices.len());

        let red = Color::rgb(1.0, 0.0, 0.0);
        for vertex in vertices.iter() {
            let p = vertex.position;
            assert!(p.x.abs() <= 50.0 && p.y.abs() <= 50.0 && p.z.abs() <= 100.0);
            if vertex.color != red {
                // Only the inside is gray
                assert_eq!(35.0, p.x.abs().max(p.y.abs()));
            }
        }

        assert_front_faces_out(&vertices);
    }

    #[test]
    fn checker_floor_alternates() {
        let colors = [Color::WHITE.with_alpha(0.5), Color::BLACK.with_alpha(0.5)];
        let vertices = checker_floor(20.0, 0.5, 0.0, colors);
        assert_eq!(80 * 80 * 6, vertices.len());

        assert_eq!(colors[0], vertices[0].color);
        assert_eq!(colors[1], vertices[6].color);
        // The first cell of the second row starts with the other color
        assert_eq!(colors[1], vertices[80 * 6].color);

        assert!(vertices.iter().all(|v| v.position.y == 0.0));
        assert_front_faces_out(&vertices);
    }

    #[test]
    fn colored_jet_sections() {
        let vertices = colored_jet();
        assert_eq!(17 * 3, vertices.len());

        assert_eq!(Color::rgb(0.0, 1.0, 0.0), vertices[0].color);
        assert_eq!(Color::from_u8(64, 64, 64, 255), vertices[6 * 3].color);
        assert_eq!(Color::rgb(1.0, 0.0, 0.0), vertices[16 * 3 + 2].color);
    }

    #[test]
    fn circle_fan_closes() {
        let center = Vec2::new(700.0, 500.0);
        let fan = circle_fan(center, 50.0, 36);
        assert_eq!(38, fan.len());

        assert_eq!(center, fan[0].position);
        for point in fan[1..].iter() {
            assert_close(50.0, (point.position - center).len());
        }
        assert_close(fan[1].position.x, fan[37].position.x);
        assert_close(fan[1].position.y, fan[37].position.y);
    }

    #[test]
    fn scattered_points_stay_in_area() {
        let area = Region::new(Vec2::new(0.0, 100.0), Vec2::new(800.0, 600.0));
        let mut rng = StdRng::seed_from_u64(7);

        let points = scatter_points(100, area, &mut rng);
        assert_eq!(100, points.len());
        assert!(points.iter().all(|p| area.contains(p.position)));

        let line = line_strip(&[(0.0, 25.0), (50.0, 100.0)]);
        assert_eq!(PointVertex::new(50.0, 100.0), line[1]);
    }
}
