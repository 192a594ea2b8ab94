
use std::ops::*;

use crate::traits::{Number, Float};
use crate::vec::{Vec3, Vec4};

/// A 3x3 matrix, layed out in column major format in memory. Element `(row, col)` is stored at
/// `a[col*3 + row]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Mat3<T: Copy> {
    pub a: [T; 9],
}

/// A 4x4 matrix, layed out in column major format in memory so it can be passed directly to
/// opengl. Element `(row, col)` is stored at `a[col*4 + row]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Mat4<T: Copy> {
    pub a: [T; 16],
}

// Things which look the same for both matrix sizes
macro_rules! impl_common {
    ($ty: ident, $n: expr) => {
        impl<T: Number> $ty<T> {
            /// Creates a new matrix with all values set to 0
            pub fn zero() -> $ty<T> {
                $ty { a: [T::ZERO; $n*$n] }
            }

            /// Creates a new identity matrix
            pub fn identity() -> $ty<T> {
                let mut result = $ty::zero();
                for i in 0..$n {
                    result.a[i*$n + i] = T::ONE;
                }
                result
            }

            /// Creates a matrix from a flat column major array
            pub fn from_array(a: [T; $n*$n]) -> $ty<T> {
                $ty { a }
            }

            #[inline(always)]
            pub fn get(&self, row: usize, col: usize) -> T {
                self.a[col*$n + row]
            }

            #[inline(always)]
            pub fn set(&mut self, row: usize, col: usize, value: T) {
                self.a[col*$n + row] = value;
            }

            /// Transposes this matrix, mirroring all its values along the diagonal
            pub fn transpose(self) -> $ty<T> {
                let mut result = self;
                for row in 0..$n {
                    for col in 0..$n {
                        result.set(row, col, self.get(col, row));
                    }
                }
                result
            }

            /// Pointer to the first element, for passing the matrix to opengl
            pub fn as_ptr(&self) -> *const T {
                self.a.as_ptr()
            }
        }

        impl<T: Number> Mul for $ty<T> {
            type Output = Self;

            fn mul(self, other: Self) -> Self {
                let mut result = $ty::zero();
                for row in 0..$n {
                    for col in 0..$n {
                        let mut sum = T::ZERO;
                        for i in 0..$n {
                            sum += self.get(row, i) * other.get(i, col);
                        }
                        result.set(row, col, sum);
                    }
                }
                result
            }
        }

        impl<T: Number> MulAssign for $ty<T> {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }

        impl<T: Number> Mul<T> for $ty<T> {
            type Output = Self;
            fn mul(mut self, scalar: T) -> Self {
                self *= scalar;
                self
            }
        }

        impl<T: Number> MulAssign<T> for $ty<T> {
            fn mul_assign(&mut self, scalar: T) {
                for value in self.a.iter_mut() {
                    *value *= scalar;
                }
            }
        }

        impl<T: Number> Add for $ty<T> {
            type Output = Self;
            fn add(mut self, other: Self) -> Self {
                self += other;
                self
            }
        }

        impl<T: Number> AddAssign for $ty<T> {
            fn add_assign(&mut self, other: Self) {
                for (value, other) in self.a.iter_mut().zip(other.a.iter()) {
                    *value += *other;
                }
            }
        }

        impl<T: Number> Sub for $ty<T> {
            type Output = Self;
            fn sub(mut self, other: Self) -> Self {
                self -= other;
                self
            }
        }

        impl<T: Number> SubAssign for $ty<T> {
            fn sub_assign(&mut self, other: Self) {
                for (value, other) in self.a.iter_mut().zip(other.a.iter()) {
                    *value -= *other;
                }
            }
        }

        impl<T: Number> Default for $ty<T> {
            fn default() -> $ty<T> { $ty::identity() }
        }
    };
}

impl_common!(Mat3, 3);
impl_common!(Mat4, 4);

impl<T: Number> Mat3<T> {
    /// Creates a new matrix with the given values. The values are specified row by row.
    pub fn with_values(a11: T, a12: T, a13: T,
                       a21: T, a22: T, a23: T,
                       a31: T, a32: T, a33: T)
                       -> Mat3<T>
    {
        Mat3 { a: [
            a11, a21, a31,
            a12, a22, a32,
            a13, a23, a33,
        ] }
    }

    pub fn column(&self, i: usize) -> Vec3<T> {
        Vec3::new(self.a[i*3], self.a[i*3 + 1], self.a[i*3 + 2])
    }

    pub fn set_column(&mut self, i: usize, v: Vec3<T>) {
        self.a[i*3]     = v.x;
        self.a[i*3 + 1] = v.y;
        self.a[i*3 + 2] = v.z;
    }

    pub fn determinant(&self) -> T {
        let m = |row, col| self.get(row, col);
        m(0, 0)*(m(1, 1)*m(2, 2) - m(1, 2)*m(2, 1))
        - m(0, 1)*(m(1, 0)*m(2, 2) - m(1, 2)*m(2, 0))
        + m(0, 2)*(m(1, 0)*m(2, 1) - m(1, 1)*m(2, 0))
    }
}

impl<T: Float> Mat3<T> {
    /// Creates a matrix which rotates `angle` radians counterclockwise around the given axis.
    /// The axis is normalized first. A zero length axis gives the identity matrix.
    pub fn rotation(angle: T, axis: Vec3<T>) -> Mat3<T> {
        let len = axis.len();
        if len == T::ZERO {
            return Mat3::identity();
        }
        let Vec3 { x, y, z } = axis / len;

        let (s, c) = angle.sin_cos();
        let t = T::ONE - c;

        Mat3::with_values(
            x*x*t + c,   x*y*t - z*s, x*z*t + y*s,
            y*x*t + z*s, y*y*t + c,   y*z*t - x*s,
            x*z*t - y*s, y*z*t + x*s, z*z*t + c,
        )
    }
}

impl<T: Number> From<Mat4<T>> for Mat3<T> {
    /// Takes the upper left 3x3 part of the given matrix
    fn from(m: Mat4<T>) -> Mat3<T> {
        let mut result = Mat3::zero();
        for row in 0..3 {
            for col in 0..3 {
                result.set(row, col, m.get(row, col));
            }
        }
        result
    }
}

impl<T: Number> From<Mat3<T>> for Mat4<T> {
    fn from(m: Mat3<T>) -> Mat4<T> {
        let mut result = Mat4::identity();
        for row in 0..3 {
            for col in 0..3 {
                result.set(row, col, m.get(row, col));
            }
        }
        result
    }
}

impl<T: Number> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;
    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        let m = |row, col| self.get(row, col);
        Vec3 {
            x: m(0, 0)*v.x + m(0, 1)*v.y + m(0, 2)*v.z,
            y: m(1, 0)*v.x + m(1, 1)*v.y + m(1, 2)*v.z,
            z: m(2, 0)*v.x + m(2, 1)*v.y + m(2, 2)*v.z,
        }
    }
}

impl<T: Number> Mat4<T> {
    /// Creates a new matrix with the given values. The values are specified row by row, so the
    /// source code reads like the matrix would on paper.
    pub fn with_values(a11: T, a12: T, a13: T, a14: T,
                       a21: T, a22: T, a23: T, a24: T,
                       a31: T, a32: T, a33: T, a34: T,
                       a41: T, a42: T, a43: T, a44: T)
                       -> Mat4<T>
    {
        Mat4 { a: [
            a11, a21, a31, a41,
            a12, a22, a32, a42,
            a13, a23, a33, a43,
            a14, a24, a34, a44,
        ] }
    }

    pub fn column(&self, i: usize) -> Vec4<T> {
        Vec4::new(self.a[i*4], self.a[i*4 + 1], self.a[i*4 + 2], self.a[i*4 + 3])
    }

    pub fn set_column(&mut self, i: usize, v: Vec4<T>) {
        self.a[i*4]     = v.x;
        self.a[i*4 + 1] = v.y;
        self.a[i*4 + 2] = v.z;
        self.a[i*4 + 3] = v.w;
    }

    /// Calculates the determinant of this matrix by expanding along pairs of 2x2 sub
    /// determinants.
    pub fn determinant(&self) -> T {
        let (s, c) = self.sub_determinants();
        s[0]*c[5] - s[1]*c[4] + s[2]*c[3] + s[3]*c[2] - s[4]*c[1] + s[5]*c[0]
    }

    // 2x2 determinants of the upper two and lower two rows
    fn sub_determinants(&self) -> ([T; 6], [T; 6]) {
        let m = |row, col| self.get(row, col);
        let s = [
            m(0, 0)*m(1, 1) - m(1, 0)*m(0, 1),
            m(0, 0)*m(1, 2) - m(1, 0)*m(0, 2),
            m(0, 0)*m(1, 3) - m(1, 0)*m(0, 3),
            m(0, 1)*m(1, 2) - m(1, 1)*m(0, 2),
            m(0, 1)*m(1, 3) - m(1, 1)*m(0, 3),
            m(0, 2)*m(1, 3) - m(1, 2)*m(0, 3),
        ];
        let c = [
            m(2, 0)*m(3, 1) - m(3, 0)*m(2, 1),
            m(2, 0)*m(3, 2) - m(3, 0)*m(2, 2),
            m(2, 0)*m(3, 3) - m(3, 0)*m(2, 3),
            m(2, 1)*m(3, 2) - m(3, 1)*m(2, 2),
            m(2, 1)*m(3, 3) - m(3, 1)*m(2, 3),
            m(2, 2)*m(3, 3) - m(3, 2)*m(2, 3),
        ];
        (s, c)
    }

    /// Creates a translation matrix
    pub fn translation(translation: Vec3<T>) -> Mat4<T> {
        let mut result = Mat4::identity();
        result.set_column(3, Vec4::from3(translation, T::ONE));
        result
    }

    /// Creates a matrix which scales along each axis by the given factors
    pub fn scaling(scale: Vec3<T>) -> Mat4<T> {
        let mut result = Mat4::identity();
        result.set(0, 0, scale.x);
        result.set(1, 1, scale.y);
        result.set(2, 2, scale.z);
        result
    }

    /// Applies this matrix to the given point, including translation
    pub fn transform_point(&self, v: Vec3<T>) -> Vec3<T> {
        (*self * Vec4::from3(v, T::ONE)).xyz()
    }

    /// Applies this matrix to the given direction. Translation is ignored.
    pub fn transform_direction(&self, v: Vec3<T>) -> Vec3<T> {
        (*self * Vec4::from3(v, T::ZERO)).xyz()
    }
}

impl<T: Float> Mat4<T> {
    /// Inverses this matrix, such that this matrix multiplied by its inverse is the identity
    /// matrix. Returns `None` if the determinant of this matrix is 0, in which case the inverse
    /// is not defined.
    ///
    /// Note that due to floating point imprecissions, `A⁻¹A = I` will not usually be exactly
    /// true. However, the difference is usually so small that it is negligible.
    pub fn inverse(&self) -> Option<Mat4<T>> {
        let (s, c) = self.sub_determinants();
        let det = s[0]*c[5] - s[1]*c[4] + s[2]*c[3] + s[3]*c[2] - s[4]*c[1] + s[5]*c[0];
        if det == T::ZERO {
            return None;
        }

        let m = |row, col| self.get(row, col);
        let result = Mat4::with_values(
             m(1, 1)*c[5] - m(1, 2)*c[4] + m(1, 3)*c[3],
            -m(0, 1)*c[5] + m(0, 2)*c[4] - m(0, 3)*c[3],
             m(3, 1)*s[5] - m(3, 2)*s[4] + m(3, 3)*s[3],
            -m(2, 1)*s[5] + m(2, 2)*s[4] - m(2, 3)*s[3],

            -m(1, 0)*c[5] + m(1, 2)*c[2] - m(1, 3)*c[1],
             m(0, 0)*c[5] - m(0, 2)*c[2] + m(0, 3)*c[1],
            -m(3, 0)*s[5] + m(3, 2)*s[2] - m(3, 3)*s[1],
             m(2, 0)*s[5] - m(2, 2)*s[2] + m(2, 3)*s[1],

             m(1, 0)*c[4] - m(1, 1)*c[2] + m(1, 3)*c[0],
            -m(0, 0)*c[4] + m(0, 1)*c[2] - m(0, 3)*c[0],
             m(3, 0)*s[4] - m(3, 1)*s[2] + m(3, 3)*s[0],
            -m(2, 0)*s[4] + m(2, 1)*s[2] - m(2, 3)*s[0],

            -m(1, 0)*c[3] + m(1, 1)*c[1] - m(1, 2)*c[0],
             m(0, 0)*c[3] - m(0, 1)*c[1] + m(0, 2)*c[0],
            -m(3, 0)*s[3] + m(3, 1)*s[1] - m(3, 2)*s[0],
             m(2, 0)*s[3] - m(2, 1)*s[1] + m(2, 2)*s[0],
        );
        Some(result * (T::ONE / det))
    }

    /// Creates a matrix which rotates `angle` radians counterclockwise around the given axis.
    /// A zero length axis gives the identity matrix.
    pub fn rotation(angle: T, axis: Vec3<T>) -> Mat4<T> {
        Mat4::from(Mat3::rotation(angle, axis))
    }

    pub fn rotation_x(angle: T) -> Mat4<T> {
        let (s, c) = angle.sin_cos();
        let mut result = Mat4::identity();
        result.set(1, 1, c); result.set(1, 2, -s);
        result.set(2, 1, s); result.set(2, 2, c);
        result
    }

    pub fn rotation_y(angle: T) -> Mat4<T> {
        let (s, c) = angle.sin_cos();
        let mut result = Mat4::identity();
        result.set(0, 0, c);  result.set(0, 2, s);
        result.set(2, 0, -s); result.set(2, 2, c);
        result
    }

    pub fn rotation_z(angle: T) -> Mat4<T> {
        let (s, c) = angle.sin_cos();
        let mut result = Mat4::identity();
        result.set(0, 0, c); result.set(0, 1, -s);
        result.set(1, 0, s); result.set(1, 1, c);
        result
    }

    /// Creates a new orthographic projection matrix, mapping the given box to the unit cube.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Mat4<T> {
        let two = T::ONE + T::ONE;
        let zero = T::ZERO;

        Mat4::with_values(
            two / (right-left), zero, zero, -(right+left) / (right-left),
            zero, two / (top-bottom), zero, -(top+bottom) / (top-bottom),
            zero, zero, -two / (far-near),  -(far+near) / (far-near),
            zero, zero, zero, T::ONE,
        )
    }

    /// Creates a perspective projection matrix. `fov` is the vertical field of view, in degrees.
    pub fn perspective(fov: T, aspect: T, near: T, far: T) -> Mat4<T> {
        let two = T::ONE + T::ONE;
        let zero = T::ZERO;
        let f = T::ONE / (fov.to_radians() / two).tan();

        Mat4::with_values(
            f / aspect, zero, zero, zero,
            zero, f, zero, zero,
            zero, zero, (far+near) / (near-far), (two*far*near) / (near-far),
            zero, zero, -T::ONE, zero,
        )
    }
}

impl<T: Number> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;
    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        let m = |row, col| self.get(row, col);
        Vec4 {
            x: m(0, 0)*v.x + m(0, 1)*v.y + m(0, 2)*v.z + m(0, 3)*v.w,
            y: m(1, 0)*v.x + m(1, 1)*v.y + m(1, 2)*v.z + m(1, 3)*v.w,
            z: m(2, 0)*v.x + m(2, 1)*v.y + m(2, 2)*v.z + m(2, 3)*v.w,
            w: m(3, 0)*v.x + m(3, 1)*v.y + m(3, 2)*v.z + m(3, 3)*v.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Mat4<f32>, b: Mat4<f32>) {
        for i in 0..16 {
            let diff = (a.a[i] - b.a[i]).abs();
            assert!(diff < 0.001, "{:?} and {:?} differ at index {}", a, b, i);
        }
    }

    fn mat_a() -> Mat4<f32> {
        Mat4::with_values(1.0, 7.0, 4.0, 3.0,
                          5.0, 6.0, 7.0, 8.0,
                          9.0, 2.0, 3.0, 1.0,
                          6.0, 6.0, 2.0, 7.0)
    }
    fn mat_b() -> Mat4<f32> {
        Mat4::with_values(7.0, 8.0, 2.0, 9.0,
                          1.0, 3.0, 5.0, 2.0,
                          3.0, 6.0, 3.0, 7.0,
                          2.0, 7.0, 3.0, 8.0)
    }

    #[test]
    fn column_major_layout() {
        let a = mat_a();
        assert_eq!(7.0, a.get(0, 1));
        assert_eq!(7.0, a.a[4]);
        assert_eq!(5.0, a.a[1]);
        assert_eq!(Vec4::new(3.0, 8.0, 1.0, 7.0), a.column(3));

        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!([1.0, 2.0, 3.0], [t.a[12], t.a[13], t.a[14]]);
    }

    #[test]
    fn identity() {
        let a = mat_a();
        let b = mat_b();
        let identity = Mat4::identity();

        assert_eq!(a, a * identity);
        assert_eq!(a, identity * a);
        assert_eq!(b, identity * b);
        assert_eq!(Mat4::zero(), a * Mat4::zero());
    }

    #[test]
    fn mul() {
        let a = mat_a();
        let b = mat_b();
        let ab = Mat4::with_values(32.0, 74.0, 58.0, 75.0,
                                   78.0, 156.0, 85.0, 170.0,
                                   76.0, 103.0, 40.0, 114.0,
                                   68.0, 127.0, 69.0, 136.0);
        assert_eq!(ab, a * b);

        let mut c = a;
        c *= b;
        assert_eq!(ab, c);

        let ba = Mat4::with_values(119.0, 155.0, 108.0, 150.0,
                                   73.0, 47.0, 44.0, 46.0,
                                   102.0, 105.0, 77.0, 109.0,
                                   112.0, 110.0, 82.0, 121.0);
        assert_eq!(ba, b * a);
    }

    #[test]
    fn add_sub_scale() {
        let a = mat_a();
        let b = mat_b();
        let sum = Mat4::with_values(8.0, 15.0, 6.0, 12.0,
                                    6.0, 9.0, 12.0, 10.0,
                                    12.0, 8.0, 6.0, 8.0,
                                    8.0, 13.0, 5.0, 15.0);
        assert_eq!(sum, a + b);
        assert_eq!(a, sum - b);
        assert_eq!(a + a, a * 2.0);
    }

    #[test]
    fn transpose() {
        let expected = Mat4::with_values(1.0, 5.0, 9.0, 6.0,
                                         7.0, 6.0, 2.0, 6.0,
                                         4.0, 7.0, 3.0, 2.0,
                                         3.0, 8.0, 1.0, 7.0);
        assert_eq!(expected, mat_a().transpose());
    }

    #[test]
    fn determinant() {
        assert_eq!(1538.0, mat_a().determinant());
        assert_eq!(61.0, mat_b().determinant());
        assert_eq!(1, Mat4::<i32>::identity().determinant());
    }

    #[test]
    fn inverse() {
        let identity = Mat4::<f32>::identity();
        assert_eq!(Some(identity), identity.inverse());

        for m in [mat_a(), mat_b()].iter() {
            let inverse = m.inverse().unwrap();
            assert_close(identity, *m * inverse);
            assert_close(identity, inverse * *m);
        }

        assert_eq!(None, Mat4::<f32>::zero().inverse());
    }

    #[test]
    fn rotation() {
        let quarter = ::std::f32::consts::FRAC_PI_2;

        assert_close(Mat4::rotation_x(quarter), Mat4::rotation(quarter, Vec3::new(1.0, 0.0, 0.0)));
        assert_close(Mat4::rotation_y(quarter), Mat4::rotation(quarter, Vec3::new(0.0, 2.0, 0.0)));
        assert_close(Mat4::rotation_z(quarter), Mat4::rotation(quarter, Vec3::new(0.0, 0.0, 1.0)));

        // Counterclockwise around z takes x to y
        let v = Mat4::rotation_z(quarter).transform_direction(Vec3::new(1.0, 0.0, 0.0));
        assert!((v - Vec3::new(0.0, 1.0, 0.0)).len() < 0.001);

        assert_eq!(Mat4::identity(), Mat4::rotation(1.0, Vec3::<f32>::zero()));
        assert_eq!(Mat3::identity(), Mat3::rotation(1.0, Vec3::<f32>::zero()));
    }

    #[test]
    fn transform() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::scaling(Vec3::new(2.0, 2.0, 2.0));

        assert_eq!(Vec3::new(3.0, 4.0, 5.0), m.transform_point(Vec3::new(1.0, 1.0, 1.0)));
        assert_eq!(Vec3::new(2.0, 2.0, 2.0), m.transform_direction(Vec3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn projections() {
        let ortho = Mat4::ortho(-100.0, 100.0, -50.0, 50.0, -200.0, 200.0);
        let corner = ortho * Vec4::new(100.0, 50.0, -200.0, 1.0);
        assert!((corner - Vec4::new(1.0, 1.0, 1.0, 1.0)).len() < 0.001);

        let perspective: Mat4<f32> = Mat4::perspective(90.0, 1.0, 1.0, 100.0);
        let near = perspective * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = perspective * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 0.001);
        assert!((far.z / far.w - 1.0).abs() < 0.001);
        assert!((perspective.get(0, 0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn mat3() {
        let m = Mat3::from(mat_a());
        assert_eq!(Vec3::new(7.0, 6.0, 2.0), m.column(1));

        let mut n = m;
        n.set_column(1, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), n.column(1));
        assert_eq!(Vec3::new(1.0, 0.0, 0.0), Mat3::<f32>::identity() * Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m, m.transpose().transpose());
    }
}
