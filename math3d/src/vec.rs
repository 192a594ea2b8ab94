
use std::fmt;
use std::ops::*;

use crate::traits::{Number, Signed, Float};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[repr(C)]
pub struct Vec2<T: Copy> {
    pub x: T,
    pub y: T
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[repr(C)]
pub struct Vec3<T: Copy> {
    pub x: T,
    pub y: T,
    pub z: T
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[repr(C)]
pub struct Vec4<T: Copy> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T
}

// General functions
impl<T: Number> Vec2<T> {
    pub const fn new(x: T, y: T) -> Vec2<T> { Vec2 { x, y } }
    /// Creates a new vector with all components set to 0
    pub fn zero() -> Vec2<T> { Vec2 { x: T::ZERO, y: T::ZERO } }

    /// Calculates the length of this vector, raised to the power of two.
    /// Note that this is cheaper than computing the actual length, as it
    /// does not require a `sqrt()`
    pub fn len_sqr(&self) -> T {
        self.x*self.x + self.y*self.y
    }

    pub fn dot(a: Vec2<T>, b: Vec2<T>) -> T {
        a.x*b.x + a.y*b.y
    }

    /// Calculates the 2D cross product of the given vectors. This is equal
    /// the `z` component of the 3D cross product of two 3D vectors with the
    /// same `x` and `y` components, and with `z = 0`.
    pub fn cross(a: Vec2<T>, b: Vec2<T>) -> T {
        a.x*b.y - a.y*b.x
    }
}

impl<T: Number> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Vec3<T> { Vec3 { x, y, z } }
    /// Creates a new vector with all components set to 0
    pub fn zero() -> Vec3<T> { Vec3 { x: T::ZERO, y: T::ZERO, z: T::ZERO } }

    /// Calculates the length of this vector, raised to the power of two.
    pub fn len_sqr(&self) -> T {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(a: Vec3<T>, b: Vec3<T>) -> T {
        a.x*b.x + a.y*b.y + a.z*b.z
    }

    /// Calculates the cross product `a × b`. The result is perpendicular to both inputs, and
    /// follows the right hand rule.
    ///
    /// # Example
    /// ```
    /// use math3d::Vec3;
    /// let x = Vec3::new(1, 0, 0);
    /// let y = Vec3::new(0, 1, 0);
    /// assert_eq!(Vec3::new(0, 0, 1), Vec3::cross(x, y));
    /// ```
    pub fn cross(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: a.y*b.z - b.y*a.z,
            y: b.x*a.z - a.x*b.z,
            z: a.x*b.y - b.x*a.y,
        }
    }

    /// Multiplies each component of `a` with the same component of `b`
    pub fn scale_components(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
        Vec3 { x: a.x*b.x, y: a.y*b.y, z: a.z*b.z }
    }
}

impl<T: Number> Vec4<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Vec4<T> { Vec4 { x, y, z, w } }
    /// Creates a new vector with all components set to 0
    pub fn zero() -> Vec4<T> { Vec4 { x: T::ZERO, y: T::ZERO, z: T::ZERO, w: T::ZERO } }

    /// Calculates the length of this vector, raised to the power of two.
    pub fn len_sqr(&self) -> T {
        self.x*self.x + self.y*self.y + self.z*self.z + self.w*self.w
    }

    pub fn dot(a: Vec4<T>, b: Vec4<T>) -> T {
        a.x*b.x + a.y*b.y + a.z*b.z + a.w*b.w
    }
}

impl<T: Signed> Vec3<T> {
    /// Makes all components positive
    pub fn abs(self) -> Self {
        Vec3 { x: self.x.abs(), y: self.y.abs(), z: self.z.abs() }
    }
}

impl<T: Float> Vec2<T> {
    /// Calculates the length of this vector
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Normalizes this vector, returning a new vector with a length of 1. A vector with a
    /// length of 0 stays unchanged.
    pub fn normalize(self) -> Self {
        let len = self.len();
        if len == T::ZERO {
            return self;
        }
        self / len
    }
}

impl<T: Float> Vec3<T> {
    /// Calculates the length of this vector
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Normalizes this vector, returning a new vector with a length of 1. A vector with a
    /// length of 0 stays unchanged, rather than turning into a vector of NaNs.
    ///
    /// # Example
    /// ```
    /// use math3d::Vec3;
    /// let a = Vec3::new(0.0, 3.0, 4.0);
    /// assert_eq!(Vec3::new(0.0, 0.6, 0.8), a.normalize());
    /// assert_eq!(Vec3::zero(), Vec3::<f32>::zero().normalize());
    /// ```
    pub fn normalize(self) -> Self {
        let len = self.len();
        if len == T::ZERO {
            return self;
        }
        self / len
    }

    /// The distance between the two given points
    pub fn distance(a: Vec3<T>, b: Vec3<T>) -> T {
        (a - b).len()
    }

    /// The angle, in radians, between two unit vectors. The dot product is clamped before taking
    /// the arc cosine, so nearly parallel vectors give 0 rather than NaN.
    pub fn angle_between(a: Vec3<T>, b: Vec3<T>) -> T {
        let dot = Vec3::dot(a, b);
        dot.max(-T::ONE).min(T::ONE).acos()
    }
}

impl<T: Float> Vec4<T> {
    /// Calculates the length of this vector
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }
}

// Swizzling
impl<T: Number> Vec3<T> {
    /// Equal to `Vec3::new(vec.x, vec.y, z)`
    pub fn from2(vec: Vec2<T>, z: T) -> Vec3<T> { Vec3 { x: vec.x, y: vec.y, z } }
    /// Equal to `Vec2::new(vec.x, vec.y)`.
    pub fn xy(self) -> Vec2<T> { Vec2 { x: self.x, y: self.y } }
    /// Equal to `Vec2::new(vec.x, vec.z)`.
    pub fn xz(self) -> Vec2<T> { Vec2 { x: self.x, y: self.z } }
}
impl<T: Number> Vec4<T> {
    /// Equal to `Vec4::new(vec.x, vec.y, vec.z, w)`
    pub fn from3(vec: Vec3<T>, w: T) -> Vec4<T> { Vec4 { x: vec.x, y: vec.y, z: vec.z, w } }
    /// Equal to `Vec3::new(vec.x, vec.y, vec.z)`
    pub fn xyz(self) -> Vec3<T> { Vec3 { x: self.x, y: self.y, z: self.z } }
    /// Equal to `Vec2::new(vec.x, vec.y)`.
    pub fn xy(self) -> Vec2<T> { Vec2 { x: self.x, y: self.y } }
}

impl<T: Copy> From<[T; 3]> for Vec3<T> {
    fn from(a: [T; 3]) -> Vec3<T> { Vec3 { x: a[0], y: a[1], z: a[2] } }
}
impl<T: Copy> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> [T; 3] { [v.x, v.y, v.z] }
}
impl<T: Copy> From<[T; 4]> for Vec4<T> {
    fn from(a: [T; 4]) -> Vec4<T> { Vec4 { x: a[0], y: a[1], z: a[2], w: a[3] } }
}

// Addition, subtraction, scaling and negation. All of these are component wise, so we
// generate them for every vector type from the list of its fields.
macro_rules! impl_ops {
    ($ty: ident, [$($field: ident),*]) => {
        impl<T: Number> Add for $ty<T> {
            type Output = Self;
            fn add(self, other: Self) -> Self { $ty { $($field: self.$field + other.$field),* } }
        }
        impl<T: Number> Sub for $ty<T> {
            type Output = Self;
            fn sub(self, other: Self) -> Self { $ty { $($field: self.$field - other.$field),* } }
        }
        impl<T: Number> AddAssign for $ty<T> {
            fn add_assign(&mut self, other: Self) { $(self.$field += other.$field;)* }
        }
        impl<T: Number> SubAssign for $ty<T> {
            fn sub_assign(&mut self, other: Self) { $(self.$field -= other.$field;)* }
        }
        impl<T: Number> Mul<T> for $ty<T> {
            type Output = Self;
            fn mul(self, scalar: T) -> Self { $ty { $($field: self.$field * scalar),* } }
        }
        impl<T: Number> MulAssign<T> for $ty<T> {
            fn mul_assign(&mut self, scalar: T) { $(self.$field *= scalar;)* }
        }
        impl<T: Number> Div<T> for $ty<T> {
            type Output = Self;
            fn div(self, scalar: T) -> Self { $ty { $($field: self.$field / scalar),* } }
        }
        impl<T: Number> DivAssign<T> for $ty<T> {
            fn div_assign(&mut self, scalar: T) { $(self.$field /= scalar;)* }
        }
        impl<T: Signed> Neg for $ty<T> {
            type Output = Self;
            fn neg(self) -> Self { $ty { $($field: -self.$field),* } }
        }
    };
}

impl_ops!(Vec2, [x, y]);
impl_ops!(Vec3, [x, y, z]);
impl_ops!(Vec4, [x, y, z, w]);

// Printing
impl<T: fmt::Display + Copy> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl<T: fmt::Display + Copy> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
impl<T: fmt::Display + Copy> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition() {
        let a = Vec3::new(1, 2, 3);
        let b = Vec3::new(4, -3, 0);

        assert_eq!(a, a + Vec3::zero());
        assert_eq!(Vec3::new(5, -1, 3), a + b);

        let mut c = a;
        c += Vec3::new(1, 1, 1);
        assert_eq!(Vec3::new(2, 3, 4), c);
    }

    #[test]
    fn subtraction() {
        let a = Vec2::new(1, 2);
        let b = Vec2::new(4, -3);

        assert_eq!(Vec2::new(-3, 5), a - b);

        let mut c = a;
        c -= c;
        assert_eq!(Vec2::new(0, 0), c);
    }

    #[test]
    fn len() {
        assert_eq!(0.0, Vec3::<f32>::zero().len());
        assert_eq!(25, Vec3::new(0, 3, 4).len_sqr());
        assert_eq!(5.0, Vec3::new(0.0, -3.0, 4.0).len());
        assert_eq!(13.0, Vec3::distance(Vec3::new(1.0, 1.0, 1.0), Vec3::new(4.0, 5.0, 13.0)));
    }

    #[test]
    fn dot() {
        assert_eq!(0.0, Vec3::dot(Vec3::zero(), Vec3::zero()));

        let a = Vec3::new(0.0, 1.0, 1.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(0.0, Vec3::dot(a, b));

        assert_eq!(14, Vec4::dot(Vec4::new(1, 3, 2, 5), Vec4::new(-1, 3, -2, 2)));
    }

    #[test]
    fn cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        assert_eq!(z, Vec3::cross(x, y));
        assert_eq!(x, Vec3::cross(y, z));
        assert_eq!(y, Vec3::cross(z, x));
        assert_eq!(-z, Vec3::cross(y, x));

        let a = Vec3::new(2.0, -1.0, 4.0);
        let b = Vec3::new(0.5, 3.0, -2.0);
        let c = Vec3::cross(a, b);
        assert_eq!(0.0, Vec3::dot(a, c));
        assert_eq!(0.0, Vec3::dot(b, c));
    }

    #[test]
    fn normalize() {
        let a = Vec3::new(4.0f32, 9.0, 2.0).normalize();
        assert!((a.len() - 1.0).abs() < 0.00001);

        let zero = Vec3::<f32>::zero().normalize();
        assert_eq!(Vec3::zero(), zero);
    }

    #[test]
    fn angle_between() {
        let x = Vec3::new(1.0f32, 0.0, 0.0);
        let y = Vec3::new(0.0f32, 1.0, 0.0);

        assert!((Vec3::angle_between(x, y) - ::std::f32::consts::FRAC_PI_2).abs() < 0.0001);
        assert_eq!(0.0, Vec3::angle_between(x, x * 1.0000001));
        assert!(!Vec3::angle_between(x, x).is_nan());
    }

    #[test]
    fn scale() {
        let a = Vec3::new(1.0, 3.5, 7.3);
        assert_eq!(a.len() * 2.0, (a*2.0).len());

        let mut a = Vec4::new(3, 4, 1, 2);
        a *= 2;
        assert_eq!(Vec4::new(6, 8, 2, 4), a);

        assert_eq!(Vec2::new(1.5, 2.0), Vec2::new(3.0, 4.0) / 2.0);
    }
}
