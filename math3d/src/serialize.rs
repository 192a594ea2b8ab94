
// Vectors and matrices are written as flat sequences, so a `Vec3` in a config file is just
// `[1.0, 2.0, 3.0]`. Matrices keep their column major order.

use serde::{Serialize, Deserialize, Serializer, Deserializer};

use crate::vec::{Vec2, Vec3, Vec4};
use crate::mat::{Mat3, Mat4};
use crate::frame::Frame;

macro_rules! impl_vec_serde {
    ($ty: ident, $n: expr, [$($field: ident),*]) => {
        impl<T: Serialize + Copy> Serialize for $ty<T> {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                [$(self.$field),*].serialize(s)
            }
        }

        impl<'de, T: Deserialize<'de> + Copy> Deserialize<'de> for $ty<T> {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let [$($field),*] = <[T; $n]>::deserialize(d)?;
                Ok($ty { $($field),* })
            }
        }
    };
}

impl_vec_serde!(Vec2, 2, [x, y]);
impl_vec_serde!(Vec3, 3, [x, y, z]);
impl_vec_serde!(Vec4, 4, [x, y, z, w]);

macro_rules! impl_mat_serde {
    ($ty: ident, $n: expr) => {
        impl<T: Serialize + Copy> Serialize for $ty<T> {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                self.a.serialize(s)
            }
        }

        impl<'de, T: Deserialize<'de> + Copy> Deserialize<'de> for $ty<T> {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let a = <[T; $n]>::deserialize(d)?;
                Ok($ty { a })
            }
        }
    };
}

impl_mat_serde!(Mat3, 9);
impl_mat_serde!(Mat4, 16);

// Frames are written as `[origin, forward, up]`
impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        (self.origin, self.forward, self.up).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let (origin, forward, up) = <(Vec3<f32>, Vec3<f32>, Vec3<f32>)>::deserialize(d)?;
        Ok(Frame { origin, forward, up })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Scene {
        light: Vec4<f32>,
        size: Vec2<i32>,
        camera: Frame,
    }

    #[test]
    fn toml_layout() {
        let source = "
            light = [-100.0, 100.0, 50.0, 1.0]
            size = [800, 600]
            camera = [[0.0, 0.0, 5.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]
        ";
        let scene: Scene = toml::from_str(source).unwrap();

        let mut camera = Frame::new();
        camera.set_origin(Vec3::new(0.0, 0.0, 5.0));

        assert_eq!(Vec4::new(-100.0, 100.0, 50.0, 1.0), scene.light);
        assert_eq!(Vec2::new(800, 600), scene.size);
        assert_eq!(camera, scene.camera);

        let written = toml::to_string(&scene).unwrap();
        let back: Scene = toml::from_str(&written).unwrap();
        assert_eq!(scene, back);
    }

    #[test]
    fn wrong_length() {
        #[derive(Deserialize, Debug)]
        struct Point { p: Vec3<f32> }

        assert!(toml::from_str::<Point>("p = [1.0, 2.0]").is_err());
        assert!(toml::from_str::<Point>("p = [1.0, 2.0, 3.0, 4.0]").is_err());
    }
}
