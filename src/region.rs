
use math3d::Vec2;
use rand::Rng;

/// An axis aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Region {
    pub min: Vec2<f32>,
    pub max: Vec2<f32>,
}

impl Region {
    pub fn new(min: Vec2<f32>, max: Vec2<f32>) -> Region {
        Region { min, max }
    }

    /// A region starting at `(0, 0)` with the given size
    pub fn sized(width: f32, height: f32) -> Region {
        Region { min: Vec2::zero(), max: Vec2::new(width, height) }
    }

    /// A region around the origin reaching from `-range` to `range` along its shorter side. The
    /// longer side is stretched so the region has the given aspect ratio.
    pub fn fit_aspect(range: f32, aspect: f32) -> Region {
        let aspect = if aspect > 0.0 { aspect } else { 1.0 };
        let half = if aspect >= 1.0 {
            Vec2::new(range * aspect, range)
        } else {
            Vec2::new(range, range / aspect)
        };
        Region { min: -half, max: half }
    }

    pub fn center(&self) -> Vec2<f32> { (self.min + self.max) / 2.0 }

    pub fn width(&self) -> f32        { self.max.x - self.min.x }
    pub fn height(&self) -> f32       { self.max.y - self.min.y }

    pub fn size(&self) -> Vec2<f32>   { self.max - self.min }

    /// Checks if the given point is inside this region. Points on the edge count as inside.
    pub fn contains(&self, p: Vec2<f32>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f32 {
        let size = self.size();
        size.x / size.y
    }

    /// A uniformly distributed point inside this region
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Vec2<f32> {
        Vec2::new(
            self.min.x + rng.gen::<f32>() * self.width(),
            self.min.y + rng.gen::<f32>() * self.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn measurements() {
        let region = Region::new(Vec2::new(-1.0, 2.0), Vec2::new(3.0, 4.0));

        assert_eq!(4.0, region.width());
        assert_eq!(2.0, region.height());
        assert_eq!(2.0, region.aspect());
        assert_eq!(Vec2::new(1.0, 3.0), region.center());
        assert!(region.contains(Vec2::new(3.0, 3.0)));
        assert!(!region.contains(Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn aspect_fitting() {
        let wide = Region::fit_aspect(100.0, 800.0 / 600.0);
        assert_eq!(100.0, wide.max.y);
        assert!((wide.max.x - 133.333).abs() < 0.001);
        assert_eq!(-wide.max, wide.min);

        let tall = Region::fit_aspect(100.0, 0.5);
        assert_eq!(Vec2::new(100.0, 200.0), tall.max);

        // No height yet
        assert_eq!(Vec2::new(100.0, 100.0), Region::fit_aspect(100.0, 0.0).max);
    }

    #[test]
    fn random_points_are_inside() {
        let region = Region::new(Vec2::new(0.0, 100.0), Vec2::new(800.0, 600.0));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert!(region.contains(region.random_point(&mut rng)));
        }
    }
}
