
//! Angle constants and conversions between radians, degrees and hour angles.

pub const PI: f64 = ::std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
pub const PI_DIV_180: f64 = PI / 180.0;
pub const INV_PI_DIV_180: f64 = 180.0 / PI;

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 { deg * PI_DIV_180 }
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 { rad * INV_PI_DIV_180 }

// One hour of right ascension is 15 degrees
#[inline]
pub fn hr_to_deg(hours: f64) -> f64 { hours * 15.0 }
#[inline]
pub fn hr_to_rad(hours: f64) -> f64 { deg_to_rad(hr_to_deg(hours)) }
#[inline]
pub fn deg_to_hr(deg: f64) -> f64 { deg / 15.0 }
#[inline]
pub fn rad_to_hr(rad: f64) -> f64 { deg_to_hr(rad_to_deg(rad)) }

/// Finds the smallest power of two which is larger than or equal to `n`. Texture sizes used to
/// have to be powers of two. `next_pow2(0)` is 1, and `None` is returned when the result does not
/// fit in a `u32`.
pub fn next_pow2(n: u32) -> Option<u32> {
    n.checked_next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert!((deg_to_rad(180.0) - PI).abs() < 0.00001);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 0.00001);
        assert_eq!(90.0, hr_to_deg(6.0));
        assert_eq!(2.0, deg_to_hr(30.0));
        assert!((hr_to_rad(12.0) - PI).abs() < 0.00001);
        assert!((rad_to_hr(TWO_PI) - 24.0).abs() < 0.00001);
    }

    #[test]
    fn pow2() {
        assert_eq!(Some(1), next_pow2(0));
        assert_eq!(Some(1), next_pow2(1));
        assert_eq!(Some(2), next_pow2(2));
        assert_eq!(Some(4), next_pow2(3));
        assert_eq!(Some(256), next_pow2(200));
        assert_eq!(Some(512), next_pow2(512));
        assert_eq!(Some(1024), next_pow2(513));
        assert_eq!(Some(1 << 31), next_pow2(1 << 31));
        assert_eq!(None, next_pow2((1 << 31) + 1));
        assert_eq!(None, next_pow2(u32::max_value()));
    }
}
