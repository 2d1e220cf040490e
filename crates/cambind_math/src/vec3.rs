//! 3D Vector type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 3D Vector with x, y, z components
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Components as an array
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

/// Writes the engine string form, e.g. `0 0.1 -1`
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Error returned when parsing a vector from its string form
#[derive(Debug, Clone, PartialEq)]
pub enum ParseVec3Error {
    /// The string did not contain exactly three components
    ComponentCount(usize),
    /// A component was not a valid float
    InvalidComponent(String),
}

impl fmt::Display for ParseVec3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseVec3Error::ComponentCount(n) => {
                write!(f, "expected 3 vector components, found {}", n)
            }
            ParseVec3Error::InvalidComponent(s) => {
                write!(f, "invalid vector component '{}'", s)
            }
        }
    }
}

impl std::error::Error for ParseVec3Error {}

impl FromStr for Vec3 {
    type Err = ParseVec3Error;

    /// Parse whitespace separated components: `"0 0 -1"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ParseVec3Error::ComponentCount(parts.len()));
        }

        let mut out = [0.0f32; 3];
        for (slot, part) in out.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f32>()
                .map_err(|_| ParseVec3Error::InvalidComponent(part.to_string()))?;
        }
        Ok(Self::from(out))
    }
}

// Operator overloads

impl std::ops::Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec3::X.length(), 1.0);
        assert!((Vec3::new(3.0, 4.0, 0.0).length() - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_parse_engine_string() {
        let v: Vec3 = "0 0.1 -1".parse().unwrap();
        assert_eq!(v, Vec3::new(0.0, 0.1, -1.0));

        // Extra whitespace is tolerated
        let v: Vec3 = "  1   0\t0 ".parse().unwrap();
        assert_eq!(v, Vec3::X);
    }

    #[test]
    fn test_parse_wrong_count() {
        assert_eq!(
            "0 1".parse::<Vec3>(),
            Err(ParseVec3Error::ComponentCount(2))
        );
        assert_eq!(
            "0 1 2 3".parse::<Vec3>(),
            Err(ParseVec3Error::ComponentCount(4))
        );
        assert_eq!("".parse::<Vec3>(), Err(ParseVec3Error::ComponentCount(0)));
    }

    #[test]
    fn test_parse_bad_component() {
        let err = "0 up 0".parse::<Vec3>().unwrap_err();
        assert_eq!(err, ParseVec3Error::InvalidComponent("up".to_string()));
        assert!(err.to_string().contains("up"));
    }

    #[test]
    fn test_display_matches_engine_form() {
        assert_eq!(Vec3::new(0.0, 0.0, -1.0).to_string(), "0 0 -1");
        assert_eq!(Vec3::new(0.0, -0.1, 0.0).to_string(), "0 -0.1 0");
    }

    #[test]
    fn test_array_conversion() {
        let v = Vec3::from([1.0, 2.0, 3.0]);
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
