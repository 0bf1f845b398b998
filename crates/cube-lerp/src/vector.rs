//! Fixed-length color vectors
//!
//! A [`Vector`] carries 3 or 4 channels and has no color meaning until a
//! [`ColorFormat`](crate::ColorFormat) interprets it. Vectors are `Copy`
//! and every operation returns a new value.

use std::ops::{Add, Mul, Sub};

/// Number of channels carried by a [`Vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Color channels only; alpha is implicitly opaque.
    Three,
    /// Color channels plus explicit alpha.
    Four,
}

impl Channels {
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Three => 3,
            Channels::Four => 4,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(Channels::Three),
            4 => Some(Channels::Four),
            _ => None,
        }
    }
}

/// A point in some color space, 3 or 4 `f32` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    channels: Channels,
    // Unused trailing slot stays 0.0 so derived equality is sound.
    data: [f32; 4],
}

impl Vector {
    #[inline]
    pub fn new3(x: f32, y: f32, z: f32) -> Self {
        Self {
            channels: Channels::Three,
            data: [x, y, z, 0.0],
        }
    }

    #[inline]
    pub fn new4(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            channels: Channels::Four,
            data: [x, y, z, w],
        }
    }

    /// Build a vector from 3 or 4 components; `None` for any other length.
    ///
    /// ```
    /// use cube_lerp::Vector;
    /// assert!(Vector::from_slice(&[1.0, 2.0, 3.0]).is_some());
    /// assert!(Vector::from_slice(&[1.0, 2.0]).is_none());
    /// ```
    pub fn from_slice(components: &[f32]) -> Option<Self> {
        match *components {
            [x, y, z] => Some(Self::new3(x, y, z)),
            [x, y, z, w] => Some(Self::new4(x, y, z, w)),
            _ => None,
        }
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data[..self.channels.count()]
    }

    /// The fourth component, if present.
    #[inline]
    pub fn alpha(&self) -> Option<f32> {
        match self.channels {
            Channels::Three => None,
            Channels::Four => Some(self.data[3]),
        }
    }

    fn zip_with(self, other: Vector, f: impl Fn(f32, f32) -> f32) -> Vector {
        debug_assert_eq!(
            self.channels, other.channels,
            "component-wise op on vectors of different length"
        );
        let mut data = [0.0; 4];
        for i in 0..self.channels.count() {
            data[i] = f(self.data[i], other.data[i]);
        }
        Vector {
            channels: self.channels,
            data,
        }
    }

    /// Linear blend `a * (1 - t) + b * t`.
    ///
    /// This form returns `a` exactly at `t = 0` and `b` exactly at `t = 1`,
    /// which the grid corners rely on.
    #[inline]
    pub fn lerp(a: Vector, b: Vector, t: f32) -> Vector {
        a.zip_with(b, |x, y| x * (1.0 - t) + y * t)
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Vector, eps: f32) -> bool {
        self.channels == other.channels
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, factor: f32) -> Vector {
        self.zip_with(self, |a, _| a * factor)
    }
}
