use core::f32::consts::{FRAC_PI_3, FRAC_PI_6, TAU};
use std::{
    cmp::{max, min},
    fmt,
    ops::{Add, Sub},
    str::FromStr,
    sync::LazyLock,
};

use glam::{IVec2, Mat2, Vec2};
use regex::Regex;
use thiserror::Error;

use crate::grid::direction::Direction;

pub const SQRT_3: f32 = 1.732_050_8_f32;

/// Axial hex coordinate `(q, r)`. The third cube coordinate is `s = -q - r`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Hex(IVec2);

impl Hex {
    /// Neighbor offsets, indexed by [`Direction::index`].
    pub const HEX_DIRECTIONS: [Self; 6] = [
        Self::new(1, 0),
        Self::new(0, 1),
        Self::new(-1, 1),
        Self::new(-1, 0),
        Self::new(0, -1),
        Self::new(1, -1),
    ];

    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self(IVec2::new(q, r))
    }

    pub const fn q(self) -> i32 {
        self.0.x
    }

    pub const fn r(self) -> i32 {
        self.0.y
    }

    pub const fn s(self) -> i32 {
        -self.0.x - self.0.y
    }

    /// Get the hex at the given `direction` from `self`.
    ///
    /// No bounds checking is done here, an out-of-map hex simply misses in the tile lookup.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Hex {
        self + Self::HEX_DIRECTIONS[direction.index()]
    }

    #[inline]
    /// Computes coordinates length as a signed integer.
    /// The length of a [`Hex`] coordinate is equal to its distance from the origin.
    pub const fn length(self) -> i32 {
        (self.0.x.abs() + self.0.y.abs() + self.s().abs()) / 2
    }

    #[inline]
    /// Computes the distance from `self` to `rhs` in hexagonal space.
    ///
    /// This is the minimum number of single steps between the two hexes.
    pub fn distance_to(self, rhs: Self) -> i32 {
        (self - rhs).length()
    }

    /// Returns the edge direction from `self` towards `other`,
    /// or `None` if `other` is not adjacent to `self`.
    pub fn edge_direction_to(self, other: Self) -> Option<Direction> {
        let delta = other - self;
        Self::HEX_DIRECTIONS
            .iter()
            .position(|&offset| offset == delta)
            .and_then(Direction::from_index)
    }

    /// Return a [`Vec<Hex>`] containing all [`Hex`] around `self` in a given `distance`, including `self`. \
    /// The number of returned hexes is equal to `3 * distance * (distance + 1) + 1`.
    pub fn hexes_in_distance(self, distance: u32) -> Vec<Hex> {
        let mut hex_list = Vec::with_capacity((3 * distance * (distance + 1) + 1) as usize);
        let radius = distance as i32;
        for q in -radius..=radius {
            for r in max(-radius, -q - radius)..=min(radius, -q + radius) {
                hex_list.push(self + Hex::new(q, r));
            }
        }
        hex_list
    }

    /// Rounds floating point coordinates to [`Hex`].
    pub fn round(fractional_hex: Vec2) -> Self {
        let mut rounded = fractional_hex.round();

        let diff = fractional_hex - rounded;

        if diff.x.abs() >= diff.y.abs() {
            rounded.x += 0.5_f32.mul_add(diff.y, diff.x).round();
        } else {
            rounded.y += 0.5_f32.mul_add(diff.x, diff.y).round();
        }

        Self(rounded.as_ivec2())
    }
}

impl Add for Hex {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Hex {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<[i32; 2]> for Hex {
    #[inline]
    fn from(a: [i32; 2]) -> Self {
        Self(a.into())
    }
}

/// Formats the hex as its map key, `"q,r"`.
impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q(), self.r())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tile key '{0}', expected \"q,r\"")]
pub struct ParseHexError(pub String);

static HEX_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*,\s*(-?\d+)\s*$").expect("tile key pattern is a valid regex")
});

/// Parses a map key of the form `"q,r"`.
impl FromStr for Hex {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = HEX_KEY_REGEX
            .captures(s)
            .ok_or_else(|| ParseHexError(s.to_owned()))?;
        let q = captures[1]
            .parse()
            .map_err(|_| ParseHexError(s.to_owned()))?;
        let r = captures[2]
            .parse()
            .map_err(|_| ParseHexError(s.to_owned()))?;
        Ok(Hex::new(q, r))
    }
}

/// Pixel layout of a pointy-topped hex grid.
///
/// The grid may be squashed vertically: `size.y = size.x * squish_factor`.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HexLayout {
    pub size: Vec2,
    pub origin: Vec2,
}

impl HexLayout {
    const FORWARD_MATRIX: Mat2 = Mat2::from_cols_array(&[SQRT_3, 0.0, SQRT_3 / 2.0, 3.0 / 2.0]);
    const INVERSE_MATRIX: Mat2 =
        Mat2::from_cols_array(&[SQRT_3 / 3.0, 0.0, -1.0 / 3.0, 2.0 / 3.0]);

    pub fn new(hex_size: f32, squish_factor: f32, origin: Vec2) -> Self {
        Self {
            size: Vec2::new(hex_size, hex_size * squish_factor),
            origin,
        }
    }

    pub fn squish_factor(self) -> f32 {
        self.size.y / self.size.x
    }

    pub fn hex_to_pixel(self, hex: Hex) -> Vec2 {
        Self::FORWARD_MATRIX * hex.0.as_vec2() * self.size + self.origin
    }

    pub fn pixel_to_hex(self, pixel_position: Vec2) -> Hex {
        let pt = (pixel_position - self.origin) / self.size;
        Hex::round(Self::INVERSE_MATRIX * pt)
    }

    /// Returns the edge of `hex` that lies under `pixel_position`.
    ///
    /// The hex is split into six 60° sectors centred on the edge midpoints, East first.
    pub fn edge_at_pixel(self, hex: Hex, pixel_position: Vec2) -> Direction {
        let delta = pixel_position - self.hex_to_pixel(hex);
        let angle = (delta.y / self.squish_factor()).atan2(delta.x);
        let normalized = (angle + FRAC_PI_6).rem_euclid(TAU);
        let index = (normalized / FRAC_PI_3) as usize % 6;
        Direction::ALL[index]
    }
}
