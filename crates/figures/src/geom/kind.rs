//! Runtime selection of a polygon variant from a numeric type code.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::figure::FigureHandle;
use super::point::{Coord, Point};
use super::polygon::{read_center_radius, Hexagon, Octagon, Pentagon};
use crate::error::FigureError;

/// The polygon variants a driver can construct by code (5, 6 or 8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolygonKind {
    Pentagon,
    Hexagon,
    Octagon,
}

impl PolygonKind {
    pub const ALL: [PolygonKind; 3] = [
        PolygonKind::Pentagon,
        PolygonKind::Hexagon,
        PolygonKind::Octagon,
    ];

    #[inline]
    pub fn sides(self) -> usize {
        match self {
            PolygonKind::Pentagon => 5,
            PolygonKind::Hexagon => 6,
            PolygonKind::Octagon => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PolygonKind::Pentagon => "pentagon",
            PolygonKind::Hexagon => "hexagon",
            PolygonKind::Octagon => "octagon",
        }
    }

    /// Map a type code (the side count) to a kind.
    pub fn from_code(code: u32) -> Result<Self, FigureError> {
        Self::ALL
            .into_iter()
            .find(|k| k.sides() as u32 == code)
            .ok_or_else(|| FigureError::invalid(format!("unknown figure type {code}")))
    }

    /// Construct the polygon and hand it out behind a shared handle.
    pub fn build<T: Coord>(
        self,
        center: Point<T>,
        radius: T,
    ) -> Result<FigureHandle<T>, FigureError> {
        let handle: FigureHandle<T> = match self {
            PolygonKind::Pentagon => Rc::new(Pentagon::new(center, radius)?),
            PolygonKind::Hexagon => Rc::new(Hexagon::new(center, radius)?),
            PolygonKind::Octagon => Rc::new(Octagon::new(center, radius)?),
        };
        Ok(handle)
    }

    /// Read `cx cy r` from a token stream, then `build`.
    pub fn read<'a, T, I>(self, tokens: &mut I) -> Result<FigureHandle<T>, FigureError>
    where
        T: Coord,
        I: Iterator<Item = &'a str>,
    {
        let (center, radius) = read_center_radius::<T, I>(tokens)?;
        self.build(center, radius)
    }
}

impl TryFrom<u32> for PolygonKind {
    type Error = FigureError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl FromStr for PolygonKind {
    type Err = FigureError;

    /// Accepts the numeric code or the lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return Self::from_code(code);
        }
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FigureError::parse(format!("unknown figure type {s:?}")))
    }
}

impl fmt::Display for PolygonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
