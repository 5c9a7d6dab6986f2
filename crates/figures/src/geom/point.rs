//! 2D points over a generic numeric scalar.
//!
//! Conventions
//! - Arithmetic happens in `f64` via `Vector2<f64>`; coordinates are converted
//!   back with `as` semantics (truncation for integers, saturation at bounds).
//! - Text form is `(x, y)`; input form is two whitespace-separated tokens.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use num_traits::AsPrimitive;

use crate::error::FigureError;

/// Numeric scalar usable as a point coordinate (any primitive int or float).
pub trait Coord:
    Copy + fmt::Debug + fmt::Display + Default + PartialOrd + FromStr + AsPrimitive<f64>
{
    fn from_f64(v: f64) -> Self;

    #[inline]
    fn as_f64(self) -> f64 {
        self.as_()
    }
}

impl<T> Coord for T
where
    T: Copy + fmt::Debug + fmt::Display + Default + PartialOrd + FromStr + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn from_f64(v: f64) -> Self {
        AsPrimitive::<T>::as_(v)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x.as_f64(), self.y.as_f64())
    }

    #[inline]
    pub fn from_vec2(v: Vector2<f64>) -> Self {
        Self::new(T::from_f64(v.x), T::from_f64(v.y))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.as_f64().is_finite() && self.y.as_f64().is_finite()
    }

    /// Consume two tokens (`x`, then `y`) from a whitespace token stream.
    pub fn read<'a, I>(tokens: &mut I) -> Result<Self, FigureError>
    where
        I: Iterator<Item = &'a str>,
    {
        let x = next_scalar(tokens, "x")?;
        let y = next_scalar(tokens, "y")?;
        Ok(Self::new(x, y))
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Coord> FromStr for Point<T> {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let p = Self::read(&mut tokens)?;
        expect_end(&mut tokens)?;
        Ok(p)
    }
}

/// Parse the next token as `T`, naming `what` in the error.
pub(crate) fn next_scalar<'a, T, I>(tokens: &mut I, what: &str) -> Result<T, FigureError>
where
    T: Coord,
    I: Iterator<Item = &'a str>,
{
    let tok = tokens
        .next()
        .ok_or_else(|| FigureError::parse(format!("missing {what}")))?;
    tok.parse::<T>()
        .map_err(|_| FigureError::parse(format!("{what}: cannot parse {tok:?}")))
}

pub(crate) fn expect_end<'a, I>(tokens: &mut I) -> Result<(), FigureError>
where
    I: Iterator<Item = &'a str>,
{
    match tokens.next() {
        Some(extra) => Err(FigureError::parse(format!("unexpected token {extra:?}"))),
        None => Ok(()),
    }
}
