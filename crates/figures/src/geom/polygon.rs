//! Regular N-gons generated from a center and a circumradius.
//!
//! Model
//! - Vertex `i` sits at angle `i · 2π/N` on the circle of radius `r` around the
//!   center; index order is the winding order.
//! - Vertices are stored flat in `[Point<T>; N]`, so `Clone` is a deep copy.
//! - With integer coordinates the vertices are truncated on construction and
//!   every measurement is taken on the truncated vertex set.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use super::figure::{area_cmp, Figure};
use super::point::{expect_end, next_scalar, Coord, Point};
use crate::error::FigureError;
use crate::parallelogram_area;

/// Regular polygon with `N >= 3` vertices.
#[derive(Clone, Debug)]
pub struct RegularPolygon<T, const N: usize> {
    vertices: [Point<T>; N],
}

pub type Pentagon<T> = RegularPolygon<T, 5>;
pub type Hexagon<T> = RegularPolygon<T, 6>;
pub type Octagon<T> = RegularPolygon<T, 8>;

impl<T: Coord, const N: usize> RegularPolygon<T, N> {
    const ARITY_OK: () = assert!(N >= 3, "a regular polygon needs at least 3 vertices");

    /// Build from a center and a positive, finite radius.
    pub fn new(center: Point<T>, radius: T) -> Result<Self, FigureError> {
        let r = radius.as_f64();
        if !(r > 0.0) || !r.is_finite() {
            return Err(FigureError::invalid(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(FigureError::invalid(format!(
                "center must be finite, got {center}"
            )));
        }
        Ok(Self {
            vertices: Self::vertices_around(center.to_vec2(), r),
        })
    }

    fn vertices_around(center: Vector2<f64>, radius: f64) -> [Point<T>; N] {
        let () = Self::ARITY_OK;
        let step = std::f64::consts::TAU / N as f64;
        std::array::from_fn(|i| {
            let a = step * i as f64;
            Point::from_vec2(center + Vector2::new(a.cos(), a.sin()) * radius)
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point<T>; N] {
        &self.vertices
    }

    /// Distance from the vertex centroid to the first vertex.
    pub fn radius(&self) -> f64 {
        (self.vertices[0].to_vec2() - self.centroid()).norm()
    }

    fn centroid(&self) -> Vector2<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v.to_vec2());
        sum / N as f64
    }

    /// Rebuild in place from three tokens: center x, center y, radius.
    ///
    /// All tokens are validated before the vertices are touched, so on error
    /// the polygon keeps its previous shape.
    pub fn read_from<'a, I>(&mut self, tokens: &mut I) -> Result<(), FigureError>
    where
        I: Iterator<Item = &'a str>,
    {
        let (center, radius) = read_center_radius::<T, I>(tokens)?;
        *self = Self::new(center, radius)?;
        Ok(())
    }
}

pub(crate) fn read_center_radius<'a, T, I>(tokens: &mut I) -> Result<(Point<T>, T), FigureError>
where
    T: Coord,
    I: Iterator<Item = &'a str>,
{
    let center = Point::<T>::read(tokens)?;
    let radius: T = next_scalar(tokens, "radius")?;
    if !center.is_finite() || !radius.as_f64().is_finite() {
        return Err(FigureError::parse(format!(
            "non-finite input: center {center}, radius {radius}"
        )));
    }
    Ok((center, radius))
}

impl<T: Coord, const N: usize> Default for RegularPolygon<T, N> {
    /// Unit circumradius around the origin.
    fn default() -> Self {
        Self {
            vertices: Self::vertices_around(Vector2::zeros(), 1.0),
        }
    }
}

impl<T: Coord, const N: usize> Figure<T> for RegularPolygon<T, N> {
    #[inline]
    fn sides(&self) -> usize {
        N
    }

    /// Shoelace formula over the vertex ring, taken relative to vertex 0.
    ///
    /// The sum is translation invariant; anchoring at a vertex keeps the cross
    /// terms at the scale of `r²` instead of `|center|²`.
    fn area(&self) -> f64 {
        let origin = self.vertices[0].to_vec2();
        let twice = (1..N - 1).fold(0.0, |acc, i| {
            acc + parallelogram_area(
                self.vertices[i].to_vec2() - origin,
                self.vertices[i + 1].to_vec2() - origin,
            )
        });
        twice.abs() / 2.0
    }

    fn center(&self) -> Point<T> {
        Point::from_vec2(self.centroid())
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "{N}-gon")?;
        for v in &self.vertices {
            writeln!(out, "  {v}")?;
        }
        writeln!(out, "Area: {}", self.area())
    }
}

impl<T: Coord, const N: usize> fmt::Display for RegularPolygon<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl<T: Coord, const N: usize> FromStr for RegularPolygon<T, N> {
    type Err = FigureError;

    /// Parse `cx cy r`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (center, radius) = read_center_radius::<T, _>(&mut tokens)?;
        expect_end(&mut tokens)?;
        Self::new(center, radius)
    }
}

impl<T: Coord, const N: usize> From<&RegularPolygon<T, N>> for f64 {
    fn from(p: &RegularPolygon<T, N>) -> f64 {
        p.area()
    }
}

impl<T, const N: usize, F> PartialEq<F> for RegularPolygon<T, N>
where
    T: Coord,
    F: Figure<T> + ?Sized,
{
    fn eq(&self, other: &F) -> bool {
        area_cmp(self.area(), other.area()) == Some(std::cmp::Ordering::Equal)
    }
}

impl<T, const N: usize, F> PartialOrd<F> for RegularPolygon<T, N>
where
    T: Coord,
    F: Figure<T> + ?Sized,
{
    fn partial_cmp(&self, other: &F) -> Option<std::cmp::Ordering> {
        area_cmp(self.area(), other.area())
    }
}
