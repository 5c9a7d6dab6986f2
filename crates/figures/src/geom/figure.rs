//! The `Figure` capability and the cross-variant operators.
//!
//! Equality is area equality within `AREA_EQ_EPS`; ordering is by area and
//! reports `Equal` whenever equality holds. Equality is therefore not
//! transitive and the order is only partial: two different shapes with
//! matching area compare equal and neither is less than the other.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::point::{Coord, Point};

/// Absolute tolerance for area equality between figures.
pub const AREA_EQ_EPS: f64 = 1e-7;

/// Polymorphic planar shape.
pub trait Figure<T: Coord> {
    /// Number of vertices.
    fn sides(&self) -> usize;

    fn area(&self) -> f64;

    /// Mean of the vertex coordinates.
    fn center(&self) -> Point<T>;

    /// Multi-line description: degree label, vertices, then area.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Numeric value of the figure, which is its area.
    #[inline]
    fn to_f64(&self) -> f64 {
        self.area()
    }
}

/// Shared handle to a type-erased figure.
pub type FigureHandle<T> = Rc<dyn Figure<T>>;

/// Nullable array slot; empty slots count as zero area.
pub type FigureSlot<T> = Option<FigureHandle<T>>;

#[inline]
pub(crate) fn area_cmp(a: f64, b: f64) -> Option<Ordering> {
    if (a - b).abs() < AREA_EQ_EPS {
        Some(Ordering::Equal)
    } else {
        a.partial_cmp(&b)
    }
}

/// Areas equal within `AREA_EQ_EPS`.
pub fn approx_eq<T, A, B>(a: &A, b: &B) -> bool
where
    T: Coord,
    A: Figure<T> + ?Sized,
    B: Figure<T> + ?Sized,
{
    area_cmp(a.area(), b.area()) == Some(Ordering::Equal)
}

/// Strictly smaller area; false for tolerance-equal areas.
pub fn area_lt<T, A, B>(a: &A, b: &B) -> bool
where
    T: Coord,
    A: Figure<T> + ?Sized,
    B: Figure<T> + ?Sized,
{
    area_cmp(a.area(), b.area()) == Some(Ordering::Less)
}

impl<'a, T: Coord> PartialEq for dyn Figure<T> + 'a {
    fn eq(&self, other: &Self) -> bool {
        approx_eq::<T, _, _>(self, other)
    }
}

impl<'a, T: Coord> PartialOrd for dyn Figure<T> + 'a {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        area_cmp(self.area(), other.area())
    }
}

impl<'a, T: Coord> fmt::Display for dyn Figure<T> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl<'a, T: Coord> fmt::Debug for dyn Figure<T> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Figure")
            .field("sides", &self.sides())
            .field("center", &self.center())
            .field("area", &self.area())
            .finish()
    }
}
