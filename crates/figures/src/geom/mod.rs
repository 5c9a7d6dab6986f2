//! Planar figures: points, the `Figure` capability, and regular polygons.
//!
//! Purpose
//! - `Point<T>` over any primitive numeric scalar (`Coord`).
//! - `Figure<T>`: area, vertex centroid, text rendering, numeric value.
//! - `RegularPolygon<T, N>` with the `Pentagon`/`Hexagon`/`Octagon` aliases,
//!   and `PolygonKind` to pick one of them at runtime.
//!
//! Conventions
//! - Figures compare by area with absolute tolerance `AREA_EQ_EPS`.
//! - Parsing reads whitespace-separated tokens; failures are `ParseFailure`.

pub mod figure;
pub mod kind;
pub mod point;
pub mod polygon;

pub use figure::{approx_eq, area_lt, Figure, FigureHandle, FigureSlot, AREA_EQ_EPS};
pub use kind::PolygonKind;
pub use point::{Coord, Point};
pub use polygon::{Hexagon, Octagon, Pentagon, RegularPolygon};
