//! Regular polygons and a growable figure container.
//!
//! - `geom`: `Point<T>`, the `Figure<T>` capability, `RegularPolygon<T, N>`.
//! - `array`: `DynamicArray<T>` with doubling growth and shift-on-erase.
//! - `aggregate`: `total_area` over arrays of figure slots.
//!
//! All fallible operations return `Result<_, FigureError>`; nothing here
//! prints or logs.

pub mod aggregate;
pub mod array;
pub mod error;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use aggregate::total_area;
pub use array::DynamicArray;
pub use error::FigureError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::aggregate::total_area;
    pub use crate::array::DynamicArray;
    pub use crate::error::FigureError;
    pub use crate::geom::{
        Coord, Figure, FigureHandle, FigureSlot, Hexagon, Octagon, Pentagon, Point, PolygonKind,
        RegularPolygon,
    };
}

use nalgebra::Vector2;

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
