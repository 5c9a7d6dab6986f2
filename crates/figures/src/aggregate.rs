//! Folds over arrays of figures.

use crate::array::DynamicArray;
use crate::geom::{Coord, FigureSlot};

/// Sum of the numeric values (areas) of all occupied slots.
///
/// Empty slots contribute zero. Summation runs in index order and starts
/// from `+0.0`, so an empty array totals `0` rather than `-0`.
pub fn total_area<T: Coord>(figures: &DynamicArray<FigureSlot<T>>) -> f64 {
    figures
        .iter()
        .flatten()
        .fold(0.0, |acc, f| acc + f.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{FigureHandle, Hexagon, Octagon, Pentagon, Point};
    use std::rc::Rc;

    #[test]
    fn sums_mixed_polygons() {
        let origin = Point::new(0.0, 0.0);
        let p: FigureHandle<f64> = Rc::new(Pentagon::new(origin, 1.0).unwrap());
        let h: FigureHandle<f64> = Rc::new(Hexagon::new(origin, 2.0).unwrap());
        let o: FigureHandle<f64> = Rc::new(Octagon::new(origin, 3.0).unwrap());
        let expected = p.area() + h.area() + o.area();

        let mut arr = DynamicArray::new();
        arr.push_back(Some(p));
        arr.push_back(Some(h));
        arr.push_back(Some(o));
        assert!((total_area(&arr) - expected).abs() < 1e-6);
    }

    #[test]
    fn empty_slots_count_as_zero() {
        let mut arr: DynamicArray<FigureSlot<f64>> = DynamicArray::new();
        assert_eq!(total_area(&arr), 0.0);
        assert!(total_area(&arr).is_sign_positive());
        arr.push_back(None);
        arr.push_back(None);
        assert!(total_area(&arr).is_sign_positive());
        assert_eq!(total_area(&arr).to_string(), "0");
        let hex: FigureHandle<f64> = Rc::new(Hexagon::new(Point::new(1.0, 1.0), 1.0).unwrap());
        let single = hex.area();
        arr.push_back(Some(hex));
        arr.push_back(None);
        assert!((total_area(&arr) - single).abs() < 1e-12);
    }

    #[test]
    fn erasing_releases_the_last_handle() {
        let hex: FigureHandle<f64> = Rc::new(Hexagon::<f64>::default());
        let observer = Rc::downgrade(&hex);
        let mut arr = DynamicArray::new();
        arr.push_back(Some(hex));
        assert!(observer.upgrade().is_some());
        arr.erase(0).unwrap();
        assert!(observer.upgrade().is_none());
        assert_eq!(total_area(&arr), 0.0);
    }
}
