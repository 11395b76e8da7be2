// src/intersection.rs

use num_traits::Signed;

use crate::geometry::{Point2, Polygon};
use crate::number::{self, Scalar};

/// Half length of the horizontal segment standing in for an infinite scan line.
pub const DEFAULT_HALF_EXTENT: i64 = 1000;

/// Where a scan line meets the polygon boundary. The y coordinate is that of the scan line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intersection {
    Point(Scalar),
    /// Overlap with a horizontal edge, `start <= end`.
    Segment(Scalar, Scalar),
}

impl Intersection {
    fn covers(&self, x: &Scalar) -> bool {
        match self {
            Intersection::Point(p) => p == x,
            Intersection::Segment(start, end) => start <= x && x <= end,
        }
    }

    /// Appends the x coordinates this intersection contributes to a fixture row.
    pub fn push_coordinates(&self, out: &mut Vec<Scalar>) {
        match self {
            Intersection::Point(x) => out.push(x.clone()),
            Intersection::Segment(start, end) => {
                out.push(start.clone());
                out.push(end.clone());
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScanLine {
    y: Scalar,
    half_extent: Scalar,
}

impl ScanLine {
    pub fn new(y: Scalar) -> Self {
        Self::with_half_extent(y, number::integer(DEFAULT_HALF_EXTENT))
    }

    pub fn with_half_extent(y: Scalar, half_extent: Scalar) -> Self {
        Self {
            y,
            half_extent: half_extent.abs(),
        }
    }

    pub fn y(&self) -> &Scalar {
        &self.y
    }

    fn within_extent(&self, x: &Scalar) -> bool {
        x.abs() <= self.half_extent
    }

    /// Intersection of the scan line with a single edge.
    pub fn intersect_side(&self, start: &Point2, end: &Point2) -> Option<Intersection> {
        if start.y == end.y {
            if start.y != self.y {
                return None;
            }
            let (low, high) = if start.x <= end.x {
                (&start.x, &end.x)
            } else {
                (&end.x, &start.x)
            };
            let lower = -&self.half_extent;
            let low = if *low < lower { lower } else { low.clone() };
            let high = if *high > self.half_extent {
                self.half_extent.clone()
            } else {
                high.clone()
            };
            return match low.cmp(&high) {
                std::cmp::Ordering::Less => Some(Intersection::Segment(low, high)),
                std::cmp::Ordering::Equal => Some(Intersection::Point(low)),
                std::cmp::Ordering::Greater => None,
            };
        }

        let (bottom, top) = if start.y < end.y { (start, end) } else { (end, start) };
        if self.y < bottom.y || self.y > top.y {
            return None;
        }

        let x = &bottom.x + (&self.y - &bottom.y) * (&top.x - &bottom.x) / (&top.y - &bottom.y);
        if self.within_extent(&x) {
            Some(Intersection::Point(x))
        } else {
            None
        }
    }

    /// Intersection of the scan line with every edge of `polygon`.
    ///
    /// A vertex shared by two crossed edges is reported once, and points already
    /// covered by an overlapping horizontal edge are folded into that segment.
    pub fn intersect_polygon(&self, polygon: &Polygon) -> Vec<Intersection> {
        let mut found: Vec<Intersection> = Vec::new();
        for (start, end) in polygon.sides() {
            if let Some(hit) = self.intersect_side(start, end) {
                if !found.contains(&hit) {
                    found.push(hit);
                }
            }
        }

        let segments: Vec<Intersection> = found
            .iter()
            .filter(|hit| matches!(hit, Intersection::Segment(..)))
            .cloned()
            .collect();
        if segments.is_empty() {
            return found;
        }

        found.retain(|hit| match hit {
            Intersection::Point(x) => !segments.iter().any(|segment| segment.covers(x)),
            Intersection::Segment(..) => true,
        });
        found
    }
}
