// src/generator.rs

use std::fmt;
use std::io::Write;

use log::{debug, info, warn};
use num_traits::{Signed, Zero};

use crate::error::{FixtureError, Result};
use crate::geometry::{Point2, Polygon};
use crate::intersection::{Intersection, ScanLine, DEFAULT_HALF_EXTENT};
use crate::number::{self, Scalar};

/// Scan lines from `min` to `max` inclusive, `step` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanRange {
    min: Scalar,
    max: Scalar,
    step: Scalar,
}

impl ScanRange {
    pub fn new(min: Scalar, max: Scalar, step: Scalar) -> Result<Self> {
        if !step.is_positive() {
            return Err(FixtureError::NonPositiveStep);
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> &Scalar {
        &self.min
    }

    pub fn max(&self) -> &Scalar {
        &self.max
    }

    pub fn step(&self) -> &Scalar {
        &self.step
    }

    /// `floor((max - min) / step) + 1`, or zero for an inverted range.
    pub fn len(&self) -> usize {
        if self.max < self.min {
            return 0;
        }
        let steps = ((&self.max - &self.min) / &self.step).floor().to_integer();
        usize::try_from(steps).map(|n| n.saturating_add(1)).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Each y is computed as `min + k * step` so no rounding error accumulates.
    pub fn values(&self) -> impl Iterator<Item = Scalar> + '_ {
        (0..self.len()).map(move |k| &self.min + &self.step * number::integer(k as i64))
    }
}

impl fmt::Display for ScanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={} step {}",
            number::format_fixture(&self.min),
            number::format_fixture(&self.max),
            number::format_fixture(&self.step)
        )
    }
}

/// Sorted x coordinates of one scan line, rendered as a float array initializer.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureRow {
    pub y: Scalar,
    pub coords: Vec<Scalar>,
}

impl FixtureRow {
    pub fn from_intersections(y: Scalar, hits: &[Intersection]) -> Self {
        let mut coords = Vec::with_capacity(hits.len() * 2);
        for hit in hits {
            hit.push_coordinates(&mut coords);
        }
        coords.sort();
        Self { y, coords }
    }
}

impl fmt::Display for FixtureRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("new float[] { ")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}f", number::format_fixture(x))?;
        }
        f.write_str(" },")
    }
}

pub struct FixtureGenerator {
    polygon: Polygon,
    range: ScanRange,
    half_extent: Scalar,
}

impl FixtureGenerator {
    pub fn new(polygon: Polygon, range: ScanRange) -> Self {
        Self {
            polygon,
            range,
            half_extent: number::integer(DEFAULT_HALF_EXTENT),
        }
    }

    pub fn with_half_extent(mut self, half_extent: Scalar) -> Self {
        self.half_extent = half_extent.abs();
        self
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn range(&self) -> &ScanRange {
        &self.range
    }

    pub fn scan_ys(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.range.values()
    }

    pub fn row(&self, y: Scalar) -> FixtureRow {
        let line = ScanLine::with_half_extent(y, self.half_extent.clone());
        let hits = line.intersect_polygon(&self.polygon);

        if log::log_enabled!(log::Level::Debug) {
            let listing: Vec<String> = hits
                .iter()
                .flat_map(|hit| match hit {
                    Intersection::Point(x) => vec![Point2::new(x.clone(), line.y().clone())],
                    Intersection::Segment(start, end) => vec![
                        Point2::new(start.clone(), line.y().clone()),
                        Point2::new(end.clone(), line.y().clone()),
                    ],
                })
                .map(|point| point.to_string())
                .collect();
            debug!("{} >> {}", number::format_fixture(line.y()), listing.join(", "));
        }

        FixtureRow::from_intersections(line.y().clone(), &hits)
    }

    pub fn rows(&self) -> impl Iterator<Item = FixtureRow> + '_ {
        self.scan_ys().map(move |y| self.row(y))
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows().map(|row| row.to_string())
    }

    /// Writes one initializer line per scan line.
    pub fn generate<W: Write>(&self, out: &mut W) -> Result<usize> {
        info!("polygon: {}", self.polygon);
        info!("scan: {}", self.range);
        self.warn_if_clipped();

        let mut written = 0;
        for line in self.lines() {
            writeln!(out, "{}", line)?;
            written += 1;
        }
        out.flush()?;
        Ok(written)
    }

    fn warn_if_clipped(&self) {
        let bounds = self.polygon.bounds();
        if bounds.min_x.abs() > self.half_extent || bounds.max_x.abs() > self.half_extent {
            warn!(
                "polygon spans x {}..{} but scan lines only reach +/-{}; \
                 crossings outside are dropped",
                number::format_fixture(&bounds.min_x),
                number::format_fixture(&bounds.max_x),
                number::format_fixture(&self.half_extent)
            );
        }
        if self.half_extent.is_zero() {
            warn!("scan half extent is zero; only crossings at x = 0 are reported");
        }
    }
}
