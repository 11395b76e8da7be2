// src/geometry.rs

use std::fmt;

use num_traits::Zero;

use crate::error::{FixtureError, Result};
use crate::number::{self, Scalar};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl Point2 {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    pub fn from_integers(x: i64, y: i64) -> Self {
        Self::new(number::integer(x), number::integer(y))
    }

    /// z component of `(b - a) x (c - a)`; zero when the three points are collinear.
    pub fn cross(a: &Point2, b: &Point2, c: &Point2) -> Scalar {
        (&b.x - &a.x) * (&c.y - &a.y) - (&b.y - &a.y) * (&c.x - &a.x)
    }

    pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
        Self::cross(a, b, c).is_zero()
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})",
            number::format_fixture(&self.x),
            number::format_fixture(&self.y)
        )
    }
}

/// Parses a vertex list. Parenthesized pairs may be separated by commas, semicolons or
/// whitespace: `(1,3),(1,2)`, `(0, 0), (10, 0)`, `(1,3) (1,2)`. Without parentheses each
/// `x,y` pair is its own whitespace- or semicolon-separated token: `1,3; 1,2`.
pub fn parse_points(text: &str) -> Result<Vec<Point2>> {
    if text.contains('(') {
        parse_parenthesized(text)
    } else {
        text.split(|c: char| c.is_whitespace() || c == ';')
            .filter(|token| !token.is_empty())
            .map(|token| parse_pair(token, token))
            .collect()
    }
}

fn parse_pair(pair: &str, token: &str) -> Result<Point2> {
    let (x, y) = pair
        .split_once(',')
        .ok_or_else(|| FixtureError::InvalidPoint(token.to_string()))?;
    Ok(Point2::new(number::parse_scalar(x)?, number::parse_scalar(y)?))
}

fn parse_parenthesized(text: &str) -> Result<Vec<Point2>> {
    let is_separator = |c: char| c.is_whitespace() || c == ',' || c == ';';
    let stray = |gap: &str| -> Result<()> {
        if gap.chars().all(is_separator) {
            Ok(())
        } else {
            Err(FixtureError::InvalidPoint(gap.trim().to_string()))
        }
    };

    let mut points = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        stray(&rest[..open])?;
        let close = rest[open..]
            .find(')')
            .map(|at| open + at)
            .ok_or_else(|| FixtureError::InvalidPoint(rest[open..].trim().to_string()))?;
        points.push(parse_pair(&rest[open + 1..close], &rest[open..=close])?);
        rest = &rest[close + 1..];
    }
    stray(rest)?;
    Ok(points)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: Scalar,
    pub max_x: Scalar,
    pub min_y: Scalar,
    pub max_y: Scalar,
}

/// A closed polygon with exact vertices. The closing side from the last vertex back
/// to the first is implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Builds a polygon, dropping repeated vertices, an explicit closing vertex and
    /// vertices that lie on the line through their neighbours.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let mut vertices: Vec<Point2> = Vec::with_capacity(points.len());
        for point in points {
            if vertices.last() != Some(point) {
                vertices.push(point.clone());
            }
        }
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        remove_collinear(&mut vertices);

        if vertices.len() < 3 {
            return Err(FixtureError::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Every edge as a `(start, end)` pair, including the closing edge.
    pub fn sides(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        let count = self.vertices.len();
        (0..count).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % count]))
    }

    pub fn bounds(&self) -> Bounds {
        let first = &self.vertices[0];
        let mut bounds = Bounds {
            min_x: first.x.clone(),
            max_x: first.x.clone(),
            min_y: first.y.clone(),
            max_y: first.y.clone(),
        };
        for vertex in &self.vertices[1..] {
            if vertex.x < bounds.min_x {
                bounds.min_x = vertex.x.clone();
            }
            if vertex.x > bounds.max_x {
                bounds.max_x = vertex.x.clone();
            }
            if vertex.y < bounds.min_y {
                bounds.min_y = vertex.y.clone();
            }
            if vertex.y > bounds.max_y {
                bounds.max_y = vertex.y.clone();
            }
        }
        bounds
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

fn remove_collinear(vertices: &mut Vec<Point2>) {
    let mut index = 0;
    let mut unchanged = 0;

    while vertices.len() > 2 && unchanged < vertices.len() {
        let count = vertices.len();
        let prev = (index + count - 1) % count;
        let next = (index + 1) % count;

        if !Point2::is_collinear(&vertices[prev], &vertices[index], &vertices[next]) {
            index = next;
            unchanged += 1;
            continue;
        }

        // a spike folding back onto itself collapses to a single vertex
        let spike = vertices[prev] == vertices[next];
        vertices.remove(index);
        if spike {
            vertices.remove(if prev > index { prev - 1 } else { prev });
        }
        index = 0;
        unchanged = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i64, i64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::from_integers(x, y)).collect()
    }

    #[test]
    fn explicit_closing_vertex_is_dropped() {
        let polygon = Polygon::from_points(&points(&[(0, 0), (4, 0), (4, 4), (0, 0)])).unwrap();
        assert_eq!(polygon.count(), 3);
        assert_eq!(polygon.sides().count(), 3);
    }

    #[test]
    fn repeated_vertices_collapse() {
        let polygon =
            Polygon::from_points(&points(&[(0, 0), (0, 0), (4, 0), (4, 4), (4, 4)])).unwrap();
        assert_eq!(polygon.vertices(), points(&[(0, 0), (4, 0), (4, 4)]).as_slice());
    }

    #[test]
    fn collinear_vertices_are_removed() {
        let polygon =
            Polygon::from_points(&points(&[(0, 0), (2, 0), (4, 0), (4, 4), (0, 4), (0, 2)]))
                .unwrap();
        assert_eq!(polygon.count(), 4);
        assert!(!polygon.vertices().contains(&Point2::from_integers(2, 0)));
        assert!(!polygon.vertices().contains(&Point2::from_integers(0, 2)));
    }

    #[test]
    fn collinear_runs_on_a_vertical_edge_are_removed() {
        let polygon =
            Polygon::from_points(&points(&[(0, 0), (4, 0), (4, 4), (4, 8), (4, 4), (0, 4)]))
                .unwrap();
        assert_eq!(polygon.vertices(), points(&[(0, 0), (4, 0), (4, 4), (0, 4)]).as_slice());
    }

    #[test]
    fn spike_folding_back_onto_itself_collapses() {
        let polygon =
            Polygon::from_points(&points(&[(0, 0), (4, 0), (4, 4), (8, 4), (4, 4), (0, 4)]))
                .unwrap();
        assert_eq!(polygon.vertices(), points(&[(0, 0), (4, 0), (4, 4), (0, 4)]).as_slice());
    }

    #[test]
    fn spike_across_the_closing_edge_collapses() {
        let polygon =
            Polygon::from_points(&points(&[(8, 4), (4, 4), (0, 4), (0, 0), (4, 0), (4, 4)]))
                .unwrap();
        assert_eq!(polygon.vertices(), points(&[(4, 4), (0, 4), (0, 0), (4, 0)]).as_slice());
    }

    #[test]
    fn degenerate_input_is_rejected() {
        for coords in [&[][..], &[(1, 1)][..], &[(0, 0), (1, 1), (2, 2)][..]] {
            assert!(matches!(
                Polygon::from_points(&points(coords)),
                Err(FixtureError::DegeneratePolygon { .. })
            ));
        }
    }

    #[test]
    fn sides_include_the_closing_edge() {
        let polygon = Polygon::from_points(&points(&[(0, 0), (4, 0), (0, 4)])).unwrap();
        let last = polygon.sides().last().unwrap();
        assert_eq!(last, (&Point2::from_integers(0, 4), &Point2::from_integers(0, 0)));
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let polygon = Polygon::from_points(&points(&[(1, 3), (5, 2), (2, 5), (-2, 1)])).unwrap();
        let bounds = polygon.bounds();
        assert_eq!(bounds.min_x, number::integer(-2));
        assert_eq!(bounds.max_x, number::integer(5));
        assert_eq!(bounds.min_y, number::integer(1));
        assert_eq!(bounds.max_y, number::integer(5));
    }

    #[test]
    fn parses_vertex_lists() {
        let parsed = parse_points("(1,3) (2.5,-1); (0,0)").unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].x, number::parse_scalar("2.5").unwrap());
        assert_eq!(parsed[1].y, number::integer(-1));

        let bare = parse_points("1,3; 2.5,-1 0,0").unwrap();
        assert_eq!(bare, parsed);
    }

    #[test]
    fn parses_comma_separated_vertex_lists() {
        let compact = parse_points("(1,3),(1,2),(5,2),(5,5),(2,5),(2,1),(3,1),(3,4),(4,4),(4,3)")
            .unwrap();
        assert_eq!(compact.len(), 10);
        assert_eq!(compact[0], Point2::from_integers(1, 3));
        assert_eq!(compact[9], Point2::from_integers(4, 3));

        let spaced = parse_points("(0, 0), (10, 0), (10, 10), (0, 10)").unwrap();
        assert_eq!(spaced, points(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn rejects_malformed_vertex_lists() {
        assert!(matches!(parse_points("(1;3)"), Err(FixtureError::InvalidPoint(_))));
        assert!(matches!(parse_points("(1,3) (2,4"), Err(FixtureError::InvalidPoint(_))));
        assert!(matches!(parse_points("(1,3) x (2,4)"), Err(FixtureError::InvalidPoint(_))));
        assert!(matches!(parse_points("(1,3), 5,5"), Err(FixtureError::InvalidPoint(_))));
        assert!(matches!(parse_points("(1,y)"), Err(FixtureError::InvalidNumber(_))));
    }

    #[test]
    fn displays_vertices_with_fixture_precision() {
        let polygon = Polygon::from_points(&points(&[(0, 0), (2, 0), (0, 1)])).unwrap();
        assert_eq!(polygon.to_string(), "(0,0), (2.0000000,0), (0,1.0000000)");
    }
}
