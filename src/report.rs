use std::fmt;

use crate::math::Point2;
use crate::metric::{BoundaryDisplay, Diameter};

/// Renders a boundary, marking the diameter endpoints, followed by the
/// diameter path.
///
/// ```text
/// (0, 0) - (2, 2) (start)
/// (2, 2) - (4, 4) (synthetic)
/// ...
///
/// (0, 0) - (2, 2)
/// (2, 2) - (4, 4)
/// ```
///
/// Each boundary edge is one line, suffixed with ` (synthetic)` when it
/// starts at a synthetic vertex, or ` (start)` / ` (end)` when it starts at
/// the diameter's first / second input point. The path edges follow after a
/// blank line when the path has at least two points.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    boundary: &'a BoundaryDisplay,
    diameter: Option<&'a Diameter>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(boundary: &'a BoundaryDisplay, diameter: Option<&'a Diameter>) -> Self {
        Self { boundary, diameter }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoints = self.diameter.map(|d| (d.first, d.second));
        let mut original = 0_usize;

        for (k, edge) in self.boundary.points.windows(2).enumerate() {
            write_edge(f, &edge[0], &edge[1])?;

            if self.boundary.synthetic.get(k).copied().unwrap_or(false) {
                f.write_str(" (synthetic)")?;
            } else {
                match endpoints {
                    Some((first, _)) if original == first => f.write_str(" (start)")?,
                    Some((_, second)) if original == second => f.write_str(" (end)")?,
                    _ => {}
                }
                original += 1;
            }

            writeln!(f)?;
        }

        if let Some(diameter) = self.diameter.filter(|d| d.path.len() >= 2) {
            writeln!(f)?;
            for edge in diameter.path.windows(2) {
                write_edge(f, &edge[0], &edge[1])?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

fn write_edge(f: &mut fmt::Formatter<'_>, a: &Point2, b: &Point2) -> fmt::Result {
    write!(f, "({}, {}) - ({}, {})", a.x, a.y, b.x, b.y)
}

/// Renders a [`Report`] to a string.
#[must_use]
pub fn render(boundary: &BoundaryDisplay, diameter: Option<&Diameter>) -> String {
    Report::new(boundary, diameter).to_string()
}
