//! SVG path export.
//!
//! Turns visible regions, sectors and obstacles into SVG path data (the `d`
//! attribute). The command sequence is the one a canvas renderer issues:
//! move to the observer, a line or quadratic curve per boundary vertex, close.
//!
//! # Example
//!
//! ```
//! use sightcone::io::visibility_to_svg_path;
//! use sightcone::{compute_visibility, FovConfig, Observer, Point2, Scene, Vec2};
//!
//! let observer = Observer::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
//! let vis = compute_visibility(&Scene::default(), &observer, FovConfig::default()).unwrap();
//!
//! let d = visibility_to_svg_path(&vis);
//! assert!(d.starts_with("M 0 0 L "));
//! assert!(d.contains(" Q "));
//! assert!(d.ends_with(" Z"));
//! ```

use crate::fov::Visibility;
use crate::primitives::{Point2, Polygon};
use crate::sector::Sector;
use num_traits::Float;
use std::fmt;

/// An absolute SVG path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SvgCommand<F> {
    MoveTo(Point2<F>),
    LineTo(Point2<F>),
    /// Quadratic Bézier curve: control point, end point.
    QuadraticTo(Point2<F>, Point2<F>),
    ClosePath,
}

impl<F: fmt::Display> fmt::Display for SvgCommand<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            SvgCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            SvgCommand::QuadraticTo(c, p) => write!(f, "Q {} {} {} {}", c.x, c.y, p.x, p.y),
            SvgCommand::ClosePath => write!(f, "Z"),
        }
    }
}

/// Joins commands into path data, separated by single spaces.
pub fn commands_to_svg_path<F: fmt::Display>(commands: &[SvgCommand<F>]) -> String {
    commands
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The drawing commands outlining a visible region.
///
/// An empty region yields no commands.
pub fn visibility_commands<F: Float>(visibility: &Visibility<F>) -> Vec<SvgCommand<F>> {
    if visibility.is_empty() {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(visibility.len() + 2);
    commands.push(SvgCommand::MoveTo(visibility.centre()));
    for v in visibility.vertices() {
        commands.push(match v.control {
            Some(c) => SvgCommand::QuadraticTo(c, v.point),
            None => SvgCommand::LineTo(v.point),
        });
    }
    commands.push(SvgCommand::ClosePath);
    commands
}

/// Converts a visible region to SVG path data.
pub fn visibility_to_svg_path<F: Float + fmt::Display>(visibility: &Visibility<F>) -> String {
    commands_to_svg_path(&visibility_commands(visibility))
}

/// Outlines the bare sector: both radii and the approximated arc.
pub fn sector_to_svg_path<F: Float + fmt::Display>(sector: &Sector<F>) -> String {
    let [first, last] = sector.arc_ends();
    commands_to_svg_path(&[
        SvgCommand::MoveTo(sector.centre()),
        SvgCommand::LineTo(first),
        SvgCommand::QuadraticTo(sector.arc_control_point(), last),
        SvgCommand::ClosePath,
    ])
}

/// Converts an obstacle to SVG path data. Walls stay open.
///
/// # Example
///
/// ```
/// use sightcone::io::polygon_to_svg_path;
/// use sightcone::primitives::Polygon;
///
/// let wall = Polygon::from_coords(&[0.0, 0.0, 10.0, 5.0]).unwrap();
/// assert_eq!(polygon_to_svg_path(&wall), "M 0 0 L 10 5");
/// ```
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    let Some((first, rest)) = polygon.vertices().split_first() else {
        return String::new();
    };

    let mut commands = Vec::with_capacity(polygon.vertices().len() + 1);
    commands.push(SvgCommand::MoveTo(*first));
    commands.extend(rest.iter().map(|&p| SvgCommand::LineTo(p)));
    if !polygon.is_wall() {
        commands.push(SvgCommand::ClosePath);
    }
    commands_to_svg_path(&commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fov::VisibilityVertex;
    use crate::primitives::Vec2;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_command_display() {
        assert_eq!(SvgCommand::MoveTo(Point2::new(1.5, -2.0)).to_string(), "M 1.5 -2");
        assert_eq!(
            SvgCommand::QuadraticTo(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)).to_string(),
            "Q 1 2 3 4"
        );
        assert_eq!(SvgCommand::<f64>::ClosePath.to_string(), "Z");
    }

    #[test]
    fn test_visibility_path() {
        let vis = Visibility::new(
            Point2::new(0.0, 0.0),
            vec![
                VisibilityVertex {
                    point: Point2::new(10.0, 0.0),
                    control: None,
                    on_arc: false,
                },
                VisibilityVertex {
                    point: Point2::new(0.0, 10.0),
                    control: Some(Point2::new(12.0, 12.0)),
                    on_arc: true,
                },
            ],
        );
        assert_eq!(visibility_to_svg_path(&vis), "M 0 0 L 10 0 Q 12 12 0 10 Z");
    }

    #[test]
    fn test_empty_visibility_has_no_path() {
        let vis: Visibility<f64> = Visibility::new(Point2::new(3.0, 4.0), Vec::new());
        assert!(visibility_commands(&vis).is_empty());
        assert_eq!(visibility_to_svg_path(&vis), "");
    }

    #[test]
    fn test_sector_path() {
        let s = Sector::new(Point2::new(0.0, 0.0), Vec2::unit_x(), 10.0, FRAC_PI_4);
        let d = sector_to_svg_path(&s);
        assert!(d.starts_with("M 0 0 L "));
        assert_eq!(d.matches(" Q ").count(), 1);
        assert!(d.ends_with(" Z"));
    }

    #[test]
    fn test_closed_polygon_path() {
        let square = Polygon::from_coords(&[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0]).unwrap();
        assert_eq!(polygon_to_svg_path(&square), "M 0 0 L 2 0 L 2 2 L 0 2 Z");
    }
}
