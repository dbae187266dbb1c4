//! Nine-region classification of the plane around a rectangle, and the
//! mirror images used for reflecting boundaries.
//!
//! Extending the four edges of the rectangle to infinity splits the plane
//! into the rectangle itself and eight exterior regions:
//!
//! ```text
//!   NW  |  N  |  NE
//!  -----+-Top-+-----
//!    W Left  Right E
//!  -----+-Bot-+-----
//!   SW  |  S  |  SE
//! ```
//!
//! The rectangle is open: a point on an edge belongs to the exterior
//! region beyond that edge, and a corner to the diagonal region, so no
//! position is ever mirrored across an edge it sits on. A position is
//! mirrored across every edge it does not lie on or beyond, which gives
//! four images from inside, three from an edge region and two from a
//! corner region.

use crate::geometry::{HalfExtent, Position};
use smallvec::SmallVec;
use wavefield_core::InvariantViolation;

/// One edge of the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `y = +Dy`.
    Top,
    /// `x = +Dx`.
    Right,
    /// `y = -Dy`.
    Bottom,
    /// `x = -Dx`.
    Left,
}

impl Edge {
    /// Mirror `p` across this edge: the coordinate normal to the edge
    /// becomes `2·b - c`, the other is kept.
    pub fn mirror(self, p: Position, half: HalfExtent) -> Position {
        match self {
            Edge::Top => Position::new(p.x, 2.0 * half.y - p.y),
            Edge::Right => Position::new(2.0 * half.x - p.x, p.y),
            Edge::Bottom => Position::new(p.x, -2.0 * half.y - p.y),
            Edge::Left => Position::new(-2.0 * half.x - p.x, p.y),
        }
    }
}

/// Where a position lies relative to the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Strictly within the rectangle.
    Inside,
    /// Above and left of the rectangle.
    NorthWest,
    /// Above, within the x span.
    North,
    /// Above and right.
    NorthEast,
    /// Right, within the y span.
    East,
    /// Below and right.
    SouthEast,
    /// Below, within the x span.
    South,
    /// Below and left.
    SouthWest,
    /// Left, within the y span.
    West,
}

#[derive(Clone, Copy)]
enum Band {
    Below,
    Within,
    Above,
}

fn band(value: f64, half: f64) -> Option<Band> {
    if value <= -half {
        Some(Band::Below)
    } else if value >= half {
        Some(Band::Above)
    } else if value > -half && value < half {
        Some(Band::Within)
    } else {
        None
    }
}

impl Region {
    /// Classify `p` against the open rectangle `(-Dx, Dx) × (-Dy, Dy)`.
    ///
    /// # Errors
    ///
    /// [`InvariantViolation`] if a coordinate fits no band, which only
    /// happens for NaN.
    pub fn classify(p: Position, half: HalfExtent) -> Result<Region, InvariantViolation> {
        let (Some(bx), Some(by)) = (band(p.x, half.x), band(p.y, half.y)) else {
            return Err(InvariantViolation::new(format!(
                "position {p} falls in no region around ±({}, {})",
                half.x, half.y
            )));
        };
        Ok(match (bx, by) {
            (Band::Within, Band::Within) => Region::Inside,
            (Band::Below, Band::Above) => Region::NorthWest,
            (Band::Within, Band::Above) => Region::North,
            (Band::Above, Band::Above) => Region::NorthEast,
            (Band::Above, Band::Within) => Region::East,
            (Band::Above, Band::Below) => Region::SouthEast,
            (Band::Within, Band::Below) => Region::South,
            (Band::Below, Band::Below) => Region::SouthWest,
            (Band::Below, Band::Within) => Region::West,
        })
    }

    /// Edges a source in this region is mirrored across.
    pub fn mirror_edges(self) -> &'static [Edge] {
        use Edge::*;
        match self {
            Region::Inside => &[Top, Right, Bottom, Left],
            Region::NorthWest => &[Right, Bottom],
            Region::North => &[Right, Bottom, Left],
            Region::NorthEast => &[Bottom, Left],
            Region::East => &[Top, Bottom, Left],
            Region::SouthEast => &[Top, Left],
            Region::South => &[Top, Right, Left],
            Region::SouthWest => &[Top, Right],
            Region::West => &[Top, Right, Bottom],
        }
    }
}

/// One generation of images of `p`, paired with the edge each was
/// mirrored across.
pub fn reflect_position(
    p: Position,
    half: HalfExtent,
) -> Result<SmallVec<[(Edge, Position); 4]>, InvariantViolation> {
    let region = Region::classify(p, half)?;
    Ok(region
        .mirror_edges()
        .iter()
        .map(|&edge| (edge, edge.mirror(p, half)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const UNIT: HalfExtent = HalfExtent { x: 1.0, y: 1.0 };

    fn count(x: f64, y: f64) -> usize {
        reflect_position(Position::new(x, y), UNIT).unwrap().len()
    }

    #[test]
    fn image_counts_by_region() {
        assert_eq!(count(0.0, 0.0), 4);
        assert_eq!(count(2.0, 0.0), 3);
        assert_eq!(count(2.0, 2.0), 2);
        assert_eq!(count(-2.0, 2.0), 2);
        assert_eq!(count(0.0, -3.0), 3);
    }

    #[test]
    fn inside_images_sit_across_each_edge() {
        let images = reflect_position(Position::new(0.25, -0.5), UNIT).unwrap();
        let positions: Vec<_> = images.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0.25, 2.5),
                Position::new(1.75, -0.5),
                Position::new(0.25, -1.5),
                Position::new(-2.25, -0.5),
            ]
        );
    }

    #[test]
    fn edges_and_corners_belong_to_the_exterior() {
        let cases = [
            ((1.0, 0.0), Region::East),
            ((-1.0, 1.0), Region::NorthWest),
            ((0.3, -1.0), Region::South),
            ((1.0, 1.0), Region::NorthEast),
            ((0.0, 1.0), Region::North),
            ((-1.0, -0.2), Region::West),
        ];
        for ((x, y), expected) in cases {
            assert_eq!(
                Region::classify(Position::new(x, y), UNIT).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn source_on_an_edge_is_not_its_own_image() {
        let p = Position::new(1.0, 0.0);
        let images: Vec<_> = reflect_position(p, UNIT)
            .unwrap()
            .into_iter()
            .map(|(_, image)| image)
            .collect();
        assert_eq!(
            images,
            vec![
                Position::new(1.0, 2.0),
                Position::new(1.0, -2.0),
                Position::new(-3.0, 0.0),
            ]
        );
    }

    #[test]
    fn east_source_is_not_mirrored_across_right_edge() {
        let r = Region::classify(Position::new(2.0, 0.5), UNIT).unwrap();
        assert_eq!(r, Region::East);
        assert!(!r.mirror_edges().contains(&Edge::Right));
    }

    #[test]
    fn nan_is_an_invariant_violation() {
        assert!(Region::classify(Position::new(f64::NAN, 0.0), UNIT).is_err());
    }

    proptest! {
        #[test]
        fn every_finite_point_is_classified(
            x in -4.0f64..4.0,
            y in -4.0f64..4.0,
            hx in 0.1f64..2.0,
            hy in 0.1f64..2.0,
        ) {
            let half = HalfExtent { x: hx, y: hy };
            let region = Region::classify(Position::new(x, y), half).unwrap();
            let expected = match region {
                Region::Inside => 4,
                Region::North | Region::East | Region::South | Region::West => 3,
                _ => 2,
            };
            prop_assert_eq!(region.mirror_edges().len(), expected);
        }

        #[test]
        fn mirroring_twice_is_identity(x in -4.0f64..4.0, y in -4.0f64..4.0) {
            let p = Position::new(x, y);
            for edge in [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left] {
                let back = edge.mirror(edge.mirror(p, UNIT), UNIT);
                prop_assert!((back.x - p.x).abs() < 1e-12);
                prop_assert!((back.y - p.y).abs() < 1e-12);
            }
        }

        #[test]
        fn images_are_never_the_source(
            x in prop_oneof![Just(1.0f64), Just(-1.0f64), -4.0f64..4.0],
            y in prop_oneof![Just(1.0f64), Just(-1.0f64), -4.0f64..4.0],
        ) {
            let p = Position::new(x, y);
            for (_, image) in reflect_position(p, UNIT).unwrap() {
                prop_assert!(image != p);
            }
        }
    }
}
