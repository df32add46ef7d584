mod node;

pub use node::{Connection, Node, NodeType};

use crate::math::{polygon, Point2};

/// Winding direction of a closed outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDirection {
    Clockwise,
    CounterClockwise,
}

impl PathDirection {
    /// `+1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// A glyph outline: an ordered node sequence in winding order.
///
/// For closed outlines the last node connects back to the first. Node
/// types describe the segment arriving at each node, so a cubic segment
/// is stored as two `OffCurve` controls followed by a `Curve` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub nodes: Vec<Node>,
    pub closed: bool,
}

impl Outline {
    /// Creates an outline from a node sequence.
    #[must_use]
    pub fn new(nodes: Vec<Node>, closed: bool) -> Self {
        Self { nodes, closed }
    }

    /// Creates an all-line outline from bare points.
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        let nodes = points.iter().map(|p| Node::line(p.x, p.y)).collect();
        Self { nodes, closed }
    }

    /// Returns the number of segments in this outline.
    ///
    /// Off-curve controls do not start segments of their own; the count is
    /// over node slots, matching the node-partition view of the outline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.nodes.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Node positions in traversal order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point2> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    /// Signed shoelace area over the node ring, off-curve controls
    /// included. Positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        polygon::signed_area(&self.positions())
    }

    /// Winding direction from the shoelace sign; a non-negative area is
    /// counter-clockwise.
    #[must_use]
    pub fn direction(&self) -> PathDirection {
        if self.signed_area() >= 0.0 {
            PathDirection::CounterClockwise
        } else {
            PathDirection::Clockwise
        }
    }

    /// Returns a new outline with nodes in reverse order and arrival types
    /// reassigned to the segments they now terminate.
    ///
    /// The type recorded on an on-curve node describes the segment from the
    /// previous on-curve node, so after reversal that segment's type lands
    /// on its other endpoint. Off-curve controls stay off-curve; the first
    /// node of a reversed open outline has no incoming segment and becomes
    /// a line node.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let n = self.nodes.len();
        if n == 0 {
            return self.clone();
        }
        let mut new_nodes = Vec::with_capacity(n);
        for j in 0..n {
            let i = n - 1 - j;
            let node = self.nodes[i];
            let node_type = if node.is_on_curve() {
                self.next_on_curve_type(i).unwrap_or(NodeType::Line)
            } else {
                NodeType::OffCurve
            };
            new_nodes.push(Node { node_type, ..node });
        }
        Self {
            nodes: new_nodes,
            closed: self.closed,
        }
    }

    /// Arrival type of the next on-curve node after `index` in traversal
    /// order, wrapping for closed outlines.
    fn next_on_curve_type(&self, index: usize) -> Option<NodeType> {
        let n = self.nodes.len();
        if self.closed {
            for step in 1..=n {
                let node = &self.nodes[(index + step) % n];
                if node.is_on_curve() {
                    return Some(node.node_type);
                }
            }
            None
        } else {
            self.nodes[index + 1..]
                .iter()
                .find(|node| node.is_on_curve())
                .map(|node| node.node_type)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square_ccw() -> Outline {
        Outline::from_points(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)], true)
    }

    #[test]
    fn from_points_builds_sharp_lines() {
        let outline = unit_square_ccw();
        assert_eq!(outline.nodes.len(), 4);
        for node in &outline.nodes {
            assert_eq!(node.node_type, NodeType::Line);
            assert_eq!(node.connection, Connection::Sharp);
        }
    }

    #[test]
    fn segment_count_closed_and_open() {
        let mut outline = unit_square_ccw();
        assert_eq!(outline.segment_count(), 4);
        outline.closed = false;
        assert_eq!(outline.segment_count(), 3);
    }

    #[test]
    fn segment_count_degenerate() {
        assert_eq!(Outline::new(vec![], true).segment_count(), 0);
        assert_eq!(Outline::new(vec![Node::line(0.0, 0.0)], true).segment_count(), 0);
    }

    #[test]
    fn signed_area_and_direction() {
        let ccw = unit_square_ccw();
        assert!((ccw.signed_area() - 1.0).abs() < TOLERANCE);
        assert_eq!(ccw.direction(), PathDirection::CounterClockwise);

        let cw = ccw.reversed();
        assert!((cw.signed_area() + 1.0).abs() < TOLERANCE);
        assert_eq!(cw.direction(), PathDirection::Clockwise);
    }

    #[test]
    fn direction_sign() {
        assert!((PathDirection::CounterClockwise.sign() - 1.0).abs() < TOLERANCE);
        assert!((PathDirection::Clockwise.sign() + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn reversed_reverses_positions() {
        let outline = unit_square_ccw();
        let rev = outline.reversed();
        assert_eq!(rev.nodes.len(), 4);
        assert!((rev.nodes[0].position.x).abs() < TOLERANCE);
        assert!((rev.nodes[0].position.y - 1.0).abs() < TOLERANCE);
        assert!((rev.nodes[3].position.x).abs() < TOLERANCE);
        assert!((rev.nodes[3].position.y).abs() < TOLERANCE);
    }

    #[test]
    fn reversed_reassigns_curve_types() {
        // P -(cubic via c1, c2)-> Q -(line)-> R -(line)-> P
        let outline = Outline::new(
            vec![
                Node::line(0.0, 0.0),      // P
                Node::off_curve(0.0, 1.0), // c1
                Node::off_curve(1.0, 2.0), // c2
                Node::curve(2.0, 2.0),     // Q
                Node::line(2.0, 0.0),      // R
            ],
            true,
        );
        let rev = outline.reversed();
        // Reversed order: R, Q, c2, c1, P.
        assert_eq!(rev.nodes[0].node_type, NodeType::Line); // R, line from P
        assert_eq!(rev.nodes[1].node_type, NodeType::Line); // Q, line from R
        assert_eq!(rev.nodes[2].node_type, NodeType::OffCurve);
        assert_eq!(rev.nodes[3].node_type, NodeType::OffCurve);
        assert_eq!(rev.nodes[4].node_type, NodeType::Curve); // P, cubic from Q
    }

    #[test]
    fn reversed_twice_restores_closed_outline() {
        let outline = Outline::new(
            vec![
                Node::line(0.0, 0.0),
                Node::off_curve(0.0, 1.0),
                Node::off_curve(1.0, 2.0),
                Node::curve(2.0, 2.0),
                Node::line(2.0, 0.0),
            ],
            true,
        );
        assert_eq!(outline.reversed().reversed(), outline);
    }

    #[test]
    fn reversed_open_outline_starts_with_line() {
        let outline = Outline::new(
            vec![
                Node::line(0.0, 0.0),
                Node::off_curve(0.0, 1.0),
                Node::off_curve(1.0, 2.0),
                Node::curve(2.0, 2.0),
            ],
            false,
        );
        let rev = outline.reversed();
        assert_eq!(rev.nodes[0].node_type, NodeType::Line);
        assert_eq!(rev.nodes[3].node_type, NodeType::Curve);
    }

    #[test]
    fn reversed_empty_is_noop() {
        let outline = Outline::new(vec![], true);
        assert_eq!(outline.reversed().nodes.len(), 0);
    }
}
