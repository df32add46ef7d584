use crate::math::{Point2, Vector2};

/// Classification of an outline node.
///
/// The type describes the segment arriving at the node in traversal order:
/// - `Line`: on-curve, reached by a straight segment
/// - `Curve`: on-curve, reached by a cubic segment
/// - `OffCurve`: Bézier control point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Line,
    Curve,
    OffCurve,
}

/// How a node joins the segments on either side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// Corner point; the segments may meet at any angle.
    Sharp,
    /// Tangent-continuous point.
    Smooth,
}

/// A single outline node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub position: Point2,
    pub node_type: NodeType,
    pub connection: Connection,
}

impl Node {
    /// Creates a sharp node of the given type.
    #[must_use]
    pub fn new(x: f64, y: f64, node_type: NodeType) -> Self {
        Self {
            position: Point2::new(x, y),
            node_type,
            connection: Connection::Sharp,
        }
    }

    /// Creates a sharp line node.
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::Line)
    }

    /// Creates a sharp curve node.
    #[must_use]
    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::Curve)
    }

    /// Creates an off-curve control point.
    #[must_use]
    pub fn off_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::OffCurve)
    }

    /// Returns the same node with the given connection mode.
    #[must_use]
    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connection = connection;
        self
    }

    /// True for `Line` and `Curve` nodes, false for `OffCurve`.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        self.node_type != NodeType::OffCurve
    }

    /// Returns a copy moved by `offset`; type and connection are kept.
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self {
            position: self.position + offset,
            ..*self
        }
    }
}
