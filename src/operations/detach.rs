use crate::error::{Result, SelectionError};
use crate::outline::{Connection, Node, NodeType, Outline};
use crate::selection::Selection;

/// A detached outline and the selection re-indexed inside it.
#[derive(Debug, Clone)]
pub struct Detached {
    pub outline: Outline,
    pub selection: Selection,
}

/// Duplicates the selection's boundary nodes so the run can be pulled
/// away from the rest of the outline.
///
/// A copy of the first selected node is inserted just before the run and
/// a copy of the last just after it. The copies stay put; once the run is
/// translated, two straight rib segments connect it back to the static
/// arcs. The run's first node and the trailing copy become sharp line
/// nodes (their incoming segment is now a rib); the leading copy and the
/// run's last node keep their types and turn sharp.
///
/// Node count grows by exactly two; segment count is deliberately not
/// preserved. This composes with `Extrude`, which preserves both: detach
/// once when a drag starts, extrude on every update.
#[derive(Debug)]
pub struct DetachSelection {
    outline: Outline,
    selection: Selection,
}

impl DetachSelection {
    /// Creates a new detach operation.
    #[must_use]
    pub fn new(outline: Outline, selection: Selection) -> Self {
        Self { outline, selection }
    }

    /// Executes the detachment.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError` for the engine's usual selection
    /// conditions, and `SelectionError::OffCurveBoundary` if either end
    /// of the run is an off-curve control point, since a rib cannot start
    /// or end on a control.
    pub fn execute(&self) -> Result<Detached> {
        self.selection.validate(&self.outline)?;
        for index in [self.selection.start, self.selection.end] {
            if !self.outline.nodes[index].is_on_curve() {
                return Err(SelectionError::OffCurveBoundary { index }.into());
            }
        }

        let n = self.outline.nodes.len();
        let mut nodes = Vec::with_capacity(n + 2);
        let mut start = self.selection.start;
        let mut end = self.selection.end;
        let single = self.selection.count(n) == 1;

        for i in 0..n {
            if i == self.selection.start {
                let first = self.outline.nodes[i];
                nodes.push(first.with_connection(Connection::Sharp));
                start = nodes.len();
                nodes.push(rib_node(first));
                if single {
                    end = nodes.len() - 1;
                    nodes.push(rib_node(first));
                }
            } else if i == self.selection.end {
                let last = self.outline.nodes[i];
                end = nodes.len();
                nodes.push(last.with_connection(Connection::Sharp));
                nodes.push(rib_node(last));
            } else {
                nodes.push(self.outline.nodes[i]);
            }
        }

        Ok(Detached {
            outline: Outline::new(nodes, self.outline.closed),
            selection: Selection::new(start, end),
        })
    }
}

/// A sharp line copy of `node`: the arrival side of a rib segment.
fn rib_node(node: Node) -> Node {
    Node {
        node_type: NodeType::Line,
        connection: Connection::Sharp,
        ..node
    }
}
