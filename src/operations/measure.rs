use crate::error::{Result, SelectionError};
use crate::math::{angle, polygon, Point2};
use crate::outline::Outline;
use crate::selection::Selection;

/// Arithmetic mean of the selected nodes' positions.
///
/// The usual anchor for live feedback while dragging.
///
/// # Errors
///
/// Returns `SelectionError` under the same conditions as the extrusion
/// engine: degenerate outline, out-of-range boundary index, whole-outline
/// selection on a closed outline.
pub fn selection_midpoint(outline: &Outline, selection: Selection) -> Result<Point2> {
    selection.validate(outline)?;
    let points: Vec<Point2> = selection
        .indices(outline.nodes.len())
        .map(|i| outline.nodes[i].position)
        .collect();
    Ok(polygon::mean_point(&points).ok_or(SelectionError::Empty)?)
}

/// Default extrusion angle for a selection: the right-hand normal of the
/// chord from the first to the last selected node, in `[0, 2π)`.
///
/// On a counter-clockwise outline this points out of the glyph; on a
/// clockwise one it points in, which callers counteract with the winding
/// sign (see `DragSession`). A single-node selection has a degenerate
/// chord and yields the downward axis.
///
/// # Errors
///
/// Same conditions as [`selection_midpoint`].
pub fn extrusion_axis(outline: &Outline, selection: Selection) -> Result<f64> {
    selection.validate(outline)?;
    let first = outline.nodes[selection.start].position;
    let last = outline.nodes[selection.end].position;
    Ok(angle::chord_normal(first, last))
}
