use crate::error::Result;
use crate::math::{angle, Point2};
use crate::operations::{
    extrusion_axis, selection_midpoint, DetachSelection, Extrude, ExtrudeParams, Extrusion,
};
use crate::outline::Outline;
use crate::selection::Selection;

/// Captured state of one interactive extrude drag.
///
/// `begin` detaches the selection and freezes everything a drag needs:
/// the working outline, the re-indexed selection, the extrusion axis, the
/// midpoint anchor, and the winding sign. Every `update` recomputes the
/// result from this frozen state, so pointer jitter never accumulates.
/// The session is a plain value; dropping it abandons the drag.
#[derive(Debug, Clone)]
pub struct DragSession {
    outline: Outline,
    selection: Selection,
    anchor: Point2,
    axis: f64,
    midpoint: Point2,
    drag_sign: f64,
    quantization: f64,
}

impl DragSession {
    /// Starts a drag: validates the selection, detaches it, and captures
    /// the drag-start state.
    ///
    /// `anchor` is the pointer position at mouse-down; tracked distance
    /// is the horizontal travel from it.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError` if the selection is invalid for the
    /// outline or a run boundary is an off-curve control point.
    pub fn begin(outline: &Outline, selection: Selection, anchor: Point2) -> Result<Self> {
        let detached = DetachSelection::new(outline.clone(), selection).execute()?;
        let axis = extrusion_axis(&detached.outline, detached.selection)?;
        let midpoint = selection_midpoint(&detached.outline, detached.selection)?;
        let drag_sign = detached.outline.direction().sign();

        Ok(Self {
            outline: detached.outline,
            selection: detached.selection,
            anchor,
            axis,
            midpoint,
            drag_sign,
            quantization: 0.0,
        })
    }

    /// Returns the same session with a snapping step for the distance.
    #[must_use]
    pub fn with_quantization(mut self, step: f64) -> Self {
        self.quantization = step;
        self
    }

    /// The detached working outline at drag-start positions.
    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The selection re-indexed into the working outline.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The extrusion axis in `[0, 2π)`, fixed at drag-start.
    #[must_use]
    pub fn axis(&self) -> f64 {
        self.axis
    }

    /// Mean of the selected nodes at drag-start, the feedback anchor.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.midpoint
    }

    /// Recomputes the extrusion for the current pointer position.
    ///
    /// Horizontal travel from the anchor, multiplied by the winding sign,
    /// is the distance along the axis; rightward drag extrudes outward
    /// for either winding. Travel against the axis flips the angle by
    /// half a turn so the distance stays non-negative.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` if the configured quantization step is
    /// invalid.
    pub fn update(&self, pointer: Point2) -> Result<Extrusion> {
        let travel = (pointer.x - self.anchor.x) * self.drag_sign;
        let (direction, distance) = if travel < 0.0 {
            (angle::opposite(self.axis), -travel)
        } else {
            (self.axis, travel)
        };
        let params = ExtrudeParams::new(direction, distance).with_quantization(self.quantization);
        Extrude::new(self.outline.clone(), self.selection, params).execute()
    }

    /// Ends the drag, consuming the session.
    ///
    /// Returns the outline for the final pointer position; the caller
    /// owns committing it (and the undo entry for the previous outline).
    ///
    /// # Errors
    ///
    /// Same conditions as [`DragSession::update`].
    pub fn commit(self, pointer: Point2) -> Result<Outline> {
        Ok(self.update(pointer)?.outline)
    }
}
