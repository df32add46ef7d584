use slotmap::SlotMap;

use crate::error::LayerError;
use crate::math::Point2;
use crate::outline::Outline;
use crate::selection::Selection;
use crate::session::DragSession;

slotmap::new_key_type! {
    /// Unique identifier for an outline on a layer.
    pub struct OutlineId;
}

/// Owns the outlines of one glyph layer.
///
/// Outlines live behind generational keys, so a host can keep ids across
/// edits without dangling references; a removed outline's id simply stops
/// resolving.
#[derive(Debug, Default)]
pub struct Layer {
    outlines: SlotMap<OutlineId, Outline>,
}

impl Layer {
    /// Creates a new, empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an outline and returns its id.
    pub fn add_outline(&mut self, outline: Outline) -> OutlineId {
        self.outlines.insert(outline)
    }

    /// Returns a reference to the outline, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if no outline with this id is on the layer.
    pub fn outline(&self, id: OutlineId) -> Result<&Outline, LayerError> {
        self.outlines.get(id).ok_or(LayerError::OutlineNotFound)
    }

    /// Returns a mutable reference to the outline, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if no outline with this id is on the layer.
    pub fn outline_mut(&mut self, id: OutlineId) -> Result<&mut Outline, LayerError> {
        self.outlines.get_mut(id).ok_or(LayerError::OutlineNotFound)
    }

    /// Removes an outline, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if no outline with this id is on the layer.
    pub fn remove_outline(&mut self, id: OutlineId) -> Result<Outline, LayerError> {
        self.outlines.remove(id).ok_or(LayerError::OutlineNotFound)
    }

    /// Swaps in a new outline under an existing id and returns the
    /// previous one, which the caller typically keeps for undo.
    ///
    /// # Errors
    ///
    /// Returns an error if no outline with this id is on the layer.
    pub fn replace_outline(
        &mut self,
        id: OutlineId,
        outline: Outline,
    ) -> Result<Outline, LayerError> {
        let slot = self.outlines.get_mut(id).ok_or(LayerError::OutlineNotFound)?;
        Ok(std::mem::replace(slot, outline))
    }

    /// Number of outlines on the layer.
    #[must_use]
    pub fn outline_count(&self) -> usize {
        self.outlines.len()
    }

    /// Iterates over all outlines with their ids.
    pub fn outlines(&self) -> impl Iterator<Item = (OutlineId, &Outline)> {
        self.outlines.iter()
    }

    /// Starts a drag on one of the layer's outlines.
    ///
    /// # Errors
    ///
    /// Returns a layer error if the id does not resolve, or a selection
    /// error if the selection is invalid for that outline.
    pub fn begin_drag(
        &self,
        id: OutlineId,
        selection: Selection,
        anchor: Point2,
    ) -> crate::error::Result<DragSession> {
        let outline = self.outline(id)?;
        DragSession::begin(outline, selection, anchor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GlyphexError;
    use crate::math::TOLERANCE;

    fn triangle() -> Outline {
        Outline::from_points(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(2.0, 3.0),
            ],
            true,
        )
    }

    fn square() -> Outline {
        Outline::from_points(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            true,
        )
    }

    #[test]
    fn add_and_look_up() {
        let mut layer = Layer::new();
        let id = layer.add_outline(triangle());

        assert_eq!(layer.outline_count(), 1);
        assert_eq!(layer.outline(id).unwrap().nodes.len(), 3);
    }

    #[test]
    fn outline_mut_edits_in_place() {
        let mut layer = Layer::new();
        let id = layer.add_outline(triangle());

        layer.outline_mut(id).unwrap().closed = false;
        assert!(!layer.outline(id).unwrap().closed);
    }

    #[test]
    fn removed_id_stops_resolving() {
        let mut layer = Layer::new();
        let id = layer.add_outline(triangle());
        let removed = layer.remove_outline(id).unwrap();

        assert_eq!(removed.nodes.len(), 3);
        assert_eq!(layer.outline_count(), 0);
        assert!(matches!(layer.outline(id), Err(LayerError::OutlineNotFound)));
        assert!(matches!(
            layer.remove_outline(id),
            Err(LayerError::OutlineNotFound)
        ));
    }

    #[test]
    fn null_id_does_not_resolve() {
        let layer = Layer::new();
        assert!(layer.outline(OutlineId::default()).is_err());
    }

    #[test]
    fn replace_returns_previous_for_undo() {
        let mut layer = Layer::new();
        let id = layer.add_outline(triangle());

        let previous = layer.replace_outline(id, square()).unwrap();
        assert_eq!(previous.nodes.len(), 3);
        assert_eq!(layer.outline(id).unwrap().nodes.len(), 4);

        // Undo: put the previous outline back.
        let redone = layer.replace_outline(id, previous).unwrap();
        assert_eq!(redone.nodes.len(), 4);
        assert_eq!(layer.outline(id).unwrap().nodes.len(), 3);
    }

    #[test]
    fn iter_visits_all_outlines() {
        let mut layer = Layer::new();
        layer.add_outline(triangle());
        layer.add_outline(square());

        let total_nodes: usize = layer.outlines().map(|(_, o)| o.nodes.len()).sum();
        assert_eq!(total_nodes, 7);
    }

    #[test]
    fn begin_drag_runs_against_the_stored_outline() {
        let mut layer = Layer::new();
        let id = layer.add_outline(square());

        let session = layer
            .begin_drag(id, Selection::new(0, 1), Point2::new(5.0, -1.0))
            .unwrap();
        let result = session.update(Point2::new(8.0, -1.0)).unwrap();

        assert!((result.effective_distance - 3.0).abs() < TOLERANCE);
        // The stored outline itself is untouched until the host commits.
        assert_eq!(layer.outline(id).unwrap().nodes.len(), 4);
    }

    #[test]
    fn begin_drag_with_unknown_id_fails() {
        let layer = Layer::new();
        let err = layer
            .begin_drag(OutlineId::default(), Selection::new(0, 1), Point2::new(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            GlyphexError::Layer(LayerError::OutlineNotFound)
        ));
    }

    #[test]
    fn commit_via_replace_round_trip() {
        let mut layer = Layer::new();
        let id = layer.add_outline(square());

        let session = layer
            .begin_drag(id, Selection::new(0, 1), Point2::new(0.0, 0.0))
            .unwrap();
        let dragged = session.commit(Point2::new(5.0, 0.0)).unwrap();

        let before = layer.replace_outline(id, dragged).unwrap();
        assert_eq!(before.nodes.len(), 4);
        assert_eq!(layer.outline(id).unwrap().nodes.len(), 6);
    }
}
