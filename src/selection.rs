use crate::error::{Result, SelectionError};
use crate::outline::Outline;

/// A contiguous run of outline nodes, inclusive on both ends.
///
/// `start` and `end` are node indices in traversal order. On a closed
/// outline the run may wrap the index seam, in which case `start > end`;
/// traversal still goes forward from `start` through the seam to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Creates a selection from inclusive boundary indices.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Builds a selection from an unordered set of picked node indices.
    ///
    /// Duplicates are ignored. Picking every index of the outline yields
    /// the full run `0..=node_count-1`; whether that is legal depends on
    /// the outline and is checked by [`Selection::validate`].
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Empty` for an empty pick set,
    /// `SelectionError::OutOfRange` for an index past the outline, and
    /// `SelectionError::NotContiguous` if the picks do not form a single
    /// cyclic run.
    pub fn from_picked(picked: &[usize], node_count: usize) -> Result<Self> {
        if picked.is_empty() {
            return Err(SelectionError::Empty.into());
        }
        let mut sorted = picked.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for &index in &sorted {
            if index >= node_count {
                return Err(SelectionError::OutOfRange { index, node_count }.into());
            }
        }
        if sorted.len() == node_count {
            return Ok(Self::new(0, node_count - 1));
        }

        // A contiguous cyclic run that is not the full ring has exactly one
        // cyclic gap; the run starts just past it.
        let m = sorted.len();
        let mut gaps = 0;
        let mut run_start = 0;
        for k in 0..m {
            let cur = sorted[k];
            let next = sorted[(k + 1) % m];
            if (cur + 1) % node_count != next {
                gaps += 1;
                run_start = (k + 1) % m;
            }
        }
        if gaps != 1 {
            return Err(SelectionError::NotContiguous.into());
        }
        let start = sorted[run_start];
        let end = sorted[(run_start + m - 1) % m];
        Ok(Self::new(start, end))
    }

    /// True if the run crosses the index seam (`start > end`).
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Number of selected nodes on an outline of `node_count` nodes.
    #[must_use]
    pub fn count(&self, node_count: usize) -> usize {
        if self.wraps() {
            node_count - self.start + self.end + 1
        } else {
            self.end - self.start + 1
        }
    }

    /// True if `index` lies inside the run.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        if self.wraps() {
            index >= self.start || index <= self.end
        } else {
            index >= self.start && index <= self.end
        }
    }

    /// Selected indices in traversal order, seam wrap included.
    #[must_use]
    pub fn indices(&self, node_count: usize) -> impl Iterator<Item = usize> {
        let start = self.start;
        (0..self.count(node_count)).map(move |k| (start + k) % node_count)
    }

    /// Checks this selection against an outline.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::DegenerateOutline` if the outline is too
    /// small to extrude from (closed outlines need at least 3 nodes, open
    /// ones at least 2), `SelectionError::OutOfRange` if a boundary index
    /// is past the outline, and `SelectionError::WholeOutline` if every
    /// node of a closed outline is selected.
    pub fn validate(&self, outline: &Outline) -> Result<()> {
        let node_count = outline.nodes.len();
        let min_nodes = if outline.closed { 3 } else { 2 };
        if node_count < min_nodes {
            return Err(SelectionError::DegenerateOutline { node_count }.into());
        }
        for index in [self.start, self.end] {
            if index >= node_count {
                return Err(SelectionError::OutOfRange { index, node_count }.into());
            }
        }
        if outline.closed && self.count(node_count) == node_count {
            return Err(SelectionError::WholeOutline { node_count }.into());
        }
        Ok(())
    }
}
