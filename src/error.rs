use thiserror::Error;

/// Top-level error type for the Glyphex extrusion kernel.
#[derive(Debug, Error)]
pub enum GlyphexError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Layer(#[from] LayerError),
}

/// Errors for malformed or boundary-violating selections.
///
/// Every variant is raised during validation, before any node coordinate
/// is touched.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("selection is empty")]
    Empty,

    #[error("picked indices do not form a contiguous run of the outline")]
    NotContiguous,

    #[error("selection index {index} is out of range for an outline of {node_count} nodes")]
    OutOfRange { index: usize, node_count: usize },

    #[error("selection covers all {node_count} nodes of a closed outline")]
    WholeOutline { node_count: usize },

    #[error("outline has only {node_count} nodes")]
    DegenerateOutline { node_count: usize },

    #[error("selection boundary at index {index} is an off-curve control point")]
    OffCurveBoundary { index: usize },
}

/// Errors for out-of-contract extrusion parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("extrusion distance {0} is negative")]
    NegativeDistance(f64),

    #[error("quantization step {0} is negative")]
    NegativeQuantization(f64),

    #[error("parameter {parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to outline storage on a layer.
#[derive(Debug, Error)]
pub enum LayerError {
    #[error("outline not found in layer")]
    OutlineNotFound,
}

/// Convenience type alias for results using [`GlyphexError`].
pub type Result<T> = std::result::Result<T, GlyphexError>;
