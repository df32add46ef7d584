use crate::error::{ParameterError, Result};
use crate::math::{angle, quantize, Vector2};
use crate::outline::Outline;
use crate::selection::Selection;

/// Angle, distance, and snapping step of an extrusion.
///
/// The angle is in radians, standard position: the offset direction is
/// `(cos angle, sin angle)`. Distance must be non-negative; a drag that
/// moves against the axis is expressed by flipping the angle half a turn.
/// A quantization step of `0` disables snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    pub angle: f64,
    pub distance: f64,
    pub quantization: f64,
}

impl ExtrudeParams {
    /// Creates unquantized parameters.
    #[must_use]
    pub fn new(angle: f64, distance: f64) -> Self {
        Self {
            angle,
            distance,
            quantization: 0.0,
        }
    }

    /// Returns the same parameters with a snapping step.
    #[must_use]
    pub fn with_quantization(mut self, step: f64) -> Self {
        self.quantization = step;
        self
    }

    /// Distance after snapping to the quantization step.
    #[must_use]
    pub fn effective_distance(&self) -> f64 {
        quantize::snap_to_step(self.distance, self.quantization)
    }

    /// Offset vector: `(cos angle, sin angle)` scaled by the effective
    /// distance.
    #[must_use]
    pub fn offset(&self) -> Vector2 {
        angle::unit_vector(self.angle) * self.effective_distance()
    }

    fn validate(&self) -> Result<()> {
        if !self.angle.is_finite() {
            return Err(ParameterError::NonFinite {
                parameter: "angle",
                value: self.angle,
            }
            .into());
        }
        if !self.distance.is_finite() {
            return Err(ParameterError::NonFinite {
                parameter: "distance",
                value: self.distance,
            }
            .into());
        }
        if self.distance < 0.0 {
            return Err(ParameterError::NegativeDistance(self.distance).into());
        }
        if !self.quantization.is_finite() {
            return Err(ParameterError::NonFinite {
                parameter: "quantization",
                value: self.quantization,
            }
            .into());
        }
        if self.quantization < 0.0 {
            return Err(ParameterError::NegativeQuantization(self.quantization).into());
        }
        Ok(())
    }
}

/// Result of an extrusion.
#[derive(Debug, Clone)]
pub struct Extrusion {
    /// The translated outline; same node count, order, types, and
    /// connections as the input.
    pub outline: Outline,
    /// The distance actually applied, after quantization.
    pub effective_distance: f64,
    /// True when the translation flipped the winding sign of a closed
    /// outline. Advisory only; the outline is still returned.
    pub crosses_bounds: bool,
}

/// Translates the selected run of an outline along a fixed angle.
///
/// The operation is pure: it reads the input outline and returns a new
/// one. Only the positions of the selected nodes change; everything else
/// is carried over untouched.
///
/// Parameters are validated before the selection, and both before any
/// node is read.
#[derive(Debug)]
pub struct Extrude {
    outline: Outline,
    selection: Selection,
    params: ExtrudeParams,
}

impl Extrude {
    /// Creates a new extrude operation.
    #[must_use]
    pub fn new(outline: Outline, selection: Selection, params: ExtrudeParams) -> Self {
        Self {
            outline,
            selection,
            params,
        }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// - `ParameterError` if the distance or step is negative, or any
    ///   parameter is non-finite
    /// - `SelectionError` if the outline is degenerate, a boundary index
    ///   is out of range, or a closed outline is selected in full
    pub fn execute(&self) -> Result<Extrusion> {
        self.params.validate()?;
        self.selection.validate(&self.outline)?;

        let offset = self.params.offset();
        let area_before = self.outline.signed_area();

        let mut nodes = self.outline.nodes.clone();
        for index in self.selection.indices(nodes.len()) {
            nodes[index] = nodes[index].translated(offset);
        }
        let outline = Outline::new(nodes, self.outline.closed);

        let crosses_bounds =
            self.outline.closed && winding_flipped(area_before, outline.signed_area());

        Ok(Extrusion {
            outline,
            effective_distance: self.params.effective_distance(),
            crosses_bounds,
        })
    }
}

/// True when the shoelace sign flipped. A collapse to zero area is not a
/// flip.
fn winding_flipped(area_before: f64, area_after: f64) -> bool {
    area_before * area_after < 0.0
}
