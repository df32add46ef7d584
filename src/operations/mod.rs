mod detach;
mod extrude;
mod measure;

pub use detach::{Detached, DetachSelection};
pub use extrude::{Extrude, ExtrudeParams, Extrusion};
pub use measure::{extrusion_axis, selection_midpoint};
