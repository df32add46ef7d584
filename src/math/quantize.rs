/// Snaps `value` to the nearest multiple of `step`, rounding half away
/// from zero.
///
/// A step of `0` disables snapping and returns `value` unchanged. The
/// caller is expected to reject negative steps before calling.
#[must_use]
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    if step == 0.0 {
        return value;
    }
    (value / step).round() * step
}
