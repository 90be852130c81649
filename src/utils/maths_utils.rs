/// Rounds to the nearest integer, with ties going towards positive infinity.
///
/// `f64::round` sends ties away from zero, which disagrees for negative halves
/// (-2.5 -> -3). Displayed figures use the half-up convention throughout.
#[inline]
pub fn round_half_up(val: f64) -> f64 {
    let floor = val.floor();
    if val - floor >= 0.5 { floor + 1.0 } else { floor }
}
