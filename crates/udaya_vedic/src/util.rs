//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// True modulo: negative inputs wrap forward, and a result that rounds up to
/// exactly 360 (e.g. `-1e-15`) is folded back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward arc from `from` to `to`, in [0, 360).
pub fn arc_forward(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}
