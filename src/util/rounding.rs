//! Magnitude rounding for coarse reporting (e.g. bucketed counts).

/// Truncate `n` toward zero, keeping only its leading digit.
///
/// Values with `|n| < 10` become 0. The fractional part is dropped first,
/// so `4321.235` and `4321.0` both give `4000`. NaN gives 0.
pub fn round_to_magnitude(n: f64) -> i64 {
    // `as` truncates toward zero and saturates; NaN maps to 0.
    let whole = n as i64;
    let magnitude = whole.unsigned_abs();
    if magnitude < 10 {
        return 0;
    }

    let tens = 10_i64.pow(magnitude.ilog10());
    (whole / tens) * tens
}
