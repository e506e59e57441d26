const TENTHS: f64 = 10.0;

/// Round to one decimal place, half away from zero. Every number a stats
/// struct exposes goes through this so repeated aggregation is bit-stable.
pub fn round_tenths(value: f64) -> f64 {
    let rounded = (value * TENTHS).round() / TENTHS;
    // Normalize -0.0 so zero games and zero scores compare equal.
    if rounded == 0.0 { 0.0 } else { rounded }
}
