//! Easing helpers for the counter run.
//!
//! The counter curve is three exact segments over normalized progress p:
//! - p < 0.25: cubic ease-in, 4·p³
//! - p > 0.75: cubic ease-out over the last quarter,
//!   t = (p − 0.75)/0.25, 0.5 + 0.5·(1 − (1 − t)³)
//! - otherwise: identity (0.25 + (p − 0.25))
//!
//! The segments do not meet at the breakpoints (0.0625 vs 0.25 at p = 0.25,
//! 0.75 vs 0.5 at p = 0.75). Consumers rely on these exact formulas; do not
//! blend the seams.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map normalized progress to eased progress using the three-segment curve.
/// Input is clamped to [0, 1].
#[inline]
pub fn eased_progress(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.25 {
        4.0 * p * p * p
    } else if p > 0.75 {
        let t = (p - 0.75) / 0.25;
        let u = 1.0 - t;
        0.5 + 0.5 * (1.0 - u * u * u)
    } else {
        0.25 + (p - 0.25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn endpoints() {
        approx(eased_progress(0.0), 0.0, 1e-6);
        approx(eased_progress(1.0), 1.0, 1e-6);
    }

    #[test]
    fn clamps_out_of_range() {
        approx(eased_progress(-1.0), 0.0, 1e-6);
        approx(eased_progress(2.0), 1.0, 1e-6);
    }

    #[test]
    fn middle_is_identity() {
        approx(eased_progress(0.5), 0.5, 1e-6);
        approx(eased_progress(0.6), 0.6, 1e-6);
    }
}
