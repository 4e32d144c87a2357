//! Statistics primitives used by the region aggregator.
//!
//! `percentile` uses linear interpolation between the two closest order
//! statistics (rank = p/100 * (n - 1)), the same definition as numpy's default
//! `linear` method. Nearest-rank truncation is not equivalent for small
//! samples.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `p`-th percentile (0..=100, clamped) by linear interpolation.
/// `None` for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = rank - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Round to 2 decimal places (half away from zero on the scaled value).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert!(close(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5));
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        // rank = 0.95 * 3 = 2.85 -> 30 + 0.85 * 10
        let v = [40.0, 10.0, 30.0, 20.0];
        assert!(close(percentile(&v, 95.0).unwrap(), 38.5));
        assert!(close(percentile(&v, 50.0).unwrap(), 25.0));
        assert!(close(percentile(&v, 0.0).unwrap(), 10.0));
        assert!(close(percentile(&v, 100.0).unwrap(), 40.0));
    }

    #[test]
    fn percentile_edge_inputs() {
        assert_eq!(percentile(&[], 95.0), None);
        assert!(close(percentile(&[7.5], 95.0).unwrap(), 7.5));
        // out of range p is clamped
        assert!(close(percentile(&[1.0, 2.0], 250.0).unwrap(), 2.0));
        assert!(close(percentile(&[1.0, 2.0], -5.0).unwrap(), 1.0));
    }

    #[test]
    fn percentile_differs_from_nearest_rank() {
        let v: Vec<f64> = (1..=12).map(f64::from).collect();
        // rank 10.45 -> 11.45; nearest-rank would give 12
        assert!(close(percentile(&v, 95.0).unwrap(), 11.45));
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(169.834_166), 169.83);
        assert_eq!(round2(98.247_333), 98.25);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(-1.006), -1.01);
    }
}
