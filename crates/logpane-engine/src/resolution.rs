//! Resolution-based down-sampling.
//!
//! Long, densely packed row sets are thinned for display without discarding
//! anything from the underlying sequence: the stride only gates which indices
//! render. Strides are rounded to quarter-integer granularity so that the
//! visible-row count tracks the target resolution more smoothly than integer
//! strides would.

/// Round a raw stride to quarter-integer granularity
pub fn resolution_rounding(num: f64) -> f64 {
    let decimal = num - num.floor();
    if decimal < 0.25 {
        num.floor()
    } else if decimal <= 0.5 {
        num.floor() + 0.5
    } else if decimal <= 0.75 {
        num.floor() + 0.75
    } else {
        num.ceil()
    }
}

/// Stride for a row set of `len` rows against a target resolution.
/// An absent or non-positive resolution disables sampling (stride 1).
pub fn calculate_stride(resolution: Option<f64>, len: usize) -> f64 {
    match resolution {
        Some(r) if r > 0.0 => resolution_rounding(len as f64 / r),
        _ => 1.0,
    }
}

/// Whether the row at `index` survives sampling. The stride may be
/// fractional, so the modulo is taken in real arithmetic: a stride of 1.5
/// renders roughly two of every three rows rather than strictly alternating.
pub fn is_sampled(index: usize, stride: f64) -> bool {
    (index as f64) % stride <= 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_rounding_bands() {
        assert_eq!(resolution_rounding(2.0), 2.0);
        assert_eq!(resolution_rounding(2.2), 2.0); // f < 0.25
        assert_eq!(resolution_rounding(2.25), 2.5); // 0.25 <= f <= 0.5
        assert_eq!(resolution_rounding(2.5), 2.5);
        assert_eq!(resolution_rounding(2.6), 2.75); // 0.5 < f <= 0.75
        assert_eq!(resolution_rounding(2.75), 2.75);
        assert_eq!(resolution_rounding(2.8), 3.0); // f > 0.75
    }

    #[test]
    fn test_absent_or_non_positive_resolution_disables_sampling() {
        assert_eq!(calculate_stride(None, 1000), 1.0);
        assert_eq!(calculate_stride(Some(0.0), 1000), 1.0);
        assert_eq!(calculate_stride(Some(-5.0), 1000), 1.0);

        let stride = calculate_stride(None, 1000);
        assert!((0..1000).all(|i| is_sampled(i, stride)));
    }

    #[test]
    fn test_stride_one_keeps_every_row() {
        assert!((0..100).all(|i| is_sampled(i, 1.0)));
    }

    #[test]
    fn test_hundred_rows_at_resolution_forty() {
        // 100 / 40 = 2.5 exactly, already on the quarter grid
        let stride = calculate_stride(Some(40.0), 100);
        assert_eq!(stride, 2.5);

        let rendered = (0..100).filter(|&i| is_sampled(i, stride)).count();
        assert_eq!(rendered, 40);
    }

    #[test]
    fn test_fractional_stride_is_not_simple_skipping() {
        // Stride 2.5 keeps indices 0 and 3 of every 5, not every other row
        let kept: Vec<usize> = (0..10).filter(|&i| is_sampled(i, 2.5)).collect();
        assert_eq!(kept, vec![0, 3, 5, 8]);
    }

    #[test]
    fn test_stride_below_one_keeps_every_row() {
        // Fewer rows than slots: 10 / 40 rounds to 0.5 and nothing is dropped
        let stride = calculate_stride(Some(40.0), 10);
        assert_eq!(stride, 0.5);
        assert!((0..10).all(|i| is_sampled(i, stride)));
    }

    #[test]
    fn test_rendered_count_tracks_resolution() {
        for (len, resolution) in [(1000, 100.0), (500, 120.0), (750, 200.0)] {
            let stride = calculate_stride(Some(resolution), len);
            let rendered = (0..len).filter(|&i| is_sampled(i, stride)).count() as f64;
            let target = len as f64 / stride.max(1.0);
            // Quarter-grid strides keep the rendered count near len / stride
            assert!((rendered - target).abs() <= target * 0.25 + 1.0);
        }
    }
}
