/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the two closest ranks: for `n` values
/// the percentile `p` sits at fractional rank `(n - 1) * p / 100`, and the
/// result is interpolated between the values on either side of that rank.
/// Percentiles outside `0.0..=100.0` are clamped.
///
/// Returns `None` if the input is empty.
///
/// # Examples
///
/// ```
/// use gridiron_stats::percentiles::compute_percentile;
///
/// let values = vec![10.0, 20.0, 30.0, 40.0];
///
/// assert_eq!(compute_percentile(&values, 50.0), Some(25.0));
/// assert_eq!(compute_percentile(&values, 25.0), Some(17.5));
/// assert_eq!(compute_percentile(&[], 50.0), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted_values.len().checked_sub(1)?;
    let rank = last as f64 * percentile.clamp(0.0, 100.0) / 100.0;
    let lower = (rank.floor() as usize).min(last);
    let upper = (rank.ceil() as usize).min(last);
    let fraction = rank - rank.floor();
    let low_value = sorted_values[lower];
    let high_value = sorted_values[upper];
    Some(low_value + (high_value - low_value) * fraction)
}
