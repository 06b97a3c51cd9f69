use crate::percentiles::compute_percentile;

/// Descriptive statistics summarizing a dataset.
///
/// Mirrors the classic "describe" summary: count, mean, sample standard
/// deviation, minimum, quartiles and maximum.
///
/// Every field except `count` is `None` when the statistic is undefined for
/// the dataset:
///
/// - an empty dataset has no mean, spread, or order statistics
/// - a dataset with a single value has no sample standard deviation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean of the dataset.
    pub mean: Option<f64>,
    /// The sample standard deviation (denominator `n - 1`).
    pub std_dev: Option<f64>,
    /// The minimum value in the dataset.
    pub min: Option<f64>,
    /// The 25th percentile.
    pub lower_quartile: Option<f64>,
    /// The 50th percentile.
    pub median: Option<f64>,
    /// The 75th percentile.
    pub upper_quartile: Option<f64>,
    /// The maximum value in the dataset.
    pub max: Option<f64>,
}

impl DescriptiveStats {
    /// Statistics of an empty dataset.
    pub const EMPTY: Self = Self {
        count: 0,
        mean: None,
        std_dev: None,
        min: None,
        lower_quartile: None,
        median: None,
        upper_quartile: None,
        max: None,
    };

    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridiron_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values);
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, Some(1.0));
    /// assert_eq!(stats.max, Some(5.0));
    /// assert_eq!(stats.mean, Some(3.0));
    /// assert_eq!(stats.lower_quartile, Some(2.0));
    /// assert_eq!(stats.median, Some(3.0));
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridiron_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[]);
    /// assert_eq!(stats.count, 0);
    /// assert_eq!(stats.mean, None);
    ///
    /// let stats = DescriptiveStats::from_sorted(&[7.0]);
    /// assert_eq!(stats.mean, Some(7.0));
    /// assert_eq!(stats.std_dev, None);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self::EMPTY;
        };
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let std_dev = (count > 1).then(|| {
            let sum_sq = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        });

        Self {
            count,
            mean: Some(mean),
            std_dev,
            min: Some(min),
            lower_quartile: compute_percentile(sorted_values, 25.0),
            median: compute_percentile(sorted_values, 50.0),
            upper_quartile: compute_percentile(sorted_values, 75.0),
            max: Some(max),
        }
    }

    /// Computes descriptive statistics from integer scores.
    ///
    /// ```
    /// # use gridiron_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_integers([14_u32, 21, 7]);
    /// assert_eq!(stats.median, Some(14.0));
    /// ```
    #[must_use]
    pub fn from_integers<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self::new(values.into_iter().map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let stats = DescriptiveStats::new(Vec::<f64>::new());
        assert_eq!(stats, DescriptiveStats::EMPTY);
    }

    #[test]
    fn test_three_values() {
        let stats = DescriptiveStats::new([30.0, 10.0, 20.0]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, Some(20.0));
        assert_eq!(stats.min, Some(10.0));
        assert_eq!(stats.max, Some(30.0));
        assert_eq!(stats.median, Some(20.0));
        assert_eq!(stats.lower_quartile, Some(15.0));
        assert_eq!(stats.upper_quartile, Some(25.0));
        // sample variance = (100 + 0 + 100) / 2
        assert_eq!(stats.std_dev, Some(10.0));
    }

    #[test]
    fn test_single_value_has_no_spread() {
        let stats = DescriptiveStats::new([42.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, Some(42.0));
        assert_eq!(stats.std_dev, None);
        assert_eq!(stats.min, Some(42.0));
        assert_eq!(stats.median, Some(42.0));
        assert_eq!(stats.max, Some(42.0));
    }

    #[test]
    fn test_zero_spread_is_defined() {
        let stats = DescriptiveStats::new([3.0, 3.0]);
        assert_eq!(stats.std_dev, Some(0.0));
    }

    #[test]
    fn test_from_integers_matches_floats() {
        let from_ints = DescriptiveStats::from_integers([17_u32, 3, 24, 10]);
        let from_floats = DescriptiveStats::new([17.0, 3.0, 24.0, 10.0]);
        assert_eq!(from_ints, from_floats);
        assert_eq!(from_ints.median, Some(13.5));
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_unsorted_input_panics() {
        let _ = DescriptiveStats::from_sorted(&[2.0, 1.0]);
    }
}
