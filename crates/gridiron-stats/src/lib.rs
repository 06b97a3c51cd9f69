//! Statistical utilities for the Gridiron box score toolkit.
//!
//! This crate provides the numeric building blocks used to summarize
//! football scores:
//!
//! - **Descriptive statistics**: count, mean, sample standard deviation,
//!   min, quartiles and max of a dataset
//! - **Percentiles**: linearly interpolated percentile values
//! - **Frequency tables**: occurrence counts and proportions of discrete values
//!
//! Statistics that are undefined for the given input (anything but `count`
//! on an empty dataset, the standard deviation of fewer than two values) are
//! reported as `None`, never as zero.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Interpolated percentile computation
//! - [`frequency`]: Frequency tables over discrete values
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use gridiron_stats::descriptive::DescriptiveStats;
//!
//! let values = [10.0, 20.0, 30.0];
//! let stats = DescriptiveStats::new(values);
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.mean, Some(20.0));
//! assert_eq!(stats.median, Some(20.0));
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use gridiron_stats::percentiles::compute_percentile;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(compute_percentile(&values, 50.0), Some(3.0));
//! assert_eq!(compute_percentile(&values, 25.0), Some(2.0));
//! ```
//!
//! ## Counting values
//!
//! ```
//! use gridiron_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::new([3, 7, 7, 10]);
//! assert_eq!(table.count(7), 2);
//! assert_eq!(table.proportion(7), Some(0.5));
//! ```

pub mod descriptive;
pub mod frequency;
pub mod percentiles;
