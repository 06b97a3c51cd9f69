//! Random training/validation/testing partition

use rand::Rng;
use serde::Serialize;

/// Tenths of the data (out of 10) sent to the validation set.
const VALIDATION_TENTHS: u32 = 1;
/// Tenths of the data (out of 10) sent to the testing set.
const TESTING_TENTHS: u32 = 1;

/// A dataset split into three disjoint partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSplit<T> {
    pub training: Vec<T>,
    pub validation: Vec<T>,
    pub testing: Vec<T>,
}

impl<T> Default for DatasetSplit<T> {
    fn default() -> Self {
        Self {
            training: Vec::new(),
            validation: Vec::new(),
            testing: Vec::new(),
        }
    }
}

impl<T> DatasetSplit<T> {
    /// Total number of items over all partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.training.len() + self.validation.len() + self.testing.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assigns every item independently to a partition: about 10% validation,
/// 10% testing and 80% training.
///
/// Items keep their relative order inside each partition.
pub fn split_dataset<T, I, R>(items: I, rng: &mut R) -> DatasetSplit<T>
where
    I: IntoIterator<Item = T>,
    R: Rng,
{
    let mut split = DatasetSplit::default();
    for item in items {
        let draw = rng.random_range(0..10);
        if draw < VALIDATION_TENTHS {
            split.validation.push(item);
        } else if draw < VALIDATION_TENTHS + TESTING_TENTHS {
            split.testing.push(item);
        } else {
            split.training.push(item);
        }
    }
    split
}
