// ============================================================
// Layer 3 — Split Domain Types
// ============================================================
// The vocabulary of a split run:
//
//   SplitRatios — how big each subset should be (train/test/val)
//   Subset      — which of the three destinations a file goes to
//   Partition   — the actual three-way division of the file set
//   SplitReport — the counts of a finished run
//
// Reference: Rust Book §5 (Structs), §6 (Enums and Pattern Matching)

use crate::domain::error::SplitError;

/// Tolerance used when checking that the three ratios sum to 1.0.
/// 0.7 + 0.2 + 0.1 is not exactly 1.0 in floating point.
const RATIO_SUM_TOLERANCE: f64 = 1e-6;

// ─── SplitRatios ──────────────────────────────────────────────────────────────
/// Proportions of the file set assigned to each subset.
///
/// Always valid once constructed: every ratio is finite and
/// non-negative, and together they sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    train:      f64,
    test:       f64,
    validation: f64,
}

impl SplitRatios {
    /// The 70 / 20 / 10 split used when nothing else is configured.
    pub const DEFAULT: Self = Self { train: 0.7, test: 0.2, validation: 0.1 };

    /// Validate and build a set of ratios.
    ///
    /// # Example
    /// ```ignore
    /// let ratios = SplitRatios::new(0.8, 0.1, 0.1)?;
    /// ```
    pub fn new(train: f64, test: f64, validation: f64) -> Result<Self, SplitError> {
        for (name, value) in [("train", train), ("test", test), ("validation", validation)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SplitError::InvalidRatio { name, value });
            }
        }

        let sum = train + test + validation;
        if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(SplitError::RatioSum { sum });
        }

        Ok(Self { train, test, validation })
    }

    pub fn train(&self) -> f64 {
        self.train
    }

    pub fn test(&self) -> f64 {
        self.test
    }

    pub fn validation(&self) -> f64 {
        self.validation
    }

    /// Ratio for a given subset.
    pub fn of(&self, subset: Subset) -> f64 {
        match subset {
            Subset::Train      => self.train,
            Subset::Validation => self.validation,
            Subset::Test       => self.test,
        }
    }

    /// Compute subset sizes `(train, test, validation)` for `total` files.
    ///
    /// Training takes `round(train × total)`. The remainder is divided
    /// between test and validation in proportion `test : validation`,
    /// with validation taking the rounded share and test the rest.
    /// The three sizes always add up to `total`.
    pub fn sizes(&self, total: usize) -> (usize, usize, usize) {
        let n_train = round_share(total, self.train);
        let remaining = total - n_train;

        let held_out = self.test + self.validation;
        let n_val = if held_out > 0.0 {
            round_share(remaining, self.validation / held_out)
        } else {
            0
        };

        (n_train, remaining - n_val, n_val)
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `round(count × fraction)` clamped to `count`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn round_share(count: usize, fraction: f64) -> usize {
    ((count as f64 * fraction).round() as usize).min(count)
}

// ─── Subset ───────────────────────────────────────────────────────────────────
/// One of the three destinations of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subset {
    Train,
    Validation,
    Test,
}

impl Subset {
    /// All subsets, in the order their directories are prepared.
    pub const ALL: [Subset; 3] = [Subset::Train, Subset::Validation, Subset::Test];

    /// Name of the subset's folder under the destination root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Subset::Train      => "train",
            Subset::Validation => "val",
            Subset::Test       => "test",
        }
    }
}

impl std::fmt::Display for Subset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ─── Partition ────────────────────────────────────────────────────────────────
/// A three-way division of a file set.
///
/// Produced by the splitter; the three vectors are disjoint and
/// together hold every input item exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub train:      Vec<T>,
    pub test:       Vec<T>,
    pub validation: Vec<T>,
}

impl<T> Partition<T> {
    /// Items assigned to `subset`.
    pub fn get(&self, subset: Subset) -> &[T] {
        match subset {
            Subset::Train      => &self.train,
            Subset::Validation => &self.validation,
            Subset::Test       => &self.test,
        }
    }

    /// Total number of items across all three subsets.
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len() + self.validation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─── SplitReport ──────────────────────────────────────────────────────────────
/// Counts from a finished split run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitReport {
    pub total:      usize,
    pub train:      usize,
    pub test:       usize,
    pub validation: usize,
}

impl SplitReport {
    pub fn count(&self, subset: Subset) -> usize {
        match subset {
            Subset::Train      => self.train,
            Subset::Validation => self.validation,
            Subset::Test       => self.test,
        }
    }
}

impl<T> From<&Partition<T>> for SplitReport {
    fn from(p: &Partition<T>) -> Self {
        Self {
            total:      p.len(),
            train:      p.train.len(),
            test:       p.test.len(),
            validation: p.validation.len(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratios_are_valid() {
        let d = SplitRatios::default();
        assert!(SplitRatios::new(d.train(), d.test(), d.validation()).is_ok());
    }

    #[test]
    fn test_rejects_negative_ratio() {
        let err = SplitRatios::new(1.2, -0.2, 0.0).unwrap_err();
        assert!(matches!(err, SplitError::InvalidRatio { name: "test", .. }));
    }

    #[test]
    fn test_rejects_nan_ratio() {
        let err = SplitRatios::new(f64::NAN, 0.5, 0.5).unwrap_err();
        assert!(matches!(err, SplitError::InvalidRatio { name: "train", .. }));
    }

    #[test]
    fn test_rejects_bad_sum() {
        let err = SplitRatios::new(0.7, 0.2, 0.2).unwrap_err();
        assert!(matches!(err, SplitError::RatioSum { .. }));
    }

    #[test]
    fn test_sizes_for_ten_files() {
        assert_eq!(SplitRatios::DEFAULT.sizes(10), (7, 2, 1));
    }

    #[test]
    fn test_sizes_for_hundred_files() {
        assert_eq!(SplitRatios::DEFAULT.sizes(100), (70, 20, 10));
    }

    #[test]
    fn test_sizes_always_sum_to_total() {
        let ratios = SplitRatios::new(0.55, 0.3, 0.15).unwrap();
        for total in 0..200 {
            let (a, b, c) = ratios.sizes(total);
            assert_eq!(a + b + c, total, "total = {total}");
        }
    }

    #[test]
    fn test_sizes_with_no_held_out_share() {
        let ratios = SplitRatios::new(1.0, 0.0, 0.0).unwrap();
        assert_eq!(ratios.sizes(9), (9, 0, 0));
    }

    #[test]
    fn test_sizes_of_empty_set() {
        assert_eq!(SplitRatios::DEFAULT.sizes(0), (0, 0, 0));
    }

    #[test]
    fn test_subset_dir_names() {
        let names: Vec<&str> = Subset::ALL.iter().map(|s| s.dir_name()).collect();
        assert_eq!(names, ["train", "val", "test"]);
    }

    #[test]
    fn test_report_from_partition() {
        let p = Partition {
            train:      vec![1, 2, 3],
            test:       vec![4],
            validation: vec![5, 6],
        };
        let r = SplitReport::from(&p);
        assert_eq!(r.total, 6);
        assert_eq!(r.count(Subset::Train), 3);
        assert_eq!(r.count(Subset::Test), 1);
        assert_eq!(r.count(Subset::Validation), 2);
        assert_eq!(p.get(Subset::Validation), &[5, 6]);
    }
}
