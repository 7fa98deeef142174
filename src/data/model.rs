use std::collections::BTreeSet;
use std::fmt;

use anyhow::{bail, Result};

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch result, encoded as `1` (success) / `0` (failure) in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the integer `class` value.
    pub fn from_class(class: i64) -> Result<Self> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => bail!("class must be 0 or 1, got {other}"),
        }
    }

    /// The encoded value, used as scatter y coordinate and success count.
    pub fn value(self) -> u32 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the DataFrame
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Always finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Validate and build a record from raw column values.
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        class: i64,
        booster_version_category: impl Into<String>,
    ) -> Result<Self> {
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            bail!("payload mass must be a non-negative number, got {payload_mass_kg}");
        }
        Ok(LaunchRecord {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome: Outcome::from_class(class)?,
            booster_version_category: booster_version_category.into(),
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    /// All launches in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    pub sites: Vec<String>,
    /// Sorted set of distinct booster version categories.
    pub booster_categories: BTreeSet<String>,
    /// `(min, max)` payload mass; `None` for an empty dataset.
    pub payload_bounds: Option<(f64, f64)>,
}

impl LaunchDataset {
    /// Build the indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();
        let mut payload_bounds: Option<(f64, f64)> = None;

        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            booster_categories.insert(rec.booster_version_category.clone());

            let m = rec.payload_mass_kg;
            payload_bounds = Some(match payload_bounds {
                Some((lo, hi)) => (lo.min(m), hi.max(m)),
                None => (m, m),
            });
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of successful launches.
    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count()
    }
}
