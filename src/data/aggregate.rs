use std::collections::HashMap;

use super::model::{LaunchDataset, Outcome};
use super::site::SiteSelector;

// ---------------------------------------------------------------------------
// Pie chart data
// ---------------------------------------------------------------------------

/// One slice of the success pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

impl PieSlice {
    fn new(label: impl Into<String>, value: usize) -> Self {
        PieSlice {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Group launches for the pie chart.
///
/// * [`SiteSelector::All`]: one `(site, success count)` slice per distinct
///   site, in first-appearance order.
/// * A specific site: one `(outcome, count)` slice per outcome present at
///   that site, most frequent first. No launches at the site → no slices.
pub fn aggregate(dataset: &LaunchDataset, selector: SiteSelector) -> Vec<PieSlice> {
    match selector.site_name() {
        None => {
            let mut successes: HashMap<&str, usize> = HashMap::new();
            for r in &dataset.records {
                *successes.entry(r.launch_site.as_str()).or_default() +=
                    usize::from(r.outcome == Outcome::Success);
            }
            dataset
                .sites
                .iter()
                .map(|site| {
                    let n = successes.get(site.as_str()).copied().unwrap_or(0);
                    PieSlice::new(site.as_str(), n)
                })
                .collect()
        }
        Some(name) => {
            let mut counts = [(Outcome::Failure, 0usize), (Outcome::Success, 0usize)];
            for r in dataset.records.iter().filter(|r| r.launch_site == name) {
                counts[r.outcome.value() as usize].1 += 1;
            }
            // Stable sort keeps Failure before Success on equal counts.
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            counts
                .into_iter()
                .filter(|&(_, n)| n > 0)
                .map(|(outcome, n)| PieSlice::new(outcome.to_string(), n))
                .collect()
        }
    }
}

pub fn pie_title(selector: SiteSelector) -> String {
    match selector.site_name() {
        None => "Total Success Launches per Launch Site".to_string(),
        Some(name) => format!("Total Success Launches for Site: {name}"),
    }
}

/// [`aggregate`] plus the chart title.
pub fn pie_chart(dataset: &LaunchDataset, selector: SiteSelector) -> PieChart {
    let slices = aggregate(dataset, selector);
    log::debug!("pie chart for {selector}: {} slices", slices.len());
    PieChart {
        title: pie_title(selector),
        slices,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::data::model::tests::{four_site_dataset, sample_dataset};
    use crate::data::model::LaunchRecord;
    use crate::data::site::LaunchSite;

    fn site(s: LaunchSite) -> SiteSelector {
        SiteSelector::Site(s)
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let slices = aggregate(&sample_dataset(), SiteSelector::All);
        assert_eq!(
            slices,
            vec![PieSlice::new("CCAFS LC-40", 1), PieSlice::new("KSC LC-39A", 1)]
        );
    }

    #[test]
    fn all_sites_keeps_sites_without_successes() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("VAFB SLC-4E", 100.0, 0, "v1.1").unwrap(),
            LaunchRecord::new("KSC LC-39A", 200.0, 1, "FT").unwrap(),
            LaunchRecord::new("KSC LC-39A", 300.0, 1, "FT").unwrap(),
        ]);
        let slices = aggregate(&ds, SiteSelector::All);
        assert_eq!(
            slices,
            vec![PieSlice::new("VAFB SLC-4E", 0), PieSlice::new("KSC LC-39A", 2)]
        );
        let total: usize = slices.iter().map(|s| s.value).sum();
        assert_eq!(total, ds.success_count());
    }

    #[test]
    fn single_site_counts_outcomes() {
        let ds = sample_dataset();
        let slices = aggregate(&ds, site(LaunchSite::CcafsLc));
        // One of each: tie keeps failure first.
        assert_eq!(slices, vec![PieSlice::new("0", 1), PieSlice::new("1", 1)]);
    }

    #[test]
    fn single_site_orders_by_count() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS SLC-40", 100.0, 1, "FT").unwrap(),
            LaunchRecord::new("CCAFS SLC-40", 200.0, 0, "FT").unwrap(),
            LaunchRecord::new("CCAFS SLC-40", 300.0, 1, "B4").unwrap(),
        ]);
        let slices = aggregate(&ds, site(LaunchSite::CcafsSlc));
        assert_eq!(slices, vec![PieSlice::new("1", 2), PieSlice::new("0", 1)]);
    }

    #[rstest]
    fn single_site_counts_sum_to_site_launches(
        #[values(sample_dataset(), four_site_dataset())] ds: LaunchDataset,
        #[values(LaunchSite::CcafsLc, LaunchSite::VafbSlc, LaunchSite::KscLc, LaunchSite::CcafsSlc)]
        s: LaunchSite,
    ) {
        let slices = aggregate(&ds, site(s));
        assert!(slices.iter().all(|sl| sl.label == "0" || sl.label == "1"));
        let expected = ds
            .records
            .iter()
            .filter(|r| r.launch_site == s.display_name())
            .count();
        let total: usize = slices.iter().map(|sl| sl.value).sum();
        assert_eq!(total, expected);
    }

    #[rstest]
    fn all_sites_sums_to_total_successes(
        #[values(sample_dataset(), four_site_dataset())] ds: LaunchDataset,
    ) {
        let slices = aggregate(&ds, SiteSelector::All);
        let labels: Vec<&str> = slices.iter().map(|sl| sl.label.as_str()).collect();
        assert_eq!(labels, ds.sites.iter().map(String::as_str).collect::<Vec<_>>());
        let total: usize = slices.iter().map(|sl| sl.value).sum();
        assert_eq!(total, ds.success_count());
    }

    #[test]
    fn four_sites_split_outcomes() {
        let ds = four_site_dataset();
        assert_eq!(
            aggregate(&ds, SiteSelector::All),
            vec![
                PieSlice::new("CCAFS LC-40", 2),
                PieSlice::new("VAFB SLC-4E", 2),
                PieSlice::new("KSC LC-39A", 2),
                PieSlice::new("CCAFS SLC-40", 1),
            ]
        );
        assert_eq!(
            aggregate(&ds, site(LaunchSite::CcafsSlc)),
            vec![PieSlice::new("0", 2), PieSlice::new("1", 1)]
        );
    }

    #[test]
    fn site_without_launches_yields_no_slices() {
        let chart = pie_chart(&sample_dataset(), site(LaunchSite::VafbSlc));
        assert!(chart.slices.is_empty());
        assert_eq!(chart.total(), 0);
        assert_eq!(chart.title, "Total Success Launches for Site: VAFB SLC-4E");
    }

    #[test]
    fn all_sites_title() {
        let chart = pie_chart(&sample_dataset(), SiteSelector::All);
        assert_eq!(chart.title, "Total Success Launches per Launch Site");
        assert_eq!(chart.total(), 2);
    }
}
