use super::model::LaunchDataset;
use super::site::SiteSelector;

// ---------------------------------------------------------------------------
// Payload interval: the range slider value
// ---------------------------------------------------------------------------

/// Closed payload range in kilograms. `min <= max` is kept by the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadInterval {
    pub min: f64,
    pub max: f64,
}

impl PayloadInterval {
    pub fn new(min: f64, max: f64) -> Self {
        PayloadInterval { min, max }
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.min <= mass && mass <= self.max
    }
}

// ---------------------------------------------------------------------------
// Scatter chart data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Payload mass (kg).
    pub x: f64,
    /// Outcome value, 0 or 1.
    pub y: f64,
    /// Booster version category, used for colour.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// Launches within `interval` (inclusive), narrowed to the selected site,
/// projected to scatter points in dataset order.
pub fn filter(
    dataset: &LaunchDataset,
    selector: SiteSelector,
    interval: PayloadInterval,
) -> Vec<ScatterPoint> {
    let site_name = selector.site_name();
    dataset
        .records
        .iter()
        .filter(|r| interval.contains(r.payload_mass_kg))
        .filter(|r| site_name.map_or(true, |name| r.launch_site == name))
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: f64::from(r.outcome.value()),
            category: r.booster_version_category.clone(),
        })
        .collect()
}

pub fn scatter_title(selector: SiteSelector) -> String {
    match selector.site_name() {
        None => "Correlation between Payload and Success for all Sites".to_string(),
        Some(name) => format!("Correlation between Payload and Success for Site: {name}"),
    }
}

/// [`filter`] plus the chart title.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    selector: SiteSelector,
    interval: PayloadInterval,
) -> ScatterChart {
    let points = filter(dataset, selector, interval);
    log::debug!(
        "scatter chart for {selector} in [{}, {}] kg: {} points",
        interval.min,
        interval.max,
        points.len()
    );
    ScatterChart {
        title: scatter_title(selector),
        points,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::data::model::tests::{four_site_dataset, sample_dataset};
    use crate::data::site::LaunchSite;

    fn xs(points: &[ScatterPoint]) -> Vec<f64> {
        points.iter().map(|p| p.x).collect()
    }

    #[test]
    fn all_sites_keeps_range_in_order() {
        let points = filter(
            &sample_dataset(),
            SiteSelector::All,
            PayloadInterval::new(0.0, 4000.0),
        );
        assert_eq!(
            points,
            vec![
                ScatterPoint { x: 500.0, y: 1.0, category: "v1.0".into() },
                ScatterPoint { x: 3000.0, y: 1.0, category: "FT".into() },
            ]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let points = filter(
            &sample_dataset(),
            SiteSelector::All,
            PayloadInterval::new(500.0, 9000.0),
        );
        assert_eq!(xs(&points), vec![500.0, 9000.0, 3000.0]);
    }

    #[rstest]
    fn every_point_in_range_and_none_omitted(
        #[values(sample_dataset(), four_site_dataset())] ds: LaunchDataset,
        #[values((0.0, 10000.0), (400.0, 3000.0), (2000.0, 2000.0), (500.0, 9600.0), (6000.0, 10000.0))]
        bounds: (f64, f64),
    ) {
        let interval = PayloadInterval::new(bounds.0, bounds.1);
        let points = filter(&ds, SiteSelector::All, interval);
        assert!(points.iter().all(|p| interval.contains(p.x)));
        let expected: Vec<f64> = ds
            .records
            .iter()
            .map(|r| r.payload_mass_kg)
            .filter(|&kg| interval.contains(kg))
            .collect();
        assert_eq!(xs(&points), expected);
    }

    #[rstest]
    fn site_filter_only_narrows(
        #[values(sample_dataset(), four_site_dataset())] ds: LaunchDataset,
        #[values((0.0, 10000.0), (500.0, 2000.0), (2000.0, 2000.0), (5000.0, 9600.0))]
        bounds: (f64, f64),
        #[values(LaunchSite::CcafsLc, LaunchSite::VafbSlc, LaunchSite::KscLc, LaunchSite::CcafsSlc)]
        s: LaunchSite,
    ) {
        let interval = PayloadInterval::new(bounds.0, bounds.1);
        let all = filter(&ds, SiteSelector::All, interval);
        let narrowed = filter(&ds, SiteSelector::Site(s), interval);
        assert!(narrowed.iter().all(|p| all.contains(p)));
        let expected = ds
            .records
            .iter()
            .filter(|r| r.launch_site == s.display_name() && interval.contains(r.payload_mass_kg))
            .count();
        assert_eq!(narrowed.len(), expected);
    }

    #[test]
    fn single_site_keeps_dataset_order() {
        let ds = sample_dataset();
        let interval = PayloadInterval::new(0.0, 10000.0);
        let ccafs = filter(&ds, SiteSelector::Site(LaunchSite::CcafsLc), interval);
        assert_eq!(xs(&ccafs), vec![500.0, 9000.0]);

        let slc = filter(
            &four_site_dataset(),
            SiteSelector::Site(LaunchSite::CcafsSlc),
            PayloadInterval::new(2000.0, 10000.0),
        );
        assert_eq!(xs(&slc), vec![2000.0, 6000.0, 10000.0]);
    }

    #[test]
    fn interval_outside_data_is_empty() {
        let ds = sample_dataset();
        assert!(filter(&ds, SiteSelector::All, PayloadInterval::new(9001.0, 10000.0)).is_empty());
        assert!(filter(&ds, SiteSelector::All, PayloadInterval::new(0.0, 499.0)).is_empty());
    }

    #[test]
    fn titles_name_the_site() {
        let ds = sample_dataset();
        let interval = PayloadInterval::new(0.0, 10000.0);
        assert_eq!(
            scatter_chart(&ds, SiteSelector::All, interval).title,
            "Correlation between Payload and Success for all Sites"
        );
        let chart = scatter_chart(&ds, SiteSelector::Site(LaunchSite::KscLc), interval);
        assert_eq!(
            chart.title,
            "Correlation between Payload and Success for Site: KSC LC-39A"
        );
        assert_eq!(xs(&chart.points), vec![3000.0]);
    }
}
