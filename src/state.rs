use crate::color::ColorMap;
use crate::data::aggregate::{pie_chart, PieChart};
use crate::data::filter::{scatter_chart, PayloadInterval, ScatterChart};
use crate::data::model::LaunchDataset;
use crate::data::site::{SelectorError, SiteSelector};

/// Slider bounds used before any data has been seen.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;

/// The data's payload envelope, widened to slider stops so the slider has
/// nothing to round and no launch starts outside the range.
pub fn initial_payload(dataset: &LaunchDataset) -> PayloadInterval {
    match dataset.payload_bounds {
        Some((lo, hi)) => PayloadInterval::new(
            (lo / SLIDER_STEP).floor() * SLIDER_STEP,
            (hi / SLIDER_STEP).ceil() * SLIDER_STEP,
        ),
        None => PayloadInterval::new(SLIDER_MIN, SLIDER_MAX),
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub dataset: LaunchDataset,

    /// Current dropdown value.
    pub selector: SiteSelector,

    /// Current range slider value.
    pub payload: PayloadInterval,

    /// Cached chart inputs, recomputed on input change.
    pub pie: PieChart,
    pub scatter: ScatterChart,

    /// Booster category colours for the scatter chart.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let selector = SiteSelector::All;
        let payload = initial_payload(&dataset);

        Self {
            pie: pie_chart(&dataset, selector),
            scatter: scatter_chart(&dataset, selector, payload),
            color_map: ColorMap::new(&dataset.booster_categories),
            dataset,
            selector,
            payload,
            status_message: None,
        }
    }

    /// Dropdown callback: both charts depend on the site.
    pub fn select_tag(&mut self, tag: &str) -> Result<(), SelectorError> {
        let selector = SiteSelector::from_tag(tag)?;
        if selector != self.selector {
            self.selector = selector;
            self.pie = pie_chart(&self.dataset, selector);
            self.refresh_scatter();
        }
        self.status_message = None;
        Ok(())
    }

    /// Slider callback: only the scatter chart depends on the payload range.
    pub fn set_payload_range(&mut self, min: f64, max: f64) {
        let payload = PayloadInterval::new(min, max);
        if payload != self.payload {
            self.payload = payload;
            self.refresh_scatter();
        }
    }

    fn refresh_scatter(&mut self) {
        self.scatter = scatter_chart(&self.dataset, self.selector, self.payload);
    }
}
