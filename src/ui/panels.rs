use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::site::SiteSelector;
use crate::state::{initial_payload, AppState, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};

const TITLE_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Left side panel – dropdown and payload range
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.separator();

    let current = state.selector;
    let mut picked: Option<&'static str> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for (label, tag) in SiteSelector::options() {
                if ui.selectable_label(current.tag() == tag, label).clicked() {
                    picked = Some(tag);
                }
            }
        });

    if let Some(tag) = picked {
        if let Err(e) = state.select_tag(tag) {
            log::error!("{e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }

    ui.add_space(12.0);
    ui.strong("Payload range (Kg):");

    let upper = slider_upper(state);
    let mut lo = state.payload.min;
    let mut hi = state.payload.max;

    let lo_changed = ui
        .add(
            Slider::new(&mut lo, SLIDER_MIN..=upper)
                .step_by(SLIDER_STEP)
                .text("min"),
        )
        .changed();
    let hi_changed = ui
        .add(
            Slider::new(&mut hi, SLIDER_MIN..=upper)
                .step_by(SLIDER_STEP)
                .text("max"),
        )
        .changed();

    if lo_changed || hi_changed {
        let (lo, hi) = uncross(lo, hi, lo_changed);
        state.set_payload_range(lo, hi);
    }
}

/// The slider tops out at 10 000 kg unless the data goes heavier.
fn slider_upper(state: &AppState) -> f64 {
    initial_payload(&state.dataset).max.max(SLIDER_MAX)
}

/// Handles may not cross: the one being dragged stops at the other.
fn uncross(lo: f64, hi: f64, lo_moved: bool) -> (f64, f64) {
    if lo <= hi {
        (lo, hi)
    } else if lo_moved {
        (hi, hi)
    } else {
        (lo, lo)
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dashboard heading and summary line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(40.0)
                .color(TITLE_COLOR),
        );
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label(summary_line(state));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn summary_line(state: &AppState) -> String {
    let ds = &state.dataset;
    if ds.is_empty() {
        return "No launches in dataset".to_string();
    }
    format!(
        "{} launches loaded ({} successful), {} in payload range",
        ds.len(),
        ds.success_count(),
        state.scatter.points.len()
    )
}
