//! Parameter scoring section.
//!
//! A pure function of (title, parameters, scores, remarks): it owns no copy
//! of the record and reports every edit upward through [`SectionActions`].

use sc_catalog::Parameter;
use sc_core::{ParameterId, Score, ScoreBand};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct SectionActions {
    pub score_changes: Vec<(ParameterId, Score)>,
    pub remark_changes: Vec<(ParameterId, String)>,
}

pub fn show(
    ui: &mut egui::Ui,
    title: &str,
    parameters: &[&Parameter],
    scores: &BTreeMap<ParameterId, Score>,
    remarks: &BTreeMap<ParameterId, String>,
) -> SectionActions {
    let mut actions = SectionActions::default();

    let scored = parameters
        .iter()
        .filter(|p| scores.contains_key(p.id))
        .count();

    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{scored}/{} Complete", parameters.len())).strong(),
            );
        });
    });
    ui.add_space(8.0);

    for parameter in parameters {
        ui.push_id(parameter.id, |ui| {
            show_parameter(ui, parameter, scores.get(parameter.id).copied(), remarks, &mut actions);
        });
        ui.add_space(6.0);
    }

    actions
}

fn show_parameter(
    ui: &mut egui::Ui,
    parameter: &Parameter,
    current: Option<Score>,
    remarks: &BTreeMap<ParameterId, String>,
    actions: &mut SectionActions,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(parameter.name).strong());
            if current.is_some() {
                ui.label(egui::RichText::new("✔").color(band_color(ScoreBand::High)));
            }
            if let Some(score) = current {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{score}/10"))
                            .color(band_color(score.band()))
                            .strong(),
                    );
                });
            }
        });
        ui.label(egui::RichText::new(parameter.description).weak());
        ui.add_space(4.0);

        ui.label("Score (0-10) *");
        ui.horizontal_wrapped(|ui| {
            for value in 0..=Score::MAX_VALUE {
                if let Ok(score) = Score::new(value) {
                    let selected = current == Some(score);
                    let text = egui::RichText::new(value.to_string()).monospace();
                    let mut button = egui::Button::new(if selected {
                        text.color(egui::Color32::WHITE)
                    } else {
                        text
                    })
                    .min_size(egui::vec2(30.0, 30.0));
                    if selected {
                        button = button.fill(band_color(score.band()));
                    }
                    if ui.add(button).clicked() {
                        actions
                            .score_changes
                            .push((parameter.id.to_string(), score));
                    }
                }
            }
        });

        ui.add_space(4.0);
        ui.label("Remarks (Optional)");
        let mut remark = remarks.get(parameter.id).cloned().unwrap_or_default();
        let edit = egui::TextEdit::singleline(&mut remark)
            .hint_text("Add any specific observations or notes...")
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() {
            actions
                .remark_changes
                .push((parameter.id.to_string(), remark));
        }
    });
}

fn band_color(band: ScoreBand) -> egui::Color32 {
    match band {
        ScoreBand::High => egui::Color32::from_rgb(34, 197, 94),
        ScoreBand::Mid => egui::Color32::from_rgb(234, 179, 8),
        ScoreBand::Low => egui::Color32::from_rgb(249, 115, 22),
        ScoreBand::Poor => egui::Color32::from_rgb(239, 68, 68),
    }
}
