//! Review & submit tab: summary tiles plus the two persistence actions.

use sc_record::InspectionRecord;

#[derive(Default)]
pub struct SummaryActions {
    pub save_clicked: bool,
    pub submit_clicked: bool,
}

pub fn show(
    ui: &mut egui::Ui,
    record: &InspectionRecord,
    submitting: bool,
) -> SummaryActions {
    let mut actions = SummaryActions::default();

    let catalog_len = sc_catalog::parameters().len();
    let max_possible = sc_catalog::max_possible_score();

    ui.heading("Inspection Summary");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        tile(ui, &record.total_score().to_string(), "Total Score");
        tile(
            ui,
            &format!("{}%", record.score_percentage(max_possible)),
            "Score Rate",
        );
        tile(ui, &record.scored_count().to_string(), "Parameters Scored");
        tile(
            ui,
            &format!("{}%", record.completion_percentage(catalog_len)),
            "Complete",
        );
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Save Progress").clicked() {
            actions.save_clicked = true;
        }
        ui.add_enabled_ui(!submitting, |ui| {
            if ui.button("Submit Score Card").clicked() {
                actions.submit_clicked = true;
            }
        });
        if submitting {
            ui.spinner();
            ui.label("Submitting...");
        }
    });

    actions
}

fn tile(ui: &mut egui::Ui, value: &str, caption: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.set_min_width(110.0);
            ui.label(egui::RichText::new(value).heading().strong());
            ui.label(egui::RichText::new(caption).weak());
        });
    });
}
