//! Basic information tab: the three required metadata fields.

use sc_record::{InspectionRecord, MetadataField};

#[derive(Default)]
pub struct BasicInfoActions {
    pub changes: Vec<(MetadataField, String)>,
}

const FIELDS: [MetadataField; 3] = [
    MetadataField::StationName,
    MetadataField::InspectionDate,
    MetadataField::InspectorName,
];

pub fn show(ui: &mut egui::Ui, record: &InspectionRecord) -> BasicInfoActions {
    let mut actions = BasicInfoActions::default();

    ui.heading("Basic Information");
    ui.add_space(8.0);

    egui::Grid::new("basic_info_grid")
        .num_columns(2)
        .spacing([16.0, 10.0])
        .show(ui, |ui| {
            for field in FIELDS {
                ui.label(format!("{} *", title(field)));
                let mut value = record.metadata(field).to_string();
                let edit = egui::TextEdit::singleline(&mut value)
                    .hint_text(hint(field))
                    .desired_width(320.0);
                if ui.add(edit).changed() {
                    actions.changes.push((field, value));
                }
                ui.end_row();
            }
        });

    actions
}

fn title(field: MetadataField) -> &'static str {
    match field {
        MetadataField::StationName => "Station Name",
        MetadataField::InspectionDate => "Inspection Date",
        MetadataField::InspectorName => "Inspector Name",
    }
}

fn hint(field: MetadataField) -> &'static str {
    match field {
        MetadataField::StationName => "Enter station name",
        MetadataField::InspectionDate => "YYYY-MM-DD",
        MetadataField::InspectorName => "Enter inspector name",
    }
}
