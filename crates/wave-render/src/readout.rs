use wave_core::CalculationResult;

/// The five computed readouts shown above the schematic. Written before the
/// projection and charts update so the numbers never lag the visuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub tube_count: String,
    pub velocity: String,
    pub delta_p: String,
    pub weight: String,
    pub cutoff: String,
}

impl Readouts {
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            tube_count: format!(
                "{} ({}×{})",
                result.tube_count, result.array_dims[0], result.array_dims[1]
            ),
            velocity: format!("{:.2} ft/s", result.velocity_fts),
            delta_p: format!("{:.3} psi", result.delta_p_psi),
            weight: format!("{:.2} lbm", result.total_weight_lbm),
            cutoff: format!("{:.3} GHz", result.fc_ghz),
        }
    }
}

pub fn draw_readouts(ui: &mut egui::Ui, readouts: &Readouts) {
    egui::Grid::new("readouts").num_columns(2).show(ui, |ui| {
        ui.label("Tube Count");
        ui.strong(&readouts.tube_count);
        ui.end_row();
        ui.label("Velocity");
        ui.strong(&readouts.velocity);
        ui.end_row();
        ui.label("ΔP");
        ui.strong(&readouts.delta_p);
        ui.end_row();
        ui.label("Weight");
        ui.strong(&readouts.weight);
        ui.end_row();
        ui.label("Cutoff fc");
        ui.strong(&readouts.cutoff);
        ui.end_row();
    });
}
