// egui control panel: parameter fields, selects, unit toggle, readouts.

use wave_core::catalog::{FLUIDS, MATERIALS};
use wave_core::units::{self, FieldValues, UnitSystem};
use wave_core::CalcRequest;

use crate::controller::Phase;
use crate::readout::{self, Readouts};

/// Outcome of one pass over the form widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Keystroke-level edit; goes through the debounce window.
    Draft,
    /// Discrete control change; fetch immediately.
    Commit,
    /// Report download requested.
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangular,
    Square,
}

/// One numeric entry box. Kept as free text so a half-typed value never
/// aborts the pipeline; parsing coerces malformed input to zero.
#[derive(Debug, Clone)]
pub struct NumericField {
    pub text: String,
}

impl NumericField {
    pub fn new(value: f64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    pub fn value(&self) -> f64 {
        self.text.trim().parse().unwrap_or(0.0)
    }

    pub fn set(&mut self, value: f64) {
        self.text = value.to_string();
    }
}

pub struct FormState {
    pub unit: UnitSystem,
    pub a: NumericField,
    pub b: NumericField,
    pub t: NumericField,
    pub length: NumericField,
    pub flow: NumericField,
    pub t_max: NumericField,
    pub v_target: NumericField,
    pub dp_max: NumericField,
    /// Index into [`MATERIALS`].
    pub material: usize,
    /// Index into [`FLUIDS`].
    pub fluid: usize,
    pub shape: Shape,
}

impl Default for FormState {
    fn default() -> Self {
        // Service defaults.
        Self {
            unit: UnitSystem::Imperial,
            a: NumericField::new(2.0),
            b: NumericField::new(2.0),
            t: NumericField::new(0.125),
            length: NumericField::new(3.0),
            flow: NumericField::new(100.0),
            t_max: NumericField::new(100.0),
            v_target: NumericField::new(200.0),
            dp_max: NumericField::new(1.0),
            material: 0,
            fluid: 0,
            shape: Shape::Rectangular,
        }
    }
}

impl FormState {
    pub fn values(&self) -> FieldValues {
        FieldValues {
            a: self.a.value(),
            b: self.b.value(),
            t: self.t.value(),
            length: self.length.value(),
            flow: self.flow.value(),
            t_max: self.t_max.value(),
            v_target: self.v_target.value(),
            dp_max: self.dp_max.value(),
        }
    }

    fn set_values(&mut self, values: &FieldValues) {
        self.a.set(values.a);
        self.b.set(values.b);
        self.t.set(values.t);
        self.length.set(values.length);
        self.flow.set(values.flow);
        self.t_max.set(values.t_max);
        self.v_target.set(values.v_target);
        self.dp_max.set(values.dp_max);
    }

    /// Build the request body. The service speaks imperial; SI form values
    /// are converted on the way out.
    pub fn calc_request(&self) -> CalcRequest {
        let values = match self.unit {
            UnitSystem::Imperial => self.values(),
            UnitSystem::Si => units::si_to_imperial(&self.values()),
        };
        CalcRequest {
            a_in: values.a,
            b_in: values.b,
            t_in: values.t,
            l_ft: values.length,
            cfm: values.flow,
            tmax_f: values.t_max,
            v_target: values.v_target,
            dp_max: values.dp_max,
            material: MATERIALS[self.material].token.to_string(),
            fluid: FLUIDS[self.fluid].token.to_string(),
        }
    }

    /// Flip the displayed unit system, converting every field in place.
    /// Display-only: no fetch is triggered.
    pub fn toggle_units(&mut self) {
        let values = self.values();
        let converted = match self.unit {
            UnitSystem::Imperial => units::imperial_to_si(&values),
            UnitSystem::Si => units::si_to_imperial(&values),
        };
        self.set_values(&converted);
        self.unit = self.unit.toggled();
    }

    /// Square tubes: depth mirrors width before the fetch goes out.
    pub fn mirror_square(&mut self) {
        self.b.text = self.a.text.clone();
    }
}

/// Draw the right-side control panel. Returns the strongest event the pass
/// produced: export and discrete changes outrank draft edits.
pub fn draw_controls(
    ctx: &egui::Context,
    form: &mut FormState,
    phase: Phase,
    status: Option<&str>,
    readouts: Option<&Readouts>,
) -> Option<FormEvent> {
    let mut draft = false;
    let mut commit = false;
    let mut export = false;

    egui::SidePanel::right("controls")
        .min_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Enclosure Parameters");
            ui.separator();

            let (dim_u, len_u, flow_u, temp_u, vel_u, dp_u) = match form.unit {
                UnitSystem::Imperial => ("in", "ft", "CFM", "°F", "ft/s", "psi"),
                UnitSystem::Si => ("m", "m", "m³/s", "°C", "m/s", "Pa"),
            };

            draft |= numeric_row(ui, &format!("Tube Width A ({dim_u})"), &mut form.a);
            let b_enabled = form.shape == Shape::Rectangular;
            draft |= numeric_row_enabled(
                ui,
                &format!("Tube Depth B ({dim_u})"),
                &mut form.b,
                b_enabled,
            );
            draft |= numeric_row(ui, &format!("Wall Thickness ({dim_u})"), &mut form.t);
            draft |= numeric_row(ui, &format!("Array Length ({len_u})"), &mut form.length);
            draft |= numeric_row(ui, &format!("Total Flow ({flow_u})"), &mut form.flow);
            draft |= numeric_row(ui, &format!("Max Temp ({temp_u})"), &mut form.t_max);
            draft |= numeric_row(ui, &format!("Target Velocity ({vel_u})"), &mut form.v_target);
            draft |= numeric_row(ui, &format!("Max ΔP ({dp_u})"), &mut form.dp_max);

            ui.separator();

            egui::ComboBox::from_label("Shape")
                .selected_text(match form.shape {
                    Shape::Rectangular => "Rectangular",
                    Shape::Square => "Square",
                })
                .show_ui(ui, |ui| {
                    let before = form.shape;
                    ui.selectable_value(&mut form.shape, Shape::Rectangular, "Rectangular");
                    ui.selectable_value(&mut form.shape, Shape::Square, "Square");
                    if form.shape != before {
                        if form.shape == Shape::Square {
                            form.mirror_square();
                        }
                        commit = true;
                    }
                });

            egui::ComboBox::from_label("Material")
                .selected_text(MATERIALS[form.material].name)
                .show_ui(ui, |ui| {
                    for (i, entry) in MATERIALS.iter().enumerate() {
                        if ui
                            .selectable_value(&mut form.material, i, entry.name)
                            .changed()
                        {
                            commit = true;
                        }
                    }
                });

            egui::ComboBox::from_label("Fluid")
                .selected_text(FLUIDS[form.fluid].name)
                .show_ui(ui, |ui| {
                    for (i, entry) in FLUIDS.iter().enumerate() {
                        if ui.selectable_value(&mut form.fluid, i, entry.name).changed() {
                            commit = true;
                        }
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                let toggle_label = match form.unit {
                    UnitSystem::Imperial => "Switch to SI",
                    UnitSystem::Si => "Switch to Imperial",
                };
                if ui.button(toggle_label).clicked() {
                    form.toggle_units();
                }
                if ui.button("Export PDF").clicked() {
                    export = true;
                }
            });

            ui.separator();
            ui.heading("Results");
            match readouts {
                Some(readouts) => readout::draw_readouts(ui, readouts),
                None => {
                    ui.label("Waiting for first calculation…");
                }
            }

            ui.separator();
            let phase_text = match phase {
                Phase::Idle => "Ready",
                Phase::Debouncing => "Waiting for edits…",
                Phase::Fetching => "Calculating…",
            };
            ui.label(phase_text);
            if let Some(status) = status {
                ui.label(status);
            }
        });

    if export {
        Some(FormEvent::Export)
    } else if commit {
        Some(FormEvent::Commit)
    } else if draft {
        Some(FormEvent::Draft)
    } else {
        None
    }
}

fn numeric_row(ui: &mut egui::Ui, label: &str, field: &mut NumericField) -> bool {
    numeric_row_enabled(ui, label, field, true)
}

fn numeric_row_enabled(
    ui: &mut egui::Ui,
    label: &str,
    field: &mut NumericField,
    enabled: bool,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut field.text).desired_width(90.0),
            )
            .changed();
    });
    changed
}
