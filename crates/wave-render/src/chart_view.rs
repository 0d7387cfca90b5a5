// Chart panels via egui_plot.

use egui_plot::{Legend, Line, Plot};

use crate::charts::{self, AfChart, PtChart};

/// Draw both charts in the central panel: the temperature sweep pair on the
/// left, shielding effectiveness on the right.
pub fn draw_charts(ctx: &egui::Context, pt: Option<&PtChart>, af: Option<&AfChart>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (Some(pt), Some(af)) = (pt, af) else {
            ui.label("Charts appear after the first calculation.");
            return;
        };

        ui.columns(2, |columns| {
            draw_pt(&mut columns[0], pt);
            draw_af(&mut columns[1], af);
        });
    });
}

/// The PT chart is a dual-axis pair: velocity against the left axis,
/// pressure drop against the right, sharing the temperature x-axis. Drawn
/// as two stacked plots over the same domain.
fn draw_pt(ui: &mut egui::Ui, chart: &PtChart) {
    ui.heading("Performance vs Temperature");
    let half = (ui.available_height() - 8.0) / 2.0;

    Plot::new("pt_velocity")
        .height(half)
        .y_axis_label(charts::PT_LEFT_TITLE)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(chart.velocity_points.clone()).name(charts::PT_LEFT_TITLE));
        });

    Plot::new("pt_pressure")
        .height(half)
        .x_axis_label(charts::PT_X_TITLE)
        .y_axis_label(charts::PT_RIGHT_TITLE)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(chart.pressure_points.clone()).name(charts::PT_RIGHT_TITLE));
        });
}

fn draw_af(ui: &mut egui::Ui, chart: &AfChart) {
    ui.heading("Shielding Effectiveness");

    Plot::new("af_plot")
        .x_axis_label(charts::AF_X_TITLE)
        .y_axis_label(charts::AF_Y_TITLE)
        .legend(Legend::default())
        .x_axis_formatter(|mark, _range| format_log_freq(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(chart.se_points.clone()).name("SE (dB)"));
        });
}

/// The AF x coordinates are log₁₀(MHz); ticks print the frequency itself.
fn format_log_freq(log_mhz: f64) -> String {
    let mhz = 10f64.powf(log_mhz);
    if mhz >= 100.0 {
        format!("{mhz:.0}")
    } else if mhz >= 1.0 {
        format!("{mhz:.1}")
    } else {
        format!("{mhz:.2}")
    }
}
