// Pseudo-isometric tube array drawn with the egui painter.

use wave_core::projection::{ArrayProjection, Rect, Rgb, CANVAS_ORIGIN};

/// Draw the projected tube array in a top panel, with its metadata summary
/// underneath. The primitives are recomputed per result, so each frame
/// paints a complete, self-contained drawing.
pub fn draw_array(ctx: &egui::Context, projection: Option<&ArrayProjection>) {
    egui::TopBottomPanel::top("array_view")
        .min_height(300.0)
        .show(ctx, |ui| {
            ui.heading("Tube Array");

            let Some(projection) = projection else {
                ui.label("Run a calculation to see the array.");
                return;
            };

            let available = ui.available_size();
            let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
            let rect = response.rect;

            // The projection lives in a fixed canvas space centered on
            // CANVAS_ORIGIN; recenter that point in the panel.
            let offset = rect.center() - egui::pos2(CANVAS_ORIGIN.0, CANVAS_ORIGIN.1);

            for tube in &projection.tubes {
                painter.add(gradient_quad(to_screen(tube.outer, offset), tube.gradient_start, tube.gradient_end));
                painter.rect_filled(
                    to_screen(tube.inner, offset),
                    0.0,
                    color32(tube.bore_fill),
                );
            }

            painter.text(
                rect.center_bottom() - egui::vec2(0.0, 10.0),
                egui::Align2::CENTER_BOTTOM,
                &projection.meta_text,
                egui::FontId::monospace(13.0),
                ui.visuals().text_color(),
            );
        });
}

fn to_screen(rect: Rect, offset: egui::Vec2) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y) + offset,
        egui::vec2(rect.w, rect.h),
    )
}

fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Two-stop vertical gradient fill: material tone at the top fading into
/// the dark tone, built as a four-vertex mesh.
fn gradient_quad(rect: egui::Rect, start: Rgb, end: Rgb) -> egui::Shape {
    let top = color32(start);
    let bottom = color32(end);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    egui::Shape::mesh(mesh)
}
