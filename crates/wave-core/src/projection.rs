use crate::CalculationResult;

/// Solid color, `[r, g, b]`.
pub type Rgb = [u8; 3];

/// Pixels per inch of tube cross-section. Fixed design constant; the drawing
/// never scales down to fit larger arrays (see `MAX_TUBES_PER_AXIS`).
const VIEW_SCALE: f32 = 16.0;

/// On-screen gap between adjacent tubes (px).
const TUBE_GAP: f32 = 4.0;

/// Canvas-space point the array is centered on.
pub const CANVAS_ORIGIN: (f32, f32) = (320.0, 240.0);

/// Per-row shear (px) faking isometric recession. An affine approximation,
/// not a true 3D projection.
const ROW_SHEAR_X: f32 = 6.0;
const ROW_SHEAR_Y: f32 = 3.0;

/// Hard cap on tubes drawn per axis. Larger true arrays render a truncated
/// subset so the primitive count stays bounded.
pub const MAX_TUBES_PER_AXIS: u32 = 50;

/// Gradient end tone for tube walls.
const WALL_DARK_TONE: Rgb = [0x23, 0x26, 0x2B];

/// Background-matching fill for the bore, creating the hollow-tube look.
const BORE_FILL: Rgb = [0x14, 0x16, 0x1A];

/// Used when the service hands back an unparseable color token.
const FALLBACK_MATERIAL_COLOR: Rgb = [0xC0, 0xC0, 0xC0];

/// Axis-aligned rectangle in canvas space, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    fn centered(cx: f32, cy: f32, side: f32) -> Self {
        Self {
            x: cx - side / 2.0,
            y: cy - side / 2.0,
            w: side,
            h: side,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// One drawn tube: concentric outer (wall + bore) and inner (bore) squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubePrimitive {
    pub outer: Rect,
    pub inner: Rect,
    /// Gradient start for the outer square: the material tone.
    pub gradient_start: Rgb,
    /// Gradient end, a fixed dark tone.
    pub gradient_end: Rgb,
    /// Fixed background-matching bore fill.
    pub bore_fill: Rgb,
}

/// Complete drawing for one result. Each call fully replaces the previous
/// primitive set; nothing accumulates across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayProjection {
    pub tubes: Vec<TubePrimitive>,
    pub meta_text: String,
}

/// Project the solved tube array into capped 2D primitives plus the summary
/// line shown under the drawing.
pub fn project(result: &CalculationResult) -> ArrayProjection {
    let nx = result.array_dims[0].min(MAX_TUBES_PER_AXIS);
    let ny = result.array_dims[1].min(MAX_TUBES_PER_AXIS);

    let outer_side = (result.a_in + 2.0 * result.t_in) as f32 * VIEW_SCALE;
    let inner_side = result.a_in as f32 * VIEW_SCALE;
    let pitch = outer_side + TUBE_GAP;
    let depth = (result.l_ft * 2.0) as f32;
    let material = parse_color(&result.material_color).unwrap_or(FALLBACK_MATERIAL_COLOR);

    let mut tubes = Vec::with_capacity((nx * ny) as usize);
    for j in 0..ny {
        for i in 0..nx {
            let cx = CANVAS_ORIGIN.0 + (i as f32 - nx as f32 / 2.0) * pitch
                + j as f32 * ROW_SHEAR_X
                + depth;
            let cy = CANVAS_ORIGIN.1 + (j as f32 - ny as f32 / 2.0) * pitch
                - j as f32 * ROW_SHEAR_Y
                - depth;

            tubes.push(TubePrimitive {
                outer: Rect::centered(cx, cy, outer_side),
                inner: Rect::centered(cx, cy, inner_side),
                gradient_start: material,
                gradient_end: WALL_DARK_TONE,
                bore_fill: BORE_FILL,
            });
        }
    }

    ArrayProjection {
        tubes,
        meta_text: meta_text(result),
    }
}

fn meta_text(result: &CalculationResult) -> String {
    format!(
        "Array: {}×{} tubes | Dims: {:.2} × {:.2} in | Weight: {:.1} lbm | fc={:.3} GHz",
        result.array_dims[0],
        result.array_dims[1],
        result.a_in,
        result.b_in,
        result.total_weight_lbm,
        result.fc_ghz,
    )
}

/// Parse a `#RRGGBB` token. Returns `None` for anything else.
fn parse_color(token: &str) -> Option<Rgb> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_dims(nx: u32, ny: u32) -> CalculationResult {
        CalculationResult {
            tube_count: nx * ny,
            velocity_fts: 12.3,
            delta_p_psi: 0.045,
            total_weight_lbm: 87.2,
            dh_in: 1.5,
            fc_ghz: 2.45,
            array_dims: [nx, ny],
            a_in: 1.5,
            b_in: 1.5,
            t_in: 0.06,
            l_ft: 3.0,
            material_color: "#C0C0C0".to_string(),
            freqs: vec![],
            se_db: vec![],
        }
    }

    #[test]
    fn test_capping_law() {
        // Both axes within the cap: exact count.
        assert_eq!(project(&result_with_dims(10, 8)).tubes.len(), 80);
        // One axis over the cap: that axis truncates to 50.
        assert_eq!(project(&result_with_dims(60, 10)).tubes.len(), 500);
        assert_eq!(project(&result_with_dims(10, 60)).tubes.len(), 500);
        // Both over: 50 × 50.
        assert_eq!(project(&result_with_dims(120, 80)).tubes.len(), 2500);
    }

    #[test]
    fn test_empty_array_draws_nothing() {
        assert!(project(&result_with_dims(0, 8)).tubes.is_empty());
        assert!(project(&result_with_dims(10, 0)).tubes.is_empty());
    }

    #[test]
    fn test_projection_is_idempotent_on_replace() {
        let result = result_with_dims(10, 8);
        let first = project(&result);
        let second = project(&result);
        assert_eq!(first, second, "same result must project identically");

        // A differing prior result leaves no residue: the new projection is
        // exactly what a fresh call produces.
        let _stale = project(&result_with_dims(30, 30));
        let replacement = project(&result);
        assert_eq!(replacement.tubes.len(), 80);
        assert_eq!(replacement, first);
    }

    #[test]
    fn test_tube_geometry() {
        let result = result_with_dims(2, 2);
        let projection = project(&result);
        let tube = &projection.tubes[0];

        let expected_outer = (1.5 + 2.0 * 0.06) as f32 * 16.0;
        let expected_inner = 1.5_f32 * 16.0;
        assert!((tube.outer.w - expected_outer).abs() < 1e-4);
        assert!((tube.inner.w - expected_inner).abs() < 1e-4);
        assert_eq!(tube.outer.w, tube.outer.h, "tubes are square");

        // On-screen wall thickness is t_in scaled.
        let wall = (tube.outer.w - tube.inner.w) / 2.0;
        assert!((wall - 0.06 * 16.0).abs() < 1e-4, "wall = {wall}");

        // Inner and outer squares are concentric.
        let (ox, oy) = tube.outer.center();
        let (ix, iy) = tube.inner.center();
        assert!((ox - ix).abs() < 1e-4 && (oy - iy).abs() < 1e-4);
    }

    #[test]
    fn test_row_shear_and_depth_offsets() {
        let result = result_with_dims(1, 2);
        let projection = project(&result);
        let (x0, y0) = projection.tubes[0].outer.center();
        let (x1, y1) = projection.tubes[1].outer.center();

        let pitch = (1.5 + 0.12) as f32 * 16.0 + 4.0;
        // Row 1 sits one pitch down, sheared right and lifted by the fixed
        // per-row constants.
        assert!((x1 - x0 - 6.0).abs() < 1e-3, "shear x: {} vs {}", x0, x1);
        assert!((y1 - y0 - (pitch - 3.0)).abs() < 1e-3, "row offset: {} vs {}", y0, y1);
    }

    #[test]
    fn test_example_scenario() {
        let result = result_with_dims(10, 8);
        let projection = project(&result);
        assert_eq!(projection.tubes.len(), 80, "10×8 array draws 80 tube pairs");
        assert_eq!(
            projection.meta_text,
            "Array: 10×8 tubes | Dims: 1.50 × 1.50 in | Weight: 87.2 lbm | fc=2.450 GHz"
        );
    }

    #[test]
    fn test_material_color_flows_into_gradient() {
        let mut result = result_with_dims(1, 1);
        result.material_color = "#B87333".to_string();
        let tube = project(&result).tubes[0];
        assert_eq!(tube.gradient_start, [0xB8, 0x73, 0x33]);
        assert_eq!(tube.gradient_end, WALL_DARK_TONE);
        assert_eq!(tube.bore_fill, BORE_FILL);
    }

    #[test]
    fn test_bad_color_token_falls_back() {
        for bad in ["", "silver", "#C0C0", "#GGHHII", "C0C0C0"] {
            let mut result = result_with_dims(1, 1);
            result.material_color = bad.to_string();
            let tube = project(&result).tubes[0];
            assert_eq!(
                tube.gradient_start, FALLBACK_MATERIAL_COLOR,
                "token {bad:?} must fall back"
            );
        }
    }
}
