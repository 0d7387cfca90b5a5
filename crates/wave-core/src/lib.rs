pub mod catalog;
pub mod chart_data;
pub mod projection;
pub mod units;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared interface types — the wire contract with the calculation service
// ---------------------------------------------------------------------------

/// Request body shared by the `/calculate` and `/report` endpoints.
///
/// Serialized field names follow the service's JSON casing; all numeric
/// fields are imperial regardless of the unit system shown in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcRequest {
    /// Tube inner width (in).
    pub a_in: f64,
    /// Tube inner depth (in).
    pub b_in: f64,
    /// Wall thickness (in).
    pub t_in: f64,
    /// Array length (ft).
    #[serde(rename = "L_ft")]
    pub l_ft: f64,
    /// Total volumetric flow (CFM).
    pub cfm: f64,
    /// Worst-case operating temperature (°F).
    #[serde(rename = "Tmax_F")]
    pub tmax_f: f64,
    /// Target per-tube velocity (ft/s).
    pub v_target: f64,
    /// Pressure-drop ceiling (psi).
    #[serde(rename = "dP_max")]
    pub dp_max: f64,
    /// Material catalog token, e.g. `stainless_304`.
    pub material: String,
    /// Fluid catalog token, e.g. `air`.
    pub fluid: String,
}

impl Default for CalcRequest {
    fn default() -> Self {
        // Mirrors the service's own defaults.
        Self {
            a_in: 2.0,
            b_in: 2.0,
            t_in: 0.125,
            l_ft: 3.0,
            cfm: 100.0,
            tmax_f: 100.0,
            v_target: 200.0,
            dp_max: 1.0,
            material: "stainless_304".to_string(),
            fluid: "air".to_string(),
        }
    }
}

/// One solved operating point returned by `/calculate` — consumed by the
/// readout writer, the projection engine, and the chart synthesizer.
/// Immutable for the duration of a render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Total tubes in the solved array (`nx · ny`).
    pub tube_count: u32,
    /// Per-tube velocity at the operating point (ft/s).
    pub velocity_fts: f64,
    /// Pressure drop at the operating point (psi).
    #[serde(rename = "deltaP_psi")]
    pub delta_p_psi: f64,
    /// Total array weight (lbm).
    pub total_weight_lbm: f64,
    /// Hydraulic diameter of one tube (in).
    #[serde(rename = "Dh_in")]
    pub dh_in: f64,
    /// TE10 cutoff frequency (GHz).
    #[serde(rename = "fc_GHz")]
    pub fc_ghz: f64,
    /// Array grid dimensions `[nx, ny]`.
    pub array_dims: [u32; 2],
    /// Tube inner width (in), echoed from the request.
    pub a_in: f64,
    /// Tube inner depth (in).
    pub b_in: f64,
    /// Wall thickness (in).
    pub t_in: f64,
    /// Array length (ft).
    #[serde(rename = "L_ft")]
    pub l_ft: f64,
    /// Material color token for rendering, `#RRGGBB`.
    pub material_color: String,
    /// Attenuation sample frequencies (Hz), ascending.
    pub freqs: Vec<f64>,
    /// Shielding effectiveness (dB), index-aligned with `freqs`.
    #[serde(rename = "SE_db")]
    pub se_db: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_service_casing() {
        let request = CalcRequest::default();
        let value = serde_json::to_value(&request).expect("request must serialize");
        let object = value.as_object().expect("request must be a JSON object");

        for key in [
            "a_in", "b_in", "t_in", "L_ft", "cfm", "Tmax_F", "v_target", "dP_max", "material",
            "fluid",
        ] {
            assert!(object.contains_key(key), "missing field {key}");
        }
        assert_eq!(object["material"], "stainless_304");
        assert_eq!(object["L_ft"], 3.0);
    }

    #[test]
    fn test_result_decodes_service_response() {
        // Trimmed capture of a real /calculate response body.
        let body = r##"{
            "tube_count": 80,
            "array_dims": [10, 8],
            "velocity_fts": 12.3,
            "deltaP_psi": 0.045,
            "total_weight_lbm": 87.2,
            "Dh_in": 1.5,
            "fc_GHz": 2.45,
            "freqs": [100000.0, 200000.0],
            "SE_db": [54.2, 48.1],
            "material_color": "#C0C0C0",
            "a_in": 1.5,
            "b_in": 1.5,
            "L_ft": 3.0,
            "t_in": 0.06
        }"##;

        let result: CalculationResult =
            serde_json::from_str(body).expect("service response must decode");
        assert_eq!(result.tube_count, 80);
        assert_eq!(result.array_dims, [10, 8]);
        assert_eq!(result.delta_p_psi, 0.045);
        assert_eq!(result.fc_ghz, 2.45);
        assert_eq!(result.freqs.len(), result.se_db.len());
    }
}
