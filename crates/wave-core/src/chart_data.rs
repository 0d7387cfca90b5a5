use crate::CalculationResult;

/// Sea-level reference air density (lbm/ft³) the scaling laws pivot on.
pub const REFERENCE_DENSITY_LBFT3: f64 = 0.075;

/// Offset between °F and °R; `T = −460 °F` is the density singularity.
const RANKINE_OFFSET_F: f64 = 460.0;

/// Fixed temperature sweep domain (°F), inclusive.
pub const SWEEP_MIN_F: i32 = -40;
pub const SWEEP_MAX_F: i32 = 120;
pub const SWEEP_STEP_F: i32 = 10;

/// Velocity and pressure-drop series swept over the fixed temperature
/// domain, index-aligned with `temps_f`.
#[derive(Debug, Clone, PartialEq)]
pub struct TempSweep {
    pub temps_f: Vec<i32>,
    pub velocity_fts: Vec<f64>,
    pub delta_p_psi: Vec<f64>,
}

/// Attenuation curve reshaped for log-frequency plotting, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct FreqSeries {
    pub freqs_mhz: Vec<f64>,
    pub se_db: Vec<f64>,
}

/// Ideal-gas-style air density approximation,
/// `rho(T) = 0.075 · 460 / (T + 460)`.
///
/// Returns `None` at or below absolute zero instead of propagating an
/// infinite or negative density into the charts.
pub fn air_density_lbft3(temp_f: f64) -> Option<f64> {
    if temp_f <= -RANKINE_OFFSET_F {
        return None;
    }
    Some(REFERENCE_DENSITY_LBFT3 * RANKINE_OFFSET_F / (temp_f + RANKINE_OFFSET_F))
}

/// Derive the temperature-swept series from a single operating point.
///
/// Flow is held constant: velocity scales inversely with density, pressure
/// drop scales with it. A first-order approximation the service's own
/// report uses; reproduced exactly.
pub fn sweep_temps(result: &CalculationResult) -> TempSweep {
    let mut temps_f = Vec::new();
    let mut velocity_fts = Vec::new();
    let mut delta_p_psi = Vec::new();

    let mut t = SWEEP_MIN_F;
    while t <= SWEEP_MAX_F {
        // The fixed domain never reaches the singularity; the guard still
        // keeps a non-finite sample out of the charts if it ever did.
        if let Some(rho) = air_density_lbft3(t as f64) {
            temps_f.push(t);
            velocity_fts.push(result.velocity_fts * REFERENCE_DENSITY_LBFT3 / rho);
            delta_p_psi.push(result.delta_p_psi * rho / REFERENCE_DENSITY_LBFT3);
        }
        t += SWEEP_STEP_F;
    }

    TempSweep {
        temps_f,
        velocity_fts,
        delta_p_psi,
    }
}

/// Reshape the service's Hz/dB pair for the log-frequency chart:
/// frequencies land in MHz, attenuation passes through untouched.
pub fn reshape_freq(result: &CalculationResult) -> FreqSeries {
    FreqSeries {
        freqs_mhz: result.freqs.iter().map(|f| f / 1e6).collect(),
        se_db: result.se_db.clone(),
    }
}
