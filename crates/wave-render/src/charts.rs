use wave_core::chart_data::{FreqSeries, TempSweep};

// Literal axis titles. Fixed configuration, not derived data.
pub const PT_X_TITLE: &str = "Temperature (°F)";
pub const PT_LEFT_TITLE: &str = "Velocity (ft/s)";
pub const PT_RIGHT_TITLE: &str = "ΔP (psi)";
pub const AF_X_TITLE: &str = "Frequency (MHz)";
pub const AF_Y_TITLE: &str = "Attenuation (dB)";

/// Velocity/pressure-vs-temperature chart model: a dual-axis line chart,
/// velocity on the left axis, pressure drop on the right, sharing the
/// temperature x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PtChart {
    pub velocity_points: Vec<[f64; 2]>,
    pub pressure_points: Vec<[f64; 2]>,
}

impl PtChart {
    fn new(sweep: &TempSweep) -> Self {
        let velocity_points = sweep
            .temps_f
            .iter()
            .zip(&sweep.velocity_fts)
            .map(|(&t, &v)| [t as f64, v])
            .collect();
        let pressure_points = sweep
            .temps_f
            .iter()
            .zip(&sweep.delta_p_psi)
            .map(|(&t, &dp)| [t as f64, dp])
            .collect();
        Self {
            velocity_points,
            pressure_points,
        }
    }
}

/// Attenuation-vs-frequency chart model. The x coordinate is stored as
/// log₁₀(MHz) so the plot gets a logarithmic frequency axis; the tick
/// formatter maps it back for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AfChart {
    pub se_points: Vec<[f64; 2]>,
}

impl AfChart {
    fn new(series: &FreqSeries) -> Self {
        let se_points = series
            .freqs_mhz
            .iter()
            .zip(&series.se_db)
            .filter(|(&mhz, _)| mhz > 0.0)
            .map(|(&mhz, &se)| [mhz.log10(), se])
            .collect();
        Self { se_points }
    }
}

/// Owns the two chart slots. `install` is the single mutator: it drops any
/// live model before constructing the replacement, so no two live models for
/// the same slot ever coexist.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    pt: Option<PtChart>,
    af: Option<AfChart>,
}

impl ChartRegistry {
    /// Rebuild both charts from freshly synthesized series. Idempotent for
    /// identical inputs.
    pub fn install(&mut self, sweep: &TempSweep, series: &FreqSeries) {
        self.pt.take();
        self.af.take();
        self.pt = Some(PtChart::new(sweep));
        self.af = Some(AfChart::new(series));
    }

    pub fn pt(&self) -> Option<&PtChart> {
        self.pt.as_ref()
    }

    pub fn af(&self) -> Option<&AfChart> {
        self.af.as_ref()
    }
}
