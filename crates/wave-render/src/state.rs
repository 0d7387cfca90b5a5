use wave_core::chart_data;
use wave_core::projection::{self, ArrayProjection};
use wave_core::CalculationResult;

use crate::charts::ChartRegistry;
use crate::readout::Readouts;

/// Everything derived from the last applied result. One instance lives for
/// the whole session; `apply` replaces its contents wholesale per completed
/// fetch. Consumers read, never mutate.
#[derive(Debug, Default)]
pub struct RenderState {
    pub result: Option<CalculationResult>,
    pub readouts: Option<Readouts>,
    pub projection: Option<ArrayProjection>,
    pub charts: ChartRegistry,
}

impl RenderState {
    /// Apply a freshly accepted result. Order is fixed: readouts first, then
    /// the projection, then the chart models, so the numbers never lag
    /// behind the visuals.
    pub fn apply(&mut self, result: CalculationResult) {
        self.readouts = Some(Readouts::from_result(&result));
        self.projection = Some(projection::project(&result));

        let sweep = chart_data::sweep_temps(&result);
        let series = chart_data::reshape_freq(&result);
        self.charts.install(&sweep, &series);

        self.result = Some(result);
    }
}
