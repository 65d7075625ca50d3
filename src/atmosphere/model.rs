use super::errors::DomainError;
use super::layers::{AtmosphericLayer, LayerLocator, LayerTable};
use crate::constants::{G0, GAMMA_AIR, R_AIR};

/// Lapse rates are floating-point constants subject to rounding, so the
/// isothermal branch is selected by tolerance rather than exact equality.
const ZERO_LAPSE_EPS: f64 = 1e-12;

/// Full atmospheric state at one altitude. A plain value: the derived fields
/// are always recomputed from (T, p), never stored independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    pub altitude_m: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
    pub speed_of_sound_m_s: f64,
    /// True when the altitude is at or above the table ceiling, where the
    /// analytic continuation is not physically validated.
    pub extrapolated: bool,
}

pub struct StateEvaluator;

impl StateEvaluator {
    /// Temperature (K) and pressure (Pa) at `altitude_m` from one layer's
    /// closed-form hydrostatic solution. `altitude_m` must not be below the
    /// layer base.
    pub fn temperature_pressure(
        layer: &AtmosphericLayer,
        altitude_m: f64,
    ) -> Result<(f64, f64), DomainError> {
        let dh = altitude_m - layer.base_altitude_m;
        let t0 = layer.base_temperature_k;
        let p0 = layer.base_pressure_pa;
        let lapse = layer.lapse_rate_k_per_m;

        if lapse.abs() < ZERO_LAPSE_EPS {
            // Isothermal: exponential hydrostatic decay at constant T.
            let p = p0 * (-G0 * dh / (R_AIR * t0)).exp();
            return Ok((t0, p));
        }

        // Gradient: polytropic power law; the exponent is only well-defined
        // for strictly positive temperature.
        let t = t0 + lapse * dh;
        if t <= 0.0 {
            return Err(DomainError {
                altitude_m,
                temperature_k: t,
            });
        }
        let p = p0 * (t / t0).powf(-G0 / (R_AIR * lapse));
        Ok((t, p))
    }

    /// Evaluates one layer at `altitude_m` and derives density (ideal gas)
    /// and speed of sound. Pure: identical inputs give bit-identical output.
    pub fn evaluate(
        layer: &AtmosphericLayer,
        altitude_m: f64,
    ) -> Result<AtmosphericState, DomainError> {
        let (temperature_k, pressure_pa) = Self::temperature_pressure(layer, altitude_m)?;
        Ok(AtmosphericState {
            altitude_m,
            temperature_k,
            pressure_pa,
            density_kg_m3: pressure_pa / (R_AIR * temperature_k),
            speed_of_sound_m_s: (GAMMA_AIR * R_AIR * temperature_k).sqrt(),
            extrapolated: false,
        })
    }
}

/// Facade over layer lookup and per-layer evaluation: the single entry point
/// the trajectory integrator calls, once per integration step. Holds only
/// the immutable table, so one instance can serve any number of threads.
pub struct AtmosphereModel {
    table: LayerTable,
}

impl AtmosphereModel {
    pub fn new(table: LayerTable) -> Self {
        AtmosphereModel { table }
    }

    pub fn us_standard_1976() -> Self {
        Self::new(LayerTable::us_standard_1976())
    }

    pub fn table(&self) -> &LayerTable {
        &self.table
    }

    /// Atmospheric state at a geometric altitude. Negative altitudes clamp
    /// to the surface; altitudes at or above the ceiling return the last
    /// layer's analytic continuation with `extrapolated` set, not an error.
    pub fn query(&self, altitude_m: f64) -> Result<AtmosphericState, DomainError> {
        let h = altitude_m.max(0.0);
        let lookup = LayerLocator::find(&self.table, h);
        let mut state = StateEvaluator::evaluate(self.table.layer(lookup.index), h)?;
        state.extrapolated = lookup.extrapolated;
        Ok(state)
    }
}
