use super::errors::{ConfigError, ConfigErrorKind};
use super::model::StateEvaluator;
use serde::{Deserialize, Serialize};

/// Relative tolerance for the boundary-continuity check in [`LayerTable::build`].
/// The published USSA-76 base pressures are rounded to about seven significant
/// digits, which leaves residuals of up to ~2e-6 at the layer boundaries.
pub const BOUNDARY_REL_TOL: f64 = 5.0e-6;

/// One atmospheric layer: from `base_altitude_m` upward, temperature varies
/// linearly with `lapse_rate_k_per_m` (zero denotes an isothermal layer) and
/// pressure follows the matching closed-form hydrostatic solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericLayer {
    pub base_altitude_m: f64,
    pub base_temperature_k: f64,
    pub base_pressure_pa: f64,
    pub lapse_rate_k_per_m: f64,
}

/// Immutable, ordered set of layers spanning the surface up to a ceiling.
/// Validated once by [`LayerTable::build`] and never mutated afterwards;
/// a built table can be shared read-only across simulation threads.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTable {
    layers: Vec<AtmosphericLayer>,
    ceiling_m: f64,
}

impl LayerTable {
    /// Validates and freezes a layer table. `ceiling_m` is the top of the
    /// last validated layer; queries at or above it are extrapolation.
    pub fn build(layers: Vec<AtmosphericLayer>, ceiling_m: f64) -> Result<Self, ConfigError> {
        if layers.is_empty() {
            return Err(ConfigError {
                kind: ConfigErrorKind::EmptyTable,
                index: 0,
            });
        }
        if layers[0].base_altitude_m != 0.0 {
            return Err(ConfigError {
                kind: ConfigErrorKind::FloorNotAtSurface,
                index: 0,
            });
        }

        for (i, layer) in layers.iter().enumerate() {
            if layer.base_temperature_k <= 0.0 || layer.base_pressure_pa <= 0.0 {
                return Err(ConfigError {
                    kind: ConfigErrorKind::NonPositivePhysicalValue,
                    index: i,
                });
            }
        }

        for i in 1..layers.len() {
            if layers[i].base_altitude_m <= layers[i - 1].base_altitude_m {
                return Err(ConfigError {
                    kind: ConfigErrorKind::NonMonotonicLayers,
                    index: i,
                });
            }
        }

        // Continuity is only meaningful once the ordering holds.
        for i in 1..layers.len() {
            Self::check_boundary(&layers[i - 1], &layers[i], i)?;
        }

        if ceiling_m <= layers[layers.len() - 1].base_altitude_m {
            return Err(ConfigError {
                kind: ConfigErrorKind::CeilingBelowTable,
                index: layers.len() - 1,
            });
        }

        Ok(LayerTable { layers, ceiling_m })
    }

    /// The layer below, evaluated at the upper layer's base, must reproduce
    /// the upper layer's base temperature and pressure.
    fn check_boundary(
        below: &AtmosphericLayer,
        above: &AtmosphericLayer,
        index: usize,
    ) -> Result<(), ConfigError> {
        let discontinuous = ConfigError {
            kind: ConfigErrorKind::DiscontinuousBoundary,
            index,
        };
        let (t, p) = StateEvaluator::temperature_pressure(below, above.base_altitude_m)
            .map_err(|_| discontinuous)?;

        let t_residual = (t - above.base_temperature_k).abs() / above.base_temperature_k;
        let p_residual = (p - above.base_pressure_pa).abs() / above.base_pressure_pa;
        if t_residual > BOUNDARY_REL_TOL || p_residual > BOUNDARY_REL_TOL {
            return Err(discontinuous);
        }
        Ok(())
    }

    /// Default USSA-76 table: sea level through the 32 km layer, validated
    /// up to the 47 km ceiling. Further layers can be supplied as data via
    /// [`LayerTable::build`] without touching any other component.
    pub fn us_standard_1976() -> Self {
        let layers = vec![
            AtmosphericLayer {
                base_altitude_m: 0.0,
                base_temperature_k: 288.15,
                base_pressure_pa: 101_325.0,
                lapse_rate_k_per_m: -0.0065,
            }, // 0-11 km (troposphere)
            AtmosphericLayer {
                base_altitude_m: 11_000.0,
                base_temperature_k: 216.65,
                base_pressure_pa: 22_632.06,
                lapse_rate_k_per_m: 0.0,
            }, // 11-20 km (tropopause, isothermal)
            AtmosphericLayer {
                base_altitude_m: 20_000.0,
                base_temperature_k: 216.65,
                base_pressure_pa: 5_474.889,
                lapse_rate_k_per_m: 0.001,
            }, // 20-32 km (stratosphere 1)
            AtmosphericLayer {
                base_altitude_m: 32_000.0,
                base_temperature_k: 228.65,
                base_pressure_pa: 868.019,
                lapse_rate_k_per_m: 0.0028,
            }, // 32-47 km (stratosphere 2)
        ];
        Self::build(layers, 47_000.0).expect("built-in USSA-76 table is self-consistent")
    }

    pub fn layers(&self) -> &[AtmosphericLayer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> &AtmosphericLayer {
        &self.layers[index]
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Top of the last validated layer; extrapolation begins here.
    pub fn ceiling_m(&self) -> f64 {
        self.ceiling_m
    }
}

/// Result of a layer lookup: the owning layer, the base altitude of the next
/// layer (`f64::INFINITY` for the last one), and whether the query altitude
/// is at or above the table ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerLookup {
    pub index: usize,
    pub next_boundary_m: f64,
    pub extrapolated: bool,
}

pub struct LayerLocator;

impl LayerLocator {
    /// Locates the layer owning `altitude_m`. Negative altitudes clamp to
    /// the surface; altitudes at or above the ceiling select the last layer
    /// and set the `extrapolated` flag. Total, allocation-free, O(log n).
    pub fn find(table: &LayerTable, altitude_m: f64) -> LayerLookup {
        let h = altitude_m.max(0.0);

        // Number of layers based at or below h; the table floor is 0 m, so
        // this is always at least 1.
        let upper = table
            .layers()
            .partition_point(|layer| layer.base_altitude_m <= h);
        let index = upper.saturating_sub(1);

        let next_boundary_m = if index + 1 < table.len() {
            table.layer(index + 1).base_altitude_m
        } else {
            f64::INFINITY
        };

        LayerLookup {
            index,
            next_boundary_m,
            extrapolated: h >= table.ceiling_m(),
        }
    }
}
