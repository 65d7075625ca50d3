use super::errors::TableLoadError;
use super::layers::{AtmosphericLayer, LayerTable};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

impl LayerTable {
    /// Loads a layer table from a CSV file with one record per layer
    /// (columns `base_altitude_m`, `base_temperature_k`, `base_pressure_pa`,
    /// `lapse_rate_k_per_m`) and validates it through [`LayerTable::build`].
    /// This keeps the table data, not code: alternate atmospheres are a
    /// file away.
    pub fn from_csv_path<P: AsRef<Path>>(
        path: P,
        ceiling_m: f64,
    ) -> Result<LayerTable, TableLoadError> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

        let mut layers: Vec<AtmosphericLayer> = Vec::new();
        for record in reader.deserialize() {
            layers.push(record?);
        }

        Ok(LayerTable::build(layers, ceiling_m)?)
    }
}
