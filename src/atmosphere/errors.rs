use std::{error::Error, fmt, io};

/// What invalidated a layer table at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    EmptyTable,
    FloorNotAtSurface,
    NonMonotonicLayers,
    DiscontinuousBoundary,
    NonPositivePhysicalValue,
    CeilingBelowTable,
}

/// Fatal table-construction error. `index` is the offending layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub index: usize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConfigErrorKind::EmptyTable => write!(f, "layer table is empty"),
            ConfigErrorKind::FloorNotAtSurface => {
                write!(f, "layer {} does not base the table at 0 m", self.index)
            }
            ConfigErrorKind::NonMonotonicLayers => {
                write!(f, "layer {} base altitude is not strictly increasing", self.index)
            }
            ConfigErrorKind::DiscontinuousBoundary => write!(
                f,
                "layer {} base state does not match the layer below at its boundary",
                self.index
            ),
            ConfigErrorKind::NonPositivePhysicalValue => write!(
                f,
                "layer {} has a non-positive base temperature or pressure",
                self.index
            ),
            ConfigErrorKind::CeilingBelowTable => write!(
                f,
                "table ceiling is not above the base of layer {}",
                self.index
            ),
        }
    }
}

impl Error for ConfigError {}

/// Query-time error: the gradient law produced a non-positive temperature,
/// so the requested altitude is outside any physically meaningful regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError {
    pub altitude_m: f64,
    pub temperature_k: f64,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "non-positive temperature {:.3} K at altitude {:.1} m is outside the layer model",
            self.temperature_k, self.altitude_m
        )
    }
}

impl Error for DomainError {}

/// Errors while loading a layer table from an external CSV file.
#[derive(Debug)]
pub enum TableLoadError {
    IoError(io::Error),
    CsvError(csv::Error),
    InvalidTable(ConfigError),
}

impl fmt::Display for TableLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableLoadError::IoError(e) => write!(f, "I/O error: {}", e),
            TableLoadError::CsvError(e) => write!(f, "CSV parsing error: {}", e),
            TableLoadError::InvalidTable(e) => write!(f, "invalid layer table: {}", e),
        }
    }
}

impl Error for TableLoadError {}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for TableLoadError {
    fn from(err: io::Error) -> Self {
        TableLoadError::IoError(err)
    }
}

impl From<csv::Error> for TableLoadError {
    fn from(err: csv::Error) -> Self {
        TableLoadError::CsvError(err)
    }
}

impl From<ConfigError> for TableLoadError {
    fn from(err: ConfigError) -> Self {
        TableLoadError::InvalidTable(err)
    }
}
