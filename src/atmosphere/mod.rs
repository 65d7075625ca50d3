pub mod errors;
pub mod layers;
pub mod loader;
pub mod model;

pub use errors::{ConfigError, ConfigErrorKind, DomainError, TableLoadError};
pub use layers::{AtmosphericLayer, LayerLocator, LayerLookup, LayerTable};
pub use model::{AtmosphereModel, AtmosphericState, StateEvaluator};
