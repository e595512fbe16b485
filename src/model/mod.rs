/// Model loading and inference capability
///
/// The services consume a classifier through a single capability:
/// a class-probability pair per input row. Two implementations exist,
/// selected exactly once at startup by the loader:
/// - `LogisticModel`, deserialized from an on-disk artifact
/// - `ConstantModel`, the always-available stand-in

pub mod artifact;
pub mod classifier;
pub mod loader;

pub use artifact::{ModelArtifact, ModelMetadata};
pub use classifier::{ConstantModel, LogisticModel, ProbabilityModel};
pub use loader::load_model;
