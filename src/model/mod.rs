//! Browser-independent model: catalog, controllers, selection and quizzes.

pub mod controller;
pub mod quiz;
pub mod registry;
pub mod shell;

pub use controller::{LinearKind, LinearState, RandomValues, ValueSource, VisualizationState};
pub use registry::{Category, StructureDescriptor, StructureKind};
pub use shell::Shell;
