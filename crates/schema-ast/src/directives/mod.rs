pub mod builtin;
mod directive_args;
mod directive_registry;
mod manipulator;
mod manipulator_error;

pub use directive_args::DirectiveArgs;
pub use directive_registry::DirectiveRegistry;
pub use directive_registry::ResolvedManipulators;
pub use manipulator::ArgManipulator;
pub use manipulator::DirectiveCapability;
pub use manipulator::FieldManipulator;
pub use manipulator::NodeManipulator;
pub use manipulator::ResolvedManipulator;
pub use manipulator_error::ManipulatorError;
pub use manipulator_error::ManipulatorResult;

#[cfg(test)]
mod tests;
