pub mod registry;

pub use registry::{MockRegistry, write_input};
