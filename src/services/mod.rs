pub mod catalog;
pub mod probe;
pub mod probe_types;
