
/// Parallel scoring of many signature pairs
pub mod batch_solver;
/// Command line interface functionality
pub mod cli;
/// Contains various shared data types
pub mod data_types;
/// The bounded-memory weighted edit distance engine
pub mod distance;
/// Tooling for parsing input files into meaningful structs / data
pub mod parsing;
/// Various utility functions that tend to be very generic
pub mod util;
/// All output writers
pub mod writers;
