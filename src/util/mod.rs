
/// Helper functions for reading/writing JSON and transparent gzip via serde
pub mod json_io;
/// Helper functions for generating the progress bars
pub mod progress_bar;
/// Full-matrix reference implementation of the weighted edit distance
pub mod sequence_alignment;
/// Seeded generator for randomized tests
#[cfg(test)]
pub mod test_rng;
