
/// Writes a per-pair table of distances
pub mod distance_table;
