
/// Aggregate statistics over a batch of pair results
pub mod batch_summary;
/// The scored outcome of a single signature pair
pub mod pair_result;
/// Two signatures to compare, the unit of batch work
pub mod signature_pair;
