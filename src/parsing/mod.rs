/*!
# Parsing module
Contains the logic for parsing input files into meaningful structs / data.
*/
/// Loader for delimited tables of signature pairs
pub mod pair_table;
