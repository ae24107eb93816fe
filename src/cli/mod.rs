/*!
# CLI module
Command line interface functionality that is specific to sigdist.
*/

/// The main CLI module that contains the top-level CLI parser and help text
pub mod core;
/// The batch CLI subcommand
pub mod batch;
/// The compare CLI subcommand
pub mod compare;
/// Cost model options shared by all subcommands
pub mod costs;
