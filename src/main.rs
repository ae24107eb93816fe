use log::{LevelFilter, error, info, warn};
use std::time::Instant;

use sigdist::batch_solver::solve_pairs;
use sigdist::cli::batch::{BatchSettings, check_batch_settings};
use sigdist::cli::compare::{CompareSettings, OutputFormat, check_compare_settings};
use sigdist::cli::core::{Commands, get_cli};
use sigdist::data_types::batch_summary::BatchSummary;
use sigdist::parsing::pair_table::load_pair_table;
use sigdist::util::json_io::save_json;
use sigdist::writers::distance_table::DistanceTableWriter;

/// Sets up env_logger; 0 is Info, 1 is Debug, anything more is Trace
fn init_logging(verbosity: u8) {
    let filter_level: LevelFilter = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();
}

fn run_compare(settings: CompareSettings) {
    // set up logging before we check the other settings
    init_logging(settings.verbosity);

    let settings = match check_compare_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    let engine = match settings.costs.build_engine() {
        Ok(engine) => engine,
        Err(e) => {
            error!("Error while building distance engine: {e:#}");
            std::process::exit(exitcode::SOFTWARE);
        }
    };

    let report = match engine.compute_report(settings.from_bytes(), settings.to_bytes()) {
        Ok(r) => r,
        Err(e) => {
            error!("Error while computing distance: {e}");
            std::process::exit(exitcode::DATAERR);
        }
    };

    if report.terminated_early {
        warn!("Distance exceeded the ceiling, reported value is a lower bound.");
    }

    match settings.output_format {
        OutputFormat::Text => println!("{}", report.distance),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Error while serializing distance report: {e}");
                std::process::exit(exitcode::SOFTWARE);
            }
        }
    };
}

fn run_batch(settings: BatchSettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    init_logging(settings.verbosity);

    let settings = match check_batch_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    // set up the number of threads for rayon
    match rayon::ThreadPoolBuilder::new().num_threads(settings.threads).build_global() {
        Ok(()) => {},
        Err(e) => {
            error!("Error while building thread pool: {e}");
            std::process::exit(exitcode::OSERR);
        }
    };

    // create a debug folder if specified
    if let Some(debug_folder) = settings.debug_folder.as_ref() {
        info!("Creating debug folder at {debug_folder:?}...");
        if let Err(e) = std::fs::create_dir_all(debug_folder) {
            error!("Error while creating debug folder: {e}");
            std::process::exit(exitcode::IOERR);
        }

        // save the CLI options
        let cli_json = debug_folder.join("cli_settings.json");
        info!("Saving CLI options to {cli_json:?}...");
        if let Err(e) = save_json(&settings, &cli_json) {
            error!("Error while saving CLI options: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    let engine = match settings.costs.build_engine() {
        Ok(engine) => engine,
        Err(e) => {
            error!("Error while building distance engine: {e:#}");
            std::process::exit(exitcode::SOFTWARE);
        }
    };

    info!("Loading signature pairs...");
    let pairs = match load_pair_table(&settings.input_fn) {
        Ok(p) => p,
        Err(e) => {
            error!("Error while loading pair table: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    };
    if pairs.is_empty() {
        warn!("No signature pairs found in {:?}.", settings.input_fn);
    }
    info!("Loaded {} signature pairs.", pairs.len());

    info!("Scoring pairs...");
    let all_results = solve_pairs(&pairs, &engine, true);
    info!("Pair scoring complete, saving all outputs...");

    info!("Saving distance table to {:?}...", settings.output_fn);
    let mut table_writer = match DistanceTableWriter::new(&settings.output_fn) {
        Ok(w) => w,
        Err(e) => {
            error!("Error while creating distance table: {e}");
            std::process::exit(exitcode::IOERR);
        }
    };
    for result in all_results.iter() {
        if let Err(e) = table_writer.write_result(result) {
            error!("Error while writing distance table: {e}");
            std::process::exit(exitcode::IOERR);
        }
    }
    if let Err(e) = table_writer.flush() {
        error!("Error while flushing distance table: {e}");
        std::process::exit(exitcode::IOERR);
    }

    let summary = BatchSummary::from_results(all_results.iter());
    info!("Solved:error pairs: {} : {}", summary.solved_pairs, summary.error_pairs);
    info!("\tExact matches: {}", summary.exact_matches);
    info!("\tEarly exits: {} ({:?})", summary.early_exit_pairs, summary.early_exit_fraction());
    info!("\tMean distance: {:?}", summary.mean_distance());
    info!("\tDP cells computed: {}", summary.total_cells);

    if let Some(summary_fn) = settings.summary_fn.as_deref() {
        info!("Saving output summary to {summary_fn:?}...");
        if let Err(e) = save_json(&summary, summary_fn) {
            error!("Error while saving summary file: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    info!("Batch completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn main() {
    let cli = get_cli();
    match cli.command {
        Commands::Compare(settings) => {
            run_compare(*settings);
        },
        Commands::Batch(settings) => {
            run_batch(*settings);
        }
    }

    info!("Process finished successfully.");
}
