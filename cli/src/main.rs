use castpath::args::{ConnectionArgs, PathArgs};
use castpath::colors::ColorScheme;
use castpath::display::{display_failures, display_run_info, display_run_report};
use castpath::json_output::create_json_output;
use castpath::*;
use castpath_core::{Algorithm, PathfindingConfig, WeightMode};
use clap::Parser;
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let colors = ColorScheme::new(!cli.no_color);

    let outcome = match &cli.command {
        Command::Path(args) => run_paths(args, &cli, &colors),
        Command::Connections(args) => run_connections(args, &cli, &colors),
    };

    match outcome {
        Ok((report, output_path)) => {
            display_failures(&report, &colors);
            if cli.json {
                match serde_json::to_string_pretty(&create_json_output(&report)) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("{} {}", colors.error("❌ Error:"), error);
                        return ExitCode::FAILURE;
                    }
                }
            } else if !cli.quiet {
                display_run_report(&report, &output_path, &colors);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_paths(
    args: &PathArgs,
    cli: &Cli,
    colors: &ColorScheme,
) -> Result<(RunReport, PathBuf), Box<dyn Error>> {
    let weight_mode = WeightMode::from_flag(&args.weights)
        .ok_or_else(|| format!("weights must be either u or w, got {:?}", args.weights))?;
    let app = CastPathApp::new(&args.casts, &args.pairs)?;

    let mode = if weight_mode.is_weighted() { "weighted paths (Dijkstra)" } else { "shortest hop paths" };
    if !cli.quiet && !cli.json {
        display_run_info(mode, &app.casts_path, colors);
    }

    let config = PathfindingConfig::new(weight_mode, args.reference_year);
    let mut graph = app.load_graph(&config)?;
    let pairs = app.load_pairs()?;

    let mut out = BufWriter::new(File::create(&args.output)?);
    let report = run_path_queries(&mut graph, &pairs, weight_mode, &mut out)?;
    out.flush()?;

    Ok((report, args.output.clone()))
}

fn run_connections(
    args: &ConnectionArgs,
    cli: &Cli,
    colors: &ColorScheme,
) -> Result<(RunReport, PathBuf), Box<dyn Error>> {
    let algorithm = Algorithm::from(args.algorithm.as_str());
    let app = CastPathApp::new(&args.casts, &args.pairs)?;

    if !cli.quiet && !cli.json {
        let mode = format!("first connection years ({})", algorithm.as_str());
        display_run_info(&mode, &app.casts_path, colors);
    }

    let mut graph = app.load_graph(&PathfindingConfig::default())?;
    let pairs = app.load_pairs()?;

    let mut out = BufWriter::new(File::create(&args.output)?);
    let report = run_connection_queries(&mut graph, &pairs, algorithm, &mut out)?;
    out.flush()?;

    Ok((report, args.output.clone()))
}
