use clap::Parser;
use manifest_retag::application::{RetagOptions, RetagReleaseService};
use manifest_retag::cli::{format_directive, format_report, Cli};
use manifest_retag::domain::plan;
use manifest_retag::error::RetagError;
use manifest_retag::infrastructure::{load_manifest, BuildTool};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<(), RetagError> {
    // Reject a bad target before touching the manifest
    let params = cli.run_parameters()?;
    let entries = load_manifest(&cli.manifest)?;

    let service = RetagReleaseService::new(BuildTool::new(cli.build_tool.clone()));
    let options = RetagOptions {
        plan_only: cli.plan,
    };

    let report = service.execute(plan(&entries, &params), &options, |directive| {
        println!("{}", format_directive(directive));
    })?;

    println!("{}", format_report(&report));
    Ok(())
}
