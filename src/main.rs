use anyhow::Result;
use std::io::{self, IsTerminal};
use stringcase::cli::{Cli, Commands, ConvertArgs};
use stringcase::config::Config;
use stringcase::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Convert(args) => {
            init_tracing(args.verbose);
            run_convert(&args)?;
        }
        Commands::Init { output, force } => {
            init_tracing(false);
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbose flag
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run the convert command
fn run_convert(args: &ConvertArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let config = Config::load(path)?;
            tracing::info!("Loaded configuration from: {}", path.display());
            config
        }
        None => Config::default(),
    };

    let pipeline = Pipeline::new(args.converter(&config)?);
    let mut stdout = io::stdout().lock();

    if args.inputs.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            tracing::warn!("No inputs given, reading from the terminal (Ctrl-D to finish)");
        }
        pipeline.run_reader(stdin.lock(), &mut stdout)?;
    } else {
        pipeline.run(&args.inputs, &mut stdout)?;
    }

    Ok(())
}

/// Run the init command
fn run_init(output_path: &std::path::Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - output.case: Target case (camel, pascal, snake, kebab, ...)");
    println!("  - output.delimiter: Delimiter for the delimited styles");
    println!("  - output.ignore: Characters exempted from delimiter insertion");
    println!("  - acronyms: Exact input -> pre-split replacement for camel/pascal");

    Ok(())
}
