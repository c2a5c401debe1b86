use anyhow::Result;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tidyscribe::cli::Cli;
use tidyscribe::config::Config;
use tidyscribe::pipeline::Pipeline;
use tidyscribe::source::ReplaySource;
use tidyscribe::transcript::TranscriptResponse;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let response = match run(&cli) {
        Ok(transcript) => transcript.into(),
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            let response = TranscriptResponse::from_error(&e);
            print_response(&response, cli.pretty)?;
            std::process::exit(1);
        }
    };

    print_response(&response, cli.pretty)?;
    Ok(())
}

/// Logs go to stderr so the response envelope on stdout stays parseable.
fn init_tracing(quiet: bool, verbose: u8) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> tidyscribe::Result<tidyscribe::Transcript> {
    let config = load_config(cli)?;
    let mut source = open_source(&cli.input)?;
    Pipeline::new(&config).run(&mut source)
}

fn load_config(cli: &Cli) -> tidyscribe::Result<Config> {
    let mut config = match (&cli.config, Config::default_path()) {
        (Some(path), _) => Config::load(path)?,
        (None, Some(path)) => Config::load_or_default(&path)?,
        (None, None) => Config::default(),
    };
    config = config.with_env_overrides();

    if let Some(threshold) = cli.similarity_threshold {
        config.dedup.similarity_threshold = threshold;
    }
    if let Some(language) = &cli.language {
        config.engine.language = language.clone();
    }
    if let Some(model) = &cli.model {
        config.engine.model = model.clone();
    }
    if let Some(device) = &cli.device {
        config.engine.device = device.clone();
    }

    config.validate()?;
    Ok(config)
}

fn open_source(input: &Path) -> tidyscribe::Result<ReplaySource> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        ReplaySource::from_json(&buffer)
    } else {
        ReplaySource::from_path(input)
    }
}

fn print_response(response: &TranscriptResponse, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{json}");
    Ok(())
}
