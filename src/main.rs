use anyhow::Context;
use clap::Parser;
use nextevent::{
    CheckOutcome, CliArgs, GenerateError, GeneratorConfig, LoggingConfig, check, generate,
    init_logging,
};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = CliArgs::parse();

    let logging_config = LoggingConfig::from_env().with_format(cli.log_format);
    let _guard = init_logging(logging_config)?;

    let root = std::env::current_dir().context("could not determine the working directory")?;
    let config = GeneratorConfig::in_dir(root);
    if let Err(err) = config.validate() {
        return Ok(abort("config", &err));
    }

    let result = if cli.check {
        check(&config).map(|outcome| match outcome {
            CheckOutcome::UpToDate => ExitCode::SUCCESS,
            outcome => {
                tracing::error!(
                    output = %config.output_path.display(),
                    ?outcome,
                    "generated accessors are out of date"
                );
                eprintln!(
                    "nextevent: {} is out of date ({outcome:?})",
                    config.output_path.display()
                );
                ExitCode::FAILURE
            }
        })
    } else {
        generate(&config).map(|_| ExitCode::SUCCESS)
    };

    Ok(result.unwrap_or_else(|err: GenerateError| abort(err.stage(), &err)))
}

/// Reports a fatal failure on stderr even when logging is filtered out.
fn abort(stage: &str, err: &dyn std::fmt::Display) -> ExitCode {
    tracing::error!(stage, error = %err, "generation aborted");
    eprintln!("nextevent: {stage} failed: {err:#}");
    ExitCode::FAILURE
}
