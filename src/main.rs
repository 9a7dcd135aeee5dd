mod cli;

use cli::Args;
use depsync::adapters::outbound::console::StderrProgressReporter;
use depsync::adapters::outbound::filesystem::FileSystemReader;
use depsync::adapters::outbound::gomod::{GoModParser, GoSemverComparator, GoWorkParser};
use depsync::application::dto::CheckRequest;
use depsync::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depsync::application::read_models::ConsistencyReadModelBuilder;
use depsync::application::use_cases::CheckConsistencyUseCase;
use depsync::config::{discover_config, load_config_from_path, resolve_options};
use depsync::consistency::domain::ManifestLayout;
use depsync::consistency::services::ReportMetadataGenerator;
use depsync::shared::error::{DepsyncError, ExitCode};
use depsync::shared::Result;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    if args.paths.is_empty() {
        eprintln!("error: at least one PATH is required\n");
        eprintln!("{}", Args::usage());
        eprintln!("\nFor more information, try '--help'.");
        return Ok(ExitCode::InvalidArguments);
    }

    let working_dir = std::env::current_dir().map_err(|e| DepsyncError::Validation {
        message: format!("cannot determine the current directory: {}", e),
    })?;

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&working_dir)?,
    };
    let options = resolve_options(
        args.format,
        &args.ignore,
        args.skip_indirect,
        config.as_ref(),
    )?;

    // Create adapters (Dependency Injection)
    let use_case = CheckConsistencyUseCase::new(
        FileSystemReader::new(),
        GoModParser::new(),
        GoWorkParser::new(),
        GoSemverComparator::new(),
        StderrProgressReporter::new(),
        ManifestLayout::go(),
    );

    let request = CheckRequest::builder()
        .start_paths(args.paths)
        .working_dir(working_dir)
        .ignore_patterns(options.ignore_patterns)
        .skip_indirect(options.skip_indirect)
        .build()?;

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let metadata = ReportMetadataGenerator::generate_default_metadata();
    let model = ConsistencyReadModelBuilder::build(&response, &metadata);
    let formatted_output = FormatterFactory::create(options.format).format(&model)?;

    PresenterFactory::create(PresenterType::from_output(args.output)).present(&formatted_output)?;

    Ok(if response.has_mismatch() {
        ExitCode::MismatchFound
    } else {
        ExitCode::Success
    })
}
