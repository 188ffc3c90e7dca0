//! kindrouter CLI entry point.
//!
//! Resolves configuration, enumerates the manifest directory, and runs
//! the classification and dispatch engine over the batch.

mod cli_parser;

use std::process::ExitCode;

use kindrouter::config::Config;
use kindrouter::dispatch::{AdmissionMode, Router, DEFAULT_KIND_PATTERN};
use kindrouter::pipeline::{read_manifest_dir, ConsoleSink, JsonSink, ReportSink};
use kindrouter::{Engine, ErrorPolicy};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("run");

    match command {
        "run" => run_dispatch(&args[2..]),
        "kinds" => run_kinds(),
        "help" | "--help" | "-h" => {
            if let Some(sub) = args.get(2) {
                cli_parser::print_command_help(sub);
            } else {
                cli_parser::print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("kindrouter {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        // Bare flags mean "run" with options.
        flag if flag.starts_with('-') => run_dispatch(&args[1..]),
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if std::env::var("KINDROUTER_LOG_JSON").is_ok() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_dispatch(args: &[String]) -> ExitCode {
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2u8);
        }
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--manifests" => {
                if i + 1 < args.len() {
                    config.manifest_dir = args[i + 1].clone().into();
                    i += 2;
                } else {
                    eprintln!("Missing value for --manifests");
                    return ExitCode::from(2u8);
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    if let Err(e) = config.apply_file(std::path::Path::new(&args[i + 1])) {
                        eprintln!("Configuration error: {}", e);
                        return ExitCode::from(2u8);
                    }
                    i += 2;
                } else {
                    eprintln!("Missing value for --config");
                    return ExitCode::from(2u8);
                }
            }
            "--continue-on-error" => {
                config.error_policy = ErrorPolicy::ContinueOnError;
                i += 1;
            }
            "--exact-match" => {
                config.admission = AdmissionMode::Exact;
                i += 1;
            }
            "--json" => {
                config.json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                cli_parser::print_command_help("run");
                return ExitCode::FAILURE;
            }
        }
    }

    let batch = match read_manifest_dir(&config.manifest_dir) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new(
        config.admission.allow_list(),
        Router::with_trace_handlers(),
        config.error_policy,
    );
    let mut sink: Box<dyn ReportSink> =
        if config.json_output { Box::new(JsonSink) } else { Box::new(ConsoleSink) };

    match engine.process(&batch, sink.as_mut()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(halted) => {
            eprintln!("Fatal: {}", halted.error);
            eprintln!("Batch stopped after {} document(s)", halted.summary.documents);
            ExitCode::FAILURE
        }
    }
}

fn run_kinds() -> ExitCode {
    let router = Router::with_trace_handlers();
    println!("allow-list pattern: {}", DEFAULT_KIND_PATTERN);
    println!("registered handlers:");
    for kind in router.handled_kinds() {
        println!("  {}", kind);
    }
    ExitCode::SUCCESS
}
