//! CLI argument parsing and help text for kindrouter.

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "kindrouter - manifest classification and dispatch engine v{}

USAGE:
    kindrouter [COMMAND] [OPTIONS]

COMMANDS:
    run          Decode, classify, and dispatch a manifest directory (default)
    kinds        Show the allow-list pattern and registered handlers
    version      Show version information
    help         Show this help message

OPTIONS:
    -h, --help            Show help for command
    -V, --version         Show version information
    --manifests DIR       Manifest directory (default: ./resources)
    --config FILE         Load configuration from a TOML file
    --continue-on-error   Keep processing after a decode failure
    --exact-match         Use exact kind matching for admission
    --json                Emit JSON outcome records

EXAMPLES:
    kindrouter                               # Process ./resources
    kindrouter run --manifests ./deploy      # Process a specific directory
    kindrouter run --continue-on-error       # Report all failures, keep going
    kindrouter run --json                    # One JSON record per document
    kindrouter kinds                         # Show admission and routing tables

ENVIRONMENT:
    KINDROUTER_CONFIG           Path to a TOML config file
    KINDROUTER_MANIFEST_DIR     Manifest directory
    KINDROUTER_ON_DECODE_ERROR  Decode error policy (stop, continue)
    KINDROUTER_ADMISSION        Admission semantics (pattern, exact)
    KINDROUTER_LOG_JSON         Emit logs as JSON when set
    RUST_LOG                    Log level (debug, info, warn, error)

EXIT CODES:
    0  Success
    1  Failure (fatal decode error, unreadable directory)
    2  Configuration error
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str) {
    match command {
        "run" => print_run_help(),
        "kinds" => print_kinds_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'kindrouter help' for general usage.",
                command
            );
        }
    }
}

fn print_run_help() {
    eprintln!(
        "kindrouter run - Decode, classify, and dispatch manifests

USAGE:
    kindrouter run [OPTIONS]

OPTIONS:
    --manifests DIR       Manifest directory (default: ./resources)
    --config FILE         Load configuration from a TOML file
    --continue-on-error   Keep processing after a decode failure
    --exact-match         Use exact kind matching for admission
    --json                Emit JSON outcome records

DESCRIPTION:
    Reads every file in the manifest directory (sorted by name), decodes
    each as a single-document YAML or JSON manifest, checks the kind
    against the allow-list, and routes admitted objects to their kind
    handler. One outcome line per document, then a summary.

    By default a decode failure stops the batch; --continue-on-error
    records the failure and moves on.

EXAMPLES:
    kindrouter run
    kindrouter run --manifests ./deploy --json
"
    );
}

fn print_kinds_help() {
    eprintln!(
        "kindrouter kinds - Show admission and routing tables

USAGE:
    kindrouter kinds

DESCRIPTION:
    Prints the admission allow-list pattern and every kind with a
    registered handler. Admission matches the pattern as a substring;
    routing requires an exact kind name.
"
    );
}
