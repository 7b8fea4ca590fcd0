use lexical_analyzer::config::runtime::{parse_report_format, RuntimeConfig};
use lexical_analyzer::{interactive, logging, pipeline};
use std::env;
use std::io;

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";
const COMPLETION_RULE: &str = "==============================";

/// Command line after parsing
#[derive(Debug, PartialEq)]
struct CliOptions {
    input: String,
    output: String,
    show_help: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("lexical_analyzer");

    let mut config = RuntimeConfig::default();
    let options = match parse_args(args.get(1..).unwrap_or_default(), &mut config) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("       {} --help", program);
            std::process::exit(1);
        }
    };

    if options.show_help {
        print_help(program);
        return;
    }

    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match pipeline::process_file_with_config(&options.input, &options.output, &config)
    {
        Ok(result) => result,
        Err(error) => {
            print_pipeline_error(&error, &options);
            logging::print_cargo_style_summary();
            std::process::exit(1);
        }
    };

    if result.has_invalid_identifiers() {
        println!(
            "Invalid identifiers found in {}. Please remove or correct them to make the code valid.",
            options.input
        );
    }

    println!("\n{}", COMPLETION_RULE);
    println!("Lexical analysis completed.");
    println!(
        "See '{}' for detailed token categories and symbol table.",
        options.output
    );
    println!("{}", COMPLETION_RULE);

    logging::print_cargo_style_summary();

    if config.interactive.enabled {
        let stdin = io::stdin();
        if let Err(error) = interactive::run_session(stdin.lock(), io::stdout()) {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}

fn init_logging(config: &RuntimeConfig) -> Result<(), String> {
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    pipeline::validate_pipeline()
}

/// Positional INPUT and OUTPUT plus flags; flags override environment preferences
fn parse_args(args: &[String], config: &mut RuntimeConfig) -> Result<CliOptions, String> {
    let mut positional = Vec::new();
    let mut show_help = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => show_help = true,
            "--no-interactive" => config.interactive.enabled = false,
            "--format" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--format requires a value (text or json)".to_string())?;
                config.report.format = parse_report_format(value)
                    .ok_or_else(|| format!("Unknown report format '{}'", value))?;
                i += 1;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{}'", flag));
            }
            path => positional.push(path.to_string()),
        }
        i += 1;
    }

    if positional.len() > 2 {
        return Err(format!("Unexpected argument '{}'", positional[2]));
    }

    let mut positional = positional.into_iter();
    Ok(CliOptions {
        input: positional
            .next()
            .unwrap_or_else(|| DEFAULT_INPUT.to_string()),
        output: positional
            .next()
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        show_help,
    })
}

fn print_pipeline_error(error: &pipeline::PipelineError, options: &CliOptions) {
    match error {
        pipeline::PipelineError::FileProcessing(_) => {
            println!("Error: Could not open {}", options.input);
        }
        pipeline::PipelineError::Report(report_err) if error.is_open_failure() => {
            println!("Error: Could not open {}", options.output);
            eprintln!("  {}", report_err);
            return;
        }
        _ => {}
    }
    eprintln!("  {}", error);
}

fn print_help(program_name: &str) {
    println!("Lexical Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Token categories, symbol table and identifier checks for C-like source");
    println!();
    println!("USAGE:");
    println!(
        "    {} [INPUT] [OUTPUT] [--format text|json] [--no-interactive]",
        program_name
    );
    println!();
    println!("ARGUMENTS:");
    println!("    [INPUT]     Source file to analyze (default: {})", DEFAULT_INPUT);
    println!("    [OUTPUT]    Report destination (default: {})", DEFAULT_OUTPUT);
    println!();
    println!("OPTIONS:");
    println!("    --format F          Report format: text (default) or json");
    println!("    --no-interactive    Skip the identifier validation prompt");
    println!("    --help              Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    LEXAN_REPORT_FORMAT, LEXAN_INTERACTIVE, LEXAN_LOGGING_MIN_LEVEL and");
    println!("    the other LEXAN_* variables set default preferences.");
    println!();

    let pipeline_info = pipeline::get_pipeline_info();
    println!("PIPELINE CAPABILITIES:");
    for line in pipeline_info.report().lines() {
        println!("    {}", line);
    }
}
