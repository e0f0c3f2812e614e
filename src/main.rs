use clap::Parser;
use matrixc::ast::Program;
use matrixc::frontend::lexer::tokenize;
use matrixc::frontend::parser::parse_program;
use matrixc::frontend::token::Token;
use matrixc::utils::config::driver::{SOURCE_EXTENSION, TOKEN_TABLE_RULE_WIDTH};
use matrixc::utils::errors::{FrontendError, FrontendResult};
use std::{fs, io, path::Path, path::PathBuf, time::Instant};
use thiserror::Error;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Front end for the matrix teaching language",
    long_about = "Front end for the matrix teaching language.\n\
                 Tokenizes a source file and parses it into a syntax tree.\n\
                 \n\
                 Example usage:\n\
                 matrixc input.mtx                  # Check that the program parses\n\
                 matrixc input.mtx --show-tokens    # Print the token table\n\
                 matrixc input.mtx --show-ast       # Dump the syntax tree as JSON\n\
                 matrixc input.mtx --timing         # Show phase timing"
)]
struct Cli {
    // The path to the source file
    path: PathBuf,

    // Print every token with its line and column
    #[arg(long)]
    show_tokens: bool,

    // Dump the syntax tree as indented JSON
    #[arg(long)]
    show_ast: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show phase timing
    #[arg(short, long)]
    timing: bool,
}

#[derive(Debug, Default)]
struct FrontendStats {
    lexer_time: f64,
    parser_time: f64,
    token_count: usize,
    statement_count: usize,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("File read error: {0}")]
    FileRead(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Frontend(#[from] FrontendError),
}

type DriverResult<T> = Result<T, DriverError>;

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn read(path: &Path) -> DriverResult<String> {
    if !path.exists() {
        return Err(DriverError::FileRead(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}

fn lexical_analysis(source: &str, stats: &mut FrontendStats, verbose: bool) -> FrontendResult<Vec<Token>> {
    let start = Instant::now();
    let tokens = tokenize(source)?;
    stats.lexer_time = start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        println!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens", stats.token_count);
    }
    Ok(tokens)
}

fn parsing_phase(tokens: &[Token], stats: &mut FrontendStats, verbose: bool) -> FrontendResult<Program> {
    let start = Instant::now();
    let program = parse_program(tokens)?;
    stats.parser_time = start.elapsed().as_secs_f64();
    stats.statement_count = program.body.len();

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
    }
    Ok(program)
}

fn print_tokens(tokens: &[Token]) {
    println!("{:<20} | {:<20} | {:<5} | COLUMN", "KIND", "LEXEME", "LINE");
    println!("{}", "-".repeat(TOKEN_TABLE_RULE_WIDTH));
    for token in tokens {
        println!(
            "{:<20} | {:<20} | {:<5} | {}",
            token.kind.name(),
            token.lexeme,
            token.line,
            token.column
        );
    }
}

fn print_stats(stats: &FrontendStats) {
    println!("\nFront-end statistics:");
    println!("  Lexical analysis:  {:>8.3}s", stats.lexer_time);
    println!("  Parsing:           {:>8.3}s", stats.parser_time);
    println!("  Tokens:            {}", stats.token_count);
    println!("  Top-level statements: {}", stats.statement_count);
}

fn run(args: &Cli) -> DriverResult<FrontendStats> {
    let mut stats = FrontendStats::default();

    if args.verbose {
        println!("Reading {}", args.path.display());
    }
    let source = read(&args.path)?;

    let tokens = lexical_analysis(&source, &mut stats, args.verbose)?;
    if args.show_tokens {
        print_tokens(&tokens);
    }

    let program = parsing_phase(&tokens, &mut stats, args.verbose)?;
    println!("Parsed program '{}'", program.name);

    if args.show_ast {
        match serde_json::to_string_pretty(&program) {
            Ok(json) => println!("{}", json),
            Err(e) => fatal(&format!("Failed to serialize syntax tree: {}", e)),
        }
    }
    Ok(stats)
}

fn main() {
    let args = Cli::parse();

    if args.path.extension().map_or(true, |ext| ext != SOURCE_EXTENSION) {
        eprintln!("Warning: Input file does not have .{} extension", SOURCE_EXTENSION);
    }

    match run(&args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) => fatal(&e.to_string()),
    }
}
