//! Print the truth table of a propositional formula.
//!
//! Run with: `cargo run --example truth-table -- "p and *(q or r)"`
//! Single evaluation: `cargo run --example truth-table -- "p => q" -a p=true -a q=false`

use clap::Parser;
use color_eyre::eyre::eyre;

use proptable::{parse_with, Config, DisplayConfig};

#[derive(Parser, Debug)]
#[command(name = "truth-table")]
#[command(about = "Compile a propositional formula and print its truth table")]
struct Args {
    /// Formula to compile
    formula: String,

    /// Character marking a group as a reported sub-expression
    #[arg(short, long, default_value_t = Config::DEFAULT_MARKER)]
    marker: char,

    /// Treat every group as plain grouping
    #[arg(long)]
    no_marker: bool,

    /// Evaluate once under the all-true assignment with these overrides (name=bool)
    #[arg(short, long = "assign", value_name = "NAME=BOOL")]
    assignments: Vec<String>,

    /// Text printed for true
    #[arg(long, default_value = "T")]
    true_text: String,

    /// Text printed for false
    #[arg(long, default_value = "F")]
    false_text: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_override(text: &str) -> color_eyre::Result<(String, bool)> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| eyre!("expected NAME=BOOL, got '{}'", text))?;
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "y" => true,
        "false" | "f" | "0" | "n" => false,
        other => return Err(eyre!("invalid boolean '{}' for '{}'", other, name)),
    };
    Ok((name.trim().to_string(), value))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let marker = if args.no_marker { None } else { Some(args.marker) };
    let config = Config::default().with_highlight_marker(marker);
    let statement = parse_with(&args.formula, &config)?;

    let names: Vec<&str> = statement.variables().iter().map(|v| v.name()).collect();
    println!("formula   = {}", statement.render());
    println!("variables = {:?}", names);

    if !args.assignments.is_empty() {
        let overrides = args
            .assignments
            .iter()
            .map(|text| parse_override(text))
            .collect::<color_eyre::Result<Vec<_>>>()?;
        let assignment = statement.assignment(overrides)?;
        println!("{} => {}", assignment, statement.evaluate(&assignment)?);
        return Ok(());
    }

    let display = DisplayConfig::new(args.true_text, args.false_text);
    let table = statement.truth_table();
    println!();
    print!("{}", table.render(&statement, &display));
    println!();
    if table.is_tautology() {
        println!("tautology");
    } else if table.is_contradiction() {
        println!("contradiction");
    } else {
        println!("satisfiable in {} of {} rows", table.values().iter().filter(|&&v| v).count(), table.len());
    }

    Ok(())
}
