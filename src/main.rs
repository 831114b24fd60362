//! Userforge - corporate username and email candidate generation
//!
//! Reads a file of `First Last` names and writes a deduplicated list of
//! plausible account names for authorized credential-audit tooling.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use userforge::{
    GenerationConfig, Result, RunSummary, UserforgeError, UsernameGenerator,
};

#[derive(Debug, Parser)]
#[command(
    name = "userforge",
    version,
    about = "Generate corporate username and email candidates from a list of names"
)]
struct Cli {
    /// Input file with one name per line (eg: "Jane Doe")
    input: PathBuf,

    /// Output file for the candidate list
    #[arg(short, long, default_value = "usernames.lst")]
    output: PathBuf,

    /// Emit leet-speak variants alongside each base username
    #[arg(long)]
    leet: bool,

    /// Append email variants for this domain (eg: "corp.local")
    #[arg(long)]
    domain: Option<String>,

    /// Show per-name generation progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main generation workflow
fn run(cli: &Cli) -> Result<()> {
    println!("🔐 Userforge v{} - username & email candidate generation", userforge::VERSION);
    println!("═══════════════════════════════════════════════════════");

    let config = GenerationConfig {
        leet: cli.leet,
        domain: cli.domain.clone(),
    };

    let file = File::open(&cli.input).map_err(|e| {
        UserforgeError::input(e.to_string(), Some(cli.input.display().to_string()))
    })?;

    let mut generator = UsernameGenerator::new(config)?;
    generator.run(BufReader::new(file))?;
    let (candidates, summary) = generator.finish()?;

    write_candidates(&cli.output, &candidates)?;
    print_summary(&summary, &cli.output);

    Ok(())
}

/// Write the candidate list, one per line
fn write_candidates(path: &Path, candidates: &[String]) -> Result<()> {
    let mut content = candidates.join("\n");
    content.push('\n');
    std::fs::write(path, content).map_err(|e| {
        UserforgeError::output(e.to_string(), Some(path.display().to_string()))
    })
}

/// Display the end-of-run summary
fn print_summary(summary: &RunSummary, output: &Path) {
    println!();
    println!("📊 Summary:");
    println!("   ✅ Processed: {}/{} lines", summary.processed, summary.total_lines);
    if summary.skipped > 0 {
        println!("   ⚠️  Skipped: {} malformed line(s)", summary.skipped);
    }
    println!("   📝 Unique candidates: {}", summary.unique);
    println!("   💾 Written to: {}", output.display());
    println!(
        "   ⏱️  Total time: {:.2}s",
        summary.elapsed.num_milliseconds() as f64 / 1000.0
    );
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "userforge=info" } else { "userforge=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
