//! # kakaopack CLI
//!
//! Command-line interface for the kakaopack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kakaopack::KakaopackError;
use kakaopack::SystemAction;
use kakaopack::cli::Args;
use kakaopack::convert::convert;

fn main() {
    let args = match <Args as ClapParser>::try_parse() {
        Ok(args) => args,
        // Help and version go to stdout with exit code 0.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), KakaopackError> {
    let start = Instant::now();
    let options = args.to_options();

    println!("📦 kakaopack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", options.input.display());
    println!("💾 Output:  {}", options.output.display());
    println!("📄 Format:  {}", options.format);
    if !options.transcript.has_header {
        println!("📜 Header:  none");
    }
    println!();

    println!("⏳ Converting...");
    let stats = convert(&options)?;
    let elapsed = start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", options.output.display());

    println!();
    println!("📊 Summary:");
    println!("   Days:      {}", stats.segments);
    println!("   Rows:      {}", stats.records);
    println!("   Messages:  {}", stats.messages);
    for action in SystemAction::ALL {
        let count = stats.action_count(action);
        if count > 0 {
            println!("   {:<10} {}", format!("{}:", action.name()), count);
        }
    }
    if stats.notices > 0 {
        println!("   Notices:   {}", stats.notices);
    }
    if let (Some(first), Some(last)) = (stats.first_day, stats.last_day) {
        println!("   Range:     {} .. {}", first, last);
    }

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
