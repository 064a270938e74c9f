use clap::Parser;
use fanti::{Converter, RunSummary, generate_run_id, scan_directory};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Simplified-to-traditional Chinese converter for source trees
#[derive(Parser, Debug)]
#[command(name = "fanti")]
#[command(version = "0.1.0")]
#[command(about = "Detect simplified Chinese in text files and rewrite it as traditional, in place", long_about = None)]
struct Args {
    /// Directory to scan
    root: PathBuf,

    /// File extensions to process (case-insensitive suffix match)
    #[arg(short, long = "ext", default_values_t = [String::from(".vue"), String::from(".txt")])]
    ext: Vec<String>,

    /// Output structured JSON instead of human-readable
    #[arg(short, long)]
    json: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if !args.root.is_dir() {
        eprintln!("Error: '{}' is not a directory", args.root.display());
        std::process::exit(1);
    }

    if !args.json {
        println!("开始检测简体中文");
    }

    let converter = Converter::s2t();
    let scan = scan_directory(&args.root, &args.ext, &converter);
    let summary = RunSummary {
        run_id: generate_run_id(),
        totals: scan.totals,
        files: scan.reports,
        failures: scan.failures,
    };

    let output = if args.json {
        serde_json::to_string_pretty(&summary)
            .unwrap_or_else(|_| r#"{"error": "Failed to serialize summary"}"#.to_string())
    } else {
        render_console(&summary)
    };

    // Write to file or stdout
    if let Some(path) = args.output.as_ref() {
        if let Err(e) = fs::write(path, &output) {
            eprintln!("Failed to write output to '{}': {}", path, e);
            std::process::exit(1);
        }
    } else {
        println!("{}", output);
    }

    // Exit with error code if any file's scan failed outright
    if !summary.failures.is_empty() {
        std::process::exit(1);
    }
}

/// Format the whole-run console report
fn render_console(summary: &RunSummary) -> String {
    let mut lines = Vec::new();
    for report in &summary.files {
        if report.counts.is_clean() {
            lines.push(format!("文件 '{}' 中不包含简体中文。", report.path));
        } else {
            lines.extend(report.render());
        }
    }
    for failure in &summary.failures {
        lines.push(format!(
            "处理文件 '{}' 时发生错误：{}",
            failure.path, failure.error
        ));
    }
    lines.push(String::new());
    lines.extend(summary.render_totals());
    lines.push("处理完成。".to_string());
    lines.join("\n")
}
