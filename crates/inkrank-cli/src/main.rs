use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inkrank::input::{load_font_list, load_sample_text};
use inkrank::locate::locate_fonts;
use inkrank::rank::{compute_relative, rank_results};
use inkrank::run::MeasureRun;
use inkrank::{LayoutConfig, Options};

use crate::report::{render_table, results_to_json};
mod report;

#[derive(Parser)]
#[command(name = "inkrank", about = "Rank installed fonts by ink usage")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Measure every listed font and rank it against the baseline
    Rank {
        /// Sample text file rendered for every font
        #[arg(short, long, default_value = "sample_text.txt")]
        sample: PathBuf,
        /// Font list file, one family name per line
        #[arg(short, long, default_value = "fonts.txt")]
        fonts: PathBuf,
        /// Directory scanned for font files
        #[arg(long)]
        fonts_dir: Option<PathBuf>,
        #[arg(long, default_value = "Arial")]
        baseline: String,
        #[arg(long, default_value = "300")]
        dpi: u32,
        #[arg(long, default_value = "12")]
        font_size: u32,
        /// Pixels darker than this count as ink (0-255)
        #[arg(long, default_value = "200")]
        threshold: u8,
        #[arg(long, default_value = "1.15")]
        line_spacing: f32,
        /// JSON results output path
        #[arg(short, long, default_value = "results.json")]
        out: PathBuf,
        /// Also write the ranking table to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Resolve family names to font files without measuring
    Locate {
        #[arg(short, long, default_value = "fonts.txt")]
        fonts: PathBuf,
        #[arg(long)]
        fonts_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Rank {
            sample,
            fonts,
            fonts_dir,
            baseline,
            dpi,
            font_size,
            threshold,
            line_spacing,
            out,
            report,
        } => {
            let opts = Options {
                dpi,
                font_size_pt: font_size,
                darkness_threshold: threshold,
                baseline_font: baseline,
                fonts_dir: fonts_dir.unwrap_or_else(|| Options::default().fonts_dir),
                line_spacing_factor: line_spacing,
            };
            rank_command(&opts, &sample, &fonts, &out, report.as_deref())?;
        }
        Cmd::Locate { fonts, fonts_dir } => {
            let names = load_font_list(&fonts)?;
            let dir = fonts_dir.unwrap_or_else(|| Options::default().fonts_dir);
            let requested: BTreeSet<String> = names.iter().cloned().collect();
            let found = locate_fonts(&dir, &requested)
                .with_context(|| format!("scanning {}", dir.display()))?;
            for name in &names {
                match found.get(name) {
                    Some(resolved) => println!(
                        "{name}: {} (face {})",
                        resolved.path.display(),
                        resolved.face_index
                    ),
                    None => println!("{name}: not found"),
                }
            }
        }
    }
    Ok(())
}

fn rank_command(
    opts: &Options,
    sample: &Path,
    fonts: &Path,
    out: &Path,
    report: Option<&Path>,
) -> Result<()> {
    let started = Instant::now();
    let text = load_sample_text(sample)?;
    let names = load_font_list(fonts)?;
    let requested: BTreeSet<String> = names.into_iter().collect();

    let resolved = locate_fonts(&opts.fonts_dir, &requested)
        .with_context(|| format!("scanning {}", opts.fonts_dir.display()))?;
    let cfg = LayoutConfig::from_options(opts);

    let mut run = MeasureRun::new(resolved, text, cfg, &opts.baseline_font);
    println!("Measuring {} fonts...", run.total());
    while let Some(progress) = run.next() {
        println!("{}/{}  {}", progress.index, progress.total, progress.family);
    }
    let measurements = run.into_results();

    let relative = compute_relative(&measurements, &opts.baseline_font);
    let rows = rank_results(&measurements, &relative, &opts.baseline_font);
    let table = render_table(&rows, &opts.baseline_font);
    println!("\n{table}");

    let scan_time = format!("{:.1}s", started.elapsed().as_secs_f64());
    let json = results_to_json(&rows, &scan_time);
    fs::write(out, serde_json::to_string_pretty(&json)?)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Results saved to {}", out.display());

    if let Some(report_path) = report {
        fs::write(report_path, &table)
            .with_context(|| format!("writing {}", report_path.display()))?;
    }
    Ok(())
}
