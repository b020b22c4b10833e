use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use lopdf::Document;
use pdf_jig::{
    ExtractOptions, JigError, PlacementOptions, RotateOptions, SplitOptions, SpreadOptions,
    TrimMarginOptions, WatermarkOptions, run_blocking, with_suffix,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "pdfjig", about = "jig for PDF handling.", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Make each page's trim box its visible area
    ApplyTrimbox {
        path: PathBuf,
    },

    /// Concatenate pdf files (reads the file list from stdin when none are given)
    Conc {
        files: Vec<PathBuf>,

        /// Output file name
        #[arg(short, long, default_value = "merged.pdf")]
        output: PathBuf,
    },

    /// Extract page(s) from a pdf file
    Extract {
        path: PathBuf,

        /// Extract range (1-origin, comma-separated, dash-joined)
        #[arg(short, long, default_value = "1--1", allow_hyphen_values = true)]
        range: String,
    },

    /// Insert the pages of another file
    Insert {
        path: PathBuf,

        /// File to insert
        #[arg(short, long)]
        file: PathBuf,

        /// Start page of insertion (1-origin, -1 is last page)
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        start: i64,
    },

    /// Rotate page(s) of a pdf file
    Rotate {
        path: PathBuf,

        /// -90, 90, 180, ... clockwise
        #[arg(short, long, default_value = "90", allow_hyphen_values = true)]
        degree: i32,

        /// Comma-separated pages to rotate (1-origin, -1 is last page)
        #[arg(short, long, default_value = "1,-1", allow_hyphen_values = true)]
        pages: String,
    },

    /// Split each spread page into two pages
    Split {
        path: PathBuf,

        /// Split into upper and lower halves
        #[arg(short, long)]
        vertical: bool,

        /// Arrange each split page pair in opposite order
        #[arg(short, long)]
        opposite: bool,

        /// Print the layout plan as JSON instead of writing a file
        #[arg(long)]
        plan: bool,
    },

    /// Merge each pair of pages into one spread
    Spread {
        path: PathBuf,

        /// Skip spreading on the top page (book-like)
        #[arg(short, long)]
        single_top: bool,

        /// Spread vertically (top to bottom)
        #[arg(short, long)]
        vertical: bool,

        /// Spread right to left (bottom to top when vertical)
        #[arg(short, long)]
        opposite: bool,

        /// Print the layout plan as JSON instead of writing a file
        #[arg(long)]
        plan: bool,
    },

    /// Replace pages with the pages of another file
    Swap {
        path: PathBuf,

        /// File to embed
        #[arg(short, long)]
        file: PathBuf,

        /// Start page of swap (1-origin, -1 is last page)
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        start: i64,
    },

    /// Trim page margins
    TrimMargin {
        path: PathBuf,

        /// Percent of the page size, comma-separated like CSS margins
        #[arg(short, long)]
        margin: String,
    },

    /// Write odd and even pages to separate files
    Unzip {
        path: PathBuf,
    },

    /// Draw a numbered text label along the edge of each page
    Watermark {
        path: PathBuf,

        /// Watermark text (defaults to the file name)
        #[arg(short, long, default_value = "")]
        text: String,

        /// Number printed after the text on the first page
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        start: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::ApplyTrimbox { path } => {
            let doc = pdf_jig::load_pdf(&path).await?;
            let out = run_blocking(move || pdf_jig::apply_trimbox(&doc)).await?;
            let out_path = with_suffix(&path, "_trimbox");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Trimmed: {}", out_path.display());
        }

        Commands::Conc { files, output } => {
            let files = if files.is_empty() {
                read_file_list().await?
            } else {
                files
            };
            let pdfs: Vec<PathBuf> = files.into_iter().filter(|p| is_pdf(p)).collect();
            if pdfs.is_empty() {
                return Err(JigError::Config("No pdf files to conc".to_string()).into());
            }
            println!("conc {} files...", pdfs.len());

            let documents = pdf_jig::load_multiple_pdfs(&pdfs).await?;
            let out = run_blocking(move || pdf_jig::concatenate(&documents)).await?;
            let out_path = if is_pdf(&output) {
                output
            } else {
                output.with_file_name(format!("{}.pdf", file_name(&output)))
            };
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Concatenated: {}", out_path.display());
        }

        Commands::Extract { path, range } => {
            let doc = pdf_jig::load_pdf(&path).await?;
            let options = ExtractOptions { range };
            let out = run_blocking(move || pdf_jig::extract_pages(&doc, &options)).await?;
            let out_path = with_suffix(&path, "_extracted");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Extracted: {}", out_path.display());
        }

        Commands::Insert { path, file, start } => {
            let (base, insert) = load_pair(&path, &file).await?;
            let options = PlacementOptions { start };
            let out =
                run_blocking(move || pdf_jig::insert_pages(&base, &insert, &options)).await?;
            let out_path = with_suffix(&path, "_inserted");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Inserted: {}", out_path.display());
        }

        Commands::Rotate {
            path,
            degree,
            pages,
        } => {
            let options = RotateOptions {
                degrees: degree,
                pages,
            };
            options.validate()?;
            let doc = pdf_jig::load_pdf(&path).await?;
            let out = run_blocking(move || pdf_jig::rotate_pages(&doc, &options)).await?;
            let out_path = with_suffix(&path, &format!("_rotate{:03}", degree));
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Rotated: {}", out_path.display());
        }

        Commands::Split {
            path,
            vertical,
            opposite,
            plan,
        } => {
            let doc = pdf_jig::load_pdf(&path).await?;
            let options = SplitOptions { vertical, opposite };
            if plan {
                let actions =
                    run_blocking(move || pdf_jig::plan_document_split(&doc, &options)).await?;
                println!("{}", serde_json::to_string_pretty(&actions)?);
                return Ok(());
            }
            let out = run_blocking(move || pdf_jig::split_pages(&doc, &options)).await?;
            let out_path = with_suffix(&path, "_split");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Split: {}", out_path.display());
        }

        Commands::Spread {
            path,
            single_top,
            vertical,
            opposite,
            plan,
        } => {
            let doc = pdf_jig::load_pdf(&path).await?;
            let options = SpreadOptions {
                vertical,
                single_top,
                opposite,
            };
            if plan {
                let actions =
                    run_blocking(move || pdf_jig::plan_document_spread(&doc, &options)).await?;
                println!("{}", serde_json::to_string_pretty(&actions)?);
                return Ok(());
            }
            let out = run_blocking(move || pdf_jig::spread_pages(&doc, &options)).await?;
            let out_path = with_suffix(&path, "_spread");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Spread: {}", out_path.display());
        }

        Commands::Swap { path, file, start } => {
            let (base, replacement) = load_pair(&path, &file).await?;
            let options = PlacementOptions { start };
            let out =
                run_blocking(move || pdf_jig::swap_pages(&base, &replacement, &options)).await?;
            let out_path = with_suffix(&path, "_swap");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Swapped: {}", out_path.display());
        }

        Commands::TrimMargin { path, margin } => {
            let options = TrimMarginOptions { margin };
            options.ratios()?;
            let doc = pdf_jig::load_pdf(&path).await?;
            let out = run_blocking(move || pdf_jig::trim_margin(&doc, &options)).await?;
            let out_path = with_suffix(&path, "_trimmargin");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Trimmed: {}", out_path.display());
        }

        Commands::Unzip { path } => {
            let doc = pdf_jig::load_pdf(&path).await?;
            let unzipped = run_blocking(move || pdf_jig::unzip_pages(&doc)).await?;
            for (half, suffix) in [(unzipped.odd, "_odd"), (unzipped.even, "_even")] {
                let Some(half) = half else {
                    warn!("no pages for {}", suffix);
                    continue;
                };
                let out_path = with_suffix(&path, suffix);
                pdf_jig::save_pdf(half, &out_path).await?;
                println!("Unzipped: {}", out_path.display());
            }
        }

        Commands::Watermark { path, text, start } => {
            let text = if text.trim().is_empty() {
                file_name(&path)
            } else {
                text
            };
            let options = WatermarkOptions { text, start };
            let doc = pdf_jig::load_pdf(&path).await?;
            let count = doc.get_pages().len();
            let out = run_blocking(move || pdf_jig::watermark_pages(&doc, &options)).await?;
            let out_path = with_suffix(&path, "_watermarked");
            pdf_jig::save_pdf(out, &out_path).await?;
            println!("Watermarked {} pages: {}", count, out_path.display());
        }
    }

    Ok(())
}

async fn load_pair(path: &Path, other: &Path) -> Result<(Document, Document)> {
    let base = pdf_jig::load_pdf(path)
        .await
        .with_context(|| format!("failed to load {}", path.display()))?;
    let other_doc = pdf_jig::load_pdf(other)
        .await
        .with_context(|| format!("failed to load {}", other.display()))?;
    Ok((base, other_doc))
}

/// One path per non-empty line of stdin, unless stdin is a terminal
async fn read_file_list() -> Result<Vec<PathBuf>> {
    if std::io::stdin().is_terminal() {
        return Ok(Vec::new());
    }
    info!("Reading file list from stdin...");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut files = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            files.push(PathBuf::from(trimmed));
        }
    }
    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
