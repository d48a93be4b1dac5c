use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_convert::{ConvertOptions, Session, Workflow};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfconv", about = "Image/PDF conversion tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose images into a PDF, one page per image
    Convert {
        /// Input image file(s), in page order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Output page size
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Output orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Uniform page margin in mm
        #[arg(long, default_value = "10.0")]
        margin_mm: f32,
    },

    /// Extract a subset of pages into a new PDF
    Split {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Comma-separated 1-based page numbers to keep (e.g. 1,5,10)
        #[arg(long, value_delimiter = ',', required = true)]
        pages: Vec<usize>,
    },

    /// Merge PDFs into one document
    Merge {
        /// Input PDF file(s), in output order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Rasterize pages to PNG images
    Pages {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for page_<n>.png files
        #[arg(short, long)]
        output: PathBuf,

        /// Comma-separated 1-based page numbers to export (default: all)
        #[arg(long, value_delimiter = ',')]
        pages: Vec<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
    Original,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_convert::PageSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
            PaperArg::Original => Self::Original,
        }
    }
}

impl From<OrientationArg> for pdf_convert::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

/// Convert 1-based CLI page numbers to 0-based core indices
fn to_indices(pages: &[usize]) -> Result<Vec<usize>> {
    pages
        .iter()
        .map(|&n| {
            if n == 0 {
                bail!("page numbers are 1-based");
            }
            Ok(n - 1)
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            paper,
            orientation,
            margin_mm,
        } => {
            let options = ConvertOptions {
                page_size: paper.into(),
                orientation: orientation.into(),
                margin_mm,
                ..Default::default()
            };
            options.validate()?;

            let mut session = Session::new(Workflow::ImageToPdf);
            for path in &input {
                let bytes = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                session
                    .add_image(name, bytes)
                    .with_context(|| format!("decoding {}", path.display()))?;
            }

            let doc = pdf_convert::compose_from_images(session.images(), &options).await?;
            pdf_convert::save_document(doc, &output).await?;
            println!("Composed {} images → {}", input.len(), output.display());
        }

        Commands::Split {
            input,
            output,
            pages,
        } => {
            let indices = to_indices(&pages)?;
            let doc = pdf_convert::load_document(&input).await?;
            let subset = pdf_convert::extract_subset(&doc, &indices).await?;
            let page_count = subset.get_pages().len();
            pdf_convert::save_document(subset, &output).await?;
            println!("Extracted {} pages → {}", page_count, output.display());
        }

        Commands::Merge { input, output } => {
            let docs = pdf_convert::load_documents(&input).await?;
            let merged = pdf_convert::merge(&docs).await?;
            let page_count = merged.get_pages().len();
            pdf_convert::save_document(merged, &output).await?;
            println!(
                "Merged {} documents ({} pages) → {}",
                input.len(),
                page_count,
                output.display()
            );
        }

        Commands::Pages {
            input,
            output,
            pages,
        } => {
            let bytes = tokio::fs::read(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let previews = pdf_convert::render_previews(bytes).await?;

            let mut session = Session::new(Workflow::PdfToImage);
            session.set_previews(previews);
            if !pages.is_empty() {
                session.deselect_all_pages();
                for index in to_indices(&pages)? {
                    session.toggle_page(index);
                }
            }

            tokio::fs::create_dir_all(&output).await?;
            let written = pdf_convert::export_page_images(session.selection(), &output).await?;
            println!("Exported {} pages → {}", written.len(), output.display());
        }
    }

    Ok(())
}
