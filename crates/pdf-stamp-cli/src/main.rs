use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use pdf_stamp::{ResolvedParams, Stamper, output_path};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfstamp", about = "PDF approval stamp CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stamp the first page of a PDF with an approval note
    Stamp {
        /// Name of the approver
        #[arg(short, long)]
        approver: String,

        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the stamped copy (created if missing)
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print where the stamped copy would be written, without stamping
    Name {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the stamped copy
        #[arg(short, long)]
        output_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stamp {
            approver,
            input,
            output_dir,
            json,
        } => {
            let params = ResolvedParams {
                approver: Some(approver),
                pdf_path: Some(input.display().to_string()),
                out_path: Some(output_dir.display().to_string()),
            };
            let outcome = match params.into_request() {
                Ok(request) => Stamper::default().stamp(&request).await,
                Err(err) => Err(err),
            };
            let report = pdf_stamp::report(&outcome);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.message);
            }

            if !report.is_success() {
                bail!("stamping failed with status {}", report.status);
            }
        }

        Commands::Name { input, output_dir } => {
            println!("{}", output_path(&input, &output_dir).display());
        }
    }

    Ok(())
}
