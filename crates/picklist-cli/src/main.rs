mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::Backend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "picklist",
    version,
    about = "Total SKU quantities from picking list PDFs and render a summary report"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract SKU totals from a picking list PDF and write the summary report
    Summarize {
        /// Path to the picking list PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Where to write the summary PDF (default: SKU_Summary_Report.pdf)
        #[arg(short, long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Only print the totals, don't write a report
        #[arg(long, conflicts_with = "report")]
        no_report: bool,

        /// JSON file overriding the report layout (title, column widths, font size)
        #[arg(short, long, value_name = "FILE")]
        layout: Option<PathBuf>,

        /// Text extraction backend
        #[arg(short, long, value_enum, default_value_t = Backend::Auto)]
        backend: Backend,

        /// List every individual SKU/quantity match with its page
        #[arg(long)]
        verbose: bool,
    },
    /// Print the text extracted from each page (useful when no SKUs are found)
    Extract {
        /// Path to the PDF
        input_file: PathBuf,

        /// Text extraction backend
        #[arg(short, long, value_enum, default_value_t = Backend::Auto)]
        backend: Backend,
    },
    /// Render a summary report from a JSON file written by `summarize -o json`
    Render {
        /// Path to the JSON summary
        input_file: PathBuf,

        /// Where to write the summary PDF (default: SKU_Summary_Report.pdf)
        #[arg(short, long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// JSON file overriding the report layout
        #[arg(short, long, value_name = "FILE")]
        layout: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summarize {
            input_file,
            output,
            report,
            no_report,
            layout,
            backend,
            verbose,
        } => commands::summarize::run(commands::summarize::SummarizeArgs {
            input_file,
            output_format: output,
            report,
            no_report,
            layout,
            backend,
            verbose,
        }),
        Commands::Extract {
            input_file,
            backend,
        } => commands::extract::run(input_file, backend),
        Commands::Render {
            input_file,
            report,
            layout,
        } => commands::render::run(input_file, report, layout),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
