//! docsift CLI - outline extraction and persona-driven section ranking

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use docsift::{
    collection::{process_collection, process_collections},
    config::{CollectionConfig, CollectionInfo},
    extract_outline,
    model::{DocumentOutline, DocumentRuns},
};

#[derive(Parser)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "Extract document outlines and rank sections for a persona", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the heading outline of one document
    Outline {
        /// Extracted runs JSON file
        #[arg(value_name = "RUNS")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Rank a collection's sections against its persona query
    Rank {
        /// Collection directory (holds input.json and docs/)
        #[arg(value_name = "COLLECTION")]
        collection: PathBuf,

        /// Output directory for the report
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,
    },

    /// Rank every collection under a directory
    Batch {
        /// Directory of collection folders
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory for the reports
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,
    },

    /// Generate a collection's input.json from its docs directory
    Init {
        /// Collection directory
        #[arg(value_name = "COLLECTION")]
        collection: PathBuf,

        /// Persona role (e.g., "HR professional")
        #[arg(long)]
        role: String,

        /// Job-to-be-done task statement
        #[arg(long)]
        task: String,

        /// Optional collection identifier
        #[arg(long)]
        id: Option<String>,

        /// Optional collection name
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> docsift::Result<()> {
    match cli.command {
        Commands::Outline { input, output } => cmd_outline(&input, output.as_deref()),
        Commands::Rank { collection, output } => {
            let path = process_collection(&collection, &output)?;
            println!("{} report written to {}", "✓".green(), path.display());
            Ok(())
        }
        Commands::Batch { input, output } => {
            let paths = process_collections(&input, &output)?;
            for path in &paths {
                println!("{} {}", "✓".green(), path.display());
            }
            println!("{} collection(s) processed", paths.len());
            Ok(())
        }
        Commands::Init {
            collection,
            role,
            task,
            id,
            name,
        } => cmd_init(&collection, role, task, id, name),
    }
}

fn cmd_outline(input: &std::path::Path, output: Option<&std::path::Path>) -> docsift::Result<()> {
    let data = fs::read_to_string(input)?;
    let runs: DocumentRuns = serde_json::from_str(&data)?;
    let document = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let outline = DocumentOutline::new(document, extract_outline(&runs));
    let json = serde_json::to_string_pretty(&outline)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!(
                "{} {} heading(s) written to {}",
                "✓".green(),
                outline.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_init(
    collection: &std::path::Path,
    role: String,
    task: String,
    id: Option<String>,
    name: Option<String>,
) -> docsift::Result<()> {
    let info = match (id, name) {
        (None, None) => None,
        (id, name) => Some(CollectionInfo {
            id: id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            description: String::new(),
        }),
    };

    fs::create_dir_all(collection.join("docs"))?;
    let config = CollectionConfig::generate(collection.join("docs"), info, role, task)?;
    let path = collection.join("input.json");
    config.save(&path)?;
    println!(
        "{} {} document(s) listed in {}",
        "✓".green(),
        config.documents.len(),
        path.display()
    );
    Ok(())
}
