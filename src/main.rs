use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use viewforge::{build_views, BuildOptions};

#[derive(Parser)]
#[command(name = "viewforge")]
#[command(author, version, about = "Generates CREATE VIEW DDL from view-project metadata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a view project into a .sql DDL file
    Build {
        /// Path to the view-project file
        #[arg(short, long)]
        project: PathBuf,

        /// Output path for the DDL file (defaults to out/<project>.sql)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            project,
            output,
            verbose,
        } => {
            let options = BuildOptions {
                project_path: project,
                output_path: output,
                verbose,
            };

            build_views(options)?;
        }
    }

    Ok(())
}
