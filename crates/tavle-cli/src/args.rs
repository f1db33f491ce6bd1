use crate::types::{OutputFormat, SortDirectionArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tavle")]
#[command(about = "Filter, sort and inspect CRM exports for the group companies", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Offer {
        #[command(subcommand)]
        command: OfferCommand,
    },

    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    Activity {
        #[command(subcommand)]
        command: ActivityCommand,
    },
}

#[derive(Subcommand)]
pub enum OfferCommand {
    List {
        #[arg(long, help = "Phase key to keep, or 'all'")]
        phase: Option<String>,

        #[arg(long, help = "Company key to keep, or 'all'")]
        company: Option<String>,

        #[arg(long, help = "Wire field name to sort by (e.g. value, updatedAt)")]
        sort: Option<String>,

        #[arg(long, default_value = "asc")]
        direction: SortDirectionArg,

        #[arg(long, default_value = "50")]
        limit: usize,

        #[arg(long, help = "Explicit export file (overrides the data dir)")]
        input: Option<PathBuf>,
    },

    Summary {
        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    List {
        #[arg(long)]
        phase: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        sort: Option<String>,

        #[arg(long, default_value = "asc")]
        direction: SortDirectionArg,

        #[arg(long, default_value = "50")]
        limit: usize,

        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ActivityCommand {
    Feed {
        #[arg(long, default_value = "20")]
        limit: usize,

        #[arg(long)]
        input: Option<PathBuf>,
    },
}
