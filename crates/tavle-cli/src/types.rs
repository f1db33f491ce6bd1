use clap::ValueEnum;
use std::fmt;
use tavle_engine::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortDirectionArg {
    Asc,
    Desc,
}

impl fmt::Display for SortDirectionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirectionArg::Asc => write!(f, "asc"),
            SortDirectionArg::Desc => write!(f, "desc"),
        }
    }
}

impl From<SortDirectionArg> for SortDirection {
    fn from(arg: SortDirectionArg) -> Self {
        match arg {
            SortDirectionArg::Asc => SortDirection::Asc,
            SortDirectionArg::Desc => SortDirection::Desc,
        }
    }
}
