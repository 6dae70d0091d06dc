use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::FilterDimension;

#[derive(Parser, Debug)]
#[command(name = "catalog-filter")]
#[command(
    about = "Keyword, facet and sort filtering for item catalogs",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show engine debug output
    /// -vv: Show everything
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the visible items for a query
    View {
        #[command(flatten)]
        source: SourceArgs,

        /// Search keyword (overrides the query string)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Sort order (overrides the query string)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Layout (overrides the query string)
        #[arg(long, value_enum)]
        view: Option<ViewArg>,

        /// Activate a filter option, as dimension=value (repeatable)
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<FilterArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Show every filter option with its count
    Options {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}

/// Inputs shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON file holding the item list
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Incoming query string, e.g. "keyword=db&provider=[\"Acme\"]"
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Configuration file (defaults to discovering .catalog-filter.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How option counts are computed
    #[arg(long = "count-policy", value_enum)]
    pub count_policy: Option<CountPolicyArg>,
}

/// A `--filter dimension=value` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterArg {
    pub dimension: FilterDimension,
    pub value: String,
}

pub fn parse_filter(raw: &str) -> Result<FilterArg, String> {
    let (dimension, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected dimension=value, got {raw:?}"))?;
    let dimension = dimension.trim().parse().map_err(|e| format!("{e}"))?;
    Ok(FilterArg {
        dimension,
        value: value.to_string(),
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Ascending,
    Descending,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Card,
    List,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CountPolicyArg {
    Potential,
    Current,
}

impl From<SortArg> for crate::sort::SortType {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Ascending => crate::sort::SortType::Ascending,
            SortArg::Descending => crate::sort::SortType::Descending,
        }
    }
}

impl From<ViewArg> for crate::url_state::ViewType {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Card => crate::url_state::ViewType::Card,
            ViewArg::List => crate::url_state::ViewType::List,
        }
    }
}

impl From<CountPolicyArg> for crate::search::CountPolicy {
    fn from(p: CountPolicyArg) -> Self {
        match p {
            CountPolicyArg::Potential => crate::search::CountPolicy::Potential,
            CountPolicyArg::Current => crate::search::CountPolicy::Current,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
