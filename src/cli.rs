use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::settings::Settings;
use crate::types::{Aggregation, DomainOrder};

/// How bars combine several rows of one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AggregationArg {
    /// Stack every row as its own segment
    None,
    Sum,
    Average,
    Min,
    Max,
}

impl From<AggregationArg> for Aggregation {
    fn from(arg: AggregationArg) -> Self {
        match arg {
            AggregationArg::None => Aggregation::None,
            AggregationArg::Sum => Aggregation::Sum,
            AggregationArg::Average => Aggregation::Average,
            AggregationArg::Min => Aggregation::Min,
            AggregationArg::Max => Aggregation::Max,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "avocado-board")]
#[command(author, version, about = "Interactive avocado price dashboard")]
pub struct Cli {
    /// Dataset to load (csv, tsv or json)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (0 picks a free one)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Sort dropdown options instead of keeping file order
    #[arg(long)]
    pub sorted_domains: bool,

    /// Bar aggregation when a region has several rows
    #[arg(long, value_enum)]
    pub aggregation: Option<AggregationArg>,

    /// Open the dashboard in the default browser
    #[arg(long)]
    pub open: bool,

    /// Print the page layout as JSON and exit
    #[arg(long)]
    pub print_layout: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(data) = &self.data {
            settings.data_path = data.clone();
        }
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if self.sorted_domains {
            settings.domain_order = DomainOrder::Sorted;
        }
        if let Some(aggregation) = self.aggregation {
            settings.bar_aggregation = aggregation.into();
        }
        if self.open {
            settings.open_browser = true;
        }
    }
}
