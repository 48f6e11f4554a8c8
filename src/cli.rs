use clap::{ArgGroup, Parser, ValueEnum};
use fineprint::DEFAULT_PROVIDER_LABEL;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "fineprint",
    version,
    about = "Find the traps in a financial contract before you sign it"
)]
#[command(group(ArgGroup::new("source").args(["file", "sample"])))]
pub(crate) struct Args {
    /// Provider label, as shown by --list-providers.
    #[arg(long, default_value = DEFAULT_PROVIDER_LABEL)]
    pub(crate) provider: String,
    /// Contract to analyze. Reads stdin when neither this nor --sample is given.
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Analyze the bundled sample credit card agreement.
    #[arg(long)]
    pub(crate) sample: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output: OutputFormat,
    /// Print the available providers and exit.
    #[arg(long)]
    pub(crate) list_providers: bool,
    /// Only run the quick risk scorecard.
    #[arg(long)]
    pub(crate) scores_only: bool,
    /// Echo the start of the document to stderr before analyzing it.
    #[arg(long)]
    pub(crate) preview: bool,
}
