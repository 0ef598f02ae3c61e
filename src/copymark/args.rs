use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "copymark")]
#[command(
    about = "Prepends a copyright notice to source files that lack one",
    long_about = None
)]
pub struct Cli {
    /// Root directory to scan (resolved to an absolute path)
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Copyright notice to prepend, verbatim
    #[arg(long, default_value = "")]
    pub copyright: String,

    /// Report the files that would be updated without writing anything
    #[arg(long)]
    pub dry: bool,

    /// Filename suffix to annotate (may be given multiple times; default .go)
    #[arg(long = "suffix", value_name = "SUFFIX")]
    pub suffixes: Vec<String>,
}
