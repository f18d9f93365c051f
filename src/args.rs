use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "crawl-sitemap")]
#[command(about = "Formats crawl results as a sitemap or a plain-text outline")]
#[command(version)]
pub struct Args {
    /// Crawl results as JSON (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Output format (xml, simple); overrides the config file
    #[arg(short, long)]
    pub format: Option<String>,

    /// File to write the output to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to write the output to, named after the base URL
    #[arg(long, conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// JSON config file with defaults for format and output
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the available formats and exit
    #[arg(long)]
    pub list_formats: bool,
}

impl Args {
    /// Input file path, or `None` when the crawl comes from stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
