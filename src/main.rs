use clap::Parser;
use crawl_sitemap::config::ExportConfig;
use crawl_sitemap::{Crawl, Destination, Export, FormatError, formats};
use std::io::Read;
use std::process::ExitCode;

mod args;
use args::Args;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if args.list_formats {
        print!("{}", format_list());
        return ExitCode::SUCCESS;
    }

    let result = run(&args);
    match &result {
        Ok(Destination::Stdout) => {}
        Ok(Destination::File(path)) => {
            ::log::info!("Output written to {}", path.display());
        }
        Err(e) => {
            ::log::error!("Failed to export crawl: {}", e);
            eprintln!("error: {}", e);
        }
    }

    ExitCode::from(exit_status(&result))
}

/// Registered format names, one per line
fn format_list() -> String {
    formats::names().map(|name| format!("{}\n", name)).collect()
}

/// Process exit status for the outcome of an export
fn exit_status(result: &Result<Destination, FormatError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(FormatError::UnknownFormat { .. }) => 2,
        Err(_) => 1,
    }
}

fn run(args: &Args) -> Result<Destination, FormatError> {
    let config = match &args.config {
        Some(path) => {
            ::log::info!("Loading config from {}", path.display());
            ExportConfig::from_file(path)?
        }
        None => ExportConfig::new(),
    };

    let crawl = load_crawl(args, std::io::stdin().lock())?;
    ::log::debug!("Crawl has {} pages", crawl.len());

    let mut export = Export::new(&crawl).with_config(config);
    if let Some(format) = &args.format {
        export = export.with_format(format.as_str());
    }
    if let Some(output) = &args.output {
        export = export.with_output(output.as_path());
    }
    if let Some(dir) = &args.output_dir {
        export = export.with_output_dir(dir.as_path());
    }

    export.write()
}

/// Load the crawl from the input file, or from `stdin` when there is none
fn load_crawl<R: Read>(args: &Args, stdin: R) -> Result<Crawl, FormatError> {
    match args.input_path() {
        Some(path) => {
            ::log::info!("Loading crawl from {}", path.display());
            Crawl::from_file(path)
        }
        None => {
            ::log::info!("Reading crawl from stdin");
            Crawl::from_reader(stdin)
        }
    }
}
