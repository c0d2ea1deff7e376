use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub(crate) struct Arguments {
    /// Page addresses to capture, one directory each
    pub urls: Vec<String>,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}
