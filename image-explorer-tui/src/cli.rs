use clap::Parser;

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000/images.json";

/// Host page demonstrating the image explorer.
#[derive(Parser, Debug)]
#[command(name = "image-explorer-tui", version, about)]
pub struct Args {
    /// Endpoint returning the JSON image list.
    #[arg(value_name = "URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Serve a built-in list instead of fetching over HTTP.
    #[arg(long)]
    pub demo: bool,
}
