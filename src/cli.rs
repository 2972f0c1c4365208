use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vrmeta")]
#[command(version)]
#[command(about = "A fast VRM metadata reader with HTTP Range support", long_about = None)]
#[command(after_help = "Examples:\n  \
  vrmeta model.vrm                          show the metadata of a local model\n  \
  vrmeta --raw model.vrm | jq .             pipe the raw meta JSON fragment into jq\n  \
  vrmeta https://example.com/model.vrm      fetch only the metadata over HTTP")]
pub struct Cli {
    /// VRM file path or HTTP URL
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Print the raw meta JSON fragment instead of formatted fields
    #[arg(long)]
    pub raw: bool,

    /// Quiet mode (suppress warnings and transfer statistics)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    pub fn is_http_url(&self) -> bool {
        self.file.starts_with("http://") || self.file.starts_with("https://")
    }
}
