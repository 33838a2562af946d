use clap::Parser;

#[derive(Parser)]
#[command(name = "tl")]
#[command(about = "A crystal clear command-line translator.")]
#[command(version)]
pub struct Cli {
    /// Target language code (e.g. kn, hi, it)
    #[arg(short = 'l', long)]
    pub lang: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Text to translate (prompts interactively when omitted)
    #[arg(num_args = 0..)]
    pub query: Vec<String>,
}
