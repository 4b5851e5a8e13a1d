use clap::Parser;

#[derive(Parser)]
#[command(
    name = "keydrift",
    about = "Keydrift: structural key-drift checks across hierarchical key/value documents",
    version
)]
pub struct Cli {
    /// JSON documents to compare (each must have an object root)
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
