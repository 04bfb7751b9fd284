use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "responsive-video-rewrite")]
#[command(about = "Replace single-source page videos with responsive desktop/mobile sources")]
#[command(version)]
struct Cli {
    /// Project root containing the pages/ directory
    /// (defaults to one level above the executable's directory)
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let root = match responsive_video_rewrite::commands::update::resolve_root(cli.root.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let summary = responsive_video_rewrite::commands::update::run(&root);
    process::exit(summary.exit_code());
}
