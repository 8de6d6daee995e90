use clap::Parser;

/// Add missing dependencies reported by deptry to a uv project manifest
#[derive(Parser, Debug)]
#[command(name = "uv-depsync")]
#[command(version)]
#[command(about = "Add missing dependencies reported by deptry via uv add", long_about = None)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Report the missing packages without adding anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
