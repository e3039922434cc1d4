use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "smt", about = concat!("[^] summit v", env!("CARGO_PKG_VERSION"), " - goals and projects, one tree"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different working directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a tab's projected view of the tree (default command)
    View(ViewArgs),
    /// Toggle one node's expand/collapse state
    Toggle(ToggleArgs),
    /// Expand every node in the current tree
    Expand,
    /// Collapse every node in the current tree
    Collapse,
    /// List the available tabs
    Tabs,
}

#[derive(Args, Default)]
pub struct ViewArgs {
    /// Tab to show: all, goals, projects, completed, paused
    #[arg(long)]
    pub tab: Option<String>,

    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Args, Default)]
pub struct WindowArgs {
    /// Window start date (YYYY-MM-DD); omit both bounds for all time
    #[arg(long)]
    pub from: Option<String>,

    /// Window end date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Item id to toggle
    pub id: String,
}
