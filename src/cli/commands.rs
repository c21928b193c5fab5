use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ei", about = concat!("[#] eisen v", env!("CARGO_PKG_VERSION"), " - four quadrants, one list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the bottom of a quadrant
    Add(AddArgs),
    /// List active tasks, all quadrants or one
    List(ListArgs),
    /// Overwrite a task's name, description, due date, and labels
    Edit(EditArgs),
    /// Mark a task completed
    Done(TargetArgs),
    /// Permanently delete a task
    Rm(RmArgs),
    /// Move a task one step up within its quadrant
    Up(TargetArgs),
    /// Move a task one step down within its quadrant
    Down(TargetArgs),
    /// Move a task to the bottom of another quadrant
    Mv(MvArgs),
    /// List completed tasks, most recent first
    Completed,
    /// List the label registry
    Labels,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Quadrant key (urgent_important, not_urgent_important,
    /// urgent_not_important, not_urgent_not_important)
    pub category: String,
    /// Task name
    pub name: String,
    /// Longer description
    #[arg(long, default_value = "")]
    pub desc: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Attach a label (repeatable)
    #[arg(long = "label", action = clap::ArgAction::Append)]
    pub labels: Vec<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: String,
    /// New task name
    pub name: String,
    /// New description (empty clears it)
    #[arg(long, default_value = "")]
    pub desc: String,
    /// New due date (YYYY-MM-DD; omit to clear)
    #[arg(long)]
    pub due: Option<String>,
    /// New label set (repeatable; omit to clear)
    #[arg(long = "label", action = clap::ArgAction::Append)]
    pub labels: Vec<String>,
}

#[derive(Args)]
pub struct TargetArgs {
    /// Quadrant key
    pub category: String,
    /// Task id
    pub id: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Quadrant key, or "completed" for the completed collection
    pub category: String,
    /// Task id
    pub id: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Source quadrant key
    pub from: String,
    /// Destination quadrant key
    pub to: String,
    /// Task id
    pub id: String,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Quadrant to list (default: all four)
    pub category: Option<String>,
    /// Only show tasks carrying one of these labels (repeatable)
    #[arg(long = "label", action = clap::ArgAction::Append)]
    pub labels: Vec<String>,
}
