use clap::{Parser, Subcommand};
use notification_center::{ExpiryPolicy, NotificationStatus};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "unindo", version, about = "Unindo Destinos toast notifications")]
pub struct Cli {
    /// Notification settings file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the toast overlay window (default)
    Gui,
    /// Show notifications without a window and wait until they expire
    Demo {
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// rearm-on-render or from-creation
        #[arg(long)]
        policy: Option<ExpiryPolicy>,
        /// success, error or info
        #[arg(long)]
        status: Option<NotificationStatus>,
        #[arg(long)]
        description: Option<String>,
        #[arg(required = true)]
        titles: Vec<String>,
    },
}
