use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ActivityCommands, BorrowingCommands, CategoryCommands, LoginArgs, ProductCommands,
    ReportCommands, StatsArgs, UserCommands,
};

/// Main command-line interface for the Inventaris borrowing tool
///
/// Inventaris is a client for an office inventory borrowing system. It lets
/// users browse products with live availability, request and return loans,
/// and gives admins the approval queue, user management, activity log, and
/// PDF reports, all from the terminal.
#[derive(Parser)]
#[command(version, about, name = "inv")]
pub struct Args {
    /// Backend base URL. Defaults to http://localhost:5000
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Path to the session file. Defaults to
    /// $XDG_DATA_HOME/inventaris/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Inventaris CLI
///
/// Session commands (`login`, `logout`, `whoami`) manage the stored
/// credentials; the remaining groups mirror the backend's resources.
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login(LoginArgs),
    /// Log out and discard the session
    Logout,
    /// Show the currently logged-in user
    Whoami,
    /// Browse and manage products
    #[command(alias = "p")]
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Manage categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Request, track, and manage borrowings
    #[command(alias = "b")]
    Borrowing {
        #[command(subcommand)]
        command: BorrowingCommands,
    },
    /// Manage users (admin)
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Inspect the activity log
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Preview and download reports (admin)
    #[command(alias = "r")]
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Show dashboard statistics
    Stats(StatsArgs),
}
