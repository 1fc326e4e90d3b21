//! Inventaris CLI Application
//!
//! Command-line interface for the inventory borrowing system.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use inventaris_core::ClientBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        server,
        session_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = ClientBuilder::new().with_base_url(server);
    if let Some(path) = session_file {
        builder = builder.with_session_path(path);
    }
    let client = builder.build().context("Failed to initialize client")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Inventaris client started against {}", client.base_url());

    let cli = Cli::new(client, renderer);
    match command {
        Login(args) => cli.handle_login(args).await,
        Logout => cli.handle_logout(),
        Whoami => cli.handle_whoami(),
        Product { command } => cli.handle_product_command(command).await,
        Category { command } => cli.handle_category_command(command).await,
        Borrowing { command } => cli.handle_borrowing_command(command).await,
        User { command } => cli.handle_user_command(command).await,
        Activity { command } => cli.handle_activity_command(command).await,
        Report { command } => cli.handle_report_command(command).await,
        Stats(args) => cli.handle_stats(args).await,
    }
}
