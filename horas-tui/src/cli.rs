use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "horas-tui")]
#[command(about = "Terminal home-screen widget for the Horas time tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the widget and keep it on screen (default)
    Run,
    /// Seed a sample snapshot, then run
    Dev,
    /// Render every instance once, print the templates and exit
    Once,
    /// Print config path and create a default file if missing
    ConfigPath,
}
