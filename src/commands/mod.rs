pub mod init;
pub mod login;
pub mod logout;
pub mod register;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the task service connection")]
    Init,
    #[command(about = "Log in to the task service")]
    Login(login::LoginArgs),
    #[command(about = "Create an account and log in")]
    Register(register::RegisterArgs),
    #[command(about = "Forget the stored session token")]
    Logout,
    #[command(about = "List, create, edit and move tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Register(args) => register::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Task(args) => task::cmd(args).await,
        }
    }
}
