mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formflow")]
#[command(about = "Drive a CloudFormation stack through create, delete, and redeploy", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the stack and wait for CREATE_COMPLETE
    Create {
        /// Name of the stack to operate on
        #[arg(short = 's', long, env = "FORMFLOW_STACK_NAME")]
        stack_name: String,
        /// Directory containing config.json and template.json
        #[arg(short = 'd', long)]
        resource_dir: PathBuf,
    },
    /// Delete the stack and wait until it is gone
    Delete {
        /// Name of the stack to operate on
        #[arg(short = 's', long, env = "FORMFLOW_STACK_NAME")]
        stack_name: String,
        /// Directory containing config.json and template.json
        #[arg(short = 'd', long)]
        resource_dir: PathBuf,
    },
    /// Delete the stack if present, then create it again
    Redeploy {
        /// Name of the stack to operate on
        #[arg(short = 's', long, env = "FORMFLOW_STACK_NAME")]
        stack_name: String,
        /// Directory containing config.json and template.json
        #[arg(short = 'd', long)]
        resource_dir: PathBuf,
    },
    /// Print the current stack status
    Status {
        /// Name of the stack to operate on
        #[arg(short = 's', long, env = "FORMFLOW_STACK_NAME")]
        stack_name: String,
        /// Directory containing config.json and template.json
        #[arg(short = 'd', long)]
        resource_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Create {
            stack_name,
            resource_dir,
        } => commands::create::handle(&stack_name, &resource_dir).await,
        Commands::Delete {
            stack_name,
            resource_dir,
        } => commands::delete::handle(&stack_name, &resource_dir).await,
        Commands::Redeploy {
            stack_name,
            resource_dir,
        } => commands::redeploy::handle(&stack_name, &resource_dir).await,
        Commands::Status {
            stack_name,
            resource_dir,
        } => commands::status::handle(&stack_name, &resource_dir).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from(["formflow", "redeploy", "-s", "demo", "-d", "./infra"])
            .expect("redeploy should accept -s and -d");
        match cli.command {
            Commands::Redeploy { stack_name, .. } => assert_eq!(stack_name, "demo"),
            _ => panic!("parsed the wrong subcommand"),
        }
    }
}
