use colored::Colorize;
use std::path::Path;

pub async fn handle(stack_name: &str, resource_dir: &Path) -> anyhow::Result<()> {
    let mut stack = super::build_lifecycle(stack_name, resource_dir, true).await?;

    println!("{} {}", "Redeploying stack".blue().bold(), stack_name.cyan());
    match stack.redeploy().await {
        Ok(()) => {
            println!(
                "{}",
                format!("Stack {stack_name} redeployed").green().bold()
            );
            Ok(())
        }
        // A failed redeploy can leave the stack deleted but not yet
        // recreated; rerunning picks up from the observed status.
        Err(err) => Err(super::fail(&stack, err)),
    }
}
