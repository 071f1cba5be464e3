use colored::Colorize;
use std::path::Path;

pub async fn handle(stack_name: &str, resource_dir: &Path) -> anyhow::Result<()> {
    let mut stack = super::build_lifecycle(stack_name, resource_dir, false).await?;

    println!("{} {}", "Deleting stack".blue().bold(), stack_name.cyan());
    match stack.delete_stack().await {
        Ok(()) => {
            println!("{}", format!("Stack {stack_name} is gone").green().bold());
            Ok(())
        }
        Err(err) => Err(super::fail(&stack, err)),
    }
}
