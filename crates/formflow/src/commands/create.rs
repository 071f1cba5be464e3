use colored::Colorize;
use std::path::Path;

pub async fn handle(stack_name: &str, resource_dir: &Path) -> anyhow::Result<()> {
    let mut stack = super::build_lifecycle(stack_name, resource_dir, true).await?;

    println!("{} {}", "Creating stack".blue().bold(), stack_name.cyan());
    match stack.create_stack().await {
        Ok(()) => {
            println!(
                "{}",
                format!("Stack {stack_name} is CREATE_COMPLETE").green().bold()
            );
            Ok(())
        }
        Err(err) => Err(super::fail(&stack, err)),
    }
}
