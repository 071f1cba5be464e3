use colored::Colorize;
use std::path::Path;

pub async fn handle(stack_name: &str, resource_dir: &Path) -> anyhow::Result<()> {
    let mut stack = super::build_lifecycle(stack_name, resource_dir, false).await?;

    match stack.stack_status().await {
        Ok(status) => {
            println!("{} {}", stack_name.cyan(), status.to_string().bold());
            Ok(())
        }
        Err(err) => Err(super::fail(&stack, err)),
    }
}
