use crate::core::{
    colors::paint_optional, config::DecoratorConfig, error::Result, git::GitProvider,
    print_info, router::DecorationResolver,
};
use colored::*;
use tokio_util::sync::CancellationToken;

pub async fn execute_decorate(config: &DecoratorConfig, uri: &str, json: bool) -> Result<()> {
    let resolver = DecorationResolver::new(GitProvider, config.clone());

    // Ctrl-C abandons the lookup instead of killing the process mid-output
    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let decoration = resolver.resolve(uri, &cancel).await;
    interrupt.abort();

    if json {
        println!("{}", serde_json::to_string(&decoration)?);
        return Ok(());
    }

    let Some(decoration) = decoration else {
        print_info("No decoration");
        return Ok(());
    };

    println!(
        "{} {}",
        "Badge:  ".bright_black(),
        paint_optional(decoration.color, &decoration.badge)
    );
    if let Some(color) = decoration.color {
        println!("{} {}", "Color:  ".bright_black(), color.paint(color.id()));
    }
    if let Some(tooltip) = &decoration.tooltip {
        println!("{} {}", "Tooltip:".bright_black(), tooltip.white());
    }

    Ok(())
}
