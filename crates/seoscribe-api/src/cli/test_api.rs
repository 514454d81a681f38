//! `scribe test`: send the fixed connectivity prompt and show the reply.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::notice::{FailureNotice, Reported};
use crate::state::AppState;

pub async fn test_api(state: &AppState, json: bool, quiet: bool) -> anyhow::Result<()> {
    let spinner = (!json && !quiet).then(|| {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Testing connection...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner
    });

    let result = state.generation_service.test_connection().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let reply = match result {
        Ok(reply) => reply,
        Err(err) => {
            FailureNotice::for_completion(&err).eprint();
            return Err(Reported.into());
        }
    };

    if json {
        let out = serde_json::json!({
            "ok": true,
            "model": state.config.completion.model,
            "reply": reply,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if !quiet {
        println!();
        println!(
            "  {} API works! Response: {}",
            style("✓").green().bold(),
            style(reply.trim()).cyan()
        );
        println!(
            "  {}",
            style(format!("model: {}", state.config.completion.model)).dim()
        );
        println!();
    }

    Ok(())
}
