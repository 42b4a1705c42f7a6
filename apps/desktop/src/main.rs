use std::{fmt::Write as _, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    config::{load_settings, load_settings_from},
    view::{OutputBlock, TaskItem},
    HttpPlanService, PageModel, SubmissionController, TriggerOutcome,
};
use shared::domain::FormState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Submit exam scores to the study plan service and print the returned plan.
#[derive(Parser, Debug)]
#[command(name = "plan-desktop", version)]
struct Args {
    /// Exam score as FIELD=VALUE; repeat for each field. Blank values are skipped.
    #[arg(long = "score", value_name = "FIELD=VALUE", value_parser = parse_field)]
    scores: Vec<(String, String)>,
    /// Endpoint config file (defaults to ./planner.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    path: Option<String>,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn render_page(page: &PageModel) -> String {
    let mut out = String::new();
    if let Some(summary) = &page.summary {
        let _ = writeln!(out, "{summary}\n");
    }
    for block in &page.output {
        match block {
            OutputBlock::Loading(message) => {
                let _ = writeln!(out, "… {message}");
            }
            OutputBlock::Error(message) => {
                let _ = writeln!(out, "! {message}");
            }
            OutputBlock::Day(card) => {
                let _ = writeln!(out, "## {}", card.label);
                for item in &card.items {
                    match item {
                        TaskItem::Task { subject, activity } => {
                            let _ = writeln!(out, "  - {subject}: {activity}");
                        }
                        TaskItem::Placeholder(text) => {
                            let _ = writeln!(out, "  - {text}");
                        }
                    }
                }
            }
        }
    }
    let marker = if page.trigger.is_enabled() { "" } else { " (busy)" };
    let _ = writeln!(out, "[{}]{marker}", page.trigger.label());
    out
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => load_settings_from(path, |key| std::env::var(key).ok()),
        None => load_settings(),
    };
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(path) = args.path {
        settings.path = path;
    }

    let service = HttpPlanService::from_settings(&settings).context("invalid plan endpoint")?;
    info!(endpoint = %service.endpoint(), "using plan service");

    let form: FormState = args.scores.into_iter().collect();
    let controller = SubmissionController::new(service, PageModel::default()).with_form(form);
    controller.open_modal();

    let outcome = controller.trigger().await;
    info!(?outcome, "submission finished");
    if outcome == TriggerOutcome::Dropped {
        anyhow::bail!("submission was dropped");
    }

    let page = controller.into_page();
    print!("{}", render_page(&page.surface));
    Ok(())
}

#[cfg(test)]
mod tests {
    use client_core::view::{DayCard, Surface, TriggerAffordance};

    use super::*;

    #[test]
    fn parse_field_keeps_blank_values() {
        assert_eq!(
            parse_field("tyt_fen="),
            Ok(("tyt_fen".to_string(), String::new()))
        );
        assert_eq!(
            parse_field("ayt = 42.5"),
            Ok(("ayt".to_string(), " 42.5".to_string()))
        );
        assert!(parse_field("no-separator").is_err());
        assert!(parse_field("=12").is_err());
    }

    #[test]
    fn render_page_lists_days_and_tasks() {
        let mut page = PageModel::default();
        page.apply(&client_core::view::RenderInstruction::SetSummary(
            "Tekrar haftası".to_string(),
        ));
        page.apply(&client_core::view::RenderInstruction::Append(OutputBlock::Day(
            DayCard {
                label: "Mon".to_string(),
                items: vec![TaskItem::Task {
                    subject: "Fizik".to_string(),
                    activity: "Deneme".to_string(),
                }],
            },
        )));

        assert_eq!(
            render_page(&page),
            "Tekrar haftası\n\n## Mon\n  - Fizik: Deneme\n[Planımı Güncelle]\n"
        );

        page.set_trigger(TriggerAffordance::Busy);
        assert!(render_page(&page).ends_with("[Hazırlanıyor...] (busy)\n"));
    }
}
