//! Maps a plan payload to render instructions without touching the page.

use serde_json::Value;
use shared::{error::FormatError, protocol::PlanResponse};

use crate::view::{DayCard, OutputBlock, RenderInstruction, TaskItem, NO_TASKS_PLACEHOLDER};

pub fn render(payload: &Value) -> Result<Vec<RenderInstruction>, FormatError> {
    let response = PlanResponse::from_value(payload)?;
    Ok(plan_instructions(&response))
}

pub fn plan_instructions(response: &PlanResponse) -> Vec<RenderInstruction> {
    let mut instructions = Vec::with_capacity(response.plan.len() + 2);
    if let Some(summary) = &response.weekly_summary {
        instructions.push(RenderInstruction::SetSummary(summary.clone()));
    }
    instructions.push(RenderInstruction::ClearOutput);

    for day in &response.plan {
        let mut items: Vec<TaskItem> = day
            .tasks
            .iter()
            .map(|task| TaskItem::Task {
                subject: task.subject_or_default().to_string(),
                activity: task.activity_or_default().to_string(),
            })
            .collect();
        if items.is_empty() {
            items.push(TaskItem::Placeholder(NO_TASKS_PLACEHOLDER.to_string()));
        }
        instructions.push(RenderInstruction::Append(OutputBlock::Day(DayCard {
            label: day.day.clone(),
            items,
        })));
    }
    instructions
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
