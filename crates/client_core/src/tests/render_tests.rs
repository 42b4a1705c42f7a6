use super::*;
use serde_json::json;

use crate::view::{commit, PageModel};

#[test]
fn plan_that_is_not_a_list_is_a_format_error() {
    let err = render(&json!({ "plan": "not-an-array" })).expect_err("format error");
    assert_eq!(err, FormatError::PlanNotAList);
}

#[test]
fn empty_day_renders_single_placeholder() {
    let instructions = render(&json!({ "plan": [{ "day": "Mon", "tasks": [] }] })).expect("ok");
    let mut page = PageModel::default();
    commit(&mut page, &instructions);

    let days: Vec<_> = page.days().collect();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].label, "Mon");
    assert_eq!(
        days[0].items,
        vec![TaskItem::Placeholder(NO_TASKS_PLACEHOLDER.to_string())]
    );
}

#[test]
fn tasks_keep_order_and_use_defaults() {
    let instructions = render(&json!({
        "weekly_summary": "Focus on geometry this week.",
        "plan": [
            { "day": "Mon", "tasks": [
                { "subject": "Matematik", "activity": "40 soru" },
                { "activity": "Paragraf" },
                {}
            ]},
            { "day": "Tue", "tasks": [{ "subject": "Fizik" }] }
        ]
    }))
    .expect("ok");

    assert_eq!(
        instructions[0],
        RenderInstruction::SetSummary("Focus on geometry this week.".to_string())
    );
    assert_eq!(instructions[1], RenderInstruction::ClearOutput);

    let mut page = PageModel::default();
    commit(&mut page, &instructions);
    assert_eq!(page.summary.as_deref(), Some("Focus on geometry this week."));

    let days: Vec<_> = page.days().collect();
    assert_eq!(days.iter().map(|d| d.label.as_str()).collect::<Vec<_>>(), ["Mon", "Tue"]);
    assert_eq!(
        days[0].items,
        vec![
            TaskItem::Task {
                subject: "Matematik".to_string(),
                activity: "40 soru".to_string(),
            },
            TaskItem::Task {
                subject: "Görev".to_string(),
                activity: "Paragraf".to_string(),
            },
            TaskItem::Task {
                subject: "Görev".to_string(),
                activity: "Açıklama yok.".to_string(),
            },
        ]
    );
    assert_eq!(
        days[1].items,
        vec![TaskItem::Task {
            subject: "Fizik".to_string(),
            activity: "Açıklama yok.".to_string(),
        }]
    );
}

#[test]
fn rendering_clears_previous_output() {
    let mut page = PageModel::default();
    commit(
        &mut page,
        &RenderInstruction::replace_output(OutputBlock::Loading("wait".to_string())),
    );
    assert!(page.is_loading());

    commit(&mut page, &render(&json!({ "plan": [] })).expect("ok"));
    assert!(page.output.is_empty());
    assert_eq!(page.summary, None);
}

#[test]
fn malformed_day_produces_no_instructions() {
    let result = render(&json!({
        "plan": [{ "day": "Mon", "tasks": [] }, { "day": 3, "tasks": [] }]
    }));
    assert!(matches!(result, Err(FormatError::MalformedDay { index: 1, .. })));
}
