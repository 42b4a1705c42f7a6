use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormatError;

pub const DEFAULT_TASK_SUBJECT: &str = "Görev";
pub const DEFAULT_TASK_ACTIVITY: &str = "Açıklama yok.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_summary: Option<String>,
    pub plan: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
}

impl Task {
    pub fn subject_or_default(&self) -> &str {
        non_blank(self.subject.as_deref()).unwrap_or(DEFAULT_TASK_SUBJECT)
    }

    pub fn activity_or_default(&self) -> &str {
        non_blank(self.activity.as_deref()).unwrap_or(DEFAULT_TASK_ACTIVITY)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

impl PlanResponse {
    /// Validates an untyped service payload.
    ///
    /// The whole response is rejected when `plan` is missing, is not a list,
    /// or holds a day that is not `{day, tasks: [...]}`. A `weekly_summary`
    /// that is not text is dropped rather than rejected.
    pub fn from_value(value: &Value) -> Result<Self, FormatError> {
        let object = value.as_object().ok_or(FormatError::NotAnObject)?;
        let plan = object
            .get("plan")
            .filter(|plan| !plan.is_null())
            .ok_or(FormatError::MissingPlan)?;
        let raw_days = plan.as_array().ok_or(FormatError::PlanNotAList)?;

        let mut days = Vec::with_capacity(raw_days.len());
        for (index, raw_day) in raw_days.iter().enumerate() {
            let day = DayPlan::deserialize(raw_day).map_err(|err| FormatError::MalformedDay {
                index,
                reason: err.to_string(),
            })?;
            days.push(day);
        }

        let weekly_summary = object
            .get("weekly_summary")
            .and_then(Value::as_str)
            .filter(|summary| !summary.is_empty())
            .map(str::to_string);

        Ok(Self {
            weekly_summary,
            plan: days,
        })
    }
}
