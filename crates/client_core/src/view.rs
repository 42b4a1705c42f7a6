//! Page surface: render instructions and the state they are committed to.

pub const LOADING_MESSAGE: &str =
    "AI Koçunuz yeni sonuçlarınıza göre en iyi planı hazırlıyor...";
pub const NO_RESULTS_MESSAGE: &str = "Lütfen en az bir sınav sonucu girin.";
pub const FORMAT_ERROR_MESSAGE: &str = "AI geçersiz bir plan formatı gönderdi.";
pub const NO_TASKS_PLACEHOLDER: &str = "Bugün için görev yok.";
pub const TRIGGER_READY_LABEL: &str = "Planımı Güncelle";
pub const TRIGGER_BUSY_LABEL: &str = "Hazırlanıyor...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskItem {
    Task { subject: String, activity: String },
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub label: String,
    pub items: Vec<TaskItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Loading(String),
    Error(String),
    Day(DayCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    ClearOutput,
    Append(OutputBlock),
    SetSummary(String),
}

impl RenderInstruction {
    /// Replace the whole output area with a single block.
    pub fn replace_output(block: OutputBlock) -> [RenderInstruction; 2] {
        [RenderInstruction::ClearOutput, RenderInstruction::Append(block)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAffordance {
    Ready,
    Busy,
}

impl TriggerAffordance {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => TRIGGER_READY_LABEL,
            Self::Busy => TRIGGER_BUSY_LABEL,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Ready
    }
}

pub trait Surface: Send {
    fn apply(&mut self, instruction: &RenderInstruction);
    fn set_trigger(&mut self, affordance: TriggerAffordance);
}

/// Applies instructions in order.
pub fn commit<S: Surface + ?Sized>(surface: &mut S, instructions: &[RenderInstruction]) {
    for instruction in instructions {
        surface.apply(instruction);
    }
}

/// In-memory page: one output area, one summary line, one submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub output: Vec<OutputBlock>,
    pub summary: Option<String>,
    pub trigger: TriggerAffordance,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            output: Vec::new(),
            summary: None,
            trigger: TriggerAffordance::Ready,
        }
    }
}

impl PageModel {
    pub fn days(&self) -> impl Iterator<Item = &DayCard> {
        self.output.iter().filter_map(|block| match block {
            OutputBlock::Day(card) => Some(card),
            _ => None,
        })
    }

    pub fn error_message(&self) -> Option<&str> {
        self.output.iter().find_map(|block| match block {
            OutputBlock::Error(message) => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.output.as_slice(), [OutputBlock::Loading(_)])
    }
}

impl Surface for PageModel {
    fn apply(&mut self, instruction: &RenderInstruction) {
        match instruction {
            RenderInstruction::ClearOutput => self.output.clear(),
            RenderInstruction::Append(block) => self.output.push(block.clone()),
            RenderInstruction::SetSummary(summary) => self.summary = Some(summary.clone()),
        }
    }

    fn set_trigger(&mut self, affordance: TriggerAffordance) {
        self.trigger = affordance;
    }
}
