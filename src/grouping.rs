use crate::tokenizer::ParsedLine;
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};

/// Distinct messages for one (type, stage) pair, in first-seen order.
pub type MessageSet = IndexSet<String>;
/// stage -> messages
pub type StageIndex = IndexMap<String, MessageSet>;
/// event type -> stages
pub type GroupIndex = IndexMap<String, StageIndex>;

/// Which branch a single `ingest` call took. `DuplicateMessage` is
/// informational: the message was already recorded for that type+stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    NewType,
    NewStage,
    NewMessage,
    DuplicateMessage,
}

/// Owns the three-level grouping and classifies each incoming line into
/// exactly one of the four branches. Performs at most one insertion per
/// call; never removes anything during a run.
#[derive(Debug, Default)]
pub struct GroupAccumulator {
    index: GroupIndex,
}

fn single_message(message: &str) -> MessageSet {
    let mut messages = MessageSet::new();
    messages.insert(message.to_string());
    messages
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, line: &ParsedLine) -> IngestOutcome {
        let stages = match self.index.entry(line.event_type.clone()) {
            Entry::Vacant(slot) => {
                let mut stages = StageIndex::new();
                stages.insert(line.stage.clone(), single_message(&line.message));
                slot.insert(stages);
                return IngestOutcome::NewType;
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };
        let messages = match stages.entry(line.stage.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(single_message(&line.message));
                return IngestOutcome::NewStage;
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };
        if messages.insert(line.message.clone()) {
            IngestOutcome::NewMessage
        } else {
            IngestOutcome::DuplicateMessage
        }
    }

    /// Defensive copy for reporting; the live index stays exclusively owned.
    pub fn snapshot(&self) -> GroupIndex {
        self.index.clone()
    }

    pub fn index(&self) -> &GroupIndex {
        &self.index
    }

    pub fn type_count(&self) -> usize {
        self.index.len()
    }

    pub fn message_count(&self) -> usize {
        self.index
            .values()
            .flat_map(|stages| stages.values())
            .map(|messages| messages.len())
            .sum()
    }
}
