// Instruction templates for the rewrite endpoint, one table per project phase.
// Templates are static data: placeholder markers like {SURVEY_DATA} are passed
// to the model untouched, never substituted here.

pub mod dashboard;
pub mod final_phase;
pub mod kickoff;
pub mod midterm;
pub mod mode;

use std::collections::HashMap;
use std::fmt;

pub use mode::Mode;

/// Names the four prompt tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptPhase {
    Kickoff,
    Midterm,
    Final,
    Dashboard,
}

impl PromptPhase {
    /// Order in which tables are consulted. The first table holding a mode wins.
    pub const PRECEDENCE: [PromptPhase; 4] = [
        PromptPhase::Kickoff,
        PromptPhase::Midterm,
        PromptPhase::Final,
        PromptPhase::Dashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptPhase::Kickoff => "kickoff",
            PromptPhase::Midterm => "midterm",
            PromptPhase::Final => "final",
            PromptPhase::Dashboard => "dashboard",
        }
    }

    /// The production table for this phase.
    pub fn table(&self) -> PromptTable {
        match self {
            PromptPhase::Kickoff => kickoff::table(),
            PromptPhase::Midterm => midterm::table(),
            PromptPhase::Final => final_phase::table(),
            PromptPhase::Dashboard => dashboard::table(),
        }
    }
}

impl fmt::Display for PromptPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mode → instruction template mapping for one phase.
#[derive(Debug, Clone, Default)]
pub struct PromptTable {
    templates: HashMap<Mode, &'static str>,
}

impl PromptTable {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Mode, &'static str)>,
    {
        Self {
            templates: entries.into_iter().collect(),
        }
    }

    /// Exact-match lookup. No fuzzy or prefix matching.
    pub fn lookup(&self, mode: &Mode) -> Option<&'static str> {
        self.templates.get(mode).copied()
    }
}
