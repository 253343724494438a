//! Instruction Resolver: finds the template for a mode across the phase tables.

use crate::prompts::{Mode, PromptPhase, PromptTable};

/// A successful resolution: the template and the table it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub phase: PromptPhase,
    pub instructions: &'static str,
}

/// Scans its tables in order and returns the first match.
#[derive(Debug, Clone)]
pub struct InstructionResolver {
    tables: Vec<(PromptPhase, PromptTable)>,
}

impl InstructionResolver {
    /// Tables must be given in precedence order. Keys may collide across tables;
    /// the earlier table wins.
    pub fn new(tables: Vec<(PromptPhase, PromptTable)>) -> Self {
        Self { tables }
    }

    /// Production tables: kickoff, midterm, final, dashboard.
    pub fn standard() -> Self {
        Self::new(
            PromptPhase::PRECEDENCE
                .iter()
                .map(|phase| (*phase, phase.table()))
                .collect(),
        )
    }

    /// Returns `None` for modes no table registers; callers treat that as a
    /// normal outcome.
    ///
    /// `phase` is accepted but inert: no table consults it, so the same mode
    /// resolves identically whatever phase the form reports. Kept so the
    /// request contract stays stable if phase-scoped modes are ever added.
    pub fn resolve(&self, mode: &Mode, _phase: Option<&str>) -> Option<Resolved> {
        self.tables.iter().find_map(|(phase, table)| {
            table.lookup(mode).map(|instructions| Resolved {
                phase: *phase,
                instructions,
            })
        })
    }
}
