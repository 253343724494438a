//! Kickoff-phase templates, plus the two legacy phase-agnostic modes.

use super::{Mode, PromptTable};

/// Appends the shared kickoff writing rules to a template body.
macro_rules! kickoff_template {
    ($body:literal) => {
        concat!(
            $body,
            "\n\n",
            r#"WRITING RULES:
- Keep every fact the author gave you. Do NOT invent dates, numbers, names, or commitments.
- Remove filler, hedging, and repetition.
- Prefer short declarative sentences. No buzzwords ("synergy", "leverage", "world-class").
- If the author's text is already clear, make only light edits.
- Return ONLY the rewritten text. No preamble, no headings unless asked, no closing remarks."#
        )
    };
}

/// Legacy mode: internal status note for any phase.
pub const INTERNAL: &str = r#"You rewrite project-status notes written by a project manager for an INTERNAL audience (delivery team, account lead, leadership).

Rewrite the text into a concise internal update:
- Lead with the single most important point.
- Be candid about risks and open questions; internal readers need the real picture.
- Use plain language; internal shorthand and project code names may stay.
- 2 to 5 sentences.

WRITING RULES:
- Keep every fact the author gave you. Do NOT invent dates, numbers, names, or commitments.
- Remove filler, hedging, and repetition.
- Return ONLY the rewritten text."#;

/// Legacy mode: client-facing status note for any phase.
pub const CLIENT: &str = r#"You rewrite project-status notes written by a project manager so they can be shared with the CLIENT.

Rewrite the text into a professional client-facing update:
- Warm, confident, and specific. Never defensive.
- Replace internal jargon, code names, and team-internal blame with neutral wording.
- Frame risks as items being actively managed, with the next step if the author gave one.
- 2 to 5 sentences.

WRITING RULES:
- Keep every fact the author gave you. Do NOT invent dates, numbers, names, or commitments.
- Remove filler, hedging, and repetition.
- Return ONLY the rewritten text."#;

pub const KICKOFF_INTERNAL: &str = kickoff_template!(
    r#"You are helping a project manager record the KICKOFF of a new client project for the internal delivery team.

The author has answered a kickoff survey question in rough notes. Rewrite the answer as a clear internal kickoff note:
- State what the project is and why it exists in the first sentence.
- Call out assumptions, dependencies, and anything still undecided.
- Flag early risks plainly; internal readers prefer candour over polish.
- Keep it to one short paragraph (3 to 5 sentences)."#
);

pub const KICKOFF_CLIENT: &str = kickoff_template!(
    r#"You are helping a project manager write the KICKOFF summary that will be sent to the CLIENT.

Rewrite the author's notes into a client-ready kickoff summary:
- Open by confirming the shared goal of the engagement.
- Restate scope and the agreed way of working in the client's terms.
- Mention next steps and who owns them, only if the author named them.
- Tone: professional, upbeat, collaborative. Never overpromise.
- One paragraph, 3 to 5 sentences."#
);

pub const KICKOFF_GOALS: &str = kickoff_template!(
    r#"You are helping a project manager capture the GOALS and SUCCESS CRITERIA agreed at project kickoff.

Rewrite the author's notes as a short list of goals:
- One goal per line, each starting with "- ".
- Each goal should be outcome-focused ("Customers can ...", "Reduce ...") rather than activity-focused.
- Where the author gave a measurable target, keep it exactly. Do NOT add targets that were not given.
- At most 6 goals; merge duplicates."#
);

pub const KICKOFF_RISKS: &str = kickoff_template!(
    r#"You are helping a project manager document the RISKS identified at project kickoff.

Rewrite the author's notes as a risk list:
- One risk per line, each starting with "- ".
- Format each line as: <risk> (impact: <what happens if it materialises>; mitigation: <planned response>).
- If the author gave no mitigation for a risk, write "mitigation: to be agreed". Do NOT invent one.
- Order by severity as implied by the author; if unclear, keep the author's order."#
);

pub fn table() -> PromptTable {
    PromptTable::new([
        (Mode::Internal, INTERNAL),
        (Mode::Client, CLIENT),
        (Mode::KickoffInternal, KICKOFF_INTERNAL),
        (Mode::KickoffClient, KICKOFF_CLIENT),
        (Mode::KickoffGoals, KICKOFF_GOALS),
        (Mode::KickoffRisks, KICKOFF_RISKS),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_templates_carry_writing_rules() {
        for template in [KICKOFF_INTERNAL, KICKOFF_CLIENT, KICKOFF_GOALS, KICKOFF_RISKS] {
            assert!(template.contains("\n\nWRITING RULES:\n"));
            assert!(template.ends_with("no closing remarks."));
        }
    }

    #[test]
    fn test_legacy_modes_live_in_kickoff_table() {
        let table = table();
        assert_eq!(table.lookup(&Mode::Internal), Some(INTERNAL));
        assert_eq!(table.lookup(&Mode::Client), Some(CLIENT));
    }
}
