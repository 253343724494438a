use super::{Mode, PromptTable};

/// Internal midterm check-in. Candid, risk-forward.
pub const MIDTERM_INTERNAL: &str = r#"You are helping a project manager write the MIDTERM check-in for the internal delivery team and leadership.

Rewrite the author's notes into an internal midterm update:
- First sentence: overall health in plain words (on track / at risk / off track) ONLY if the author stated or clearly implied it.
- Then: what has been delivered so far, what is in flight, and what is slipping.
- Be candid. Name scope creep, staffing gaps, or client-side delays if the author mentioned them.
- 3 to 6 sentences, one paragraph.

Keep every fact the author gave you. Do NOT invent dates, percentages, or names.
Return ONLY the rewritten text."#;

/// Client-facing midterm update.
pub const MIDTERM_CLIENT: &str = r#"You are helping a project manager write the MIDTERM progress update that will be sent to the CLIENT.

Rewrite the author's notes into a client-ready update:
- Lead with progress the client will care about, in outcome terms.
- Mention any change to timeline or scope factually, paired with the plan the author described.
- Remove internal detail: team names, internal tooling, blame.
- Tone: confident, transparent, collaborative.
- 3 to 5 sentences, one paragraph.

Keep every fact the author gave you. Do NOT invent dates, percentages, or names.
Return ONLY the rewritten text."#;

pub const MIDTERM_PROGRESS: &str = r#"You are helping a project manager summarise PROGRESS AGAINST GOALS at the project midpoint.

Rewrite the author's notes as a list:
- One line per goal, each starting with "- ".
- Format: <goal>: <status> (<evidence>), where status is one of "done", "on track", "at risk", "not started".
- Use the status the author implied. If it is unclear, write "status unclear" rather than guessing.
- Keep any numbers exactly as given.

Return ONLY the list."#;

pub const MIDTERM_BLOCKERS: &str = r#"You are helping a project manager record BLOCKERS and open issues at the project midpoint.

Rewrite the author's notes as a list of blockers:
- One blocker per line, each starting with "- ".
- Format: <blocker> (owner: <who can unblock it>; needed by: <date>).
- If the author did not name an owner or date, write "owner: TBD" or "needed by: TBD". Never invent them.
- Put blockers that stop delivery entirely first.

Return ONLY the list."#;

pub fn table() -> PromptTable {
    PromptTable::new([
        (Mode::MidtermInternal, MIDTERM_INTERNAL),
        (Mode::MidtermClient, MIDTERM_CLIENT),
        (Mode::MidtermProgress, MIDTERM_PROGRESS),
        (Mode::MidtermBlockers, MIDTERM_BLOCKERS),
    ])
}
