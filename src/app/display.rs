use crate::domain::model::Candidate;

pub const RULE_WIDTH: usize = 80;

pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

pub fn header_row() -> String {
    format!(
        "{:<20}{:<8}{:<8}{:<8}  {}",
        "Name", "CGPA", "Exp", "Skills", "Skill List"
    )
}

pub fn candidate_row(candidate: &Candidate) -> String {
    let mut row = format!(
        "{:<20}{:<8.2}{:<8}{:<8}  {}",
        candidate.name,
        candidate.cgpa,
        format!("{}yr", candidate.experience),
        candidate.skill_count(),
        candidate.skills.join(", ")
    );
    if let Some(language) = &candidate.primary_language {
        row.push_str(&format!(" [{}]", language));
    }
    row
}

/// Titled table with one row per candidate.
pub fn table<'a>(title: &str, candidates: impl IntoIterator<Item = &'a Candidate>) -> String {
    let mut lines = vec![rule('='), format!("{:^width$}", title, width = RULE_WIDTH)];
    lines.push(rule('='));
    lines.push(header_row());
    lines.push(rule('-'));
    lines.extend(candidates.into_iter().map(candidate_row));
    lines.push(rule('='));
    lines.join("\n")
}
