//! List-text parsing - one multi-line property, many discrete items.
//!
//! Several block types store their repeated content as a single multi-line
//! text property so the host's plain textarea widget can edit it. Two
//! shapes exist:
//!
//! - line-delimited (`lines`): one item per line - sponsor grids, date
//!   lists, plain lists, carousel slides;
//! - paragraph-delimited (`paragraphs`): blank-line separated groups where
//!   the first line titles the group - the program list.
//!
//! Both are pure, never fail, and yield nothing for empty input.

// =============================================================================
// Line-delimited
// =============================================================================

/// Split into trimmed, non-empty lines.
///
/// Whitespace-only lines are dropped. The output re-joined with `'\n'`
/// parses to the same sequence (idempotence).
pub fn lines(input: &str) -> Vec<String> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Paragraph-delimited
// =============================================================================

/// A titled paragraph group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// First line of the group.
    pub title: String,
    /// Remaining lines joined with `'\n'`; empty when the group is a single line.
    pub description: String,
}

/// Split on blank-line boundaries into titled groups.
///
/// Groups whose content is only whitespace are dropped. Within a group the
/// first line is the title and the rest is the description body.
pub fn paragraphs(input: &str) -> Vec<Paragraph> {
    input
        .split("\n\n")
        .filter(|group| !group.trim().is_empty())
        .map(|group| {
            let mut lines = group.split('\n');
            let title = lines.next().unwrap_or("").to_string();
            let description = lines.collect::<Vec<_>>().join("\n");
            Paragraph { title, description }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
