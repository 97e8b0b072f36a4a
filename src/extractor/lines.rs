/// Markdown shape of a single (trimmed) body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `#`-prefixed heading; `level` is the number of leading `#`.
    Heading { level: u8, text: &'a str },
    /// A line wrapped entirely in `**`.
    Bold(&'a str),
    /// A list item; the text after the marker.
    Bullet(&'a str),
    Text(&'a str),
}

/// Rank assigned to bold lines: below every `#` heading level.
const BOLD_RANK: u8 = 7;

#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// The line with surrounding whitespace removed.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

impl<'a> Line<'a> {
    pub fn parse(line: &'a str) -> Self {
        let raw = line.trim();
        Self {
            raw,
            kind: classify(raw),
        }
    }

    /// Heading rank; lower is more significant. `None` for non-headings.
    pub fn rank(&self) -> Option<u8> {
        match self.kind {
            LineKind::Heading { level, .. } => Some(level),
            LineKind::Bold(_) => Some(BOLD_RANK),
            _ => None,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, LineKind::Heading { .. })
    }
}

pub fn lines(body: &str) -> impl Iterator<Item = Line<'_>> {
    body.lines().map(Line::parse)
}

fn classify(raw: &str) -> LineKind<'_> {
    if raw.is_empty() {
        return LineKind::Blank;
    }

    if raw.starts_with('#') {
        let level = raw.chars().take_while(|c| *c == '#').count();
        let text = raw.trim_start_matches('#').trim();
        return LineKind::Heading {
            level: level.min(6) as u8,
            text,
        };
    }

    if raw.len() >= 4 && raw.starts_with("**") && raw.ends_with("**") {
        return LineKind::Bold(raw);
    }

    if let Some(rest) = raw
        .strip_prefix("- ")
        .or_else(|| raw.strip_prefix("+ "))
    {
        return LineKind::Bullet(rest.trim());
    }

    // `*item` and `* item` are bullets; `**lead** text` is emphasis
    if let Some(rest) = raw.strip_prefix('*') {
        if !rest.starts_with('*') {
            return LineKind::Bullet(rest.trim());
        }
    }

    LineKind::Text(raw)
}
