use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

// Allows one level of nested parentheses in the target, as in wiki links
// like `[Taipan](https://gta.fandom.com/wiki/Taipan_(vehicle))`.
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((?:[^()\s]|\([^()\s]*\))*\)")
        .expect("hardcoded regex pattern is valid")
});

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("hardcoded regex pattern is valid"));

static RAW_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("hardcoded regex pattern is valid"));

/// `[text](url)` -> `text`
pub fn strip_links(text: &str) -> String {
    LINK.replace_all(text, "$1").into_owned()
}

/// Drop bold/italic asterisks.
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

/// Decode the HTML entities Reddit leaves in `selftext` and fold the
/// invisible characters the post editors insert.
pub fn decode_entities(text: &str) -> String {
    decode_html_entities(text)
        .chars()
        .filter(|c| !matches!(c, '\u{200B}' | '\u{FEFF}'))
        .map(|c| if c == '\u{00A0}' { ' ' } else { c })
        .collect()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Markdown-free, single-spaced text.
pub fn clean_text(text: &str) -> String {
    let text = decode_entities(text);
    let text = strip_links(&text);
    let text = strip_emphasis(&text);
    collapse_whitespace(&text)
}

/// Like [`clean_text`], and also drops parenthetical asides and bare URLs.
/// Used for single values such as vehicle names.
pub fn clean_value(text: &str) -> String {
    let text = decode_entities(text);
    let text = strip_links(&text);
    let text = strip_emphasis(&text);
    let text = PARENTHETICAL.replace_all(&text, "");
    let text = RAW_URL.replace_all(&text, "");
    collapse_whitespace(&text)
}

/// Week label from a title like `"Weekly Bonuses and Discounts - March 6th"`.
pub fn clean_title(title: &str) -> String {
    let label = match title.rsplit_once(" - ") {
        Some((_, tail)) => tail,
        None => title,
    };
    let label = collapse_whitespace(&decode_entities(label));
    if label.is_empty() {
        "Unknown Date".to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_links() {
        assert_eq!(
            strip_links("Drive the [Cheval Taipan](https://gta.fandom.com/wiki/Taipan) now"),
            "Drive the Cheval Taipan now"
        );
    }

    #[test]
    fn test_strip_links_nested_parens() {
        assert_eq!(
            strip_links("[Taipan](https://gta.fandom.com/wiki/Taipan_(vehicle)) (note)"),
            "Taipan (note)"
        );
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("***Double   rewards on   [Stunt Races](https://x.y/z)***"),
            "Double rewards on Stunt Races"
        );
    }

    #[test]
    fn test_clean_text_entities() {
        assert_eq!(clean_text("GTA$ &amp; RP&#x200B;"), "GTA$ & RP");
        assert_eq!(clean_text("Ocelot\u{00A0}Pariah"), "Ocelot Pariah");
    }

    #[test]
    fn test_clean_value_strips_asides_and_urls() {
        assert_eq!(
            clean_value("** [Taipan](url) (some note)"),
            "Taipan"
        );
        assert_eq!(
            clean_value(" Pegassi Toros https://gtacars.net/gta5/toros"),
            "Pegassi Toros"
        );
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(
            clean_title("Weekly Bonuses and Discounts - March 6th to March 13th"),
            "March 6th to March 13th"
        );
        assert_eq!(
            clean_title("GTA Online - Weekly Bonuses and Discounts - Jan 2"),
            "Jan 2"
        );
        assert_eq!(clean_title("No separator here"), "No separator here");
        assert_eq!(clean_title("   "), "Unknown Date");
    }
}
