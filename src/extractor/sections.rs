use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{Robbery, NOT_FOUND, SEE_FULL_POST};
use crate::extractor::clean::{clean_text, clean_value};
use crate::extractor::lines::{lines, Line, LineKind};

static MULTIPLIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:\.\d+)?X\s+\S").expect("hardcoded regex pattern is valid")
});

static DISCOUNT_TIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:off|free)\b").expect("hardcoded regex pattern is valid"));

/// Lines strictly between the first line accepted by `opens` and the next
/// line accepted by `closes`.
fn section<'a>(
    body: &'a str,
    opens: impl Fn(&Line<'a>) -> bool,
    closes: impl Fn(&Line<'a>, &Line<'a>) -> bool,
) -> Vec<Line<'a>> {
    let mut opener: Option<Line<'a>> = None;
    let mut out = Vec::new();

    for line in lines(body) {
        match opener {
            None => {
                if opens(&line) {
                    opener = Some(line);
                }
            }
            Some(ref start) => {
                if closes(start, &line) {
                    break;
                }
                out.push(line);
            }
        }
    }

    out
}

/// Close on the next heading of equal or higher rank than the opener.
fn closes_by_rank(opener: &Line<'_>, line: &Line<'_>) -> bool {
    match (opener.rank(), line.rank()) {
        (Some(open), Some(current)) => current <= open,
        (None, Some(_)) => true,
        _ => false,
    }
}

fn heading_starts_with(line: &Line<'_>, prefix: &str) -> bool {
    match line.kind {
        LineKind::Heading { text, .. } => clean_text(text)
            .to_lowercase()
            .starts_with(&prefix.to_lowercase()),
        _ => false,
    }
}

/// Category text of a sub-heading inside a section, if the line is one.
fn sub_heading<'a>(line: &Line<'a>) -> Option<&'a str> {
    match line.kind {
        LineKind::Bold(text) | LineKind::Heading { text, .. } => Some(text),
        _ => None,
    }
}

/// Bullets tagged with the most recent sub-heading, if `is_category` accepts it.
/// Bullets before any category, or under a rejected sub-heading, are dropped.
fn tagged_items<'a>(
    section: &[Line<'a>],
    is_category: impl Fn(&str) -> bool,
    tag: impl Fn(&str, &str) -> String,
) -> Vec<String> {
    let mut current: Option<String> = None;
    let mut out = Vec::new();

    for line in section {
        if let Some(text) = sub_heading(line) {
            let category = clean_text(text);
            current = is_category(&category).then_some(category);
            continue;
        }

        if let LineKind::Bullet(text) = line.kind {
            let Some(ref category) = current else {
                debug!("Dropping uncategorised bullet: {}", text);
                continue;
            };
            let item = clean_text(text);
            if !item.is_empty() {
                out.push(tag(category, &item));
            }
        }
    }

    out
}

fn or_placeholder(items: Vec<String>) -> Vec<String> {
    if items.is_empty() {
        vec![SEE_FULL_POST.to_string()]
    } else {
        items
    }
}

/// `***...***` lines before the first `#` heading.
pub fn intro_messages(body: &str) -> Vec<String> {
    let mut out = Vec::new();

    for line in lines(body) {
        if line.is_heading() {
            break;
        }
        let raw = line.raw;
        if raw.len() >= 6 && raw.starts_with("***") && raw.ends_with("***") {
            let message = clean_text(raw);
            if !message.is_empty() {
                out.push(message);
            }
        }
    }

    out
}

/// `"<multiplier> - <item>"` for every bullet under `# Bonuses`.
pub fn bonuses(body: &str) -> Vec<String> {
    let lines = section(body, |l| heading_starts_with(l, "Bonuses"), closes_by_rank);
    let items = tagged_items(
        &lines,
        |category| MULTIPLIER.is_match(category),
        |multiplier, item| format!("{} - {}", multiplier, item),
    );
    or_placeholder(items)
}

/// `"<tier>: <item>"` for every bullet under `# Discounts`.
pub fn discounts(body: &str) -> Vec<String> {
    let lines = section(body, |l| heading_starts_with(l, "Discounts"), closes_by_rank);
    let items = tagged_items(
        &lines,
        |category| DISCOUNT_TIER.is_match(category),
        |tier, item| format!("{}: {}", tier, item),
    );
    or_placeholder(items)
}

/// `{type, vehicle}` pairs listed under "Salvage Yard Robberies".
pub fn salvage_yard_robberies(body: &str) -> Vec<Robbery> {
    let lines = section(
        body,
        |l| l.raw.contains("Salvage Yard Robberies"),
        |_, l| l.is_heading() || (l.raw.starts_with("**") && !l.raw.contains("Robbery")),
    );

    lines
        .iter()
        .filter_map(|line| match line.kind {
            LineKind::Bullet(text) if text.contains("Robbery:") => Some(text),
            _ => None,
        })
        .filter_map(|text| {
            let cleaned = clean_text(text);
            let (kind, vehicle) = cleaned.split_once(':')?;
            let vehicle = clean_value(vehicle);
            if vehicle.is_empty() {
                return None;
            }
            Some(Robbery::new(kind.trim(), vehicle))
        })
        .collect()
}

/// First bullet under "This Week's Challenge".
pub fn weekly_challenge(body: &str) -> String {
    let lines = section(
        body,
        |l| l.raw.replace('\u{2019}', "'").contains("This Week's Challenge"),
        |_, l| l.is_heading() || l.raw.starts_with("**"),
    );

    lines
        .iter()
        .find_map(|line| match line.kind {
            LineKind::Bullet(text) => Some(clean_text(text)),
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonuses_prefixed_by_multiplier() {
        let body = "\
# Bonuses

**4X GTA$ and RP**

* Stunt Races
* [Hao's Special Works](https://example.com) Races
* Pursuit Series

# Discounts
";
        let bonuses = bonuses(body);
        assert_eq!(
            bonuses,
            vec![
                "4X GTA$ and RP - Stunt Races",
                "4X GTA$ and RP - Hao's Special Works Races",
                "4X GTA$ and RP - Pursuit Series",
            ]
        );
    }

    #[test]
    fn test_bonuses_multiple_multipliers() {
        let body = "\
# Bonuses
**3X GTA$ and RP**
* Survival Series
**2X GTA$**
* Payphone Hits
* Security Contracts
";
        let bonuses = bonuses(body);
        assert_eq!(bonuses.len(), 3);
        assert_eq!(bonuses[0], "3X GTA$ and RP - Survival Series");
        assert_eq!(bonuses[2], "2X GTA$ - Security Contracts");
    }

    #[test]
    fn test_bonus_bullet_before_multiplier_is_dropped() {
        let body = "# Bonuses\n* orphan\n**2X RP**\n* Races";
        assert_eq!(bonuses(body), vec!["2X RP - Races"]);
    }

    #[test]
    fn test_bonuses_sub_heading_category() {
        let body = "# Bonuses\n## 2X GTA$ and RP\n* Races\n# Discounts\n**40% Off**\n* Ocelot Pariah";
        assert_eq!(bonuses(body), vec!["2X GTA$ and RP - Races"]);
    }

    #[test]
    fn test_bonuses_placeholder() {
        assert_eq!(bonuses("# Discounts\n**30% Off**\n* x"), vec![SEE_FULL_POST]);
    }

    #[test]
    fn test_discounts() {
        let body = "\
# Discounts

**40% Off**

* Ocelot Pariah
* Cheval Taipan

**Free**

* Vapid Dominator FX Livery

**30% Off**

* Properties: Nightclubs

# Gun Van
* Railgun
";
        assert_eq!(
            discounts(body),
            vec![
                "40% Off: Ocelot Pariah",
                "40% Off: Cheval Taipan",
                "Free: Vapid Dominator FX Livery",
                "30% Off: Properties: Nightclubs",
            ]
        );
    }

    #[test]
    fn test_discounts_missing_heading_placeholder() {
        let body = "# Bonuses\n**2X GTA$**\n* Races";
        assert_eq!(discounts(body), vec![SEE_FULL_POST.to_string()]);
    }

    #[test]
    fn test_discount_category_ignores_offices() {
        let body = "# Discounts\n**Offices**\n* CEO Office\n**50% Off**\n* Rhino Tank";
        assert_eq!(discounts(body), vec!["50% Off: Rhino Tank"]);
    }

    #[test]
    fn test_non_tier_sub_heading_ends_previous_tier() {
        let body = "# Discounts\n**50% Off**\n* Rhino Tank\n**Offices**\n* CEO Office\n**Free**\n* Pegassi Toros";
        assert_eq!(
            discounts(body),
            vec!["50% Off: Rhino Tank", "Free: Pegassi Toros"]
        );
    }

    #[test]
    fn test_intro_messages_stop_at_heading() {
        let body = "\
***Welcome to this week's update!***
Some regular text
***Twice the rewards in Stunt Races***
# Bonuses
***Not an intro***
";
        assert_eq!(
            intro_messages(body),
            vec![
                "Welcome to this week's update!",
                "Twice the rewards in Stunt Races",
            ]
        );
    }

    #[test]
    fn test_salvage_yard_robberies() {
        let body = "\
**This Week's Salvage Yard Robberies**

* **The Cargo Ship Robbery:** [Pegassi Toros](https://example.com/toros)
* **The Gangbanger Robbery:** Declasse Vigero ZX (Salvage Value: $500,000)
* **The Podium Robbery:** Rhino Tank

**Podium Vehicle:** Cheval Taipan
";
        let robberies = salvage_yard_robberies(body);
        assert_eq!(
            robberies,
            vec![
                Robbery::new("The Cargo Ship Robbery", "Pegassi Toros"),
                Robbery::new("The Gangbanger Robbery", "Declasse Vigero ZX"),
                Robbery::new("The Podium Robbery", "Rhino Tank"),
            ]
        );
    }

    #[test]
    fn test_robberies_missing_section() {
        assert!(salvage_yard_robberies("# Bonuses\n* The Cargo Ship Robbery: Toros").is_empty());
    }

    #[test]
    fn test_weekly_challenge() {
        let body = "\
**This Week\u{2019}s Challenge**

* Complete [3 Auto Shop](https://example.com) Contracts to earn GTA$100,000

**Podium Vehicle:** Cheval Taipan
";
        assert_eq!(
            weekly_challenge(body),
            "Complete 3 Auto Shop Contracts to earn GTA$100,000"
        );
    }

    #[test]
    fn test_weekly_challenge_missing() {
        let body = "**This Week's Challenge**\n**Podium Vehicle:** x\n* not this";
        assert_eq!(weekly_challenge(body), NOT_FOUND);
    }
}
