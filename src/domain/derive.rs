use once_cell::sync::Lazy;
use regex::Regex;

static GOALS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+):(\d+)").unwrap());

pub fn total_red_cards(two_yellow: i64, direct_red: i64) -> i64 {
    two_yellow.max(0) + direct_red.max(0)
}

/// Goals for and against from a combined `"X:Y"` cell; `(0, 0)` when absent.
pub fn parse_goals(text: &str) -> (i64, i64) {
    GOALS_REGEX
        .captures(text)
        .map(|caps| {
            let goals_for = caps[1].parse().unwrap_or(0);
            let goals_against = caps[2].parse().unwrap_or(0);
            (goals_for, goals_against)
        })
        .unwrap_or((0, 0))
}

/// Qualification or relegation consequence of a final league position.
pub fn qualification_tier(position: i64) -> &'static str {
    match position {
        1..=3 => "UEFA Champions League",
        4 => "Barrages Champions League",
        5 => "UEFA Europa League",
        6 => "Barrages Conference League",
        16 => "Barrages Ligue 2",
        17 | 18 => "Ligue 2",
        _ => "",
    }
}
