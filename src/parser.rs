use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::ParseOptions;
use crate::route_types::{RoutePlan, Waypoint};

/// Delimiter the generator emits between the prose overview and the
/// numbered waypoint list.
pub const SECTION_MARKER: &str = "📍 ДЕТАЛЬНЫЙ МАРШРУТ:";

/// Waypoint blocks are separated by a blank line followed by "N.".
static BLOCK_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n\d+\.").unwrap());

/// What a recognized marker line does to the waypoint under construction.
#[derive(Debug, Clone, Copy)]
enum LineAction {
    SetDuration,
    SetDescription,
    EnterActivities,
    EnterTips,
    AppendFood,
    ReplacePhotos,
    SetTransition,
}

/// Marker table, checked top-to-bottom against each line.
const LINE_MARKERS: [(&str, LineAction); 7] = [
    ("⏱️ Время:", LineAction::SetDuration),
    ("📝 Описание:", LineAction::SetDescription),
    ("🎯 Активности:", LineAction::EnterActivities),
    ("💡 Советы:", LineAction::EnterTips),
    ("🍽️ Где поесть:", LineAction::AppendFood),
    ("📸 Фото:", LineAction::ReplacePhotos),
    ("🚶 Переход:", LineAction::SetTransition),
];

/// Which sub-list the bullet lines currently feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Activities,
    Tips,
}

/// Parse a generated route description into a RoutePlan.
///
/// Total over all inputs: malformed text degrades to fewer (or zero)
/// waypoints, never an error. An input without the section marker yields an
/// empty plan; callers fall back to showing the raw text.
pub fn parse_route(text: &str, opts: &ParseOptions) -> RoutePlan {
    let marker = opts.section_marker.as_deref().unwrap_or(SECTION_MARKER);
    let mut plan = RoutePlan::default();

    let Some((before, after)) = text.split_once(marker) else {
        return plan;
    };

    if opts.include_overview {
        let overview = before.trim();
        if !overview.is_empty() {
            plan.overview = Some(overview.to_string());
        }
    }

    let after = after.replace("\r\n", "\n");
    let mut chunks = BLOCK_SPLIT.split(&after);
    chunks.next(); // text between the marker and the first numbered block

    for chunk in chunks {
        if let Some(wpt) = parse_waypoint(chunk) {
            plan.waypoints.push(wpt);
        }
    }

    plan
}

/// Parse one numbered block. The chunk starts right after the "N." prefix,
/// so its first line carries the waypoint name; a blank name drops the whole
/// block regardless of what follows.
fn parse_waypoint(chunk: &str) -> Option<Waypoint> {
    let mut lines = chunk.lines().map(str::trim);

    let name = lines.next().unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let mut wpt = Waypoint::new(name);
    let mut section = Section::None;

    for line in lines {
        if let Some((action, value)) = classify(line) {
            match action {
                LineAction::SetDuration => wpt.duration = Some(value.to_string()),
                LineAction::SetDescription => wpt.description = Some(value.to_string()),
                LineAction::EnterActivities => section = Section::Activities,
                LineAction::EnterTips => section = Section::Tips,
                LineAction::AppendFood => {
                    if !value.is_empty() {
                        wpt.food.push(value.to_string());
                    }
                }
                LineAction::ReplacePhotos => {
                    // Replaces rather than appends; the food/photos asymmetry
                    // is observed generator-consumer behavior, kept as is.
                    if !value.is_empty() {
                        wpt.photos = vec![value.to_string()];
                    }
                }
                LineAction::SetTransition => wpt.transition = Some(value.to_string()),
            }
        } else if let Some(item) = bullet_content(line) {
            match section {
                Section::Activities => wpt.activities.push(item.to_string()),
                Section::Tips => wpt.tips.push(item.to_string()),
                Section::None => {} // bullet before any heading, dropped
            }
        }
        // anything else is ignored
    }

    Some(wpt)
}

/// Match a line against the marker table; returns the action plus the
/// trimmed text after the marker.
fn classify(line: &str) -> Option<(LineAction, &str)> {
    LINE_MARKERS
        .iter()
        .find_map(|(marker, action)| line.strip_prefix(marker).map(|rest| (*action, rest.trim())))
}

fn bullet_content(line: &str) -> Option<&str> {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(str::trim)
}
