use serde::Serialize;

/// A parsed route: the prose overview plus the ordered waypoint list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    pub waypoints: Vec<Waypoint>,
}

/// A single stop along a generated route.
///
/// Every field is a trimmed substring of the source text; nothing is
/// validated or parsed further (`duration` stays free text).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub activities: Vec<String>,
    pub tips: Vec<String>,
    pub food: Vec<String>,
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl Waypoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
