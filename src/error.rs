use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum RouteParseError {
    InvalidOptions(String),
    Serialize(String),
}

impl std::fmt::Display for RouteParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOptions(e) => write!(f, "Invalid options object: {e}"),
            Self::Serialize(e) => write!(f, "Failed to serialize route plan: {e}"),
        }
    }
}

impl std::error::Error for RouteParseError {}

impl From<RouteParseError> for JsValue {
    fn from(e: RouteParseError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
