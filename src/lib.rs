pub mod error;
pub mod options;
pub mod parser;
pub mod route_types;

use wasm_bindgen::prelude::*;

use crate::error::RouteParseError;
use crate::options::ParseOptions;

/// Parse a generated route description into a route plan, returned as a JS object.
#[wasm_bindgen(js_name = parseRoutePlan)]
pub fn parse_route_plan(route_text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let plan = parser::parse_route(route_text, &opts);
    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| RouteParseError::Serialize(e.to_string()).into())
}

/// Parse a generated route description into a route plan, returned as a JSON string.
#[wasm_bindgen(js_name = parseRoutePlanString)]
pub fn parse_route_plan_string(route_text: &str, options: JsValue) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let plan = parser::parse_route(route_text, &opts);
    serde_json::to_string(&plan).map_err(|e| RouteParseError::Serialize(e.to_string()).into())
}

fn parse_options(options: JsValue) -> Result<ParseOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(ParseOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| RouteParseError::InvalidOptions(e.to_string()).into())
    }
}
