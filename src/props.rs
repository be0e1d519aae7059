//! Property access - defensive reads over host-supplied JSON.
//!
//! The host engine stores block properties as a JSON object and passes it
//! to renderers verbatim. `Props` is the single read point: every getter
//! takes a fallback, so a missing or mistyped property degrades to the
//! block's documented default instead of failing mid-render.

use serde_json::Value;

/// A block instance's property set, as stored in the host page document.
pub type PropMap = serde_json::Map<String, Value>;

/// Read-only accessor over a property map.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    map: &'a PropMap,
}

impl<'a> Props<'a> {
    /// Wrap a property map.
    pub fn new(map: &'a PropMap) -> Self {
        Self { map }
    }

    /// String property. Numbers stringify (the host may store `1.6` for a
    /// line-height field); anything else yields the fallback.
    pub fn str(&self, key: &str, fallback: &str) -> String {
        match self.map.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Boolean property.
    pub fn bool(&self, key: &str, fallback: bool) -> bool {
        match self.map.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => fallback,
        }
    }

    /// Unsigned integer property. Accepts JSON numbers and numeric strings.
    pub fn u64(&self, key: &str, fallback: u64) -> u64 {
        match self.map.get(key) {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(fallback),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(fallback),
            _ => fallback,
        }
    }

    /// `usize` property, via [`Props::u64`].
    pub fn usize(&self, key: &str, fallback: usize) -> usize {
        self.u64(key, fallback as u64) as usize
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> PropMap {
        match value {
            Value::Object(map) => map,
            _ => PropMap::new(),
        }
    }

    #[test]
    fn test_str_present() {
        let props = map(json!({"color": "#333"}));
        assert_eq!(Props::new(&props).str("color", "#fff"), "#333");
    }

    #[test]
    fn test_str_number_stringifies() {
        let props = map(json!({"lineHeight": 1.6}));
        assert_eq!(Props::new(&props).str("lineHeight", "1"), "1.6");
    }

    #[test]
    fn test_str_missing_or_mistyped() {
        let props = map(json!({"flag": true}));
        let reader = Props::new(&props);
        assert_eq!(reader.str("missing", "#fff"), "#fff");
        assert_eq!(reader.str("flag", "#fff"), "#fff");
    }

    #[test]
    fn test_bool() {
        let props = map(json!({"autoplay": false, "label": "x"}));
        let reader = Props::new(&props);
        assert!(!reader.bool("autoplay", true));
        assert!(reader.bool("missing", true));
        assert!(!reader.bool("label", false));
    }

    #[test]
    fn test_u64_number_and_string() {
        let props = map(json!({"speed": 3000, "columns": "4", "bad": "x"}));
        let reader = Props::new(&props);
        assert_eq!(reader.u64("speed", 0), 3000);
        assert_eq!(reader.u64("columns", 2), 4);
        assert_eq!(reader.u64("bad", 7), 7);
        assert_eq!(reader.u64("missing", 9), 9);
    }

    #[test]
    fn test_usize_negative_falls_back() {
        let props = map(json!({"level": -2}));
        assert_eq!(Props::new(&props).usize("level", 1), 1);
    }
}
