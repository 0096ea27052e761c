/// Inclusive bounds Google accepts for `maxResults`-style parameters.
const MAX_RESULTS_MIN: i64 = 1;
const MAX_RESULTS_MAX: i64 = 2500;

/// Clamp a `maxResults`-style value to the inclusive range [1, 2500].
pub fn clamp_max_results(n: i64) -> i64 {
    n.clamp(MAX_RESULTS_MIN, MAX_RESULTS_MAX)
}

/// Ordered query-parameter builder.
///
/// Absent optional values are never inserted, so "omitted" and "explicit
/// default" stay distinguishable on the wire. Boolean flags are serialized
/// as the lowercase strings `"true"` / `"false"` — the Calendar API does
/// not accept capitalized booleans in query strings.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.0.push((key, value.into()));
        self
    }

    /// Insert only when the value is present.
    pub fn set_opt(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.set(key, v);
        }
        self
    }

    pub fn set_flag(&mut self, key: &'static str, value: bool) -> &mut Self {
        self.set(key, if value { "true" } else { "false" })
    }

    pub fn set_opt_flag(&mut self, key: &'static str, value: Option<bool>) -> &mut Self {
        if let Some(v) = value {
            self.set_flag(key, v);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form-urlencode the collected pairs (no leading `?`).
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}
