// File: crates/gantt-core/src/params.rs
// Summary: Insertion-ordered parameter map for the chart service, plus query encoding.

use url::form_urlencoded;

/// Chart type: horizontal stacked bars.
pub const CHART_TYPE: &str = "cht";
/// Series colors.
pub const COLORS: &str = "chco";
pub const TITLE: &str = "chtt";
/// Size, `WxH`.
pub const SIZE: &str = "chs";
/// Data scale.
pub const DATA_SCALE: &str = "chds";
/// Bar thickness and spacing.
pub const BAR_SIZE: &str = "chbh";
pub const GRID: &str = "chg";
/// Visible axes.
pub const AXES: &str = "chxt";
pub const AXIS_LABELS: &str = "chxl";
pub const LEGEND: &str = "chdl";
/// Range markers.
pub const MARKERS: &str = "chm";
pub const DATA: &str = "chd";

/// Provider parameter name → value, in insertion order.
///
/// Re-inserting a key replaces its value in place, so encoded output keeps
/// the position at which the key first appeared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartParams {
    entries: Vec<(String, String)>,
}

impl ChartParams {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Apply caller-supplied overrides on top of the computed values.
    pub fn merge<K, V>(&mut self, overrides: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in overrides {
            self.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool { self.get(key).is_some() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// `application/x-www-form-urlencoded` body, keys in insertion order.
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.iter() {
            ser.append_pair(k, v);
        }
        ser.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ChartParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ChartParams::new();
        params.merge(iter);
        params
    }
}

impl IntoIterator for ChartParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

/// Render a float the way the chart service examples do: integral values keep
/// a trailing `.0` (`20.0`), others use the shortest round-trip form.
pub fn format_float(v: f64) -> String {
    format!("{v:?}")
}
