//! `key=value&...` parameter strings: parsing, generation, and mapping onto
//! the view config.

use std::collections::BTreeMap;

use isopix_scene::{ShadowMode, ViewConfig};

/// Parsed query parameters. Repeated keys keep every value in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    map: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// Accepts an optional leading `?`. Pairs without `=` get an empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            map.entry(decode_component(k))
                .or_default()
                .push(decode_component(v));
        }
        Self { map }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Decodes `+` as space and `%XX` escapes. Malformed escapes pass through.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_val);
                let lo = bytes.get(i + 2).copied().and_then(hex_val);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push(h << 4 | l);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// `base?k1=v1&k2=v2`, keys in the given order.
pub fn generate_url(base: &str, params: &[(&str, String)]) -> String {
    let values: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{}?{}", base, values.join("&"))
}

/// Applies recognized keys onto `view`. Unknown keys are ignored; values that
/// fail to parse are reported and skipped.
pub fn apply_view_overrides(params: &QueryParams, view: &mut ViewConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let mut float = |key: &str, slot: &mut f32| {
        if let Some(v) = params.get(key) {
            match v.trim().parse::<f32>() {
                Ok(f) => *slot = f,
                Err(_) => errors.push(format!("{}: not a number: {}", key, v)),
            }
        }
    };
    float("rotation", &mut view.rotation);
    float("crush", &mut view.crush);
    float("crushZ", &mut view.crush_z);
    float("cubeSize", &mut view.cube_size);
    float("maxBounds", &mut view.max_bounds);
    float("originX", &mut view.origin.x);
    float("originY", &mut view.origin.y);
    if let Some(v) = params.get("shadow") {
        match ShadowMode::parse(v) {
            Some(m) => view.shadow_mode = m,
            None => errors.push(format!("shadow: unknown mode: {}", v)),
        }
    }
    if let Some(v) = params.get("debug") {
        view.debug = matches!(v, "1" | "true" | "yes" | "");
    }
    errors
}

/// The parameters [`apply_view_overrides`] understands, for the current view.
pub fn view_params(view: &ViewConfig) -> Vec<(&'static str, String)> {
    vec![
        ("rotation", format!("{:.4}", view.rotation)),
        ("crush", view.crush.to_string()),
        ("crushZ", view.crush_z.to_string()),
        ("cubeSize", view.cube_size.to_string()),
        ("shadow", view.shadow_mode.as_str().to_string()),
        ("debug", if view.debug { "1" } else { "0" }.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collect_values() {
        let q = QueryParams::parse("?a=1&b=2&a=3&a=4");
        assert_eq!(q.get("a"), Some("1"));
        assert_eq!(q.get_all("a"), &["1", "3", "4"]);
        assert_eq!(q.get("b"), Some("2"));
        assert_eq!(q.get("c"), None);
        assert!(q.get_all("c").is_empty());
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn empty_and_valueless_pairs() {
        assert!(QueryParams::parse("").is_empty());
        let q = QueryParams::parse("flag&&x=");
        assert_eq!(q.get("flag"), Some(""));
        assert_eq!(q.get("x"), Some(""));
    }

    #[test]
    fn decodes_percent_and_plus() {
        assert_eq!(decode_component("a+b%20c"), "a b c");
        assert_eq!(decode_component("%23ff0000"), "#ff0000");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%E2%82%AC"), "\u{20ac}");
    }

    #[test]
    fn generates_url() {
        let url = generate_url(
            "http://host/view",
            &[("rotation", "0.5".into()), ("shadow", "none".into())],
        );
        assert_eq!(url, "http://host/view?rotation=0.5&shadow=none");
    }

    #[test]
    fn overrides_apply_to_view() {
        let mut view = ViewConfig::default();
        let q = QueryParams::parse("rotation=1.5&crushZ=0.6&shadow=diagonal_45&debug=1&cubeSize=oops");
        let errors = apply_view_overrides(&q, &mut view);
        assert_eq!(view.rotation, 1.5);
        assert_eq!(view.crush_z, 0.6);
        assert_eq!(view.shadow_mode, ShadowMode::Diagonal45);
        assert!(view.debug);
        assert_eq!(view.cube_size, 25.0);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn view_params_round_trip_through_overrides() {
        let mut view = ViewConfig::default();
        view.crush = 0.3;
        view.shadow_mode = ShadowMode::TopOnly;
        let url = generate_url("isopix", &view_params(&view));
        let (_, query) = url.split_once('?').unwrap();
        let mut back = ViewConfig::default();
        assert!(apply_view_overrides(&QueryParams::parse(query), &mut back).is_empty());
        assert_eq!(back.crush, 0.3);
        assert_eq!(back.shadow_mode, ShadowMode::TopOnly);
        assert!(!back.debug);
    }
}
