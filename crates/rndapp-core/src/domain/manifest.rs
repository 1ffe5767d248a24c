//! JSON manifest patching.
//!
//! Manifests (`package.json`, `app.json`) are patched by deep-merging a fixed
//! overlay into whatever the scaffold tool produced.
//!
//! # Merge rule
//!
//! - object + object: merge key by key, recursively
//! - anything else: the overlay value replaces the base value
//!
//! Keys that exist only in the base are kept verbatim, keys that exist in the
//! overlay always win. Because the overlay is fixed, merging it twice gives
//! the same document as merging it once.

use serde_json::{Map, Value, json};

use crate::domain::{entities::CreateContext, error::DomainError, value_objects::BlockchainTools};

/// Merge `overlay` into `base` in place; overlay wins.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Parse `source`, merge `overlay`, and pretty-print with two-space indent.
///
/// The root of `source` must be an object; anything else means the scaffold
/// tool produced something we do not understand.
pub fn patch_manifest(source: &str, overlay: &Value) -> Result<String, PatchError> {
    let mut doc: Value = serde_json::from_str(source)?;
    if !doc.is_object() {
        return Err(DomainError::ManifestNotAnObject {
            found: kind_of(&doc),
        }
        .into());
    }
    deep_merge(&mut doc, overlay);
    Ok(pretty(&doc)?)
}

/// Two-space pretty JSON, as every generated JSON file uses.
pub fn pretty(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Why a manifest could not be patched.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Overlays ──────────────────────────────────────────────────────────────────

const DEPENDENCIES: [(&str, &str); 9] = [
    ("base-64", "1.0.0"),
    ("buffer", "6.0.3"),
    ("web3", "1.3.1"),
    ("node-libs-browser", "2.2.1"),
    ("path-browserify", "0.0.0"),
    ("react-native-stream", "0.1.9"),
    ("react-native-crypto", "2.2.0"),
    ("react-native-get-random-values", "1.5.0"),
    ("react-native-dotenv", "2.4.3"),
];

/// Node built-ins redirected to their React Native counterparts.
const NODE_ALIASES: [(&str, &str); 4] = [
    ("stream", "react-native-stream"),
    ("crypto", "react-native-crypto"),
    ("path", "path-browserify"),
    ("process", "node-libs-browser/mock/process"),
];

fn string_map<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

/// The fixed `package.json` overlay for the selected tooling.
pub fn package_overlay(tools: BlockchainTools) -> Value {
    let mut scripts = vec![("postinstall", "node scripts/postinstall")];
    let mut dev_dependencies = vec![("dotenv", "8.2.0")];

    match tools {
        BlockchainTools::Truffle => {
            scripts.push(("ganache", "node scripts/ganache"));
            dev_dependencies.push(("ganache-cli", "6.12.1"));
        }
        BlockchainTools::Hardhat => {
            scripts.push(("hardhat", "node scripts/hardhat"));
            dev_dependencies.push(("hardhat", "2.0.8"));
        }
        BlockchainTools::None => {}
    }

    json!({
        "scripts": string_map(scripts),
        "dependencies": string_map(DEPENDENCIES),
        "devDependencies": string_map(dev_dependencies),
        "react-native": string_map(NODE_ALIASES)
    })
}

/// The `app.json` overlay pinning the native identifiers, so `expo eject`
/// has nothing left to ask.
pub fn app_manifest_overlay(ctx: &CreateContext) -> Value {
    let params = &ctx.options().params;
    json!({
        "expo": {
            "ios": { "bundleIdentifier": params.bundle_identifier() },
            "android": { "package": params.package_name() }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_wins_and_base_survives() {
        let mut base = json!({"a": 1, "nested": {"keep": true, "replace": "old"}});
        deep_merge(&mut base, &json!({"nested": {"replace": "new", "add": 2}}));
        assert_eq!(
            base,
            json!({"a": 1, "nested": {"keep": true, "replace": "new", "add": 2}})
        );
    }

    #[test]
    fn non_object_overlay_replaces_object() {
        let mut base = json!({"scripts": {"start": "expo start"}});
        deep_merge(&mut base, &json!({"scripts": "nope"}));
        assert_eq!(base, json!({"scripts": "nope"}));
    }

    #[test]
    fn arrays_are_replaced_not_concatenated() {
        let mut base = json!({"files": ["a", "b"]});
        deep_merge(&mut base, &json!({"files": ["c"]}));
        assert_eq!(base, json!({"files": ["c"]}));
    }

    #[test]
    fn existing_dependency_is_preserved() {
        let patched = patch_manifest(
            r#"{"dependencies":{"x":"1.0.0"}}"#,
            &package_overlay(BlockchainTools::Truffle),
        )
        .unwrap();
        let doc: Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(doc["dependencies"]["x"], "1.0.0");
        assert_eq!(doc["dependencies"]["web3"], "1.3.1");
        assert_eq!(doc["react-native"]["crypto"], "react-native-crypto");
    }

    #[test]
    fn patching_twice_is_idempotent() {
        let source = r#"{"name":"demo","scripts":{"start":"expo start","ganache":"old"}}"#;
        let overlay = package_overlay(BlockchainTools::Truffle);
        let once = patch_manifest(source, &overlay).unwrap();
        let twice = patch_manifest(&once, &overlay).unwrap();
        assert_eq!(once, twice);

        let doc: Value = serde_json::from_str(&twice).unwrap();
        assert_eq!(doc["name"], "demo");
        assert_eq!(doc["scripts"]["start"], "expo start");
        assert_eq!(doc["scripts"]["ganache"], "node scripts/ganache");
    }

    #[test]
    fn overlay_depends_on_tooling() {
        let hardhat = package_overlay(BlockchainTools::Hardhat);
        assert_eq!(hardhat["devDependencies"]["hardhat"], "2.0.8");
        assert!(hardhat["devDependencies"].get("ganache-cli").is_none());

        let none = package_overlay(BlockchainTools::None);
        assert!(none["scripts"].get("ganache").is_none());
        assert_eq!(none["scripts"]["postinstall"], "node scripts/postinstall");
    }

    #[test]
    fn rejects_non_object_manifest() {
        let err = patch_manifest("[1, 2]", &json!({})).unwrap_err();
        assert!(matches!(
            err,
            PatchError::Domain(DomainError::ManifestNotAnObject { found: "an array" })
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            patch_manifest("{not json", &json!({})),
            Err(PatchError::Parse(_))
        ));
    }

    #[test]
    fn patch_errors_describe_the_problem() {
        let parse = patch_manifest("{not json", &json!({})).unwrap_err();
        assert!(parse.to_string().starts_with("manifest is not valid JSON"));

        let domain = patch_manifest("\"text\"", &json!({})).unwrap_err();
        assert_eq!(
            domain.to_string(),
            DomainError::ManifestNotAnObject { found: "a string" }.to_string()
        );
    }
}
