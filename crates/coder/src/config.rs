// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use rdfvocab_iri::Namespace;
use serde::{Deserialize, Serialize};

use crate::CoderError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoderConfig {
    /**
     * Namespaces handled by the fixed-namespace coder.
     * The position within the list is stored in every encoded IRI,
     * so entries may only ever be appended.
     */
    pub fixed_namespaces: Vec<Namespace>,
    /**
     * Whether to write the known-vocabulary dictionary back to its store
     * when terms got added during initialization.
     * Stores shared between concurrently starting instances
     * may end up inconsistent with this enabled.
     */
    pub save_on_changes: bool,
}

impl CoderConfig {
    /// Parses a configuration from JSON;
    /// missing fields take their default values.
    ///
    /// # Errors
    ///
    /// If the input is not valid JSON or does not match the structure.
    pub fn from_json(json: &str) -> Result<Self, CoderError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_fields() {
        assert_eq!(CoderConfig::from_json("{}").unwrap(), CoderConfig::default());
    }

    #[test]
    fn parses_namespaces() {
        let config = CoderConfig::from_json(
            r#"{
                "fixed_namespaces": [
                    { "prefix": "ex", "iri": "http://example.com/resource/" }
                ],
                "save_on_changes": true
            }"#,
        )
        .unwrap();
        assert!(config.save_on_changes);
        assert_eq!(config.fixed_namespaces.len(), 1);
        assert_eq!(
            config.fixed_namespaces[0].as_str(),
            "http://example.com/resource/"
        );
    }

    #[test]
    fn rejects_invalid_namespace_iri() {
        assert!(CoderConfig::from_json(
            r#"{ "fixed_namespaces": [ { "prefix": "ex", "iri": "http://exa mple.com/" } ] }"#
        )
        .is_err());
    }
}
