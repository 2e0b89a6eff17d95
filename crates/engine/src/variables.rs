//! Variable resolution
//!
//! Merges configuration defaults with caller-supplied values. Provided
//! values always win, even an empty string. Keys outside the declared list
//! are not an error; they pass through for the composer to use.

use std::collections::HashMap;

use frontdesk_config::VariableDefinition;
use frontdesk_core::{Error, Result};

/// Merge defaults and provided values without validating required variables
pub(crate) fn merge_variables(
    declared: &[VariableDefinition],
    provided: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = HashMap::with_capacity(declared.len() + provided.len());
    for variable in declared {
        if !variable.default_value.is_empty() {
            merged.insert(variable.name.clone(), variable.default_value.clone());
        }
    }
    for (key, value) in provided {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Required variables with no non-empty merged value, in declaration order
pub(crate) fn missing_required(
    declared: &[VariableDefinition],
    merged: &HashMap<String, String>,
) -> Vec<String> {
    declared
        .iter()
        .filter(|v| v.required && merged.get(&v.name).map_or(true, |value| value.is_empty()))
        .map(|v| v.name.clone())
        .collect()
}

/// Resolve the variable map for a configuration.
///
/// Fails with `MissingVariables` listing exactly the required names that
/// ended up without a non-empty value. Missing values are never silently
/// defaulted.
pub fn resolve_variables(
    declared: &[VariableDefinition],
    provided: &HashMap<String, String>,
) -> Result<HashMap<String, String>> {
    let merged = merge_variables(declared, provided);
    let missing = missing_required(declared, &merged);
    if !missing.is_empty() {
        return Err(Error::MissingVariables { missing });
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provided(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_then_overrides() {
        let declared = vec![
            VariableDefinition::new("greeting").with_default("Hello"),
            VariableDefinition::new("city").with_default("Berlin"),
        ];
        let resolved =
            resolve_variables(&declared, &provided(&[("city", "Hamburg")])).unwrap();
        assert_eq!(resolved.get("greeting").unwrap(), "Hello");
        assert_eq!(resolved.get("city").unwrap(), "Hamburg");
    }

    #[test]
    fn test_provided_wins_even_empty() {
        let declared = vec![VariableDefinition::new("city").with_default("Berlin")];
        let resolved = resolve_variables(&declared, &provided(&[("city", "")])).unwrap();
        assert_eq!(resolved.get("city").unwrap(), "");
    }

    #[test]
    fn test_missing_required_listed_exactly() {
        let declared = vec![
            VariableDefinition::new("company").required(),
            VariableDefinition::new("slot").required(),
            VariableDefinition::new("tone").with_default("warm").required(),
        ];
        let err = resolve_variables(&declared, &provided(&[])).unwrap_err();
        match err {
            Error::MissingVariables { missing } => {
                assert_eq!(missing, vec!["company".to_string(), "slot".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_required_with_empty_default_still_missing() {
        let declared = vec![VariableDefinition::new("company").required()];
        assert!(resolve_variables(&declared, &provided(&[("company", ""),])).is_err());
        assert!(resolve_variables(&declared, &provided(&[("company", "Acme")])).is_ok());
    }

    #[test]
    fn test_extras_pass_through() {
        let declared = vec![VariableDefinition::new("city").with_default("Berlin")];
        let resolved =
            resolve_variables(&declared, &provided(&[("companyName", "Acme")])).unwrap();
        assert_eq!(resolved.get("companyName").unwrap(), "Acme");
    }
}
