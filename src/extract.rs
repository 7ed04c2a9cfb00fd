//! SIM specification extraction.
//!
//! Scans a device's specification sheet for a SIM-related entry and
//! decides eSIM support from its text. Pure functions over
//! [`DeviceDetail`]; no I/O.

use crate::types::{DeviceDetail, SpecValue};

/// Outcome of scanning a spec sheet for SIM information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimInfo {
    /// Raw text of the matched SIM entry, `None` when no entry matched.
    pub sim_raw: Option<String>,
    /// `Some(true)` if the matched text mentions eSIM, `Some(false)` if
    /// SIM data was found without any eSIM mention, `None` when support
    /// is undetermined (no SIM entry at all).
    pub supports_esim: Option<bool>,
}

/// Scan every section and entry for a SIM spec and derive eSIM support.
///
/// A match is any entry whose key contains "sim" case-insensitively
/// (this also matches keys like "eSIM" or "SIM card"). The scan is
/// exhaustive and the last match wins: when multiple sections carry
/// SIM-named entries, the one scanned last overwrites earlier ones.
pub fn extract_sim_info(detail: &DeviceDetail) -> SimInfo {
    let mut sim_raw: Option<String> = None;

    for section in &detail.specifications {
        for entry in &section.specs {
            if entry.key.to_lowercase().contains("sim") {
                sim_raw = Some(flatten(&entry.val));
            }
        }
    }

    let supports_esim = sim_raw
        .as_deref()
        .map(|raw| raw.to_lowercase().contains("esim"));

    SimInfo {
        sim_raw,
        supports_esim,
    }
}

/// Render a spec value as one string; list values join with `" | "`.
fn flatten(val: &SpecValue) -> String {
    match val {
        SpecValue::One(s) => s.clone(),
        SpecValue::Many(items) => items.join(" | "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SpecEntry, SpecSection};

    fn detail(sections: Vec<SpecSection>) -> DeviceDetail {
        DeviceDetail {
            name: "Test Phone".into(),
            specifications: sections,
        }
    }

    fn section(title: &str, entries: Vec<(&str, SpecValue)>) -> SpecSection {
        SpecSection {
            title: title.into(),
            specs: entries
                .into_iter()
                .map(|(key, val)| SpecEntry {
                    key: key.into(),
                    val,
                })
                .collect(),
        }
    }

    #[test]
    fn list_value_joins_with_pipes() {
        let d = detail(vec![section(
            "Body",
            vec![(
                "SIM",
                SpecValue::Many(vec!["Nano-SIM".into(), "Yes".into(), "eSIM".into()]),
            )],
        )]);
        let info = extract_sim_info(&d);
        assert_eq!(info.sim_raw.as_deref(), Some("Nano-SIM | Yes | eSIM"));
        assert_eq!(info.supports_esim, Some(true));
    }

    #[test]
    fn match_is_case_insensitive_on_key() {
        let d = detail(vec![section(
            "Network",
            vec![("Dual Sim", SpecValue::One("Yes".into()))],
        )]);
        assert!(extract_sim_info(&d).sim_raw.is_some());
    }
}
