//! Run configuration for the deploy scripts, built once at process entry

use crate::constants::FALSY_VALUES;

/// Parses an environment flag value.
///
/// Returns `None` when the value is unset or empty, so that callers can fall back
/// to another flag. Otherwise `0`, `false`, `no` and `off` (case-insensitive) are
/// false, and any other value is true.
pub fn parse_flag(value: Option<&str>) -> Option<bool> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    let falsy = FALSY_VALUES
        .iter()
        .any(|falsy| value.eq_ignore_ascii_case(falsy));
    Some(!falsy)
}

/// Which contracts to deploy in this run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployFlags {
    /// Deploy the `FonkyBat` base contract
    pub fonkybats: bool,
    /// Deploy the `FonkyBatFactory` contract and hand it ownership of `FonkyBat`
    pub fonkybats_sale: bool,
}

impl DeployFlags {
    /// Resolve the flags from the raw `DEPLOY_ALL`, `DEPLOY_FONKYBATS` and
    /// `DEPLOY_FONKYBATS_SALE` values.
    ///
    /// Each specific flag falls back to `DEPLOY_ALL` when unset.
    pub fn from_values(
        deploy_all: Option<&str>,
        deploy_fonkybats: Option<&str>,
        deploy_fonkybats_sale: Option<&str>,
    ) -> Self {
        let all = parse_flag(deploy_all).unwrap_or(false);
        Self {
            fonkybats: parse_flag(deploy_fonkybats).unwrap_or(all),
            fonkybats_sale: parse_flag(deploy_fonkybats_sale).unwrap_or(all),
        }
    }

    /// Whether this run deploys nothing at all
    pub fn is_empty(&self) -> bool {
        !self.fonkybats && !self.fonkybats_sale
    }
}

/// The configuration of a single deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// The name of the target network
    pub network: String,
    /// Which contracts to deploy
    pub flags: DeployFlags,
}

impl DeployConfig {
    /// Create a new run configuration
    pub fn new(network: impl Into<String>, flags: DeployFlags) -> Self {
        Self {
            network: network.into(),
            flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_and_empty_flags_are_none() {
        assert_eq!(parse_flag(None), None);
        assert_eq!(parse_flag(Some("")), None);
        assert_eq!(parse_flag(Some("  ")), None);
    }

    #[test]
    fn falsy_words_are_false() {
        for value in ["0", "false", "FALSE", "no", "Off", " false "] {
            assert_eq!(parse_flag(Some(value)), Some(false), "{value}");
        }
    }

    #[test]
    fn other_values_are_true() {
        for value in ["1", "true", "yes", "on", "anything"] {
            assert_eq!(parse_flag(Some(value)), Some(true), "{value}");
        }
    }

    #[test]
    fn specific_flags_fall_back_to_deploy_all() {
        let flags = DeployFlags::from_values(Some("true"), None, None);
        assert!(flags.fonkybats);
        assert!(flags.fonkybats_sale);

        let flags = DeployFlags::from_values(None, None, None);
        assert!(flags.is_empty());
    }

    #[test]
    fn specific_flags_override_deploy_all() {
        let flags = DeployFlags::from_values(Some("true"), Some("false"), None);
        assert!(!flags.fonkybats);
        assert!(flags.fonkybats_sale);

        let flags = DeployFlags::from_values(Some("false"), None, Some("true"));
        assert!(!flags.fonkybats);
        assert!(flags.fonkybats_sale);
    }
}
