//! Loading contract creation bytecode from compilation artifacts

use std::{fs, path::Path};

use alloy_primitives::Bytes;

use crate::{
    constants::{ARTIFACT_EXTENSION, BYTECODE_KEY, BYTECODE_OBJECT_KEY},
    deployer::ContractKind,
    errors::ScriptError,
};

/// Reads the creation bytecode of `contract` from `<artifacts_dir>/<name>.json`
pub fn load_bytecode(artifacts_dir: &Path, contract: ContractKind) -> Result<Bytes, ScriptError> {
    let artifact_path = artifacts_dir
        .join(contract.artifact_name())
        .with_extension(ARTIFACT_EXTENSION);

    let contents = fs::read_to_string(&artifact_path).map_err(|e| {
        ScriptError::ArtifactParsing(format!("{}: {}", artifact_path.display(), e))
    })?;

    parse_bytecode(&contents)
}

/// Extracts the creation bytecode from the contents of an artifact.
///
/// Truffle artifacts store the bytecode as a hex string, Foundry artifacts nest it
/// under `bytecode.object`.
pub fn parse_bytecode(artifact: &str) -> Result<Bytes, ScriptError> {
    let parsed = json::parse(artifact).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = &parsed[BYTECODE_KEY];
    let hex_str = bytecode
        .as_str()
        .or_else(|| bytecode[BYTECODE_OBJECT_KEY].as_str())
        .ok_or_else(|| ScriptError::ArtifactParsing("artifact has no bytecode".to_string()))?;

    let bytes = hex::decode(hex_str.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    if bytes.is_empty() {
        return Err(ScriptError::ArtifactParsing(
            "artifact bytecode is empty, is the contract abstract?".to_string(),
        ));
    }

    Ok(bytes.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_truffle_artifact() {
        let bytecode = parse_bytecode(r#"{"contractName": "FonkyBat", "bytecode": "0x6080"}"#)
            .unwrap();
        assert_eq!(&bytecode[..], &[0x60, 0x80]);
    }

    #[test]
    fn parses_foundry_artifact() {
        let bytecode =
            parse_bytecode(r#"{"bytecode": {"object": "0x608060", "linkReferences": {}}}"#)
                .unwrap();
        assert_eq!(&bytecode[..], &[0x60, 0x80, 0x60]);
    }

    #[test]
    fn rejects_empty_bytecode() {
        let err = parse_bytecode(r#"{"bytecode": "0x"}"#).unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }

    #[test]
    fn rejects_missing_bytecode() {
        let err = parse_bytecode(r#"{"abi": []}"#).unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }

    #[test]
    fn loads_artifact_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("FonkyBatFactory.json"),
            r#"{"bytecode": "0xfe"}"#,
        )
        .unwrap();

        let bytecode = load_bytecode(dir.path(), ContractKind::FonkyBatFactory).unwrap();
        assert_eq!(&bytecode[..], &[0xfe]);

        let err = load_bytecode(dir.path(), ContractKind::FonkyBat).unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactParsing(_)));
    }
}
