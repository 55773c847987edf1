//! Deployed-contract introspection records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Debug information for a deployed contract
///
/// Maps the contract's assembly listing to source lines via a
/// program-counter index. Purely informational; nothing in this crate
/// interprets the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContractDebugInfo {
    /// Assembly listing of the deployed code
    pub assembly_code: String,
    /// Program counter to source line mapping
    pub pc_line_mapping: BTreeMap<u64, u64>,
}
