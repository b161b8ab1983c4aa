use serde::Deserialize;
use strum_macros::{Display, EnumString};

/// One row of the contract's `dgood` table. The chain returns more columns
/// (category, token name, serial number); only the pagination id and the
/// owner matter here, the rest is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DgoodRow {
    pub id: u64,
    pub owner: String,
}

/// Contract action applied once per unique owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MigrationAction {
    /// Move the owner's balances into the new storage layout.
    Migrateaccs,
    /// Clear the owner's rows from the old storage layout.
    Clearaccs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_match_contract_actions() {
        assert_eq!(MigrationAction::Migrateaccs.to_string(), "migrateaccs");
        assert_eq!(MigrationAction::Clearaccs.to_string(), "clearaccs");
    }

    #[test]
    fn dgood_row_ignores_extra_columns() {
        let row: DgoodRow = serde_json::from_str(
            r#"{
                "id": 42,
                "serial_number": 42,
                "owner": "alice",
                "category": "avatar",
                "token_name": "avatar1"
            }"#,
        )
        .unwrap();

        assert_eq!(
            row,
            DgoodRow {
                id: 42,
                owner: "alice".to_string()
            }
        );
    }
}
