use dgoods_utils::env::get_env;
use url::Url;

/// Rows requested per `get_table_rows` page.
pub const PAGE_SIZE: u32 = 50;

/// The contract table holding one row per dgood unit.
pub const DGOOD_TABLE: &str = "dgood";

pub const ACTIVE_PERMISSION: &str = "active";

#[derive(Debug, Clone)]
pub struct Env {
    pub chain_endpoint: Url,
    pub dgoods_account: String,
    pub private_key: String,
    pub migration_quantity: u64,
}

impl Env {
    pub fn new() -> Self {
        let endpoint_str = get_env("CHAIN_ENDPOINT", None);
        let Ok(chain_endpoint) = Url::parse(&endpoint_str) else {
            panic!("CHAIN_ENDPOINT {:?} invalid", endpoint_str);
        };

        Self {
            chain_endpoint,
            dgoods_account: get_env("DGOODS_ACCOUNT", None),
            private_key: get_env("DGOODS_PRIVATE_KEY", None),
            // Upper bound on balance rows the contract walks per call, not
            // a token amount.
            migration_quantity: get_env("MIGRATION_QUANTITY", Some("5".to_string()))
                .parse()
                .unwrap(),
        }
    }
}
