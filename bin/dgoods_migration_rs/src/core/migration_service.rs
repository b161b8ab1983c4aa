use std::sync::Arc;

use dgoods_toolkit::chain::{
    Action, Authorization, ChainApi, ChainError, TransactOptions, Transaction,
};
use serde_json::json;

use crate::{
    constants::{Env, ACTIVE_PERMISSION},
    core::{unique_owners, TableReader},
    types::MigrationAction,
};

pub struct MigrationService {
    env: Env,
    chain: Arc<dyn ChainApi>,
}

impl MigrationService {
    pub fn new(env: Env, chain: Arc<dyn ChainApi>) -> Self {
        Self { env, chain }
    }

    /// Full pipeline: read the whole `dgood` table, reduce to unique
    /// owners, apply `action` once per owner.
    pub async fn run(&self, action: MigrationAction) -> anyhow::Result<()> {
        log::info!("starting dgoods {} run", action);

        let reader = TableReader::new(self.env.clone(), self.chain.clone());
        let rows = reader.fetch_all().await?;
        let accounts = unique_owners(&rows);
        log::info!("found {} unique dgoods owners", accounts.len());

        self.apply(&accounts, action).await?;
        log::info!("completed");
        Ok(())
    }

    /// Submit one transaction per account, strictly sequential. A rejection
    /// carrying the duplicate-entry signature means the owner was handled by
    /// an earlier run and is skipped; any other failure aborts the batch.
    /// There is no checkpoint, re-running relies on the skip path.
    pub async fn apply(
        &self,
        accounts: &[String],
        action: MigrationAction,
    ) -> anyhow::Result<()> {
        for account in accounts {
            match self.submit(account, action).await {
                Ok(()) => log::info!("{} applied to {}", action, account),
                Err(err) if err.is_duplicate_entry() => {
                    log::info!("{} already migrated, skipping", account);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    async fn submit(&self, account: &str, action: MigrationAction) -> Result<(), ChainError> {
        let tx = Transaction {
            actions: vec![Action {
                account: self.env.dgoods_account.clone(),
                name: action.to_string(),
                authorization: vec![Authorization {
                    actor: self.env.dgoods_account.clone(),
                    permission: ACTIVE_PERMISSION.to_string(),
                }],
                data: json!({
                    "owner": account,
                    "quantity": self.env.migration_quantity,
                }),
            }],
        };

        self.chain.transact(tx, TransactOptions::default()).await
    }
}
