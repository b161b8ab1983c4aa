use std::sync::Arc;

use dgoods_migration_rs::{constants::Env, core::MigrationService, types::MigrationAction};
use dgoods_toolkit::chain::HttpChain;
use dgoods_utils::log::setup_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_logger(None)?;

    let env = Env::new();
    let chain = Arc::new(HttpChain::new(env.chain_endpoint.clone(), &env.private_key));
    let migration_service = MigrationService::new(env, chain);
    migration_service.run(MigrationAction::Migrateaccs).await?;
    Ok(())
}
