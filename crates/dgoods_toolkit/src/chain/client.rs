use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use super::{
    error::ChainError,
    types::{ChainErrorResponse, GetTableRowsRequest, TableRowsPage, TransactOptions, Transaction},
};

/// The surface of the node's HTTP API the migration tools consume.
#[async_trait]
pub trait ChainApi: Send + Sync {
    async fn get_table_rows(&self, req: GetTableRowsRequest) -> Result<TableRowsPage, ChainError>;
    async fn transact(&self, tx: Transaction, opts: TransactOptions) -> Result<(), ChainError>;
}

/// Chain client over the node's HTTP API.
///
/// Signing happens in the signing proxy fronting the node; the configured
/// key is forwarded with each submission and never used locally.
pub struct HttpChain {
    client: Client,
    endpoint: Url,
    signing_key: String,
}

impl HttpChain {
    pub fn new(endpoint: Url, signing_key: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            signing_key: signing_key.to_string(),
        }
    }

    fn chain_url(&self, method: &str) -> String {
        format!(
            "{}/v1/chain/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            method
        )
    }

    async fn post<T, R>(&self, method: &str, body: &T, authorize: bool) -> Result<R, ChainError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let mut req = self.client.post(self.chain_url(method)).json(body);
        if authorize {
            req = req.header("Authorization", self.signing_key.clone());
        }

        let res = req.send().await?;
        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            let parsed: ChainErrorResponse =
                serde_json::from_str(&text).map_err(|err| ChainError::ResponseSerdeJson {
                    err,
                    text: text.clone(),
                })?;
            return Err(ChainError::Rejected {
                what: parsed.error.what,
            });
        }

        serde_json::from_str(&text).map_err(|err| ChainError::ResponseSerdeJson { err, text })
    }
}

#[async_trait]
impl ChainApi for HttpChain {
    async fn get_table_rows(&self, req: GetTableRowsRequest) -> Result<TableRowsPage, ChainError> {
        self.post("get_table_rows", &req, false).await
    }

    async fn transact(&self, tx: Transaction, opts: TransactOptions) -> Result<(), ChainError> {
        let request = TransactRequest {
            transaction: &tx,
            options: &opts,
        };
        // The returned receipt is not used by any caller.
        let _: serde_json::Value = self.post("push_transaction", &request, true).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct TransactRequest<'a> {
    #[serde(flatten)]
    transaction: &'a Transaction,
    #[serde(flatten)]
    options: &'a TransactOptions,
}
