use std::sync::Arc;

use dgoods_toolkit::chain::{ChainApi, GetTableRowsRequest};

use crate::{
    constants::{Env, DGOOD_TABLE, PAGE_SIZE},
    types::DgoodRow,
};

pub struct TableReader {
    env: Env,
    chain: Arc<dyn ChainApi>,
}

impl TableReader {
    pub fn new(env: Env, chain: Arc<dyn ChainApi>) -> Self {
        Self { env, chain }
    }

    /// Read every row of the contract's `dgood` table, in chain order.
    ///
    /// Pages by row id: each request lower-bounds at one past the last row
    /// seen so far and the loop stops once the node reports no more rows.
    /// Query failures propagate unrecovered, there is no retry.
    pub async fn fetch_all(&self) -> anyhow::Result<Vec<DgoodRow>> {
        let mut rows: Vec<DgoodRow> = Vec::new();
        let mut lower_bound: u64 = 0;
        let mut more = true;

        while more {
            let page = self
                .chain
                .get_table_rows(GetTableRowsRequest {
                    json: true,
                    code: self.env.dgoods_account.clone(),
                    scope: self.env.dgoods_account.clone(),
                    table: DGOOD_TABLE.to_string(),
                    lower_bound,
                    upper_bound: None,
                    limit: PAGE_SIZE,
                })
                .await?;

            for row in page.rows {
                rows.push(serde_json::from_value(row)?);
            }

            more = page.more;
            // An empty page leaves the bound where it was.
            if let Some(last) = rows.last() {
                lower_bound = last.id + 1;
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use dgoods_toolkit::chain::{ChainError, TableRowsPage, TransactOptions, Transaction};
    use serde_json::json;
    use url::Url;

    use super::*;

    struct PagedChain {
        pages: Mutex<Vec<TableRowsPage>>,
        requests: Mutex<Vec<GetTableRowsRequest>>,
    }

    impl PagedChain {
        fn new(pages: Vec<TableRowsPage>) -> Self {
            Self {
                pages: Mutex::new(pages),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChainApi for PagedChain {
        async fn get_table_rows(
            &self,
            req: GetTableRowsRequest,
        ) -> Result<TableRowsPage, ChainError> {
            self.requests.lock().unwrap().push(req);
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                Ok(TableRowsPage::default())
            } else {
                Ok(pages.remove(0))
            }
        }

        async fn transact(
            &self,
            _tx: Transaction,
            _opts: TransactOptions,
        ) -> Result<(), ChainError> {
            unreachable!("table reader never submits transactions");
        }
    }

    fn test_env() -> Env {
        Env {
            chain_endpoint: Url::parse("http://localhost:8888").unwrap(),
            dgoods_account: "chaingoods31".to_string(),
            private_key: String::new(),
            migration_quantity: 5,
        }
    }

    fn row(id: u64, owner: &str) -> serde_json::Value {
        json!({ "id": id, "owner": owner })
    }

    #[tokio::test]
    async fn pages_until_more_is_false() {
        let chain = Arc::new(PagedChain::new(vec![
            TableRowsPage {
                rows: vec![row(0, "alice"), row(1, "bob")],
                more: true,
            },
            TableRowsPage {
                rows: vec![row(7, "carol")],
                more: false,
            },
        ]));
        let reader = TableReader::new(test_env(), chain.clone());

        let rows = reader.fetch_all().await.unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.owner.as_str()).collect::<Vec<_>>(),
            vec!["alice", "bob", "carol"]
        );

        let requests = chain.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].lower_bound, 0);
        // One past the last id of the first page.
        assert_eq!(requests[1].lower_bound, 2);
        assert!(requests.iter().all(|r| r.table == "dgood"
            && r.limit == PAGE_SIZE
            && r.upper_bound.is_none()
            && r.json
            && r.code == "chaingoods31"
            && r.scope == "chaingoods31"));
    }

    #[tokio::test]
    async fn empty_table_issues_a_single_request() {
        let chain = Arc::new(PagedChain::new(vec![TableRowsPage {
            rows: vec![],
            more: false,
        }]));
        let reader = TableReader::new(test_env(), chain.clone());

        let rows = reader.fetch_all().await.unwrap();

        assert!(rows.is_empty());
        assert_eq!(chain.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_page_with_more_keeps_the_bound() {
        let chain = Arc::new(PagedChain::new(vec![
            TableRowsPage {
                rows: vec![row(3, "alice")],
                more: true,
            },
            TableRowsPage {
                rows: vec![],
                more: true,
            },
            TableRowsPage {
                rows: vec![row(9, "bob")],
                more: false,
            },
        ]));
        let reader = TableReader::new(test_env(), chain.clone());

        let rows = reader.fetch_all().await.unwrap();

        assert_eq!(rows.len(), 2);
        let requests = chain.requests.lock().unwrap();
        assert_eq!(requests[1].lower_bound, 4);
        assert_eq!(requests[2].lower_bound, 4);
    }
}
