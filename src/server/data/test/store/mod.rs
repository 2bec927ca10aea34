//! Behavior shared by every `Store` backend, run against each of them.

use std::sync::Arc;

use crate::server::{
    data::{database::DatabaseStore, json::JsonFileStore, store::Store},
    error::AppError,
    model::{
        promo::{CreatePromoCodeParam, PromoKind, RedeemPromoParam, Redemption},
        user::{CreateUserParam, Role},
    },
};
use tempfile::TempDir;
use test_utils::builder::TestBuilder;

mod create;
mod json_file;

/// A store under test plus whatever must outlive it.
struct Backend {
    name: &'static str,
    store: Arc<dyn Store>,
    _dir: Option<TempDir>,
}

async fn database_backend() -> Backend {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    Backend {
        name: "database",
        store: Arc::new(DatabaseStore::new(db)),
        _dir: None,
    }
}

fn json_backend() -> Backend {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("db.json"));

    Backend {
        name: "json",
        store: Arc::new(store),
        _dir: Some(dir),
    }
}

async fn backends() -> Vec<Backend> {
    vec![database_backend().await, json_backend()]
}

async fn seed_user(store: &dyn Store, email: &str) -> Result<(), AppError> {
    store
        .create_user(CreateUserParam {
            email: email.to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;
    Ok(())
}

async fn seed_promo(store: &dyn Store, code: &str, kind: PromoKind) -> Result<(), AppError> {
    store
        .create_promo(CreatePromoCodeParam {
            code: code.to_string(),
            kind,
        })
        .await?;
    Ok(())
}

fn redeem(email: &str, code: &str) -> RedeemPromoParam {
    RedeemPromoParam {
        email: email.to_string(),
        code: code.to_string(),
    }
}
