use anyhow::Result;
use std::path::PathBuf;
use taxi_fleet_core::NewTaxi;
use taxi_fleet_storage::FleetStore;

use crate::open_durable;

pub(crate) async fn run_list(status: Option<String>, db_path: Option<PathBuf>) -> Result<()> {
    let store = open_durable(db_path).await?;
    let taxis = match status {
        Some(status) => store.list_by_status(&status).await?,
        None => store.list_all().await?,
    };
    println!("{}", serde_json::to_string_pretty(&taxis)?);
    Ok(())
}

pub(crate) async fn run_create(
    number: String,
    driver: Option<String>,
    status: Option<String>,
    db_path: Option<PathBuf>,
) -> Result<()> {
    let store = open_durable(db_path).await?;
    let taxi = store.create(NewTaxi { number: Some(number), driver, status }).await?;
    println!("{}", serde_json::to_string_pretty(&taxi)?);
    Ok(())
}

pub(crate) async fn run_reset(db_path: Option<PathBuf>) -> Result<()> {
    let store = open_durable(db_path).await?;
    store.reset().await?;
    println!("{}", serde_json::json!({"result": true}));
    Ok(())
}
