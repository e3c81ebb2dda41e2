//! Fetch bills from a remote JSON endpoint.

use anyhow::{bail, Context, Result};
use recur_core::RecurringBill;
use tracing::info;

/// GET `url` and decode a JSON array of bills. Non-2xx responses are errors.
pub async fn fetch_bills(url: &str) -> Result<Vec<RecurringBill>> {
    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .with_context(|| format!("bills request to {url}"))?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("bills source error: {status} {txt}");
    }

    let bills: Vec<RecurringBill> = resp.json().await.context("decoding bills response")?;
    info!(count = bills.len(), url, "fetched bills");
    Ok(bills)
}
