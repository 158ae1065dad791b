//! Scenario content loading
//!
//! Content can be overridden by a static asset so copy edits don't need a
//! rebuild; anything short of a valid document falls back to the built-in
//! pools.
use anyhow::Context;
use mvpm_game::ScenarioPools;

const POOLS_URL: &str = "/assets/data/scenarios.json";

async fn fetch_pools(url: &str) -> anyhow::Result<ScenarioPools> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .with_context(|| format!("fetching {url}"))?;
    if !response.ok() {
        anyhow::bail!("{url} returned status {}", response.status());
    }
    let body = response.text().await.context("reading scenario body")?;
    ScenarioPools::from_json(&body).context("parsing scenario pools")
}

/// Load the scenario pools, preferring the static asset override.
pub async fn load_pools() -> ScenarioPools {
    match fetch_pools(POOLS_URL).await {
        Ok(pools) => pools,
        Err(err) => {
            log::debug!("using built-in scenario pools: {err:#}");
            ScenarioPools::builtin()
        }
    }
}
