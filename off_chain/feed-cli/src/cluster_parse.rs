use anchor_client::Cluster;
use anyhow::{anyhow, bail, Result};
use url::Url;

/// Parse a cluster moniker (`localnet`, `devnet`, ...) or a custom RPC url.
pub fn parse(s: &str) -> Result<Cluster> {
    let cluster = match s.to_lowercase().as_str() {
        "t" | "testnet" => Cluster::Testnet,
        "m" | "mainnet" | "mainnet-beta" => Cluster::Mainnet,
        "d" | "devnet" => Cluster::Devnet,
        "l" | "localnet" => Cluster::Localnet,
        "g" | "debug" => Cluster::Debug,
        _ if s.starts_with("http") => Cluster::Custom(s.to_string(), ws_url_of(s)?.to_string()),
        _ => bail!(
            "Cluster must be one of [localnet, testnet, mainnet, devnet, debug] or an http(s) url, got {s}"
        ),
    };
    Ok(cluster)
}

/// Websocket endpoint paired with an RPC url: same host, port + 1.
fn ws_url_of(http_url: &str) -> Result<Url> {
    let mut ws_url = Url::parse(http_url)?;
    if let Some(port) = ws_url.port() {
        let ws_port = port
            .checked_add(1)
            .ok_or_else(|| anyhow!("No websocket port after {port} for {http_url}"))?;
        ws_url
            .set_port(Some(ws_port))
            .map_err(|_| anyhow!("Unable to set websocket port of {http_url}"))?;
    }
    let scheme = if ws_url.scheme() == "https" { "wss" } else { "ws" };
    ws_url
        .set_scheme(scheme)
        .map_err(|_| anyhow!("Unable to set websocket scheme of {http_url}"))?;
    Ok(ws_url)
}
