mod client;
mod config;
mod error;
mod report;
mod types;

use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use client::NotificationClient;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    pretty_env_logger::init_timed();

    let config = Config::parse();
    let channels = config.channels();

    // No request goes out unless every endpoint URL is valid.
    let endpoints = channels
        .iter()
        .map(|&channel| -> anyhow::Result<_> { Ok((channel, config.endpoint(channel)?)) })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let client = NotificationClient::new(config.timeout())?;

    if config.health {
        let url = config.health_url()?;
        match client.health(&url).await {
            Ok(report) => info!("Backend health {}: {:?}", report.status, report.body),
            Err(e) => warn!("Health probe failed: {}", e),
        }
    }

    let mut results = Vec::with_capacity(endpoints.len());
    for (channel, endpoint) in endpoints {
        let request = config.request(channel);
        info!("Dispatching {} notification to {}", channel, endpoint);

        let result = client.send(&endpoint, &request).await;
        match &result {
            Ok(outcome) if !outcome.is_success() => {
                warn!("{} endpoint answered with status {}", channel, outcome.status)
            }
            Ok(_) => {}
            Err(e) if e.is_connection() => log::error!("{} backend unreachable: {}", channel, e),
            Err(e) => log::error!("{} dispatch failed: {}", channel, e),
        }

        println!("{}", report::render(&result));
        results.push(result);
    }

    Ok(report::exit_code(&results))
}
