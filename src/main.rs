// SPDX-License-Identifier: MIT
use anyhow::Result;
use sample_emitter::{EmitterConfig, EmitterProvider, Sample};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

fn init_diagnostics() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_diagnostics();

    let cfg = EmitterConfig::default();
    info!(endpoint = %cfg.endpoint, service = %cfg.service_name, "starting sample emitter");

    let provider = EmitterProvider::new(&cfg)?;
    let emitter = provider.emitter("example");

    emitter.emit(Sample::json(r#"{"foo": 1, "bar": "baz"}"#));
    info!("sample submitted");

    provider.shutdown()?;
    Ok(())
}
