use std::path::Path;

use anyhow::Result;
use pixplot::demo::FrameRenderer;
use pixplot::engine::core::EngineConfig;
use pixplot::engine::EngineApp;

const CONFIG_FILE: &str = "pixplot.ron";

fn main() -> Result<()> {
    init_tracing();

    let config = EngineConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let renderer = FrameRenderer::new(config.resolution());
    let app = EngineApp::new(config, renderer);
    app.run()
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
