use std::path::PathBuf;

use models::Dataset;
use parser::DatasetBuilder;
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(unused)]
pub fn read_bundle(path: &PathBuf) -> Result<DatasetBuilder, Box<dyn std::error::Error>> {
    let bundle_str = std::fs::read_to_string(path)?;
    Ok(DatasetBuilder::from_bundle_str(&bundle_str)?)
}

#[allow(unused)]
pub fn load_bundle(path: &PathBuf) -> anyhow::Result<Dataset> {
    let bundle_str = std::fs::read_to_string(path)?;
    DatasetBuilder::from_bundle_str(&bundle_str)?.build()
}
