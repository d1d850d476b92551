use parser::{DatasetBuilder, IdSourceBuilder};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=res/");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let (characters_json, tierlist_json) = tokio::try_join!(
        tokio::fs::read_to_string("res/characters.json"),
        tokio::fs::read_to_string("res/tierlist.json"),
    )?;

    let dataset = DatasetBuilder::from_json_strs(&characters_json, &tierlist_json)
        .and_then(|builder| builder.build())
        .inspect_err(|e| println!("cargo:warning=invalid dataset ({e})"))?;

    IdSourceBuilder::new(&dataset).write_to(&out_dir.join("ids.rs"))?;
    Ok(())
}
