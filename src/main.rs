use anyhow::{bail, Context, Result};

use rusty_eda::data::loader::{load_dir, normalize_dir_path};

fn main() -> Result<()> {
    env_logger::init();

    let Some(dir) = std::env::args().nth(1) else {
        bail!("usage: rusty-eda <data-dir>  (paths resolve relative to the parent directory)");
    };

    let tables = load_dir(&dir, true)
        .with_context(|| format!("loading CSVs from '{}'", normalize_dir_path(&dir)))?;

    println!();
    println!("{} table(s) loaded:", tables.len());
    for (key, table) in &tables {
        println!(
            "  {key}: {} rows × {} columns [{}]",
            table.num_rows(),
            table.num_columns(),
            table.column_names().join(", ")
        );
    }
    Ok(())
}
