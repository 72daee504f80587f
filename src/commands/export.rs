//! Export content as JSON data files for the presentation layer

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ContentCategory, FeaturedPage};
use crate::Folio;

/// Subdirectory of the public dir that receives the data files
const DATA_DIR: &str = "data";

/// Write listings, rendered items and featured selections.
///
/// Layout under `public_dir/data/`: `{category}.json` (listing),
/// `{category}/{id}.json` (rendered item), `featured/{page}.json`.
pub fn run(folio: &Folio) -> Result<PathBuf> {
    let start = std::time::Instant::now();
    let out_dir = folio.public_dir.join(DATA_DIR);
    fs::create_dir_all(&out_dir)?;

    let mut items = 0;
    for category in ContentCategory::ALL {
        let records = folio.list_content(category)?;
        write_json(&out_dir.join(format!("{}.json", category.dir_name())), &records)?;

        let item_dir = out_dir.join(category.dir_name());
        fs::create_dir_all(&item_dir)?;
        for record in &records {
            // The listing was just read, but the file may vanish in between
            let Some(detail) = folio.get_content_by_id(category, &record.id)? else {
                tracing::warn!("{}/{} disappeared during export", category, record.id);
                continue;
            };
            write_json(&item_dir.join(format!("{}.json", record.id)), &detail)?;
            items += 1;
        }
        tracing::info!("Exported {} {} records", records.len(), category);
    }

    let featured_dir = out_dir.join("featured");
    fs::create_dir_all(&featured_dir)?;
    for page in FeaturedPage::ALL {
        let featured = folio.featured_content(page)?;
        write_json(&featured_dir.join(format!("{}.json", page)), &featured)?;
    }

    let duration = start.elapsed();
    tracing::info!("Exported {} items in {:.2}s", items, duration.as_secs_f64());

    Ok(out_dir)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
