//! List site content

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::{ContentCategory, ContentRecord, FeaturedContent, FeaturedPage};
use crate::{helpers, Folio};

/// List all records of a category
pub fn run(folio: &Folio, category: &str, json: bool) -> Result<()> {
    let category: ContentCategory = category.parse()?;
    let records = folio.list_content(category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{} ({}):", category, records.len());
    for record in &records {
        print_record_line(record);
    }

    Ok(())
}

/// Print the routable ids of a category, one per line
pub fn paths(folio: &Folio, category: &str) -> Result<()> {
    let category: ContentCategory = category.parse()?;
    for id in folio.list_content_paths(category)? {
        println!("/{}/{}", category.dir_name(), id);
    }
    Ok(())
}

/// Print a single record, rendered, as JSON
pub fn show(folio: &Folio, category: &str, id: &str) -> Result<()> {
    let category: ContentCategory = category.parse()?;
    match folio.get_content_by_id(category, id)? {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        None => anyhow::bail!("No {} item with id '{}'", category, id),
    }
}

/// Print the featured content of a page
pub fn featured(folio: &Folio, page: &str, json: bool) -> Result<()> {
    let page: FeaturedPage = page.parse()?;
    let featured = folio.featured_content(page)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&featured)?);
        return Ok(());
    }

    print_featured(page, &featured);
    Ok(())
}

/// Print the reading time of a markdown file's body
pub fn reading_time(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let (_, body) = crate::content::FrontMatter::parse(&content);
    println!("{}", helpers::estimate_reading_time(body));
    Ok(())
}

fn print_featured(page: FeaturedPage, featured: &FeaturedContent) {
    println!("Featured on {}:", page);
    if featured.is_empty() {
        println!("  (none)");
        return;
    }
    for category in ContentCategory::ALL {
        let records = featured.get(category);
        if records.is_empty() {
            continue;
        }
        println!(" {}:", category);
        for record in records {
            print_record_line(record);
        }
    }
}

fn print_record_line(record: &ContentRecord) {
    let tags = if record.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", record.tags.join(", "))
    };
    println!(
        "  {} - {} ({}, {}){}",
        record.date.formatted(),
        record.title,
        record.id,
        record.reading_time,
        tags
    );
}
