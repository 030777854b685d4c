use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::{InspectConfig, PREVIEW_COUNT};
use crate::error::InspectError;
use crate::model::json::{display_value, kind_of};
use crate::model::product::{Catalog, Product, Record};

pub fn load_catalog(path: &Path) -> Result<Catalog, InspectError> {
    let data = fs::read_to_string(path).map_err(|source| InspectError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: Vec<Value> = serde_json::from_str(&data)?;
    let catalog = raw
        .into_iter()
        .map(Record::from_value)
        .collect::<Result<Catalog, _>>()?;
    info!(path = %path.display(), records = catalog.len(), "catalog loaded");

    Ok(catalog)
}

fn product_at(index: usize, record: &Record) -> Result<&Product, InspectError> {
    match record {
        Record::Product(p) => Ok(p),
        Record::Other(v) => Err(InspectError::NotAnObject {
            index,
            found: kind_of(v),
        }),
    }
}

/// Records whose slug contains `marker`, ignoring case. A missing slug
/// counts as empty; a slug that is not a string is an error.
pub fn slug_matches<'a>(
    catalog: &'a [Record],
    marker: &str,
) -> Result<Vec<(usize, &'a Product)>, InspectError> {
    let marker = marker.to_lowercase();
    let mut hits = Vec::new();

    for (i, record) in catalog.iter().enumerate() {
        let p = product_at(i, record)?;
        let slug = match &p.slug {
            None => "",
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                return Err(InspectError::InvalidField {
                    index: i,
                    field: "slug",
                    found: kind_of(other),
                })
            }
        };
        if slug.to_lowercase().contains(&marker) {
            hits.push((i, p));
        }
    }

    Ok(hits)
}

pub fn find_by_slug<'a>(
    catalog: &'a [Record],
    slug: &str,
) -> Result<Option<(usize, &'a Product)>, InspectError> {
    for (i, record) in catalog.iter().enumerate() {
        let p = product_at(i, record)?;
        if p.slug_is(slug) {
            return Ok(Some((i, p)));
        }
    }
    Ok(None)
}

fn require(
    value: Option<&Value>,
    index: usize,
    field: &'static str,
) -> Result<String, InspectError> {
    value
        .map(display_value)
        .ok_or(InspectError::MissingField { index, field })
}

/// Writes the inspection report. Lines already written stay written when a
/// record turns out to be missing a key.
pub fn inspect<W: Write>(
    catalog: &[Record],
    cfg: &InspectConfig,
    out: &mut W,
) -> Result<(), InspectError> {
    writeln!(out, "Total products from API: {}", catalog.len())?;

    let matches = slug_matches(catalog, &cfg.marker)?;
    debug!(marker = %cfg.marker, matches = matches.len(), "slug filter");
    writeln!(out, "Found {} {} products:", matches.len(), cfg.marker)?;
    for (i, p) in &matches {
        let name = require(p.name.as_ref(), *i, "name")?;
        let slug = require(p.slug.as_ref(), *i, "slug")?;
        writeln!(out, "  - {name} (slug: {slug})")?;
    }

    writeln!(out, "\nFirst {PREVIEW_COUNT} products:")?;
    for (i, record) in catalog.iter().take(PREVIEW_COUNT).enumerate() {
        let p = product_at(i, record)?;
        let name = require(p.name.as_ref(), i, "name")?;
        let slug = require(p.slug.as_ref(), i, "slug")?;
        writeln!(out, "  {}. {name} (slug: {slug})", i + 1)?;
    }

    match find_by_slug(catalog, &cfg.target_slug)? {
        Some((i, p)) => {
            let name = require(p.name.as_ref(), i, "name")?;
            let id = require(p.id.as_ref(), i, "id")?;
            writeln!(out, "\nFound target product: {name}")?;
            writeln!(out, "Product ID: {id}")?;
            writeln!(out, "Product category: {}", p.category_label())?;
        }
        None => {
            writeln!(
                out,
                "\nTarget product with slug \"{}\" not found",
                cfg.target_slug
            )?;
        }
    }

    Ok(())
}

/// Loads and inspects the catalog. Any failure becomes a single `Error:` line.
pub fn run<W: Write>(cfg: &InspectConfig, out: &mut W) -> io::Result<()> {
    let result = load_catalog(&cfg.path).and_then(|catalog| inspect(&catalog, cfg, out));

    match result {
        Ok(()) => Ok(()),
        Err(InspectError::Output(e)) => Err(e),
        Err(e) => {
            debug!(error = ?e, "inspection failed");
            writeln!(out, "Error: {e}")
        }
    }
}
