//! Catalog command handler - List or validate the hierarchy catalog

use crate::catalog::RegionEntry;
use crate::cli::CatalogArgs;
use crate::commands::{banner, CommandContext};
use crate::error::{EngineError, Result};

/// Run the catalog command
pub fn run_catalog(args: &CatalogArgs, ctx: &CommandContext) -> Result<String> {
    let catalog = ctx.catalog()?;
    catalog.validate()?;

    let regions: Vec<&RegionEntry> = match &args.region {
        Some(name) => vec![catalog
            .entries()
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| EngineError::UnknownRegion { name: name.clone() })?],
        None => catalog.entries().iter().collect(),
    };

    let district_count: usize = regions
        .iter()
        .flat_map(|r| r.sub_regions.iter())
        .map(|s| s.districts.len())
        .sum();

    if args.check {
        let json = serde_json::json!({
            "_type": "catalog_check",
            "valid": true,
            "regions": catalog.entries().len(),
            "districts": catalog.len()
        });
        return Ok(ctx.render(&json, || {
            format!(
                "catalog ok: {} regions, {} districts\n",
                catalog.entries().len(),
                catalog.len()
            )
        }));
    }

    let region_json: Vec<serde_json::Value> = regions
        .iter()
        .map(|r| {
            let subs: Vec<serde_json::Value> = r
                .sub_regions
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.name,
                        "districts": s.districts
                    })
                })
                .collect();
            serde_json::json!({
                "name": r.name,
                "sub_regions": subs
            })
        })
        .collect();

    let json = serde_json::json!({
        "_type": "catalog",
        "region_count": regions.len(),
        "district_count": district_count,
        "regions": region_json
    });

    Ok(ctx.render(&json, || {
        let mut output = banner("HIERARCHY CATALOG");
        output.push_str(&format!(
            "regions: {}\ndistricts: {}\n\n",
            regions.len(),
            district_count
        ));
        for region in &regions {
            output.push_str(&format!("{}\n", region.name));
            for sub in &region.sub_regions {
                output.push_str(&format!(
                    "  {} ({}): {}\n",
                    sub.name,
                    sub.districts.len(),
                    sub.districts.join(", ")
                ));
            }
        }
        output
    }))
}
