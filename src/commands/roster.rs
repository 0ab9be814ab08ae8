//! Roster command handler - Searched and sorted roster of one district

use crate::cli::RosterArgs;
use crate::commands::{banner, CommandContext};
use crate::error::{EngineError, Result};
use crate::query::{query_entities_with, RosterQuery, SortDirection, SortState};

/// Columns printed in text output
const TEXT_COLUMNS: &[&str] = &["id", "name", "role", "subLocation"];

/// Run the roster command
pub fn run_roster(args: &RosterArgs, ctx: &CommandContext) -> Result<String> {
    let directory = ctx.build_directory(&args.entities)?;
    let node = directory
        .node(&args.district)
        .ok_or_else(|| EngineError::UnknownDistrict {
            name: args.district.clone(),
        })?;

    let key = args
        .sort
        .clone()
        .unwrap_or_else(|| ctx.config.roster.default_sort.clone());
    let roster = RosterQuery {
        search: args.search.clone(),
        sort: SortState {
            key,
            direction: if args.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        },
    };
    let rows = query_entities_with(node.entities(), &roster);

    let json = serde_json::json!({
        "_type": "roster",
        "district": node.name,
        "region": node.region,
        "subRegion": node.sub_region,
        "search": roster.search,
        "sort": roster.sort,
        "count": node.count(),
        "shown": rows.len(),
        "entities": rows
    });

    Ok(ctx.render(&json, || {
        let mut output = banner(&format!("ROSTER: {}", node.name.to_uppercase()));
        output.push_str(&format!(
            "region: {} / {}\nshown: {} of {}\n\n",
            node.region,
            node.sub_region,
            rows.len(),
            node.count()
        ));
        if rows.is_empty() {
            output.push_str("No records match.\n");
            return output;
        }
        output.push_str(&TEXT_COLUMNS.join("\t"));
        output.push('\n');
        for entity in &rows {
            let cells: Vec<String> = TEXT_COLUMNS
                .iter()
                .map(|c| entity.field(c).into_owned())
                .collect();
            output.push_str(&cells.join("\t"));
            output.push('\n');
        }
        output
    }))
}
