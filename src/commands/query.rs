//! Query command handler - Scoped, searched and grouped directory view

use std::sync::Arc;

use crate::catalog::HierarchyCatalog;
use crate::cli::QueryArgs;
use crate::commands::{banner, CommandContext};
use crate::entity::load_entities;
use crate::error::{EngineError, Result};
use crate::query::{QueryState, Scope, SortDirection, SortState};
use crate::session::Session;

/// Scope name meaning "every region"
pub const ALL_SCOPE: &str = "All";

/// Resolve `--scope` / `--sub-region` against the catalog
pub fn resolve_scope(
    catalog: &HierarchyCatalog,
    scope: &str,
    sub_region: Option<&str>,
) -> Result<Scope> {
    if scope.eq_ignore_ascii_case(ALL_SCOPE) {
        return match sub_region {
            Some(sub) => Err(EngineError::InvalidInput {
                message: format!("--sub-region {} needs a region --scope", sub),
            }),
            None => Ok(Scope::All),
        };
    }

    let region = catalog
        .regions()
        .find(|r| r.eq_ignore_ascii_case(scope.trim()))
        .ok_or_else(|| EngineError::UnknownRegion {
            name: scope.to_string(),
        })?;

    match sub_region {
        None => Ok(Scope::region(region)),
        Some(sub) => {
            let subs = catalog.sub_regions(region).unwrap_or_default();
            let found = subs
                .into_iter()
                .find(|s| s.eq_ignore_ascii_case(sub.trim()))
                .ok_or_else(|| EngineError::UnknownRegion {
                    name: format!("{}/{}", region, sub),
                })?;
            Ok(Scope::sub_region(region, found))
        }
    }
}

/// Run the query command
pub fn run_query(args: &QueryArgs, ctx: &CommandContext) -> Result<String> {
    let catalog = ctx.catalog()?;
    let scope = resolve_scope(&catalog, &args.scope, args.sub_region.as_deref())?;
    let entities = Arc::new(load_entities(&args.entities)?);

    let sort = SortState {
        key: args.sort.clone(),
        direction: if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    };
    let state = QueryState::new()
        .with_scope(scope)
        .with_search(args.search.clone())
        .with_sort(sort);

    let session = Session::with_normalizer(ctx.config.alias_table());
    let result = session.query(&catalog, &entities, &state);
    let view = result.view();

    let groups_json: Vec<serde_json::Value> = view
        .groups
        .iter()
        .map(|g| {
            serde_json::json!({
                "label": g.label,
                "nodes": g.nodes.iter().map(|n| n.summary()).collect::<Vec<_>>()
            })
        })
        .collect();

    let json = serde_json::json!({
        "_type": "directory_query",
        "scope": state.scope,
        "search": state.search,
        "total": view.total,
        "entity_total": view.entity_total(),
        "groups": groups_json
    });

    Ok(ctx.render(&json, || {
        let mut output = banner("DIRECTORY QUERY");
        let scope_label = match &state.scope {
            Scope::All => ALL_SCOPE.to_string(),
            Scope::Region { region } => region.clone(),
            Scope::SubRegion { region, sub_region } => format!("{} / {}", region, sub_region),
        };
        output.push_str(&format!("scope: {}\n", scope_label));
        if !state.search.is_empty() {
            output.push_str(&format!("search: {}\n", state.search));
        }
        output.push_str(&format!(
            "districts: {}\nentities: {}\n\n",
            view.total,
            view.entity_total()
        ));

        if view.is_empty() {
            output.push_str("No districts match.\n");
        }
        for group in &view.groups {
            output.push_str(&format!("{} ({})\n", group.label, group.nodes.len()));
            for node in &group.nodes {
                output.push_str(&format!("  {:<20} {:>5}\n", node.name, node.count()));
            }
        }
        output
    }))
}
