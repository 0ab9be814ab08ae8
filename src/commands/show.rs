//! Show command handler - Resolve a selection against the live roster

use crate::cli::ShowArgs;
use crate::commands::{banner, CommandContext};
use crate::error::{EngineError, Result};
use crate::selection::{Layout, SelectionCoordinator};

/// Run the show command
pub fn run_show(args: &ShowArgs, ctx: &CommandContext) -> Result<String> {
    let directory = ctx.build_directory(&args.entities)?;
    let node = directory
        .node(&args.district)
        .ok_or_else(|| EngineError::UnknownDistrict {
            name: args.district.clone(),
        })?;

    let mut coordinator = SelectionCoordinator::new();
    coordinator.pick(&args.id, node.entities());
    let record = coordinator.current(node.entities());

    let layout = Layout::for_width(args.width, ctx.config.layout.compact_breakpoint);
    let panes = coordinator.panes(layout, node.entities());

    let json = serde_json::json!({
        "_type": "selection",
        "district": node.name,
        "selection": coordinator.state(),
        "record": record,
        "layout": layout,
        "panes": panes
    });

    Ok(ctx.render(&json, || {
        let mut output = banner("SELECTION");
        output.push_str(&format!("district: {}\n", node.name));
        output.push_str(&format!(
            "layout: {:?} (master: {}, detail: {})\n\n",
            layout, panes.master, panes.detail
        ));
        match record {
            Some(entity) => {
                output.push_str(&format!("id: {}\n", entity.id));
                output.push_str(&format!("locationKey: {}\n", entity.location_key));
                for key in entity.attributes.keys() {
                    output.push_str(&format!("{}: {}\n", key, entity.field(key)));
                }
            }
            None => {
                output.push_str(&format!(
                    "No record with id {:?} in {}; nothing selected.\n",
                    args.id, node.name
                ));
            }
        }
        output
    }))
}
