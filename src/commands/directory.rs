//! Directory command handler - Build the district directory from a roster

use crate::cli::DirectoryArgs;
use crate::commands::{banner, CommandContext};
use crate::error::Result;

/// Run the directory command
pub fn run_directory(args: &DirectoryArgs, ctx: &CommandContext) -> Result<String> {
    let directory = ctx.build_directory(&args.entities)?;

    let mut json = serde_json::json!({
        "_type": "directory",
        "districts": directory.nodes().len(),
        "entities": directory.entity_total(),
        "matched": directory.matched_total(),
        "unmatched_count": directory.unmatched().len(),
        "nodes": directory
            .nodes()
            .iter()
            .filter(|n| !(args.non_empty && n.is_empty()))
            .map(|n| n.summary())
            .collect::<Vec<_>>()
    });
    if args.show_unmatched {
        json["unmatched"] = serde_json::to_value(directory.unmatched()).unwrap_or_default();
    }

    Ok(ctx.render(&json, || {
        let mut output = banner("DISTRICT DIRECTORY");
        output.push_str(&format!(
            "districts: {}\nentities: {} ({} matched, {} unmatched)\n\n",
            directory.nodes().len(),
            directory.entity_total(),
            directory.matched_total(),
            directory.unmatched().len()
        ));

        for node in directory.nodes() {
            if args.non_empty && node.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "{:<20} {:>5}  {} / {}\n",
                node.name,
                node.count(),
                node.region,
                node.sub_region
            ));
        }

        if args.show_unmatched && !directory.unmatched().is_empty() {
            output.push_str("\nunmatched:\n");
            for entity in directory.unmatched() {
                output.push_str(&format!(
                    "  - {} ({:?})\n",
                    entity.id, entity.location_key
                ));
            }
        }
        output
    }))
}
