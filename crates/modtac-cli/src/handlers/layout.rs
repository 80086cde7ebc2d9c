use crate::cli::LayoutArgs;
use crate::context::{label_for, CliContext};
use crate::output;
use anyhow::Context;
use modtac_core::Source;
use modtac_domain::{generate_layout, tile_layout, Item, PlacedItem, Viewport};
use serde::Serialize;

#[derive(Serialize)]
struct LayoutReport {
    seed: u32,
    loop_span: f64,
    count: usize,
    placements: Vec<PlacedItem>,
}

async fn load_items(ctx: &CliContext, args: &LayoutArgs) -> anyhow::Result<Vec<Item>> {
    if let Some(path) = &args.items {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read items file {}", path.display()))?;
        let items: Vec<Item> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid items file {}", path.display()))?;
        return Ok(items);
    }
    if let Some(dir) = &args.dir {
        let urls = ctx.gallery(Some(dir.clone()), None).list().await?;
        return Ok(urls
            .into_iter()
            .map(|url| {
                let label = label_for(&url);
                Item::new(url, label)
            })
            .collect());
    }
    Ok(ctx.placeholder_items(args.count))
}

pub async fn handle(ctx: &CliContext, args: LayoutArgs) -> anyhow::Result<()> {
    let viewport = Viewport::new(args.width, args.height);
    let items = load_items(ctx, &args).await?;
    let seed = args.seed.unwrap_or(ctx.config.layout.seed);
    let loop_span = ctx.loop_span(viewport);

    let placed = generate_layout(&items, viewport, seed, loop_span);
    let placements = if args.tiled {
        tile_layout(&placed, loop_span)
    } else {
        placed
    };

    output::output_success(LayoutReport {
        seed,
        loop_span,
        count: placements.len(),
        placements,
    });
    Ok(())
}
