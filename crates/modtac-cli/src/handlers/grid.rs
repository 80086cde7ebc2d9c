use crate::cli::ColumnsArgs;
use crate::context::CliContext;
use crate::output;
use modtac_domain::{max_columns_for_width, pick_columns};
use serde::Serialize;

#[derive(Serialize)]
struct ColumnsReport {
    count: usize,
    min_cols: usize,
    max_cols: usize,
    columns: usize,
    rows: usize,
}

pub fn handle(ctx: &CliContext, args: ColumnsArgs) -> anyhow::Result<()> {
    let grid = &ctx.config.grid;
    let min_cols = args.min_cols.unwrap_or(grid.min_cols);
    let max_cols = match args.width {
        Some(width) => max_columns_for_width(width, grid.min_tile_px, min_cols, grid.max_cols),
        None => args.max_cols.unwrap_or(grid.max_cols),
    };

    let columns = pick_columns(args.count, min_cols, max_cols);
    let rows = if columns == 0 {
        0
    } else {
        args.count.div_ceil(columns)
    };

    output::output_success(ColumnsReport {
        count: args.count,
        min_cols,
        max_cols,
        columns,
        rows,
    });
    Ok(())
}
