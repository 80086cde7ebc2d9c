use crate::cli::TelemetryArgs;
use crate::context::CliContext;
use crate::output;
use modtac_domain::{hud_lines, HudLine, ScrollTracker, Telemetry, Viewport};
use serde::Serialize;

#[derive(Serialize)]
struct TelemetryReport {
    offset: f64,
    in_section: bool,
    telemetry: Telemetry,
    hud: Vec<HudLine>,
}

pub fn handle(ctx: &CliContext, args: TelemetryArgs) -> anyhow::Result<()> {
    let viewport = Viewport::new(args.width, args.height);
    if !viewport.is_usable() {
        output::output_error("Viewport width and height must be positive");
    }

    let runway_vh = args.runway_vh.unwrap_or(ctx.config.layout.height_vh);
    let tracker = ScrollTracker::new(
        ctx.loop_span(viewport),
        viewport.height,
        runway_vh,
        &ctx.config.scroll,
    );

    let reports = args
        .offsets
        .into_iter()
        .map(|offset| {
            let telemetry = tracker.update(offset);
            TelemetryReport {
                offset,
                in_section: tracker.in_section(offset, viewport.height),
                telemetry,
                hud: hud_lines(Some(&telemetry), &[]),
            }
        })
        .collect();
    output::output_list(reports);
    Ok(())
}
