use crate::cli::{CaptionArgs, IntroArgs};
use crate::context::CliContext;
use crate::output;
use modtac_domain::{IntroPhase, IntroSequencer, IntroTimings, TypePhase, Typewriter};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct CaptionReport {
    index: usize,
    phase: TypePhase,
    text: String,
    cursor_visible: bool,
}

#[derive(Serialize)]
struct IntroReport {
    phase: IntroPhase,
    exit_start_ms: u64,
    done_at_ms: u64,
}

pub fn handle_caption(ctx: &CliContext, args: CaptionArgs) -> anyhow::Result<()> {
    let elapsed = Duration::from_millis(args.elapsed_ms);
    let mut writer = Typewriter::from_config(&ctx.config.typewriter);
    writer.tick(elapsed);

    output::output_success(CaptionReport {
        index: writer.index(),
        phase: writer.phase(),
        text: writer.text().to_string(),
        cursor_visible: writer.cursor_visible(elapsed),
    });
    Ok(())
}

pub fn handle_intro(ctx: &CliContext, args: IntroArgs) -> anyhow::Result<()> {
    let mut config = ctx.config.intro.clone();
    config.reduced_motion |= args.reduced_motion;

    let at = Duration::from_millis(args.at_ms);
    let mut sequencer = IntroSequencer::new(IntroTimings::from_config(&config));
    // A readiness report from the future is not known yet.
    if let Some(ready) = args.ready_ms.map(Duration::from_millis).filter(|r| *r <= at) {
        sequencer.video_ready(ready);
    }

    output::output_success(IntroReport {
        phase: sequencer.phase_at(at),
        exit_start_ms: sequencer.exit_start().as_millis() as u64,
        done_at_ms: sequencer.done_at().as_millis() as u64,
    });
    Ok(())
}
