//! The generation loop: routines → legs → synthesized routes → sink.

use rg_config::DailyRoutine;
use rg_output::{RouteSink, WriteOutcome};
use rg_synth::interpolate;

/// Counters for one generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub drivers: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed_drivers: usize,
}

/// Generate and persist every leg of every routine.
///
/// Drivers are independent: a failure (unknown stop id, sink I/O error)
/// aborts that driver's remaining legs, is logged, and the run continues
/// with the next driver.  The caller decides whether failures are fatal.
pub fn generate_all(routines: &[DailyRoutine], sink: &mut dyn RouteSink) -> GenerationSummary {
    let mut summary = GenerationSummary {
        drivers: routines.len(),
        ..GenerationSummary::default()
    };

    for routine in routines {
        log::info!("generating routes for {}", routine.driver_name);
        match generate_driver(routine, sink) {
            Ok((written, skipped)) => {
                summary.written += written;
                summary.skipped += skipped;
            }
            Err(e) => {
                log::error!("{} ({}): {e:#}", routine.driver_name, routine.driver_id);
                summary.failed_drivers += 1;
            }
        }
    }

    summary
}

/// Generate one driver's legs.  Returns `(written, skipped)` counts.
fn generate_driver(
    routine: &DailyRoutine,
    sink: &mut dyn RouteSink,
) -> anyhow::Result<(usize, usize)> {
    let mut written = 0;
    let mut skipped = 0;

    for leg in routine.legs()? {
        let route = interpolate(leg.from, leg.to, &leg.route_name, &leg.description);
        match sink.write_if_absent(&leg.route_name, &route)? {
            WriteOutcome::Written => {
                log::debug!("wrote {} ({} waypoints)", leg.route_name, route.waypoints.len());
                written += 1;
            }
            WriteOutcome::Skipped => {
                log::debug!("{} already exists, skipped", leg.route_name);
                skipped += 1;
            }
        }
    }

    Ok((written, skipped))
}
