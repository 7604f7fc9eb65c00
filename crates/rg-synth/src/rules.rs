//! Speed-limit and traffic-control classification.
//!
//! An ordered chain of rules, evaluated top to bottom; the first rule that
//! matches decides the waypoint's attributes.  Keeping the chain an explicit
//! slice (rather than nested conditionals) makes the precedence auditable
//! and lets tests probe each rule in isolation.
//!
//! | # | Rule          | Match                                   | Speed  | Control              |
//! |---|---------------|------------------------------------------|--------|----------------------|
//! | 1 | endpoint      | first or last waypoint                   | 15     | none                 |
//! | 2 | highway       | `I-`, `Highway`, or `GA-400` in name     | 70/55  | none                 |
//! | 3 | arterial      | `Parkway` or `Boulevard` in name         | 45     | light every 6th      |
//! | 4 | neighborhood  | within 3 waypoints of either end         | 25     | stop sign every 3rd  |
//! | 5 | mid-route     | progress in (0.2, 0.8)                   | 35/45  | light every 4th      |
//! | — | fallback      | anything else                            | 35     | light/yield/none     |

use serde::{Deserialize, Serialize};

/// Right-of-way control at a waypoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficControl {
    None,
    StopSign,
    Yield,
    TrafficLight,
}

impl std::fmt::Display for TrafficControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrafficControl::None => "none",
            TrafficControl::StopSign => "stop_sign",
            TrafficControl::Yield => "yield",
            TrafficControl::TrafficLight => "traffic_light",
        };
        f.write_str(s)
    }
}

/// Classified road attributes for one waypoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoadAttributes {
    pub speed_limit: u32,
    pub control: TrafficControl,
}

/// Inputs the rules inspect: the synthesized street name plus the
/// waypoint's structural position in the route.
struct RuleCtx<'a> {
    street: &'a str,
    index: usize,
    total: usize,
    progress: f64,
}

type Rule = fn(&RuleCtx<'_>) -> Option<RoadAttributes>;

/// The priority chain.  Order is load-bearing: a `Parkway` within the first
/// three waypoints classifies as an arterial, not a neighborhood street.
const RULES: &[Rule] = &[endpoint, highway, arterial, neighborhood, mid_route];

/// Classify one waypoint.  Total over all inputs; the fallback always
/// produces an answer.
pub fn classify(street: &str, index: usize, total: usize, progress: f64) -> RoadAttributes {
    let ctx = RuleCtx { street, index, total, progress };
    RULES
        .iter()
        .find_map(|rule| rule(&ctx))
        .unwrap_or_else(|| fallback(&ctx))
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Parking areas at either end of the route.
fn endpoint(ctx: &RuleCtx<'_>) -> Option<RoadAttributes> {
    (ctx.index == 0 || ctx.index == ctx.total - 1).then_some(RoadAttributes {
        speed_limit: 15,
        control: TrafficControl::None,
    })
}

/// Interstates and state highways carry no signal or stop control.
fn highway(ctx: &RuleCtx<'_>) -> Option<RoadAttributes> {
    let interstate = ctx.street.contains("I-");
    let marked = interstate || ctx.street.contains("Highway") || ctx.street.contains("GA-400");
    marked.then_some(RoadAttributes {
        speed_limit: if interstate { 70 } else { 55 },
        control: TrafficControl::None,
    })
}

/// Major suburban arterials, signalized at every sixth waypoint.
fn arterial(ctx: &RuleCtx<'_>) -> Option<RoadAttributes> {
    let marked = ctx.street.contains("Parkway") || ctx.street.contains("Boulevard");
    marked.then_some(RoadAttributes {
        speed_limit: 45,
        control: every(ctx.index, 6, TrafficControl::TrafficLight),
    })
}

/// Residential streets near the route ends, stop-signed at every third.
fn neighborhood(ctx: &RuleCtx<'_>) -> Option<RoadAttributes> {
    (ctx.index < 3 || ctx.index > ctx.total - 4).then_some(RoadAttributes {
        speed_limit: 25,
        control: every(ctx.index, 3, TrafficControl::StopSign),
    })
}

/// The middle stretch of the route: city streets vs. unnamed arterials.
fn mid_route(ctx: &RuleCtx<'_>) -> Option<RoadAttributes> {
    (ctx.progress > 0.2 && ctx.progress < 0.8).then_some(RoadAttributes {
        speed_limit: if ctx.street.contains("Street") { 35 } else { 45 },
        control: every(ctx.index, 4, TrafficControl::TrafficLight),
    })
}

/// Regular city streets anywhere else.
fn fallback(ctx: &RuleCtx<'_>) -> RoadAttributes {
    let control = if ctx.index % 5 == 0 {
        TrafficControl::TrafficLight
    } else if ctx.index % 7 == 0 {
        TrafficControl::Yield
    } else {
        TrafficControl::None
    };
    RoadAttributes { speed_limit: 35, control }
}

/// `control` at every `n`-th waypoint, `None` otherwise.
fn every(index: usize, n: usize, control: TrafficControl) -> TrafficControl {
    if index % n == 0 { control } else { TrafficControl::None }
}
