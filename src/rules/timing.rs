use crate::report::{Component, LoadSpeedFacts};
use crate::rules::RuleContext;

const LOAD_SPEED_MAX: f64 = 10.0;

/// Loads slower than this get a recommendation
const SLOW_LOAD_MS: f64 = 3000.0;

/// Loses one point per 50ms of fetch time
pub fn load_speed(ctx: &RuleContext<'_>) -> Component<LoadSpeedFacts> {
    let time = ctx.load_time_ms;

    let mut recommendations = Vec::new();
    if time > SLOW_LOAD_MS {
        recommendations
            .push("Improve page load speed for better user experience and SEO.".to_string());
    }

    Component::new(
        LoadSpeedFacts { time },
        LOAD_SPEED_MAX - time / 50.0,
        LOAD_SPEED_MAX,
        recommendations,
    )
}
