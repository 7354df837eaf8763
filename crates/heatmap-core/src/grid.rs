// File: crates/heatmap-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1-2-5 steps over a numeric domain).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Round half toward +infinity.
#[inline]
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Integer tick indices `[i1, i2]` and increment for `[start, stop]` (start <= stop).
/// A negative increment means "divide by -inc" to avoid precision loss on small steps.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let p = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * p);
        i2 = round_half_up(stop * p);
        if i1 / p < start { i1 += 1.0; }
        if i2 / p > stop { i2 -= 1.0; }
        inc = -p;
    } else {
        let p = 10f64.powf(power) * factor;
        i1 = round_half_up(start / p);
        i2 = round_half_up(stop / p);
        if i1 * p < start { i1 += 1.0; }
        if i2 * p > stop { i2 -= 1.0; }
        inc = p;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced, human-friendly values inside `[start, stop]`.
/// Values follow the direction of the domain: a reversed domain yields descending ticks.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count as f64;
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    (0..n)
        .map(|i| {
            let i = i as f64;
            if reverse { value(i2 - i) } else { value(i1 + i) }
        })
        .collect()
}
