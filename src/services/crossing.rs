/// Where a swept series sits relative to a target when no crossing exists.
/// Kept separate from the solver so callers decide how to present "always
/// profitable" versus "never profitable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSide {
    AboveTarget,
    BelowTarget,
    CrossesTarget,
}

/// Locates the first point where the selected value crosses `target`,
/// scanning adjacent row pairs in sweep order. Returns the linearly
/// interpolated position on the sweep axis, or `None` when no pair brackets
/// the target.
///
/// A value exactly on the target counts as a crossing at that row. A flat
/// segment sitting on the target resolves to its start. The scan stops at
/// the first match; later crossings in a non-monotonic series are never
/// reported.
pub fn find_crossing<T>(
    rows: &[T],
    axis: impl Fn(&T) -> f64,
    value: impl Fn(&T) -> f64,
    target: f64,
) -> Option<f64> {
    for pair in rows.windows(2) {
        let (x0, v0) = (axis(&pair[0]), value(&pair[0]));
        let (x1, v1) = (axis(&pair[1]), value(&pair[1]));

        let crosses = (v0 >= target && v1 < target) || (v0 <= target && v1 > target);
        if !crosses {
            continue;
        }
        if v0 == v1 {
            return Some(x0);
        }
        return Some(x0 + (target - v0) * (x1 - x0) / (v1 - v0));
    }
    None
}

/// Classifies a series with respect to `target`. Only meaningful as a
/// companion to a `find_crossing` miss; a mixed series reports
/// `CrossesTarget`.
pub fn series_side<T>(rows: &[T], value: impl Fn(&T) -> f64, target: f64) -> SeriesSide {
    let mut any_below = false;
    let mut any_above = false;
    for row in rows {
        let v = value(row);
        if v < target {
            any_below = true;
        }
        if v > target {
            any_above = true;
        }
    }
    match (any_above, any_below) {
        (true, false) => SeriesSide::AboveTarget,
        (false, true) => SeriesSide::BelowTarget,
        _ => SeriesSide::CrossesTarget,
    }
}
