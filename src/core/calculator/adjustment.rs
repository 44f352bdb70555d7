//! Month hours with the manual adjustment applied.

use crate::core::calculator::intervals::{hours_for_month_raw, millis_to_hours, worked_millis};
use crate::models::adjustment::MonthAdjustment;
use crate::models::month::Month;
use crate::models::punch::Punch;
use crate::utils::date::month_range_millis;

/// Worked hours for the month. When an adjustment targets this month, its
/// manual value fully replaces the computed hours before the cutoff; only
/// the remainder after the cutoff is computed from punches. An adjustment
/// for another month, or one whose cutoff does not reach into the month,
/// is treated as absent.
pub fn hours_for_month(
    punches: &[Punch],
    month: Month,
    adjustment: Option<&MonthAdjustment>,
) -> f64 {
    let (start, end) = month_range_millis(month);

    match adjustment {
        Some(adj) if adj.month == month => {
            let cutoff = adj.cutoff_millis.min(end);
            if cutoff <= start {
                // vacuous cutoff
                return hours_for_month_raw(punches, month);
            }
            adj.hours + millis_to_hours(worked_millis(punches, cutoff, end))
        }
        _ => hours_for_month_raw(punches, month),
    }
}
