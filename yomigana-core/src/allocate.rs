//! Proportional distribution of mora across ideographic runs

/// Distributes `mora` over runs with the given character counts.
///
/// Runs are processed in order. Every run except the last takes its
/// length-proportional share of the mora count, rounded, floored to one,
/// and shrunk so that each later run still has at least one mora in
/// reserve; the last run absorbs everything left. The bias toward longer
/// runs and the last-run remainder rule are a deliberate, reproducible
/// approximation: true morpheme boundaries inside a compound are not
/// recoverable from mora counts alone.
///
/// Returns one entry per run. Entries are non-empty whenever the mora
/// count is at least the run count; with fewer mora than runs the tail
/// entries come out empty and the caller leaves those runs unannotated.
/// The concatenation of all entries always equals the joined mora list.
pub fn allocate_mora(run_lens: &[usize], mora: &[String]) -> Vec<String> {
    let total_chars: usize = run_lens.iter().sum();
    let total_mora = mora.len();
    let mut allocations = Vec::with_capacity(run_lens.len());
    let mut used = 0usize;
    for (i, &len) in run_lens.iter().enumerate() {
        let share = if i + 1 == run_lens.len() {
            total_mora.saturating_sub(used).max(1)
        } else {
            let proportional =
                (len as f64 / total_chars as f64 * total_mora as f64).round() as usize;
            let mut share = proportional.max(1);
            // Each remaining run must keep at least one mora.
            let reserved = run_lens.len() - 1 - i;
            if used + share + reserved > total_mora {
                share = (total_mora as isize - used as isize - reserved as isize).max(1) as usize;
            }
            share
        };
        let start = used.min(total_mora);
        let end = (used + share).min(total_mora);
        allocations.push(mora[start..end].concat());
        used += share;
    }
    allocations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mora(units: &[&str]) -> Vec<String> {
        units.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn single_run_takes_everything() {
        let allocated = allocate_mora(&[2], &mora(&["が", "っこ", "う"]));
        assert_eq!(allocated, vec!["がっこう"]);
    }

    #[test]
    fn proportional_split_favors_longer_runs() {
        // 1 + 2 characters over 6 mora: round(1/3 * 6) = 2, remainder 4.
        let units = mora(&["あ", "い", "う", "え", "お", "か"]);
        let allocated = allocate_mora(&[1, 2], &units);
        assert_eq!(allocated, vec!["あい", "うえおか"]);
    }

    #[test]
    fn every_run_gets_at_least_one_while_mora_remain() {
        let units = mora(&["あ", "い", "う"]);
        let allocated = allocate_mora(&[5, 1, 1], &units);
        assert_eq!(allocated, vec!["あ", "い", "う"]);
    }

    #[test]
    fn last_run_absorbs_rounding_drift() {
        let units = mora(&["あ", "い", "う", "え", "お"]);
        let allocated = allocate_mora(&[1, 1], &units);
        // round(1/2 * 5) = 3 for the first; the rest flows to the last.
        assert_eq!(allocated, vec!["あいう", "えお"]);
    }

    #[test]
    fn fewer_mora_than_runs_leaves_empty_tails() {
        let units = mora(&["あ"]);
        let allocated = allocate_mora(&[1, 1, 1], &units);
        assert_eq!(allocated, vec!["あ", "", ""]);
    }

    #[test]
    fn concatenation_equals_input() {
        let units = mora(&["ふ", "り", "が", "な"]);
        for lens in [&[1usize, 2][..], &[2, 1], &[1, 1, 1], &[4]] {
            let allocated = allocate_mora(lens, &units);
            assert_eq!(allocated.len(), lens.len());
            assert_eq!(allocated.concat(), "ふりがな", "lens {lens:?}");
        }
    }
}
