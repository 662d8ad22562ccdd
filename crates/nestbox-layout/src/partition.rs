// ABOUTME: Splits a parent's axis span among sibling size specs.
// ABOUTME: Absolute reservations come off the top, relative weights share the rest.

use nestbox_core::SizeSpec;

/// Pixel span for each entry of `specs`, in the same order.
///
/// Absolute children get exactly their declared pixels. Relative children share
/// what is left of `wiggle_room` in proportion to their weights, so the spans sum
/// to `wiggle_room` as long as the reservations fit.
pub fn partition(wiggle_room: f64, specs: &[SizeSpec]) -> Vec<f64> {
    let reserved: f64 = specs
        .iter()
        .map(|spec| match spec {
            SizeSpec::Absolute(px) => f64::from(*px),
            SizeSpec::Relative(_) => 0.0,
        })
        .sum();

    let mut pool = wiggle_room - reserved;
    if pool < 0.0 {
        tracing::warn!(
            wiggle_room,
            reserved,
            "Absolute sizes exceed available space, relative siblings get nothing"
        );
        pool = 0.0;
    }

    let weights: Vec<Option<f64>> = specs
        .iter()
        .map(|spec| match spec {
            SizeSpec::Relative(w) => Some(usable_weight(*w)),
            SizeSpec::Absolute(_) => None,
        })
        .collect();
    let size_sum: f64 = weights.iter().flatten().sum();
    let relative_count = weights.iter().flatten().count();

    specs
        .iter()
        .zip(&weights)
        .map(|(spec, weight)| match (spec, weight) {
            (SizeSpec::Absolute(px), _) => f64::from(*px),
            (_, Some(w)) if size_sum > 0.0 => (w / size_sum) * pool,
            // All weights zero: split evenly
            _ => pool / relative_count as f64,
        })
        .collect()
}

/// Negative and non-finite weights count as zero
fn usable_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        tracing::warn!(weight, "Ignoring unusable relative weight");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R1: SizeSpec = SizeSpec::Relative(1.0);

    #[test]
    fn equal_weights_split_evenly() {
        assert_eq!(partition(100.0, &[R1, R1]), vec![50.0, 50.0]);
    }

    #[test]
    fn weights_are_proportional() {
        assert_eq!(partition(100.0, &[SizeSpec::Relative(3.0), R1]), vec![75.0, 25.0]);
        assert_eq!(
            partition(100.0, &[SizeSpec::Relative(2.0), R1, R1]),
            vec![50.0, 25.0, 25.0]
        );
    }

    #[test]
    fn absolute_reserved_before_relative() {
        assert_eq!(partition(100.0, &[SizeSpec::Absolute(60), R1]), vec![60.0, 40.0]);
        assert_eq!(
            partition(100.0, &[R1, SizeSpec::Absolute(20), SizeSpec::Relative(3.0)]),
            vec![20.0, 20.0, 60.0]
        );
    }

    #[test]
    fn only_absolute_children() {
        assert_eq!(
            partition(100.0, &[SizeSpec::Absolute(30), SizeSpec::Absolute(50)]),
            vec![30.0, 50.0]
        );
    }

    #[test]
    fn zero_weights_share_pool_evenly() {
        let spans = partition(90.0, &[SizeSpec::Relative(0.0), SizeSpec::Absolute(30), SizeSpec::Relative(0.0)]);
        assert_eq!(spans, vec![30.0, 30.0, 30.0]);
    }

    #[test]
    fn nan_weight_counts_as_zero() {
        let spans = partition(100.0, &[SizeSpec::Relative(f64::NAN), R1]);
        assert_eq!(spans, vec![0.0, 100.0]);
    }

    #[test]
    fn overcommitted_reservations_starve_relatives() {
        let spans = partition(100.0, &[SizeSpec::Absolute(120), R1]);
        assert_eq!(spans, vec![120.0, 0.0]);
    }

    #[test]
    fn empty_input() {
        assert!(partition(100.0, &[]).is_empty());
    }
}
