use crate::{
    config::{MAX_GAP, constants::recovery},
    models::{CalculatorInputs, CalculatorResults, RiskLevel},
    utils::round_half_up,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Maps one set of calculator inputs to the full set of derived figures.
///
/// Pure and total: any spend or AOV is accepted, the mix is used as given even when it
/// does not sum to 100, and the adjusted gap is clamped into [0, MAX_GAP].
pub fn compute(inputs: &CalculatorInputs) -> CalculatorResults {
    let match_rate = inputs.setup.match_rate();
    let base_gap = 1.0 - match_rate;

    let channel_adj = inputs.mix.channel_adjustment();
    let adj_gap = (base_gap * channel_adj).clamp(0.0, MAX_GAP);

    let invisible_revenue = inputs.spend * adj_gap;

    let missed_conversions = match inputs.aov {
        Some(aov) if aov > 0.0 => Some(round_half_up(invisible_revenue / aov) as i64),
        _ => None,
    };

    let peer = inputs.industry.peer_average();
    let peer_delta = peer - match_rate;

    let results = CalculatorResults {
        match_rate,
        base_gap,
        adj_gap,
        peer,
        peer_delta,
        invisible_revenue,
        missed_conversions,
        risk: RiskLevel::from_adj_gap(adj_gap),
        recoverable_low: invisible_revenue * recovery::LOW_FACTOR,
        recoverable_high: invisible_revenue * recovery::HIGH_FACTOR,
    };

    #[cfg(debug_assertions)]
    if DF.log_calculations {
        log::debug!(
            "compute [{}] -> adj_gap={:.4} invisible={:.2} risk={}",
            inputs,
            results.adj_gap,
            results.invisible_revenue,
            results.risk
        );
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChannelMix, Industry, TrackingSetup};
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn inputs(mix: ChannelMix, setup: TrackingSetup, aov: Option<f64>) -> CalculatorInputs {
        CalculatorInputs {
            spend: 50_000.0,
            mix,
            setup,
            industry: Industry::Ecommerce,
            aov,
        }
    }

    #[test]
    fn default_scenario() {
        let r = compute(&CalculatorInputs::default());
        assert_eq!(r.match_rate, 0.72);
        assert!((r.base_gap - 0.28).abs() < EPS);
        assert!((r.adj_gap - 0.2968).abs() < EPS);
        assert!((r.invisible_revenue - 14_840.0).abs() < 1e-6);
        assert_eq!(r.missed_conversions, Some(124));
        assert_eq!(r.risk, RiskLevel::High);
        assert_eq!(r.peer, 0.72);
        assert_eq!(r.peer_delta, 0.0);
        assert!((r.recoverable_low - 8_904.0).abs() < 1e-6);
        assert!((r.recoverable_high - 13_356.0).abs() < 1e-6);
    }

    #[test]
    fn match_and_base_gap_come_straight_from_the_table() {
        for setup in TrackingSetup::iter() {
            let r = compute(&inputs(ChannelMix::new(60.0, 30.0, 10.0), setup, None));
            assert_eq!(r.match_rate, setup.match_rate());
            assert_eq!(r.base_gap, 1.0 - setup.match_rate());
        }
    }

    #[test]
    fn adj_gap_is_clamped_for_extreme_mixes() {
        let extremes = [
            ChannelMix::new(1000.0, 0.0, 0.0),
            ChannelMix::new(0.0, 0.0, 0.0),
            ChannelMix::new(-500.0, 0.0, 0.0),
            ChannelMix::new(300.0, 300.0, 300.0),
        ];
        for mix in extremes {
            for setup in TrackingSetup::iter() {
                let r = compute(&inputs(mix, setup, Some(50.0)));
                assert!((0.0..=MAX_GAP).contains(&r.adj_gap), "{mix} {setup}: {}", r.adj_gap);
            }
        }
        let capped = compute(&inputs(ChannelMix::new(1000.0, 0.0, 0.0), TrackingSetup::PixelOnly, None));
        assert_eq!(capped.adj_gap, MAX_GAP);
        assert_eq!(capped.invisible_revenue, 50_000.0 * MAX_GAP);
    }

    #[test]
    fn invisible_revenue_is_spend_times_gap() {
        for spend in [0.0, 10_000.0, 123_456.78, 500_000.0, 2_000_000.0] {
            let mut i = CalculatorInputs::default();
            i.spend = spend;
            let r = compute(&i);
            assert_eq!(r.invisible_revenue, spend * r.adj_gap);
            assert!(r.invisible_revenue >= 0.0);
        }
    }

    #[test]
    fn missed_conversions_need_a_positive_aov() {
        let mix = ChannelMix::new(60.0, 30.0, 10.0);
        for aov in [None, Some(0.0), Some(-25.0)] {
            let r = compute(&inputs(mix, TrackingSetup::Ga4PlusPixels, aov));
            assert_eq!(r.missed_conversions, None, "aov={aov:?}");
        }
    }

    #[test]
    fn missed_conversions_rounds_to_nearest() {
        // spend chosen so that invisible revenue is 8_400 (0.2968 * spend).
        let mut i = CalculatorInputs::default();
        i.spend = 8_400.0 / 0.2968;
        let r = compute(&i);
        assert!((r.invisible_revenue - 8_400.0).abs() < 1e-6);
        assert_eq!(r.missed_conversions, Some(70));
    }

    #[test]
    fn peer_delta_can_be_negative() {
        let mut i = CalculatorInputs::default();
        i.setup = TrackingSetup::ServerSideDedup;
        i.industry = Industry::Igaming;
        let r = compute(&i);
        assert!((r.peer_delta - (0.65 - 0.86)).abs() < EPS);
        assert!(r.peer_delta < 0.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let i = CalculatorInputs {
            spend: 40_000.0,
            mix: ChannelMix::new(90.0, 30.0, 10.0),
            setup: TrackingSetup::PixelOnly,
            industry: Industry::Finance,
            aov: Some(80.0),
        };
        let before = i;
        let _ = compute(&i);
        assert_eq!(i, before);
    }
}
