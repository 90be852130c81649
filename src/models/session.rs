use {
    crate::{
        analysis::compute,
        data::{AnalyticsEvent, AnalyticsSink},
        domain::{
            Channel, ChannelMix, Industry, TrackingSetup, auto_balance_channel_mix,
            validate_channel_mix,
        },
        models::{CalculatorInputs, CalculatorResults},
    },
    std::sync::Arc,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Live calculator state as the form layer sees it.
///
/// Every edit replaces the inputs, recomputes the results from scratch and fires a
/// `calc_updated` event. The session also owns the auto-balance policy: a mix edit is
/// rebalanced only when auto-balance is on and the edited mix fails validation.
pub struct CalculatorSession {
    inputs: CalculatorInputs,
    results: CalculatorResults,
    auto_balance: bool,
    analytics: Arc<dyn AnalyticsSink>,
}

impl CalculatorSession {
    pub fn new(inputs: CalculatorInputs, analytics: Arc<dyn AnalyticsSink>) -> Self {
        let results = compute(&inputs);
        analytics.track(&AnalyticsEvent::calc_updated(&inputs, &results));
        Self {
            inputs,
            results,
            auto_balance: true,
            analytics,
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn results(&self) -> &CalculatorResults {
        &self.results
    }

    pub fn auto_balance(&self) -> bool {
        self.auto_balance
    }

    /// Toggling does not touch the current mix; it only affects later edits.
    pub fn set_auto_balance(&mut self, enabled: bool) {
        self.auto_balance = enabled;
    }

    pub fn set_spend(&mut self, spend: f64) {
        self.update(|inputs| inputs.spend = spend);
    }

    pub fn set_setup(&mut self, setup: TrackingSetup) {
        self.update(|inputs| inputs.setup = setup);
    }

    pub fn set_industry(&mut self, industry: Industry) {
        self.update(|inputs| inputs.industry = industry);
    }

    pub fn set_aov(&mut self, aov: Option<f64>) {
        self.update(|inputs| inputs.aov = aov);
    }

    pub fn set_mix(&mut self, channel: Channel, value: f64) {
        let edited = self.inputs.mix.with(channel, value);
        let mix = if self.auto_balance && !validate_channel_mix(&edited) {
            let balanced = auto_balance_channel_mix(edited, channel);

            #[cfg(debug_assertions)]
            if DF.log_auto_balance && balanced != edited {
                log::info!("Auto-balanced mix after {} edit: {} -> {}", channel, edited, balanced);
            }

            balanced
        } else {
            edited
        };
        self.update(|inputs| inputs.mix = mix);
    }

    /// Inline warning for a mix that does not add up, e.g. `Total: 90.0% (must equal 100%)`.
    pub fn mix_warning(&self) -> Option<String> {
        mix_warning(&self.inputs.mix)
    }

    fn update(&mut self, edit: impl FnOnce(&mut CalculatorInputs)) {
        let mut next = self.inputs;
        edit(&mut next);
        self.inputs = next;
        self.results = compute(&self.inputs);
        self.analytics
            .track(&AnalyticsEvent::calc_updated(&self.inputs, &self.results));
    }
}

pub fn mix_warning(mix: &ChannelMix) -> Option<String> {
    if validate_channel_mix(mix) {
        None
    } else {
        Some(format!("Total: {:.1}% (must equal 100%)", mix.total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::MemoryAnalytics, models::RiskLevel};

    fn session() -> (CalculatorSession, Arc<MemoryAnalytics>) {
        let sink = Arc::new(MemoryAnalytics::new());
        let session = CalculatorSession::new(CalculatorInputs::default(), sink.clone());
        (session, sink)
    }

    #[test]
    fn tracks_initial_compute_and_every_edit() {
        let (mut s, sink) = session();
        assert_eq!(sink.count("calc_updated"), 1);

        s.set_spend(100_000.0);
        s.set_setup(TrackingSetup::ServerSideDedup);
        s.set_industry(Industry::Saas);
        s.set_aov(None);
        assert_eq!(sink.count("calc_updated"), 5);
        assert_eq!(s.results().missed_conversions, None);
    }

    #[test]
    fn over_allocation_is_rebalanced_when_enabled() {
        let (mut s, _) = session();
        s.set_mix(Channel::Meta, 90.0);
        let mix = s.inputs().mix;
        assert_eq!(mix.meta, 90.0);
        assert!((mix.google - 7.5).abs() < 1e-9);
        assert!((mix.other - 2.5).abs() < 1e-9);
        assert_eq!(s.mix_warning(), None);
    }

    #[test]
    fn deficit_is_kept_and_warned_about() {
        let (mut s, _) = session();
        s.set_mix(Channel::Meta, 50.0);
        assert_eq!(s.inputs().mix, ChannelMix::new(50.0, 30.0, 10.0));
        assert_eq!(s.mix_warning().as_deref(), Some("Total: 90.0% (must equal 100%)"));
    }

    #[test]
    fn disabled_auto_balance_keeps_raw_edit() {
        let (mut s, _) = session();
        s.set_auto_balance(false);
        s.set_mix(Channel::Google, 80.0);
        assert_eq!(s.inputs().mix, ChannelMix::new(60.0, 80.0, 10.0));
        assert_eq!(s.mix_warning().as_deref(), Some("Total: 150.0% (must equal 100%)"));
    }

    #[test]
    fn better_tracking_lowers_risk() {
        let (mut s, _) = session();
        assert_eq!(s.results().risk, RiskLevel::High);
        s.set_setup(TrackingSetup::ServerSideDedup);
        // 0.14 * 1.06 = 0.1484
        assert_eq!(s.results().risk, RiskLevel::Medium);
    }
}
