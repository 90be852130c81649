use {
    crate::{
        config::constants::{gap_multiplier, mix},
        domain::InputError,
    },
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Meta,
    Google,
    Other,
}

impl Channel {
    pub const fn gap_multiplier(self) -> f64 {
        match self {
            Self::Meta => gap_multiplier::META,
            Self::Google => gap_multiplier::GOOGLE,
            Self::Other => gap_multiplier::OTHER,
        }
    }

    /// The two channels that are not `self`, in declaration order.
    pub const fn others(self) -> [Channel; 2] {
        match self {
            Self::Meta => [Self::Google, Self::Other],
            Self::Google => [Self::Meta, Self::Other],
            Self::Other => [Self::Meta, Self::Google],
        }
    }

    pub fn parse(text: &str) -> Result<Self, InputError> {
        Self::from_str(text.trim()).map_err(|_| InputError::UnknownChannel(text.to_string()))
    }
}

/// Share of spend per channel, in percent (0..100 each, nominally summing to 100).
/// Fields are independently mutable; nothing here enforces the sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ChannelMix {
    pub meta: f64,
    pub google: f64,
    pub other: f64,
}

impl ChannelMix {
    pub const fn new(meta: f64, google: f64, other: f64) -> Self {
        Self {
            meta,
            google,
            other,
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Meta => self.meta,
            Channel::Google => self.google,
            Channel::Other => self.other,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Meta => self.meta = value,
            Channel::Google => self.google = value,
            Channel::Other => self.other = value,
        }
    }

    /// Returns a copy with one channel replaced.
    pub fn with(mut self, channel: Channel, value: f64) -> Self {
        self.set(channel, value);
        self
    }

    pub fn total(&self) -> f64 {
        self.meta + self.google + self.other
    }

    /// Weighted average of the channel gap multipliers, weighted by share.
    /// Lands outside [0.90, 1.15] when the mix does not sum to 100.
    pub fn channel_adjustment(&self) -> f64 {
        (self.meta / 100.0) * Channel::Meta.gap_multiplier()
            + (self.google / 100.0) * Channel::Google.gap_multiplier()
            + (self.other / 100.0) * Channel::Other.gap_multiplier()
    }
}

impl fmt::Display for ChannelMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "meta={}|google={}|other={}",
            self.meta, self.google, self.other
        )
    }
}

/// True when the mix sums to 100 within rounding tolerance.
pub fn validate_channel_mix(mix: &ChannelMix) -> bool {
    (mix.total() - mix::TARGET_TOTAL).abs() < mix::TOLERANCE
}

/// Pulls an over-allocated mix back to 100 without touching `changed`.
///
/// Only excess is corrected: a mix totalling 100 or less comes back unchanged, a deficit
/// is never topped up. The excess is taken from the other two channels in proportion to
/// their current shares, each floored at zero. Flooring can leave the total above 100;
/// there is no second pass.
///
/// When the other two channels are both zero there is nothing to take from, so the mix
/// snaps to 90 for `changed` and 5 for each of the others.
pub fn auto_balance_channel_mix(current: ChannelMix, changed: Channel) -> ChannelMix {
    let total = current.total();
    if total <= mix::TARGET_TOTAL {
        return current;
    }

    let excess = total - mix::TARGET_TOTAL;
    let others = changed.others();
    let others_total: f64 = others.iter().map(|&c| current.get(c)).sum();

    if others_total == 0.0 {
        let mut fallback = current;
        fallback.set(changed, mix::FALLBACK_PINNED);
        for channel in others {
            fallback.set(channel, mix::FALLBACK_REST);
        }
        return fallback;
    }

    let mut balanced = current;
    for channel in others {
        let value = current.get(channel);
        let proportion = value / others_total;
        balanced.set(channel, (value - excess * proportion).max(0.0));
    }
    balanced
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn validates_exact_and_near_hundred() {
        assert!(validate_channel_mix(&ChannelMix::new(60.0, 30.0, 10.0)));
        assert!(validate_channel_mix(&ChannelMix::new(33.33, 33.33, 33.35)));
        assert!(validate_channel_mix(&ChannelMix::new(60.0, 30.0, 10.05)));
        assert!(!validate_channel_mix(&ChannelMix::new(60.0, 30.0, 5.0)));
        assert!(!validate_channel_mix(&ChannelMix::new(60.0, 30.0, 10.2)));
    }

    #[test]
    fn proportional_reduction_keeps_changed_field() {
        let out = auto_balance_channel_mix(ChannelMix::new(90.0, 30.0, 10.0), Channel::Meta);
        assert_eq!(out.meta, 90.0);
        assert!((out.google - 7.5).abs() < EPS);
        assert!((out.other - 2.5).abs() < EPS);
        assert!((out.total() - 100.0).abs() < EPS);
    }

    #[test]
    fn reduces_the_right_pair_for_google() {
        let out = auto_balance_channel_mix(ChannelMix::new(50.0, 70.0, 30.0), Channel::Google);
        assert_eq!(out.google, 70.0);
        // excess 50 split 50:30 over meta/other
        assert!((out.meta - 18.75).abs() < EPS);
        assert!((out.other - 11.25).abs() < EPS);
    }

    #[test]
    fn deficit_is_left_alone() {
        let input = ChannelMix::new(50.0, 20.0, 20.0);
        assert_eq!(auto_balance_channel_mix(input, Channel::Meta), input);
        let exact = ChannelMix::new(60.0, 30.0, 10.0);
        assert_eq!(auto_balance_channel_mix(exact, Channel::Other), exact);
    }

    #[test]
    fn zero_others_fall_back_to_fixed_split() {
        let out = auto_balance_channel_mix(ChannelMix::new(0.0, 0.0, 140.0), Channel::Other);
        assert_eq!(out, ChannelMix::new(5.0, 5.0, 90.0));

        let out = auto_balance_channel_mix(ChannelMix::new(120.0, 0.0, 0.0), Channel::Meta);
        assert_eq!(out, ChannelMix::new(90.0, 5.0, 5.0));
    }

    #[test]
    fn flooring_never_goes_negative_and_skips_second_pass() {
        let out = auto_balance_channel_mix(ChannelMix::new(150.0, 10.0, 10.0), Channel::Meta);
        assert_eq!(out, ChannelMix::new(150.0, 0.0, 0.0));
        assert!(out.total() > 100.0);
    }

    #[test]
    fn channel_adjustment_of_default_mix() {
        let adj = ChannelMix::new(60.0, 30.0, 10.0).channel_adjustment();
        assert!((adj - 1.06).abs() < EPS);
    }

    #[test]
    fn channel_keys() {
        assert_eq!(Channel::parse("google").unwrap(), Channel::Google);
        assert_eq!(Channel::Meta.others(), [Channel::Google, Channel::Other]);
        assert!(Channel::parse("tiktok").is_err());
    }
}
