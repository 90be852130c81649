use {
    crate::{
        CalculatorArgs, Cli, Command,
        app::report,
        config::{IntegrationSettings, constants::defaults},
        data::{
            AnalyticsEvent, AnalyticsSink, LogAnalytics, SessionStore, StoredResults, UtmStore,
            default_sinks, submit_lead,
        },
        domain::Channel,
        models::{CalculatorInputs, CalculatorSession, LeadData},
    },
    anyhow::{Result, bail},
    std::sync::Arc,
};

/// Replays the CLI flags as form edits on a fresh session.
pub fn build_session(args: &CalculatorArgs, analytics: Arc<dyn AnalyticsSink>) -> CalculatorSession {
    let inputs = CalculatorInputs {
        spend: args.spend,
        setup: args.setup,
        industry: args.industry,
        aov: if args.no_aov {
            None
        } else {
            Some(args.aov.unwrap_or(defaults::AOV))
        },
        ..CalculatorInputs::default()
    };

    let mut session = CalculatorSession::new(inputs, analytics);
    session.set_auto_balance(!args.no_auto_balance);

    let edits = [
        (Channel::Meta, args.meta),
        (Channel::Google, args.google),
        (Channel::Other, args.other),
    ];
    for (channel, value) in edits {
        if let Some(value) = value {
            session.set_mix(channel, value);
        }
    }
    session
}

pub async fn run(cli: Cli) -> Result<()> {
    let analytics: Arc<dyn AnalyticsSink> = Arc::new(LogAnalytics);

    match cli.command {
        Command::Compute { calc, json } => {
            let session = build_session(&calc, analytics);
            if json {
                let out = serde_json::json!({
                    "inputs": session.inputs(),
                    "results": session.results(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", report::render_results(session.inputs(), session.results()));
            }
        }
        Command::Utm { url } => {
            let store = UtmStore::default();
            let utms = store.init_tracking(&url);
            analytics.track(&AnalyticsEvent::PageView { path: url });
            println!("{}", serde_json::to_string_pretty(&utms)?);
        }
        Command::Lead {
            calc,
            name,
            email,
            consent,
            page_url,
        } => {
            let session = build_session(&calc, analytics.clone());
            let lead = LeadData {
                name,
                email,
                consent,
                inputs: *session.inputs(),
                results: *session.results(),
            };

            let utms = UtmStore::default().load();
            let sinks = default_sinks(&IntegrationSettings::from_env())?;
            let outcome = submit_lead(&sinks, &lead, &utms, &page_url).await?;

            if !outcome.success {
                if outcome.errors.is_empty() {
                    bail!("Submission Error: Something went wrong. Please try again.");
                }
                bail!("Submission Error: {}", outcome.errors.join(", "));
            }

            analytics.track(&AnalyticsEvent::lead_submitted(&lead.inputs, &lead.results));

            if let Err(e) = SessionStore::default().save(&StoredResults::from(&lead.results)) {
                log::warn!("Unable to store results for the follow-up page: {:#}", e);
            }

            println!("Success! Check your inbox for the full benchmark report.");
            println!("{}", report::render_results(&lead.inputs, &lead.results));
        }
        Command::Last => match SessionStore::default().load()? {
            Some(stored) => println!("{}", report::render_stored(&stored)),
            None => println!("No results stored yet. Submit a lead first."),
        },
        Command::Tables => println!("{}", report::render_tables()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::MemoryAnalytics, domain::ChannelMix};
    use clap::Parser;

    fn calc_args(argv: &[&str]) -> CalculatorArgs {
        let mut full = vec!["attribution-loss", "compute"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Command::Compute { calc, .. } => calc,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn no_flags_reproduce_form_defaults() {
        let session = build_session(&calc_args(&[]), Arc::new(MemoryAnalytics::new()));
        assert_eq!(*session.inputs(), CalculatorInputs::default());
    }

    #[test]
    fn mix_flags_go_through_auto_balance() {
        let session = build_session(&calc_args(&["--meta", "90"]), Arc::new(MemoryAnalytics::new()));
        let mix = session.inputs().mix;
        assert_eq!(mix.meta, 90.0);
        assert!((mix.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn auto_balance_can_be_disabled() {
        let session = build_session(
            &calc_args(&["--meta", "90", "--no-auto-balance"]),
            Arc::new(MemoryAnalytics::new()),
        );
        assert_eq!(session.inputs().mix, ChannelMix::new(90.0, 30.0, 10.0));
    }

    #[test]
    fn enum_flags_are_validated_at_the_boundary() {
        let args = calc_args(&["--setup", "pixelOnly", "--industry", "finance", "--no-aov"]);
        let session = build_session(&args, Arc::new(MemoryAnalytics::new()));
        assert_eq!(session.results().match_rate, 0.62);
        assert_eq!(session.results().missed_conversions, None);

        let bad = Cli::try_parse_from(["attribution-loss", "compute", "--setup", "capi"]);
        assert!(bad.is_err());
    }
}
