//! Tests for layering CLI settings over environment and defaults.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface fixture mistakes"
)]
use clap::Parser;
use rstest::rstest;
use rule_compose::OptionsMerge;
use rule_compose_cli::cli::Args;
use rule_compose_cli::settings::Settings;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(args).expect("arguments parse")
}

fn load_in_jail(env: &[(&str, &str)], args: &[&str]) -> Settings {
    let mut loaded = None;
    figment::Jail::expect_with(|jail| {
        for (key, value) in env {
            jail.set_env(key, value);
        }
        let settings =
            Settings::load(&parse(args)).map_err(|err| figment::Error::from(err.to_string()))?;
        loaded = Some(settings);
        Ok(())
    });
    loaded.expect("jail closure ran")
}

#[rstest]
#[case::defaults(&[], &["rule-compose", "base.json"], OptionsMerge::Replace, false)]
#[case::environment(
    &[("RULE_COMPOSE_OPTIONS_MERGE", "keyed"), ("RULE_COMPOSE_COMPACT", "true")],
    &["rule-compose", "base.json"],
    OptionsMerge::Keyed,
    true
)]
#[case::flags_over_environment(
    &[("RULE_COMPOSE_OPTIONS_MERGE", "keyed")],
    &["rule-compose", "--options-merge", "replace", "--compact", "base.json"],
    OptionsMerge::Replace,
    true
)]
#[case::absent_flags_keep_environment(
    &[("RULE_COMPOSE_COMPACT", "true")],
    &["rule-compose", "base.json", "patch.json"],
    OptionsMerge::Replace,
    true
)]
fn settings_layer_in_precedence_order(
    #[case] env: &[(&str, &str)],
    #[case] args: &[&str],
    #[case] options_merge: OptionsMerge,
    #[case] compact: bool,
) {
    let settings = load_in_jail(env, args);
    assert_eq!(settings, Settings { options_merge, compact });
}

#[rstest]
fn bad_environment_values_are_reported() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("RULE_COMPOSE_OPTIONS_MERGE", "concatenate");
        let result = Settings::load(&parse(&["rule-compose", "base.json"]));
        assert!(result.is_err(), "unknown policy must be rejected");
        Ok(())
    });
}

#[rstest]
fn unknown_flag_values_are_rejected() {
    let result = Args::try_parse_from(["rule-compose", "--options-merge", "merge", "a.json"]);
    assert!(result.is_err());
}

#[rstest]
fn inputs_list_base_then_patches() {
    let args = parse(&["rule-compose", "base.json", "one.toml", "two.yaml"]);
    let inputs: Vec<&str> = args.inputs().map(|path| path.as_str()).collect();
    assert_eq!(inputs, vec!["base.json", "one.toml", "two.yaml"]);
    assert!(!args.is_verbose);
}
