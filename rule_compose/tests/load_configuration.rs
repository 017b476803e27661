//! Integration tests for loading configuration files with `extends`.
//!
//! Covers inheritance chains across formats, list-valued `extends`, cycle
//! detection, and the errors raised for missing or malformed parents.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface fixture mistakes"
)]
use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use rule_compose::{
    ComposeError, Composer, LayerSource, MergePolicy, OverrideBlock, load_configuration,
    load_configuration_chain, load_configuration_with,
};
use serde_json::{Value, json};
use test_helpers::fs::ConfigDir;

const FUNCTIONAL_JSON: &str = r#"{
    "plugins": ["functional"],
    "rules": {
        "functional/immutable-data": ["error", {"ignorePattern": ["^mutable"]}],
        "functional/no-conditional-statement": "error",
        "functional/no-try-statement": "error"
    },
    "overrides": [
        {"files": ["*.js"], "rules": {"functional/no-this-expression": "error"}}
    ]
}"#;

const LITE_TOML: &str = concat!(
    "extends = \"functional.json\"\n",
    "\n",
    "[rules]\n",
    "\"functional/immutable-data\" = [\"error\", { ignoreClass = \"fieldsOnly\" }]\n",
    "\"functional/no-conditional-statement\" = \"off\"\n",
    "\"functional/no-try-statement\" = \"off\"\n",
    "\n",
    "[[overrides]]\n",
    "files = [\"*.ts\", \"*.tsx\"]\n",
    "[overrides.rules]\n",
    "\"functional/prefer-readonly-type-declaration\" = \"warn\"\n",
);

#[fixture]
fn lite_dir() -> ConfigDir {
    let dir = ConfigDir::new().expect("create temp dir");
    dir.write("functional.json", FUNCTIONAL_JSON)
        .expect("write base");
    dir.write("lite.toml", LITE_TOML).expect("write lite");
    dir
}

#[rstest]
fn missing_files_load_as_none() -> Result<()> {
    let dir = ConfigDir::new()?;
    let loaded = load_configuration(dir.join("absent.json").as_std_path()).map_err(|e| anyhow!(e))?;
    ensure!(loaded.is_none(), "expected no configuration, got {loaded:?}");
    Ok(())
}

#[rstest]
fn extends_composes_parent_first(lite_dir: ConfigDir) -> Result<()> {
    let config = load_configuration(lite_dir.join("lite.toml").as_std_path())
        .map_err(|e| anyhow!(e))?
        .ok_or_else(|| anyhow!("lite.toml should exist"))?;

    ensure!(
        config.rules.get("functional/immutable-data")
            == Some(&json!(["error", {"ignoreClass": "fieldsOnly"}])),
        "options array should be replaced wholesale: {:?}",
        config.rules.get("functional/immutable-data")
    );
    ensure!(
        config.rules.get("functional/no-try-statement") == Some(&json!("off")),
        "child severity should win"
    );
    ensure!(
        config.extra.get("plugins") == Some(&json!(["functional"])),
        "parent-only keys should carry through"
    );
    ensure!(!config.extra.contains_key("extends"), "extends must be stripped");
    let globs: Vec<Vec<&str>> = config.overrides.iter().map(OverrideBlock::globs).collect();
    ensure!(
        globs == vec![vec!["*.js"], vec!["*.ts", "*.tsx"]],
        "override blocks should concatenate parent-first: {globs:?}"
    );
    Ok(())
}

#[rstest]
fn keyed_policy_applies_across_the_chain(lite_dir: ConfigDir) -> Result<()> {
    let config = load_configuration_with(lite_dir.join("lite.toml").as_std_path(), MergePolicy::keyed())
        .map_err(|e| anyhow!(e))?
        .ok_or_else(|| anyhow!("lite.toml should exist"))?;
    ensure!(
        config.rules.get("functional/immutable-data")
            == Some(&json!(["error", {"ignorePattern": ["^mutable"], "ignoreClass": "fieldsOnly"}])),
        "options should merge key-wise: {:?}",
        config.rules.get("functional/immutable-data")
    );
    Ok(())
}

#[rstest]
fn chains_keep_one_layer_per_file(lite_dir: ConfigDir) -> Result<()> {
    let chain = load_configuration_chain(lite_dir.join("lite.toml").as_std_path())
        .map_err(|e| anyhow!(e))?
        .ok_or_else(|| anyhow!("lite.toml should exist"))?;
    ensure!(chain.len() == 2, "expected two layers, got {}", chain.len());

    let names: Vec<String> = chain
        .layers()
        .iter()
        .filter_map(|layer| layer.path().and_then(|p| p.file_name()).map(str::to_owned))
        .collect();
    ensure!(
        names == vec!["functional.json".to_owned(), "lite.toml".to_owned()],
        "unexpected order {names:?}"
    );

    let mut composer = Composer::new();
    composer.push_chain(chain.clone());
    ensure!(
        composer.compose() == chain.compose(MergePolicy::default()),
        "composer and chain folds should agree"
    );
    ensure!(
        composer
            .layers()
            .iter()
            .all(|layer| matches!(layer.source(), LayerSource::File(_))),
        "chain layers must be file layers"
    );
    Ok(())
}

#[rstest]
fn list_extends_applies_parents_in_order() -> Result<()> {
    let dir = ConfigDir::new()?;
    dir.write("a.json", r#"{"rules": {"shared": "error", "a": "warn"}, "overrides": [{"files": ["a"]}]}"#)?;
    dir.write("b.json", r#"{"rules": {"shared": "off", "b": "warn"}, "overrides": [{"files": ["b"]}]}"#)?;
    let child = dir.write(
        "child.json",
        r#"{"extends": ["a.json", "b.json"], "overrides": [{"files": ["child"]}]}"#,
    )?;

    let config = load_configuration(child.as_std_path())
        .map_err(|e| anyhow!(e))?
        .ok_or_else(|| anyhow!("child.json should exist"))?;
    ensure!(
        config.to_value()
            == json!({
                "rules": {"shared": "off", "a": "warn", "b": "warn"},
                "overrides": [{"files": ["a"]}, {"files": ["b"]}, {"files": ["child"]}]
            }),
        "unexpected composition {}",
        config.to_value()
    );
    Ok(())
}

#[rstest]
fn nested_relative_paths_resolve_from_the_extending_file() -> Result<()> {
    let dir = ConfigDir::new()?;
    dir.write("presets/base.json", r#"{"rules": {"a": "error"}}"#)?;
    dir.write("presets/mid.json", r#"{"extends": "base.json", "rules": {"b": "warn"}}"#)?;
    let leaf = dir.write("leaf.json", r#"{"extends": "presets/mid.json"}"#)?;

    let chain = load_configuration_chain(leaf.as_std_path())
        .map_err(|e| anyhow!(e))?
        .ok_or_else(|| anyhow!("leaf.json should exist"))?;
    ensure!(chain.len() == 3, "expected three layers, got {}", chain.len());
    let config = chain.compose(MergePolicy::default());
    ensure!(
        config.to_value() == json!({"rules": {"a": "error", "b": "warn"}}),
        "unexpected composition {}",
        config.to_value()
    );
    Ok(())
}

#[rstest]
fn diamond_inheritance_is_not_a_cycle() -> Result<()> {
    let dir = ConfigDir::new()?;
    dir.write("root.json", r#"{"rules": {"r": "error"}}"#)?;
    dir.write("left.json", r#"{"extends": "root.json"}"#)?;
    dir.write("right.json", r#"{"extends": "root.json"}"#)?;
    let top = dir.write("top.json", r#"{"extends": ["left.json", "right.json"]}"#)?;

    let chain = load_configuration_chain(top.as_std_path())
        .map_err(|e| anyhow!(e))?
        .ok_or_else(|| anyhow!("top.json should exist"))?;
    ensure!(chain.len() == 5, "expected five layers, got {}", chain.len());
    Ok(())
}

#[rstest]
fn cycles_are_reported() -> Result<()> {
    let dir = ConfigDir::new()?;
    dir.write("a.json", r#"{"extends": "b.json"}"#)?;
    let b = dir.write("b.json", r#"{"extends": "a.json"}"#)?;

    let err = load_configuration(b.as_std_path()).expect_err("cyclic extends must fail");
    let ComposeError::CyclicExtends { cycle } = &*err else {
        return Err(anyhow!("expected a cycle error, got {err}"));
    };
    ensure!(cycle.matches(" -> ").count() == 2, "unexpected cycle {cycle}");
    ensure!(cycle.ends_with("b.json"), "cycle should close on b.json: {cycle}");
    Ok(())
}

#[rstest]
fn missing_parents_are_reported() -> Result<()> {
    let dir = ConfigDir::new()?;
    let child = dir.write("child.json", r#"{"extends": "nowhere.json"}"#)?;

    let err = load_configuration(child.as_std_path()).expect_err("missing parent must fail");
    let message = err.to_string();
    ensure!(matches!(&*err, ComposeError::File { .. }), "unexpected error {message}");
    ensure!(message.contains("nowhere.json"), "message should name the parent: {message}");
    ensure!(message.contains("does not exist"), "unexpected message {message}");
    Ok(())
}

#[rstest]
#[case::malformed_json("bad.json", "{ \"rules\": ")]
#[case::extends_wrong_type("bad.json", r#"{"extends": {"path": "a.json"}}"#)]
fn malformed_files_are_file_errors(#[case] name: &str, #[case] contents: &str) -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write(name, contents)?;
    let err = load_configuration(path.as_std_path()).expect_err("malformed file must fail");
    ensure!(
        matches!(&*err, ComposeError::File { path: reported, .. } if reported.ends_with(name)),
        "unexpected error {err}"
    );
    Ok(())
}

#[rstest]
fn override_blocks_load_as_written() -> Result<()> {
    let dir = ConfigDir::new()?;
    let base = dir.write(
        "base.json",
        r#"{"overrides": [{"files": "*.ts", "rules": {"a": "off"}}, {"files": ["*.js", 7]}]}"#,
    )?;
    let child = dir.write(
        "child.json",
        r#"{"extends": "base.json", "overrides": [{"excludedFiles": ["x"], "rules": {}}]}"#,
    )?;

    let config = load_configuration(base.as_std_path())?
        .ok_or_else(|| anyhow!("base should load"))?;
    let globs: Vec<Vec<&str>> = config.overrides.iter().map(OverrideBlock::globs).collect();
    ensure!(globs == vec![vec!["*.ts"], vec!["*.js"]], "unexpected globs {globs:?}");

    let resolved = load_configuration(child.as_std_path())?
        .ok_or_else(|| anyhow!("child should load"))?;
    ensure!(
        resolved.to_value()
            == json!({"overrides": [
                {"files": "*.ts", "rules": {"a": "off"}},
                {"files": ["*.js", 7]},
                {"excludedFiles": ["x"], "rules": {}}
            ]}),
        "blocks must be carried through unchanged: {}",
        resolved.to_value()
    );
    Ok(())
}

#[rstest]
#[case::rules_list(json!({"rules": ["a"]}))]
#[case::rules_null(json!({"rules": null}))]
#[case::overrides_object(json!({"overrides": {"files": ["*.ts"]}}))]
fn unusual_section_shapes_pass_through(#[case] raw: Value) -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write("odd.json", &raw.to_string())?;
    let config = load_configuration(path.as_std_path())?
        .ok_or_else(|| anyhow!("file should load"))?;
    ensure!(config.to_value() == raw, "unexpected value {}", config.to_value());
    Ok(())
}
