//! Loading [`PrefixerConfig`] from files and environment variables.

use anyhow::{Result, anyhow, ensure};
use form_field_prefixer::{FormFieldPrefixer, PrefixerConfig, PrefixerError};
use test_helpers::figment::with_jail;

#[test]
fn loads_defaults_without_sources() -> Result<()> {
    let config = with_jail(|_| Ok(PrefixerConfig::load(None)?))?;
    ensure!(config == PrefixerConfig::default(), "unexpected config {config:?}");
    Ok(())
}

#[test]
fn missing_files_are_ignored() -> Result<()> {
    let config = with_jail(|jail| {
        let path = jail.directory().join("absent.toml");
        Ok(PrefixerConfig::load(Some(path.as_path()))?)
    })?;
    ensure!(config == PrefixerConfig::default(), "unexpected config {config:?}");
    Ok(())
}

#[test]
fn reads_overrides_from_a_toml_file() -> Result<()> {
    let config = with_jail(|jail| {
        jail.create_file(
            "prefixer.toml",
            r#"
                separator = "-"
                binding_attribute = "x-model"
                bound_attribute_prefix = "x-bind:"
            "#,
        )?;
        let path = jail.directory().join("prefixer.toml");
        Ok(PrefixerConfig::load(Some(path.as_path()))?)
    })?;
    ensure!(config.separator == "-", "separator was {}", config.separator);
    ensure!(config.binding_attribute == "x-model", "binding was {}", config.binding_attribute);
    ensure!(config.validation_separator == ".", "defaults must survive");

    let prefixer = FormFieldPrefixer::with_config(config)
        .with_prefix("${ row }")
        .as_array(Some("arrayKey"));
    ensure!(prefixer.id("abc") == "`${ row }-abc-arrayKey`", "id was {}", prefixer.id("abc"));
    ensure!(
        prefixer.name_attribute("abc").to_string() == r#"x-bind:name="`${ row }-abc[arrayKey]`""#,
        "name attribute was {}",
        prefixer.name_attribute("abc")
    );
    Ok(())
}

#[test]
fn environment_overrides_the_file() -> Result<()> {
    let config = with_jail(|jail| {
        jail.create_file("prefixer.toml", r#"binding_attribute = "x-model""#)?;
        jail.set_env("FORM_FIELD_PREFIXER_BINDING_ATTRIBUTE", "wire:model");
        let path = jail.directory().join("prefixer.toml");
        Ok(PrefixerConfig::load(Some(path.as_path()))?)
    })?;
    ensure!(
        config.binding_attribute == "wire:model",
        "binding was {}",
        config.binding_attribute
    );
    Ok(())
}

#[test]
fn rejects_empty_separators() -> Result<()> {
    let err = with_jail(|jail| {
        jail.create_file("prefixer.toml", r#"separator = """#)?;
        let path = jail.directory().join("prefixer.toml");
        match PrefixerConfig::load(Some(path.as_path())) {
            Ok(config) => Err(anyhow!("expected validation failure, got {config:?}")),
            Err(err) => Ok(err),
        }
    })?;
    ensure!(
        matches!(&err, PrefixerError::InvalidConfig { key, .. } if key == "separator"),
        "unexpected error {err}"
    );
    Ok(())
}

#[test]
fn reports_malformed_files() -> Result<()> {
    let err = with_jail(|jail| {
        jail.create_file("prefixer.toml", "separator = [")?;
        let path = jail.directory().join("prefixer.toml");
        match PrefixerConfig::load(Some(path.as_path())) {
            Ok(config) => Err(anyhow!("expected parse failure, got {config:?}")),
            Err(err) => Ok(err),
        }
    })?;
    ensure!(matches!(err, PrefixerError::Config(_)), "unexpected error {err}");
    Ok(())
}
