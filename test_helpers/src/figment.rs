//! Shared helpers for working with `figment::Jail` in tests.
//!
//! Configuration tests create files and inject environment variables inside
//! a jail. These helpers let the closure use `anyhow` and the `?` operator
//! while the jail still tears down on failure.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it returns an
/// error. Errors from the closure are carried through the jail as text.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure fails.
#[expect(
    clippy::result_large_err,
    reason = "figment::Jail::try_with fixes the closure error type to figment::Error"
)]
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        let value = f(jail).map_err(|err| figment::Error::from(format!("{err:#}")))?;
        output = Some(value);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, ensure};

    use super::with_jail;

    #[test]
    fn returns_the_closure_output() -> anyhow::Result<()> {
        let value = with_jail(|jail| {
            jail.set_env("FORM_FIELD_PREFIXER_TEST_VALUE", "42");
            Ok(std::env::var("FORM_FIELD_PREFIXER_TEST_VALUE")?)
        })?;
        ensure!(value == "42", "unexpected value {value}");
        Ok(())
    }

    #[test]
    fn propagates_closure_errors() {
        let result: anyhow::Result<()> = with_jail(|_| Err(anyhow!("setup failed")));
        let message = result.map_err(|err| err.to_string()).err().unwrap_or_default();
        assert!(message.contains("setup failed"), "got {message}");
    }
}
