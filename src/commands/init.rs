use crate::commands::Out;
use crate::{Amount, Config, Result};
use std::path::Path;

/// Creates the shopbook home directory with a fresh `config.json`.
pub fn init(home: &Path, initial_capital: Amount) -> Result<Out<()>> {
    let config = Config::create(home, initial_capital)?;
    Ok(Out::new_message(format!(
        "Initialized '{}' with an initial capital of {}",
        config.root().display(),
        initial_capital.grouped(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("books");
        let out = init(&home, Amount::from(20000)).unwrap();
        assert!(out.message().contains("20,000.00"));
        assert_eq!(
            Config::load(&home).unwrap().initial_capital(),
            Amount::from(20000)
        );
    }
}
