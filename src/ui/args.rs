use anyhow::{Context, Result};
use trayctl::core::api::TrayConfig;

pub fn parse_strategies(s: &str) -> Result<TrayConfig> {
    let config = TrayConfig::from_list(s).with_context(|| format!("Invalid strategies value: {}", s))?;
    if config.strategies.is_empty() {
        return Err(anyhow!("Select at least one strategy (e.g. device,shell)."));
    }
    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::*;
    use trayctl::core::strategy::StrategyKind;

    #[test]
    fn test_strategies_parser_good() {
        assert_eq!(
            parse_strategies("device").unwrap().strategies,
            vec![StrategyKind::PrivilegedControl]
        );
        assert_eq!(
            parse_strategies("mci,SHELL").unwrap().strategies,
            vec![
                StrategyKind::MediaCommandInterface,
                StrategyKind::ShellMediaService
            ]
        );
    }

    #[test]
    fn test_strategies_parser_bad() {
        assert_matches!(parse_strategies(""), Err(_));
        assert_matches!(parse_strategies(",,"), Err(_));
        assert_matches!(parse_strategies("device,floppy"), Err(_));
    }
}
