//! ログ初期化（RUST_LOG が設定されていればそちらを優先）

use tracing_subscriber::EnvFilter;

use crate::error::{PoViewerError, Result};

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "po_viewer=debug,po_viewer_common=debug,info"
    } else {
        "info"
    }
}

pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PoViewerError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_parses() {
        for verbose in [true, false] {
            assert!(default_directive(verbose).parse::<EnvFilter>().is_ok());
        }
    }
}
