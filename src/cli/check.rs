//! Check command implementation

use crate::cli::output::{format_result_json, format_result_pretty};
use crate::cli::serve::{build_checker, load_node_config};
use crate::cli::CheckArgs;
use crate::health::{HealthChecker, HealthResult};

/// Render a result for the terminal
pub fn render_check(result: &HealthResult, json: bool) -> Result<String, serde_json::Error> {
    if json {
        format_result_json(result)
    } else {
        Ok(format_result_pretty(result))
    }
}

/// Run one check and render it. Returns the output and the verdict.
pub async fn check_once(
    checker: &HealthChecker,
    json: bool,
) -> Result<(String, bool), Box<dyn std::error::Error>> {
    let result = checker.check().await;
    let output = render_check(&result, json)?;
    Ok((output, result.healthy))
}

/// Handle `galera-healthcheck check`
pub async fn handle_check(args: &CheckArgs) -> Result<(String, bool), Box<dyn std::error::Error>> {
    let config = load_node_config(&args.node)?;
    config.validate()?;

    let checker = build_checker(&config);
    check_once(&checker, args.json).await
}
