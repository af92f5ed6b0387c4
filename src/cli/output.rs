//! Output formatting helpers for CLI commands

use crate::health::HealthResult;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Format a health result as a status line, a field table and any messages
pub fn format_result_pretty(result: &HealthResult) -> String {
    let mut output = String::new();

    let verdict = if result.healthy {
        "Healthy".green()
    } else {
        "Unhealthy".red()
    };
    output.push_str(&format!("Status: {}\n\n", verdict));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    let rows = [
        ("wsrep_local_state", &result.local_state),
        ("wsrep_local_state_comment", &result.local_state_comment),
        ("wsrep_cluster_status", &result.cluster_status),
        ("wsrep_cluster_size", &result.cluster_size),
        ("wsrep_cluster_conf_id", &result.cluster_conf_id),
        ("wsrep_cluster_state_uuid", &result.cluster_state_uuid),
        ("wsrep_connected", &result.connected),
        ("wsrep_ready", &result.ready),
        ("read_only", &result.read_only),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    output.push_str(&table.to_string());
    output.push('\n');

    if !result.messages.is_empty() {
        output.push_str("\nMessages:\n");
        for message in &result.messages {
            output.push_str(&format!("  {} {}\n", "✗".red(), message));
        }
    }

    output
}

/// Format a health result as pretty-printed JSON
pub fn format_result_json(result: &HealthResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
