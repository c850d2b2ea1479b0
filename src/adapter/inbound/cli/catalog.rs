//! Handler for the `catalog` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::project::{DataType, MigrationStrategy};
use crate::domain::provider::CloudProvider;
use crate::error::Result;

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "Provider")]
    provider: &'static str,
    #[tabled(rename = "Services")]
    services: String,
    #[tabled(rename = "Regions")]
    regions: String,
    #[tabled(rename = "Cost Factor")]
    cost_factor: String,
}

impl ProviderRow {
    fn from_provider(provider: CloudProvider) -> Self {
        Self {
            provider: provider.label(),
            services: provider.services().join(", "),
            regions: provider.regions().join(", "),
            cost_factor: format!("{:.1}", provider.cost_factor()),
        }
    }
}

/// Execute the catalog command.
pub fn execute() -> Result<()> {
    if output::is_json() {
        output::json_output(catalog_json());
        return Ok(());
    }

    output::section("Cloud Providers");
    let rows: Vec<_> = CloudProvider::ALL
        .iter()
        .copied()
        .map(ProviderRow::from_provider)
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Migration Strategies");
    output::note(&labels(MigrationStrategy::ALL.iter().map(|s| s.label())));

    output::section("Data Types");
    output::note(&labels(DataType::ALL.iter().map(|d| d.label())));

    Ok(())
}

fn labels<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

fn catalog_json() -> serde_json::Value {
    let providers: Vec<_> = CloudProvider::ALL
        .iter()
        .map(|provider| {
            json!({
                "provider": provider,
                "services": provider.services(),
                "regions": provider.regions(),
                "cost_factor": provider.cost_factor(),
            })
        })
        .collect();

    json!({
        "type": "catalog",
        "payload": {
            "providers": providers,
            "migration_strategies": MigrationStrategy::ALL,
            "data_types": DataType::ALL,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_provider() {
        let rows: Vec<_> = CloudProvider::ALL
            .iter()
            .copied()
            .map(ProviderRow::from_provider)
            .collect();
        let table = Table::new(rows).to_string();

        for provider in ["AWS", "GCP", "Azure"] {
            assert!(table.contains(provider), "{provider} missing");
        }
        assert!(table.contains("Cost Factor"));
        assert!(table.contains("0.9"));
    }

    #[test]
    fn json_uses_labels() {
        let value = catalog_json();
        assert_eq!(value["payload"]["providers"][2]["provider"], "Azure");
        assert_eq!(value["payload"]["providers"][0]["cost_factor"], 1.0);
        assert_eq!(
            value["payload"]["migration_strategies"][0],
            "lift_and_shift"
        );
    }
}
