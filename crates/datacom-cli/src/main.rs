//! Command-line interface for the Data Commons agent tools
//!
//! ```bash
//! export DATCOM_API_KEY="your-key"
//! datacom resolve "California"
//! datacom population geoId/06,geoId/48 --date 2020 --table
//! datacom --extended observe country/USA --variables Median_Age_Person
//! ```

use clap::{Parser, Subcommand};
use comfy_table::Table;
use datacom::report::format_value;
use datacom::{DataCommonsClient, DataCommonsConfig, DatacomAgent, Profile};
use datacom_utils::LogFormat;
use serde_json::{Value, json};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "datacom")]
#[command(about = "Query Data Commons statistics through the agent tools", long_about = None)]
struct Args {
    /// Expose the extended tool set (observations, 30 variables per place)
    #[arg(long, global = true)]
    extended: bool,

    /// Print the raw tool outcome as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Render data as a table instead of the text report
    #[arg(long, global = true)]
    table: bool,

    /// Maximum variables listed per place (defaults to the profile's limit)
    #[arg(long, global = true)]
    variable_limit: Option<usize>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Log output format (text or json)
    #[arg(long, global = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a place name to its DCID
    Resolve { place: String },
    /// List statistical variables available for places
    Variables { dcids: String },
    /// Population count for places
    Population {
        dcids: String,
        #[arg(long, default_value = "LATEST")]
        date: String,
    },
    /// Values of arbitrary variables for places (extended tool set)
    Observe {
        dcids: String,
        #[arg(long)]
        variables: String,
        #[arg(long, default_value = "LATEST")]
        date: String,
    },
    /// Print the tool definitions exposed to the agent
    Tools,
}

impl Command {
    /// Tool name and parameters for this command
    fn tool_call(&self) -> Option<(&'static str, Value)> {
        match self {
            Self::Resolve { place } => Some(("get_dcid", json!({ "place": place }))),
            Self::Variables { dcids } => {
                Some(("get_available_variables", json!({ "place_dcids": dcids })))
            }
            Self::Population { dcids, date } => Some((
                "get_population_count",
                json!({ "place_dcids": dcids, "date": date }),
            )),
            Self::Observe {
                dcids,
                variables,
                date,
            } => Some((
                "get_observations",
                json!({ "place_dcids": dcids, "variable_dcids": variables, "date": date }),
            )),
            Self::Tools => None,
        }
    }
}

/// Flatten tool data into table rows
fn table_rows(tool: &str, data: &Value) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let Some(by_entity) = data.as_object() else {
        return (Vec::new(), Vec::new());
    };

    match tool {
        "get_available_variables" => {
            let rows = by_entity
                .iter()
                .flat_map(|(entity, vars)| {
                    vars.as_array()
                        .into_iter()
                        .flatten()
                        .map(move |var| {
                            vec![entity.clone(), var.as_str().unwrap_or_default().to_string()]
                        })
                })
                .collect();
            (vec!["Place", "Variable"], rows)
        }
        "get_population_count" => {
            let rows = by_entity
                .iter()
                .map(|(entity, point)| {
                    vec![
                        entity.clone(),
                        format_value(point.get("population")),
                        point["date"].as_str().unwrap_or_default().to_string(),
                    ]
                })
                .collect();
            (vec!["Place", "Population", "Date"], rows)
        }
        "get_observations" => {
            let rows = by_entity
                .iter()
                .flat_map(|(entity, vars)| {
                    vars.as_object().into_iter().flatten().map(move |(var, point)| {
                        vec![
                            entity.clone(),
                            var.clone(),
                            format_value(point.get("value")),
                            point["date"].as_str().unwrap_or_default().to_string(),
                        ]
                    })
                })
                .collect();
            (vec!["Place", "Variable", "Value", "Date"], rows)
        }
        _ => (Vec::new(), Vec::new()),
    }
}

fn print_outcome(args: &Args, tool: &str, outcome: &Value) -> ExitCode {
    if args.json {
        println!("{}", serde_json::to_string_pretty(outcome).unwrap_or_default());
    } else if outcome["status"] == "success" {
        let (header, rows) = table_rows(tool, &outcome["data"]);
        if args.table && !rows.is_empty() {
            let mut table = Table::new();
            table.set_header(header);
            for row in rows {
                table.add_row(row);
            }
            println!("{table}");
        } else {
            println!("{}", outcome["report"].as_str().unwrap_or_default());
        }
    } else {
        eprintln!(
            "Error: {}",
            outcome["error_message"].as_str().unwrap_or("unknown error")
        );
    }

    if outcome["status"] == "success" {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    datacom_utils::init_tracing_with("warn,datacom=info", args.log_format);

    let mut builder = DataCommonsConfig::builder();
    if let Some(base) = &args.api_base {
        builder = builder.base_url(base.clone());
    }
    if let Some(limit) = args.variable_limit {
        builder = builder.variable_limit(limit);
    }
    let config = builder.with_env().build()?;

    let profile = if args.extended {
        Profile::Extended
    } else {
        Profile::Standard
    };
    let agent = DatacomAgent::new(DataCommonsClient::new(config)?, profile);
    info!(profile = ?profile, "Starting datacom");

    let Some((tool, params)) = args.command.tool_call() else {
        let definitions = agent.tool_definitions();
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(ExitCode::SUCCESS);
    };

    info!(tool, "Running tool");
    let outcome = agent.call(tool, params).await?;
    Ok(print_outcome(&args, tool, &outcome))
}
