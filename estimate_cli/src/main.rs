//! # Orcaobra CLI Application
//!
//! Terminal front-end for the estimation engine: list calculators, run one
//! against a catalog file, read its guidance, or value a catalog.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod cli;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use estimate_core::calculators::{all_definitions, available_for, CalculatorDefinition};
use estimate_core::report::material_list;
use estimate_core::{
    estimate_raw, load_catalog, load_constants, CalculatorId, EstimateError, EstimateResult,
    EstimationConstants, Material, Niche, RawInput,
};

use cli::{Cli, Commands, RunArgs};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let json_errors = match &cli.command {
        Commands::Run(args) => args.json,
        Commands::Summary { json, .. } => *json,
        _ => false,
    };

    let outcome = match cli.command {
        Commands::List { niche } => list(niche.as_deref()),
        Commands::Run(args) => run(&args),
        Commands::Guide { calculator } => guide(&calculator),
        Commands::Summary { catalog, json } => summary(&catalog, json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if json_errors {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn list(niche: Option<&str>) -> EstimateResult<()> {
    let definitions: Vec<&CalculatorDefinition> = match niche {
        Some(name) => available_for(name.parse::<Niche>()?),
        None => all_definitions().iter().collect(),
    };

    for def in definitions {
        println!("{:<20} {:<20} {}", def.id.id(), def.title, def.description);
        println!("{:<20} alias: {}", "", def.id.alias());
        let width = if def.labels.width_optional {
            format!("{} (opcional)", def.labels.width)
        } else {
            def.labels.width.to_string()
        };
        let fields: Vec<String> = std::iter::once(width)
            .chain(def.labels.height.map(str::to_string))
            .chain(def.labels.depth.map(str::to_string))
            .collect();
        println!("{:<20} campos: {}", "", fields.join(", "));
    }
    Ok(())
}

fn run(args: &RunArgs) -> EstimateResult<()> {
    let id: CalculatorId = args.calculator.parse()?;

    let constants = match &args.constants {
        Some(path) => load_constants(path)?,
        None => EstimationConstants::default(),
    };
    let materials: Vec<Material> = match &args.catalog {
        Some(path) => load_catalog(path)?.materials,
        None => Vec::new(),
    };
    debug!(calculator = id.id(), materials = materials.len(), "running calculator");

    let raw = RawInput::new(args.width.as_str(), args.height.as_str())
        .with_depth(args.depth.as_str())
        .with_margin(args.margin.as_str());
    let result = estimate_raw(id.id(), &raw, &materials, &constants);

    if args.json {
        println!("{}", to_json(&result)?);
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  {}", id.definition().title.to_uppercase());
    println!("═══════════════════════════════════════");
    print!("{}", material_list(&result));

    if !result.warnings.is_empty() {
        println!();
        for warning in &result.warnings {
            println!("  [!] {}", warning);
        }
    }
    if !materials.is_empty() {
        println!();
        for line in result.items.iter().filter(|line| line.pricing.is_some()) {
            let cost = line.cost();
            println!("  {:<20} R$ {:>10.2} {}", line.name, cost, status_icon(cost > 0.0));
        }
    }
    Ok(())
}

fn guide(calculator: &str) -> EstimateResult<()> {
    let id: CalculatorId = calculator.parse()?;
    let guidance = &id.definition().guidance;

    println!("{}", id.definition().title);
    if guidance.is_empty() {
        println!("  Sem dicas cadastradas.");
        return Ok(());
    }

    if !guidance.tips.is_empty() {
        println!();
        println!("Dicas:");
        for tip in &guidance.tips {
            println!("  - {}", tip);
        }
    }
    if !guidance.faqs.is_empty() {
        println!();
        println!("Perguntas frequentes:");
        for faq in &guidance.faqs {
            println!("  P: {}", faq.question);
            println!("  R: {}", faq.answer);
        }
    }
    Ok(())
}

fn summary(path: &Path, json: bool) -> EstimateResult<()> {
    let catalog = load_catalog(path)?;
    let totals = catalog.summary();

    if json {
        println!("{}", to_json(&totals)?);
        return Ok(());
    }

    println!("═══════════════════════════════════════");
    println!("  RELATÓRIO FINANCEIRO ({})", catalog.company_id);
    println!("═══════════════════════════════════════");
    println!("  Itens cadastrados: {}", totals.item_count);
    println!("  Valor em estoque (custo): R$ {:.2}", totals.total_cost);
    println!("  Valor de venda potencial: R$ {:.2}", totals.total_sale);
    println!("  Lucro projetado:          R$ {:.2}", totals.projected_profit);
    println!("  Margem média:             {:.1}%", totals.average_margin_percent);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> EstimateResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| EstimateError::serialization(e.to_string()))
}

fn status_icon(priced: bool) -> &'static str {
    if priced { "[OK]" } else { "[sem preço]" }
}
