//! Precatório profitability calculator CLI.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use br_precatorio::format::{format_annual_percent, format_brl, format_percent};
use br_precatorio::{AcquisitionInput, Simulation, SimulatorConfig, simulate};

/// Estimates the return of buying a precatório and compares it with savings, CDB and Tesouro Selic
#[derive(Parser, Debug)]
#[command(name = "precatorio", version)]
struct Cli {
    /// Face value of the precatório (R$)
    #[arg(long, default_value_t = dec!(100000.00))]
    face_value: Decimal,

    /// Annual Selic rate in percent
    #[arg(long, default_value_t = dec!(14.75))]
    selic: Decimal,

    /// Investment period in years (1 to 10)
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// JSON file overriding the cost schedule or benchmark rates
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log calculation details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => SimulatorConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulatorConfig::default(),
    };

    let input = AcquisitionInput::new(cli.face_value, cli.selic, cli.years)?;
    let simulation = simulate(&input, &config)?;

    print!("{}", render(&simulation, cli.format)?);
    Ok(())
}

fn render(simulation: &Simulation, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(simulation)? + "\n"),
        OutputFormat::Text => Ok(render_report(simulation)?),
    }
}

fn render_report(simulation: &Simulation) -> Result<String, std::fmt::Error> {
    let acquisition = &simulation.acquisition;
    let input = &acquisition.input;
    let mut out = String::new();

    writeln!(out, "Simulação do Precatório")?;
    writeln!(out, "=======================\n")?;
    writeln!(out, "Valor de Face do Precatório: {}", format_brl(input.face_value))?;
    writeln!(out, "Taxa SELIC Anual Informada:  {}", format_percent(input.annual_rate_pct()))?;
    writeln!(out, "Período de Investimento:     {} anos\n", input.period_years)?;

    writeln!(out, "Custos Detalhados da Aquisição")?;
    for entry in acquisition.cost_breakdown.iter() {
        writeln!(out, "  - {}: {}", entry.label, format_brl(entry.amount))?;
    }
    writeln!(out, "Custo Total de Aquisição: {}\n", format_brl(acquisition.total_cost))?;

    writeln!(out, "Projeção de Rentabilidade")?;
    writeln!(out, "  Valor Estimado Atualizado pela SELIC: {}", format_brl(acquisition.future_value))?;
    writeln!(out, "  Lucro Bruto Estimado:                 {}", format_brl(acquisition.gross_profit))?;
    writeln!(out, "  Rentabilidade no Período:             {}", format_percent(acquisition.period_return_pct))?;
    writeln!(out, "  Rentabilidade Anual Estimada:         {}\n", format_annual_percent(acquisition.annualized_return_pct))?;

    let comparison = &simulation.comparison;
    writeln!(out, "Comparativo com Outros Investimentos ({} anos)", comparison.period_years)?;
    writeln!(
        out,
        "{:<16} {:>18} {:>20} {:>18} {:>12} {:>14}",
        "Investimento", "Valor Investido", "Valor Final", "Lucro", "Período", "Anual"
    )?;
    writeln!(out, "{}", "-".repeat(103))?;
    for row in &comparison.rows {
        writeln!(
            out,
            "{:<16} {:>18} {:>20} {:>18} {:>12} {:>14}",
            row.label,
            format_brl(row.principal),
            format_brl(row.future_value),
            format_brl(row.profit),
            format_percent(row.period_return_pct),
            format_annual_percent(row.annual_rate_pct),
        )?;
    }

    writeln!(
        out,
        "\nNota: as rentabilidades dos outros investimentos são estimativas e podem variar. \
         A rentabilidade anual do precatório é uma média estimada para o período."
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_simulation() -> Simulation {
        let input = AcquisitionInput::new(dec!(100000), dec!(14.75), 5).unwrap();
        simulate(&input, &SimulatorConfig::default()).unwrap()
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in report:\n{haystack}"))
    }

    #[test]
    fn test_report_lists_costs_in_breakdown_order() {
        let report = render_report(&reference_simulation()).unwrap();

        let order = [
            "Custo de Aquisição (50%): R$ 50.000,00",
            "Custo de Intermediação (5%): R$ 5.000,00",
            "Custo de Habilitação dos Compradores: R$ 3.500,00",
            "Custo de Acompanhamento Processual (3%): R$ 3.000,00",
            "Custo de Escritura de Cessão (1%, mín. R$ 2.500,00): R$ 2.500,00",
            "Custo Total de Aquisição: R$ 64.000,00",
        ];
        let positions: Vec<usize> = order.iter().map(|line| position(&report, line)).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_report_summary_table_and_note() {
        let report = render_report(&reference_simulation()).unwrap();

        assert!(report.contains("Valor de Face do Precatório: R$ 100.000,00"));
        assert!(report.contains("Taxa SELIC Anual Informada:  14,75%"));
        assert!(report.contains("25,46% a.a."));
        assert!(report.contains("210,87%"));

        let rows = ["Precatório", "Poupança", "CDB (90% CDI)", "Tesouro Selic"];
        let table = position(&report, "Comparativo com Outros Investimentos (5 anos)");
        let positions: Vec<usize> = rows.iter().map(|row| table + position(&report[table..], row)).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(report.trim_end().ends_with("é uma média estimada para o período."));
    }

    #[test]
    fn test_json_render_parses_back() {
        let simulation = reference_simulation();
        let rendered = render(&simulation, OutputFormat::Json).unwrap();
        let parsed: Simulation = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, simulation);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_cli_defaults_mirror_form() {
        let cli = Cli::try_parse_from(["precatorio"]).unwrap();

        assert_eq!(cli.face_value, dec!(100000));
        assert_eq!(cli.selic, dec!(14.75));
        assert_eq!(cli.years, 5);
        assert!(matches!(cli.format, OutputFormat::Text));
    }
}
