use colored::*;
use serde_json::json;
use settlement_core::{AnalysisOutput, FinancingType, Insight, SettlementScenario};
use settlement_parser::AnalysisRequest;

/// Formats a value as pt-BR currency: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let units = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// pt-BR label for the financing type, as shown on the report header.
pub fn financing_label(financing_type: FinancingType) -> &'static str {
    match financing_type {
        FinancingType::Vehicle => "Veículo",
        FinancingType::RealEstate => "Imóvel",
        FinancingType::Machinery => "Maquinário",
        FinancingType::Other => "Outros",
    }
}

/// Renders the prose description of an insight, with formatted currency.
pub fn describe_insight(insight: &Insight) -> String {
    match insight {
        Insight::SubstantialPerformance { paid_percentage } => format!(
            "{:.1}% do contrato já foi quitado, permitindo reivindicar tratamento de adimplente substancial e limitar a retomada do bem.",
            paid_percentage
        ),
        Insight::RelevantPayments { paid_percentage } => format!(
            "{:.1}% já amortizado reforça o argumento de onerosidade para novas cobranças integrais.",
            paid_percentage
        ),
        Insight::BalanceExceedsAsset {
            considered_balance,
            asset_value,
            gap,
        } => format!(
            "O banco cobra {} para um bem estimado em {}, diferença de {} que caracteriza cobrança desproporcional.",
            format_brl(*considered_balance),
            format_brl(*asset_value),
            format_brl(*gap)
        ),
        Insight::InflatedCharges { charges } => format!(
            "Encargos projetados em {} permitem contestar juros/multas abusivas antes de fechar o acordo.",
            format_brl(*charges)
        ),
        Insight::ClientProtection {
            total_paid,
            exposure,
        } => format!(
            "Mesmo após pagar {}, o cliente segue exposto em {}, sustentando pedido de redução imediata.",
            format_brl(*total_paid),
            format_brl(*exposure)
        ),
        Insight::EssentialWorkAsset => "Parcelas em atraso resultam de uso contínuo do veículo; negociamos manutenção da posse enquanto revisamos o saldo.".to_string(),
        Insight::NegotiationRoom => "Os dados confirmam margem para acordo rápido com redução expressiva e eliminação dos encargos futuros.".to_string(),
    }
}

/// Prints the pendency list for a rejected input.
pub fn print_pendencies(pendencies: &[String]) {
    println!("\n{}", "Pendências de dados:".red().bold());
    for (i, pendency) in pendencies.iter().enumerate() {
        println!("  {}. {}", i + 1, pendency.red());
    }
}

pub fn print_report(
    request: &AnalysisRequest,
    generated_at: &str,
    analysis: &AnalysisOutput,
    format: &str,
) {
    match format {
        "json" => print_json_report(request, generated_at, analysis),
        _ => print_text_report(request, generated_at, analysis),
    }
}

fn print_text_report(request: &AnalysisRequest, generated_at: &str, analysis: &AnalysisOutput) {
    let metrics = &analysis.metrics;
    let client = request.client_name.as_deref().unwrap_or("Cliente não informado");
    let consultant = request
        .consultant_name
        .as_deref()
        .unwrap_or("Consultor não informado");
    let has_asset_value = request.contract.asset_value > 0.0;

    println!("\n{}", "═".repeat(60));
    println!("{}", "  ANÁLISE DE NEGOCIAÇÃO".bold());
    println!("{}", "═".repeat(60));

    println!("\n  Cliente:    {client}");
    println!("  Consultor:  {consultant}");
    println!(
        "  Tipo:       {}",
        financing_label(request.contract.financing_type)
    );
    println!("  Gerado em:  {generated_at}");

    println!("\n{}", "Resumo do contrato:".bold());
    println!("  Total pago:          {}", format_brl(metrics.total_paid));
    println!(
        "  Dívida restante:     {}",
        format_brl(metrics.remaining_debt)
    );
    println!("  Percentual pago:     {:.1}%", metrics.paid_percentage);
    println!("  Valor em atraso:     {}", format_brl(metrics.late_amount));
    println!("  Parcelas restantes:  {}", metrics.installments_remaining);
    println!(
        "  Total financiado:    {}",
        format_brl(metrics.total_financed)
    );
    println!(
        "  Saldo considerado:   {}",
        format_brl(metrics.considered_bank_balance)
    );
    if has_asset_value {
        println!(
            "  GAP saldo × bem:     {}",
            format_brl(metrics.asset_gap)
        );
    }
    println!(
        "  Exposição do cliente: {}",
        format_brl(metrics.client_exposure)
    );

    print_scenario(
        "Cenário 1 — Conservador",
        &analysis.scenarios.conservative,
    );
    print_scenario("Cenário 2 — Agressivo", &analysis.scenarios.aggressive);

    if !analysis.insights.is_empty() {
        println!("\n{}", "Fundamentação:".bold());
        for insight in &analysis.insights {
            println!("  {} {}", "•".green().bold(), insight.title().bold());
            println!("    {}", describe_insight(insight));
        }
    }

    if !analysis.advisories.is_empty() {
        println!("\n{}", "Avisos:".yellow().bold());
        for (i, advisory) in analysis.advisories.iter().enumerate() {
            println!("  {}. {}", i + 1, advisory.yellow());
        }
    }

    println!("{}", "═".repeat(60));
}

fn print_scenario(label: &str, scenario: &SettlementScenario) {
    let percent = (scenario.discount_rate * 100.0).round() as i64;
    println!("\n{}", label.bold());
    println!("  {}", format!("{percent}% de Desconto").green().bold());
    println!(
        "  Saldo original:  {}",
        format_brl(scenario.original_balance)
    );
    println!(
        "  Proposta:        {}",
        format_brl(scenario.proposed_balance)
    );
    println!("  Economia:        {}", format_brl(scenario.savings));
    if let Some(plan) = &scenario.installment_plan {
        println!(
            "  Parcelamento:    {}x {}",
            plan.count,
            format_brl(plan.per_installment)
        );
    }
}

fn print_json_report(request: &AnalysisRequest, generated_at: &str, analysis: &AnalysisOutput) {
    let output = json!({
        "client": request.client_name,
        "consultant": request.consultant_name,
        "financing_type_label": financing_label(request.contract.financing_type),
        "generated_at": generated_at,
        "analysis": analysis,
        "insight_descriptions": analysis
            .insights
            .iter()
            .map(|i| json!({
                "icon": i.icon(),
                "title": i.title(),
                "description": describe_insight(i),
            }))
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
