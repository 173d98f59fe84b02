use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use risk_calculator::client::HttpBackend;
use risk_calculator::config::Config;
use risk_calculator::core::suggestion::FixedSuggestion;
use risk_calculator::exchange::BinanceClient;
use risk_calculator::page::{
    self, chart_canvas_id, submit, MemoryDocument, PageBindings, SubmitOutcome,
};

const USAGE: &str = "usage: calc_client [--pair SYMBOL] <leverage> <position_size> <risk_percent> \
                     [current_price entry_price]";

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Parse CLI args
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let pair = match args.iter().position(|a| a == "--pair") {
        Some(idx) => {
            let symbol = args.get(idx + 1).cloned().context(USAGE)?;
            args.drain(idx..=idx + 1);
            Some(symbol.to_uppercase())
        }
        None => None,
    };
    if args.len() != 3 && args.len() != 5 {
        anyhow::bail!(USAGE);
    }

    let canvas = chart_canvas_id(&cfg.chart_symbol);
    let ids = PageBindings::full_page_ids(&canvas);
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut doc = MemoryDocument::with_ids(&refs);
    let bindings = PageBindings::bind(&doc, &canvas)?;

    let backend = HttpBackend::from_config(&cfg);
    let market = BinanceClient::new(&cfg);

    let catalog = page::load_page(&mut doc, &bindings, &backend, &market, &cfg)
        .await
        .unwrap_or_default();

    if let Some(symbol) = &pair {
        if page::select_pair(&mut doc, &bindings, &catalog, symbol).is_none() {
            anyhow::bail!("{} is not among the {} loaded pairs", symbol, catalog.len());
        }
    }

    bindings.form.leverage.write(&mut doc, &args[0]);
    bindings.form.position_size.write(&mut doc, &args[1]);
    bindings.form.risk_percent.write(&mut doc, &args[2]);
    if args.len() == 5 {
        bindings.form.current_price.write(&mut doc, &args[3]);
        bindings.form.entry_price.write(&mut doc, &args[4]);
    }

    let outcome = submit(&mut doc, &bindings, &backend, &FixedSuggestion).await;

    if let Some(ticker) = &bindings.ticker {
        println!(
            "{}  {}  {}",
            doc.text(ticker.symbol.id()),
            doc.text(ticker.price.id()),
            doc.text(ticker.change.id())
        );
    }
    if let Some(chart) = doc.chart(&canvas) {
        let closes: Vec<String> = chart.values.iter().map(|v| v.to_string()).collect();
        println!("{}: {}", chart.label, closes.join(" "));
    }
    println!();
    println!("Pairs loaded: {}", catalog.len());
    if let Some(q) = &bindings.quick_levels {
        println!(
            "Quick estimate: stop {}  take {}",
            doc.text(q.stop_loss.id()),
            doc.text(q.take_profit.id())
        );
    }
    println!();
    println!("{}", strip_tags(doc.inner_html(bindings.calc_results.id())));
    println!("{}", strip_tags(doc.inner_html(bindings.advice_results.id())));
    for alert in doc.alerts() {
        eprintln!("! {}", alert);
    }

    match outcome {
        SubmitOutcome::Completed { .. } => Ok(()),
        other => anyhow::bail!("calculation did not complete: {:?}", other),
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
