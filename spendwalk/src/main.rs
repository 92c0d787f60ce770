use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use spendwalklib::{
    error::{Result, WalkError},
    formats::{csv::Csv, json::Json, text::Text},
    model::Plan,
    traits::{ReadPlan, WriteReport},
    Walk,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InFmt {
    Csv,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutFmt {
    Text,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "spendwalk", version, about = "Списания с остатка, пока хватает денег")]
struct Cli {
    /// Начальный баланс (перекрывает баланс из файла плана)
    #[arg(short = 'b', long = "balance", allow_negative_numbers = true)]
    balance: Option<Decimal>,

    /// Сумма списания; можно повторять, порядок сохраняется
    #[arg(
        short = 'w',
        long = "withdraw",
        allow_negative_numbers = true,
        conflicts_with = "input"
    )]
    withdrawals: Vec<Decimal>,

    /// Файл плана ("-" — stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Формат плана
    #[arg(long = "in-format", value_enum, default_value = "csv")]
    in_format: InFmt,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат отчёта
    #[arg(long = "out-format", value_enum, default_value = "text")]
    out_format: OutFmt,

    /// Прогнать учебный пример: баланс 200, списания 10 23 12 16 43 19 4 5
    #[arg(long = "demo", conflicts_with_all = ["input", "withdrawals", "balance"])]
    demo: bool,

    /// Подробные логи (debug) в stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn demo_plan() -> Plan {
    Plan {
        opening_balance: Some(Decimal::from(200)),
        withdrawals: [10, 23, 12, 16, 43, 19, 4, 5].into_iter().map(Decimal::from).collect(),
    }
}

fn load_plan(cli: &Cli) -> Result<Plan> {
    if cli.demo {
        debug!("using demo plan");
        return Ok(demo_plan());
    }

    let Some(path) = cli.input.as_deref() else {
        debug!(count = cli.withdrawals.len(), "plan from command line");
        return Ok(Plan {
            opening_balance: None,
            withdrawals: cli.withdrawals.clone(),
        });
    };

    let reader: Box<dyn io::Read> = match path {
        "-" => Box::new(io::stdin()),
        path => Box::new(File::open(path)?),
    };
    let br = BufReader::new(reader);

    let plan = match cli.in_format {
        InFmt::Csv => Csv::read(br),
        InFmt::Json => Json::read(br),
    }?;
    debug!(path, format = ?cli.in_format, count = plan.withdrawals.len(), "plan loaded");
    Ok(plan)
}

fn build_walk(cli: &Cli) -> Result<Walk> {
    Walk::from_plan(load_plan(cli)?, cli.balance)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let report = build_walk(&cli)?.run();
    debug!(format = ?cli.out_format, outcome = ?report.outcome, "writing report");

    let mut writer: Box<dyn Write> = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        OutFmt::Text => Text::write(&mut writer, &report),
        OutFmt::Csv => Csv::write(&mut writer, &report),
        OutFmt::Json => Json::write(&mut writer, &report),
    }?;

    writer.flush().map_err(WalkError::from)
}
