use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{info, warn};

use calcdeck::bmi::compute_bmi;
use calcdeck::calculator::{Keypad, calculate, copy_to_clipboard};
use calcdeck::config::Config;
use calcdeck::currency::Currency;
use calcdeck::geometry::ShapeKind;
use calcdeck::items::{
    AreaItem, BmiItem, CalculatorItem, CurrencyItem, ResultItem, RomanItem, run_auto,
};
use calcdeck::logging::init_logging;
use calcdeck::roman::convert_roman;
use calcdeck::ui::{render_item, render_widget_list};
use calcdeck::widget::Widget;

#[derive(Parser, Debug)]
#[command(name = "calcdeck", version, about = "A bundle of small calculators")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to <config dir>/calcdeck/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Copy the result to the clipboard. On Linux the command waits until
    /// another program (such as a clipboard manager) takes the contents over
    #[arg(long, global = true)]
    copy: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression strictly left to right, e.g. `2 + 3 * 4` is 20
    Eval {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Press keypad buttons in order, e.g. `12+3*4=`
    Keys {
        #[arg(allow_hyphen_values = true)]
        keys: String,
    },
    /// Convert a number to a Roman numeral or back
    Roman { input: String },
    /// Area of a square, rectangle, triangle, circle or trapezoid
    Area {
        shape: ShapeKind,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Body-mass index from height (cm) and weight (kg)
    Bmi { height_cm: String, weight_kg: String },
    /// Convert an amount between currencies using the built-in rates
    Currency {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(long)]
        from: Option<Currency>,
        #[arg(long)]
        to: Option<Currency>,
    },
    /// Route input to the Roman converter or the evaluator by its shape
    Auto {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        input: Vec<String>,
    },
    /// List the available calculators
    Widgets,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = run(cli);
    if let Err(err) = &outcome {
        eprintln!("Error: {:#}", err);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 for a result, 1 when the widget had nothing to show, 2 on failure.
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// A failed copy is fatal only when `--copy` asked for it explicitly.
fn check_copy(result: anyhow::Result<()>, explicit: bool) -> anyhow::Result<()> {
    match result {
        Err(err) if !explicit => {
            warn!("{:#}", err);
            Ok(())
        }
        other => other,
    }
}

/// Returns whether the command produced a usable result.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = Config::load(cli.config.as_deref())?;

    let item: ResultItem = match cli.command {
        Command::Widgets => {
            print_widgets(cli.json)?;
            return Ok(true);
        }
        Command::Eval { expression } => {
            let input = expression.join(" ");
            CalculatorItem::from_calc_result(calculate(&input, &config.number_format())).into()
        }
        Command::Keys { keys } => {
            let mut keypad = Keypad::new(config.precision);
            keypad.press_all(&keys);
            CalculatorItem::from_keypad(&keys, &keypad).into()
        }
        Command::Auto { input } => run_auto(&input.join(" "), &config.number_format()),
        Command::Roman { input } => RomanItem::from_result(&input, convert_roman(&input)).into(),
        Command::Area { shape, values } => AreaItem::new(shape, &values).into(),
        Command::Bmi {
            height_cm,
            weight_kg,
        } => BmiItem::new(&height_cm, &weight_kg, compute_bmi(&height_cm, &weight_kg)).into(),
        Command::Currency { amount, from, to } => {
            let from = from.unwrap_or(config.currency.from);
            let to = to.unwrap_or(config.currency.to);
            let table = config.rate_table()?;
            let request = format!("{} {} -> {}", amount.trim(), from, to);
            CurrencyItem::from_result(request, table.convert(&amount, from, to)).into()
        }
    };

    info!(widget = %item.widget(), id = item.id(), ok = item.has_result(), "calculated");

    if cli.json {
        let out = serde_json::to_string_pretty(&item).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        println!("{}", render_item(&item, cli.copy));
    }

    if item.has_result() && (cli.copy || config.copy_results) {
        if let Some(text) = item.text_for_clipboard() {
            check_copy(copy_to_clipboard(&text), cli.copy)?;
        }
    }

    Ok(item.has_result())
}

fn print_widgets(as_json: bool) -> anyhow::Result<()> {
    if as_json {
        let widgets: Vec<_> = Widget::ALL
            .iter()
            .map(|w| json!({ "slug": w.slug(), "label": w.label() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&widgets)?);
    } else {
        println!("{}", render_widget_list(Some(Widget::default())));
    }
    Ok(())
}
