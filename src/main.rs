#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use payform_core::{LoggingBuilder, YearMonth};

use crate::context::{reference_month, set_reference_month};

/// Payform - payment information form
#[derive(Parser, Debug)]
#[command(name = "payform-desktop")]
#[command(about = "Payment information form with live card validation")]
struct Args {
    /// Tracing filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,

    /// Treat this month (YYYY-MM) as the current one for expiry checks
    #[arg(long)]
    as_of: Option<YearMonth>,

    /// Disable ANSI colours in log output
    #[arg(long)]
    no_ansi: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 820.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = args.log_filter {
        logging = logging.with_filter(filter);
    }
    if args.no_ansi {
        logging = logging.no_ansi();
    }
    logging.init().context("failed to initialise logging")?;

    if let Some(month) = args.as_of {
        set_reference_month(month)
            .map_err(|m| anyhow::anyhow!("reference month already set, rejected {m}"))?;
    }

    tracing::info!(
        as_of = %reference_month(),
        fixed = args.as_of.is_some(),
        "Starting payment form"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Payment Form")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
