//! Bistro counter application

use std::io::{self, Write};

use anyhow::{Context, bail};
use tracing::info;

use bistro::{
    catalog::Catalog,
    records::past_records,
    session::Session,
    tax::TaxRate,
    terminal::{Terminal, write_menu},
};

use crate::config::{BillArgs, Command, Config};

mod config;
mod observability;

fn main() -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|err| err.exit());

    observability::init_subscriber(&config.logging)?;

    let billing = &config.billing;
    let catalog = billing
        .load_catalog()
        .context("failed to load the menu")?;

    info!(
        items = catalog.len(),
        currency = catalog.currency().iso_alpha_code,
        tax_rate = %billing.tax_rate,
        "menu loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.command {
        Some(Command::Menu) => write_menu(&catalog, &mut out)?,
        Some(Command::Bill(args)) => {
            write_bill(&catalog, billing.tax_rate, &billing.tax_label, args, &mut out)?;
        }
        Some(Command::Records) => {
            if let Err(err) = past_records() {
                writeln!(out, "{err}")?;
            }
        }
        Some(Command::Session) | None => {
            Terminal::new(&catalog, billing.tax_rate, billing.tax_label.clone())
                .run(io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

fn write_bill(
    catalog: &Catalog<'_>,
    tax_rate: TaxRate,
    tax_label: &str,
    args: BillArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut session = Session::new();

    session.set_name(args.name);

    if !session.set_contact(args.contact.as_str()) {
        bail!("contact number must contain digits only: {}", args.contact);
    }

    for (item, raw) in args.selections {
        if !catalog.contains(&item) {
            bail!("no menu item named `{item}`");
        }

        session.set_quantity(item, raw);
    }

    let bill = session.finalize(catalog, tax_rate)?;

    if args.table {
        bill.write_table(out, tax_label)?;
    } else {
        writeln!(out, "{}", bill.summary(tax_label))?;
    }

    Ok(())
}
