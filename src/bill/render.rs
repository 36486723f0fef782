//! Bill rendering

use std::{fmt, io};

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{
    amounts::{format_amount, format_money},
    bill::Bill,
    tax::DEFAULT_TAX_LABEL,
};

/// Plain-text bill summary with a named tax line.
#[derive(Debug, Clone, Copy)]
pub struct BillSummary<'b, 'a> {
    bill: &'b Bill<'a>,
    tax_label: &'b str,
}

impl<'a> Bill<'a> {
    /// Plain-text summary using the given tax label, e.g. `GST`.
    pub fn summary<'b>(&'b self, tax_label: &'b str) -> BillSummary<'b, 'a> {
        BillSummary {
            bill: self,
            tax_label,
        }
    }

    /// Writes the bill as a table of lines followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_table(&self, mut out: impl io::Write, tax_label: &str) -> io::Result<()> {
        let customer = self.customer();

        writeln!(out, "Customer Name: {}", customer.name())?;
        writeln!(out, "Customer Contact: {}", customer.contact())?;

        let mut builder = Builder::default();
        builder.push_record(["Item", "Qty", "Price", "Total"]);

        for line in self.lines() {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                format_money(&line.unit_price),
                format_money(&line.line_total),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "\n{table}")?;

        let rows = self.totals(tax_label);
        let label_width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let value_width = rows
            .iter()
            .map(|(_, value)| value.chars().count())
            .max()
            .unwrap_or(0);

        for (label, value) in rows {
            writeln!(out, "{label:>label_width$}  {value:>value_width$}")?;
        }

        Ok(())
    }

    fn totals(&self, tax_label: &str) -> [(String, String); 3] {
        let currency = self.currency();

        [
            ("Total Price:".to_string(), format_money(&self.subtotal())),
            (
                format!("{tax_label} ({}):", self.tax_rate()),
                format_amount(currency, self.tax()),
            ),
            (
                "Total Amount:".to_string(),
                format_amount(currency, self.grand_total()),
            ),
        ]
    }
}

impl fmt::Display for BillSummary<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bill = self.bill;
        let customer = bill.customer();

        writeln!(f, "Customer Name: {}", customer.name())?;
        writeln!(f, "Customer Contact: {}", customer.contact())?;
        writeln!(f)?;
        writeln!(f, "Selected Items:")?;

        for line in bill.lines() {
            writeln!(
                f,
                "{} x {} - {}",
                line.name,
                line.quantity,
                format_money(&line.line_total)
            )?;
        }

        let [subtotal, tax, grand_total] = bill.totals(self.tax_label);

        writeln!(f)?;
        writeln!(f, "{} {}", subtotal.0, subtotal.1)?;
        writeln!(f, "{} {}", tax.0, tax.1)?;
        write!(f, "{} {}", grand_total.0, grand_total.1)
    }
}

impl fmt::Display for Bill<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(DEFAULT_TAX_LABEL), f)
    }
}
