//! Built-in templates for Ethiopian banks and mobile money.
//!
//! Order matters: CBE is checked before Telebirr, whose `127` short code is
//! generic enough to appear in other banks' messages.

use crate::extract::patterns::{amount_after, amount_before, DEC_AMOUNT};
use crate::models::template::{Field, TemplateDef};

const ACCOUNT: &str = r"(?i)account\s*([0-9*-]+)";

/// Built-in templates in precedence order.
pub fn builtin_templates() -> Vec<TemplateDef> {
    vec![cbe(), telebirr(), boa(), dashen(), bunna()]
}

fn cbe() -> TemplateDef {
    TemplateDef::new(
        "CBE",
        ["cbe", "Commercial Bank of Ethiopia", "Current Balance is ETB"],
    )
    .with_field(
        Field::Amount,
        [
            amount_after(r"(?i)You have transfer(?:ed|red) ETB"),
            amount_after(r"(?i)credited with ETB"),
            amount_after(r"(?i)debited with ETB"),
            amount_after(r"(?i)ETB"),
        ],
    )
    .with_field(
        Field::TransactionId,
        [r"id=([A-Za-z0-9_&=-]+)", r"(?i:Ref No)\s*([A-Z0-9]+)"],
    )
    .with_field(Field::Account, [ACCOUNT])
    .with_field(Field::Balance, [amount_after(r"(?i)Current Balance is ETB")])
    .with_charges()
}

fn telebirr() -> TemplateDef {
    TemplateDef::new("Telebirr", ["telebirr", "127", "ethio telecom"])
        .with_field(Field::Amount, [amount_after(r"(?i)ETB")])
        .with_field(
            Field::TransactionId,
            [r"(?i:transaction number is)\s*([A-Z0-9-]+)"],
        )
        .with_field(Field::Account, [ACCOUNT])
        .with_charges()
}

fn boa() -> TemplateDef {
    TemplateDef::new("BOA", ["Bank of Abyssinia", "boa"])
        .with_field(
            Field::Amount,
            [
                amount_after(r"(?i)was (?:credited|debited) with ETB"),
                amount_after(r"(?i)has been (?:credited|debited) with ETB"),
                amount_after(r"(?i)ETB"),
            ],
        )
        .with_field(Field::TransactionId, [r"(?i:trx=)([A-Z0-9]+)"])
        .with_field(Field::Account, [ACCOUNT])
        .with_charges()
}

fn dashen() -> TemplateDef {
    TemplateDef::new("Dashen", ["Dashen", "Dashen Super App"])
        .with_field(
            Field::Amount,
            [
                amount_after(r"(?i)is credited with ETB"),
                amount_after(r"(?i)has been debited with ETB"),
                amount_after(r"(?i)ETB"),
            ],
        )
        .with_field(Field::TransactionId, [r"(?i:receipt/)([A-Za-z0-9/_=-]+)"])
        .with_field(Field::Account, [r#"(?i)account\s*['"]?([0-9*-]+)['"]?"#])
        .with_charges()
}

fn bunna() -> TemplateDef {
    TemplateDef::new("Bunna", ["Bunna Bank"])
        .with_field(
            Field::Amount,
            [
                amount_before(r"(?i)Withdrawal of", "ETB"),
                amount_before(r"(?i)Deposit of", "ETB"),
                amount_after(r"(?i)has been debited with ETB"),
                amount_after(r"(?i)ETB"),
            ],
        )
        .with_field(Field::TransactionId, [r"(?i:receipt).*(?i:trx=)([A-Z0-9]+)"])
        .with_field(Field::Account, [ACCOUNT])
        .with_charges()
}

/// Counterparty, fee and VAT patterns shared by every built-in bank.
trait WithCharges {
    fn with_charges(self) -> Self;
}

impl WithCharges for TemplateDef {
    fn with_charges(self) -> Self {
        self.with_field(
            Field::Counterparty,
            [
                r"(?i)\bto\s+([A-Z][A-Za-z.'\s-]{1,80}?)\s+on\b",
                r"(?i)\bfrom\s+([A-Z][A-Za-z.'\s-]{1,80}?)\s+on\b",
                r"(?i)credited by\s+([A-Z][A-Za-z.'\s-]{1,80}?)\b",
                r"(?i)\bby\s+([A-Z][A-Za-z.'\s-]{1,80}?)\s*\.",
                r"(?i)\bto\s+(.+?)\s+account number",
            ],
        )
        .with_field(
            Field::Fee,
            [format!(
                r"(?i)\b(?:service charge|fee)\s*(?:of|:)?\s*(?:ETB)?\s*{}",
                DEC_AMOUNT
            )],
        )
        .with_field(
            Field::Vat,
            [format!(r"(?i)\bVAT\s*(?:of|:)?\s*(?:ETB)?\s*{}", DEC_AMOUNT)],
        )
    }
}
