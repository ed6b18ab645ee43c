//! `cuit digit` and `cuit format`.

use anyhow::{Context as _, Result};

use cuit::check_digit;
use cuit::Cuit;

use super::Context;

/// Print the check digit for a base, and the full identifier it completes.
pub fn cmd_digit(ctx: &Context, base: &str) -> Result<()> {
    let digits = check_digit::parse_base(base)?;
    let check = check_digit::expected_check_digit(&digits);

    let bare: String = digits
        .iter()
        .map(|d| char::from(b'0' + d))
        .chain(std::iter::once(char::from(b'0' + check)))
        .collect();
    let cuit = Cuit::parse(&bare)
        .with_context(|| format!("Computed identifier {} did not validate", bare))?;

    if ctx.quiet {
        println!("{}", check);
    } else {
        println!("{}\t{}", check, cuit);
    }
    Ok(())
}

/// Print the canonical form of a valid identifier.
pub fn cmd_format(input: &str) -> Result<()> {
    let cuit = Cuit::parse(input)
        .with_context(|| format!("Invalid CUIT {:?}", input.trim()))?;
    println!("{}", cuit);
    Ok(())
}
