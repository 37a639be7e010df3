use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::{FinancialProduct, RiskTier};
use crate::recommend::{UserQuery, recommend};

/// Interactive recommendation loop over arbitrary line-based input/output.
///
/// Invalid input is never fatal: every prompt repeats until it gets an
/// acceptable answer. End of input finishes the program normally.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run selection rounds until the user declines another one.
    pub fn run(&mut self, catalog: &[FinancialProduct]) -> std::io::Result<()> {
        writeln!(self.output, "=== Financial assistant ===")?;
        writeln!(
            self.output,
            "Finding places for your money with minimal risk"
        )?;

        loop {
            let Some(query) = self.collect_query()? else {
                break;
            };

            let recommendations = recommend(catalog, &query);
            self.show_recommendations(&recommendations)?;

            if !self.ask_to_continue()? {
                break;
            }
        }

        writeln!(self.output, "\nThank you for using the financial assistant!")?;
        Ok(())
    }

    fn collect_query(&mut self) -> std::io::Result<Option<UserQuery>> {
        writeln!(self.output, "\n=== Enter your parameters ===")?;
        writeln!(self.output, "\nChoose a risk level:")?;
        writeln!(self.output, "1. Conservative (minimal risk)")?;
        writeln!(self.output, "2. Moderate")?;
        writeln!(self.output, "3. Aggressive (high return)")?;

        let Some(risk) = self.prompt_until(
            "Your choice (1-3): ",
            "Please enter 1, 2 or 3",
            parse_risk,
        )?
        else {
            return Ok(None);
        };

        let Some(amount) = self.prompt_until(
            "\nHow much are you ready to invest: ",
            "Please enter a positive number",
            parse_amount,
        )?
        else {
            return Ok(None);
        };

        let Some(duration) = self.prompt_until(
            "\nDesired investment term in days (0 if it does not matter): ",
            "Please enter a number of days",
            parse_duration,
        )?
        else {
            return Ok(None);
        };

        debug!(?risk, amount, ?duration, "collected query");
        Ok(Some(UserQuery {
            risk,
            amount,
            duration,
        }))
    }

    fn show_recommendations(&mut self, products: &[&FinancialProduct]) -> std::io::Result<()> {
        writeln!(self.output, "\n=== Recommended options ===")?;

        if products.is_empty() {
            writeln!(
                self.output,
                "Unfortunately, no products match your criteria"
            )?;
            return Ok(());
        }

        for (i, product) in products.iter().enumerate() {
            writeln!(
                self.output,
                "\n{}. {} ({})",
                i + 1,
                product.name,
                product.issuer
            )?;
            writeln!(self.output, "   Type: {}", product.kind.label())?;
            writeln!(
                self.output,
                "   Interest rate: {}% per year",
                product.interest_rate
            )?;
            writeln!(self.output, "   Minimum amount: {}", product.min_amount)?;

            if let Some(days) = product.duration_days {
                writeln!(self.output, "   Term: {} days", days)?;
            }

            let mut features = Vec::new();
            if product.replenishable {
                features.push("top-up");
            }
            if product.withdrawable {
                features.push("partial withdrawal");
            }
            if !features.is_empty() {
                writeln!(self.output, "   Features: {}", features.join(", "))?;
            }
        }

        Ok(())
    }

    fn ask_to_continue(&mut self) -> std::io::Result<bool> {
        let answer = self.prompt_until(
            "\nWould you like another selection? (yes/no): ",
            "Please answer 'yes' or 'no'",
            parse_yes_no,
        )?;
        Ok(answer.unwrap_or(false))
    }

    /// Prompt until `parse` accepts the input; `None` on end of input.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        rejection: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> std::io::Result<Option<T>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{}", rejection)?,
            }
        }
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn parse_risk(input: &str) -> Option<RiskTier> {
    match input {
        "1" => Some(RiskTier::Low),
        "2" => Some(RiskTier::Medium),
        "3" => Some(RiskTier::High),
        _ => None,
    }
}

fn parse_amount(input: &str) -> Option<f64> {
    input.parse::<f64>().ok().filter(|amount| *amount > 0.0)
}

/// `0` means "no preference"; anything non-numeric or negative is rejected.
fn parse_duration(input: &str) -> Option<Option<u32>> {
    let days = input.parse::<u32>().ok()?;
    Some(if days == 0 { None } else { Some(days) })
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use std::io::Cursor;

    fn run_with_input(input: &str) -> String {
        let catalog = default_catalog();
        let mut output = Vec::new();
        {
            let mut console = Console::new(Cursor::new(input.to_string()), &mut output);
            console.run(&catalog).expect("console run failed");
        }
        String::from_utf8(output).expect("non-utf8 output")
    }

    #[test]
    fn one_round_lists_matches_best_rate_first() {
        let output = run_with_input("1\n20000\n0\nno\n");

        let bonds = output.find("Government Bonds").expect("bonds missing");
        let deposit = output
            .find("Reliable Savings Deposit")
            .expect("deposit missing");
        assert!(bonds < deposit, "bonds should be listed first");
        assert!(output.contains("Features: top-up"));
        assert!(output.contains("Thank you for using the financial assistant!"));
    }

    #[test]
    fn invalid_entries_reprompt_until_accepted() {
        let output = run_with_input("9\nx\n1\n-5\nabc\n20000\nmany\n0\nmaybe\nno\n");

        assert!(output.contains("Please enter 1, 2 or 3"));
        assert!(output.contains("Please enter a positive number"));
        assert!(output.contains("Please enter a number of days"));
        assert!(output.contains("Please answer 'yes' or 'no'"));
        assert!(output.contains("Government Bonds"));
    }

    #[test]
    fn no_match_prints_the_fixed_line() {
        let output = run_with_input("1\n100\n0\nno\n");

        assert!(output.contains("Unfortunately, no products match your criteria"));
    }

    #[test]
    fn yes_runs_another_round() {
        let output = run_with_input("2\n5000\n0\nyes\n1\n20000\n0\nno\n");

        let first = output.find("Gold ETF").expect("first round missing");
        let second = output.find("Government Bonds").expect("second round missing");
        assert!(first < second);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let output = run_with_input("1\n");

        assert!(output.contains("Thank you for using the financial assistant!"));
    }

    #[test]
    fn parsers_accept_and_reject_the_documented_shapes() {
        assert_eq!(parse_risk("2"), Some(RiskTier::Medium));
        assert_eq!(parse_risk("4"), None);
        assert_eq!(parse_amount("10000.5"), Some(10000.5));
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_duration("0"), Some(None));
        assert_eq!(parse_duration("365"), Some(Some(365)));
        assert_eq!(parse_duration("-1"), None);
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no("nope"), None);
    }
}
