//! Command-line interface definitions.

use clap::{Parser, Subcommand};

use storefront_core::ProductId;

/// Storefront cart - inspect and edit the locally stored shopping cart.
#[derive(Parser, Debug)]
#[command(name = "storefront-cart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON logs instead of human-readable ones
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the current cart
    Show,

    /// Add one unit of a product
    Add {
        /// Product id
        product_id: ProductId,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        product_id: ProductId,
    },

    /// Set the quantity of a product already in the cart
    Update {
        /// Product id
        product_id: ProductId,
        /// New quantity (values <= 0 are ignored)
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("storefront-cart").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn parses_add() {
        let cli = parse(&["add", "3"]);
        assert_eq!(
            cli.command,
            Commands::Add {
                product_id: ProductId::new(3)
            }
        );
        assert!(!cli.json_logs);
    }

    #[test]
    fn parses_update_with_negative_amount() {
        let cli = parse(&["update", "1", "-2", "--json-logs"]);
        assert_eq!(
            cli.command,
            Commands::Update {
                product_id: ProductId::new(1),
                amount: -2
            }
        );
        assert!(cli.json_logs);
    }

    #[test]
    fn rejects_non_numeric_product_id() {
        let result = Cli::try_parse_from(["storefront-cart", "remove", "shoe"]);
        assert!(result.is_err());
    }
}
