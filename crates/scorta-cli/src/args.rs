//! Command-line surface for `scorta-cli`.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scorta-cli", version, about = "Scorta inventory client", long_about = None)]
pub struct Cli {
    /// Store service base URL, e.g. <http://127.0.0.1:3000>
    #[arg(
        long,
        env = "SCORTA_ENDPOINT",
        default_value = "http://127.0.0.1:3000",
        value_name = "URL"
    )]
    pub endpoint: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every product in the collection
    List,
    /// Add a product
    Add {
        /// Product name
        #[arg(long)]
        name: String,
        /// Product category
        #[arg(long)]
        category: String,
        /// Units in stock (positive integer)
        #[arg(long)]
        quantity: u32,
        /// Unit price (positive number)
        #[arg(long)]
        price: f64,
    },
    /// Update fields of an existing product; omitted fields keep their value
    Update {
        /// Id of the product to update
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
    },
    /// Remove a product by id
    Remove {
        /// Id of the product to remove
        id: String,
    },
    /// Search by exact id or case-insensitive name substring
    Find {
        /// Query text
        query: String,
    },
}
