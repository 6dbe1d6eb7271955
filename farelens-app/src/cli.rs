use clap::{Parser, Subcommand};

use crate::surface::Field;

#[derive(Debug, Parser)]
#[command(name = "farelens", about = "Flight search client", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search flights and print the rendered comparison columns
    Search {
        /// Origin IATA code
        origin: String,
        /// Destination IATA code
        destination: String,
        #[arg(long)]
        departure_date: String,
        #[arg(long)]
        return_date: Option<String>,
        #[arg(long, default_value = "1")]
        passengers: String,
    },
    /// Look up location suggestions for a partial query
    Suggest {
        query: String,
        /// Which form field the suggestions are for
        #[arg(long, value_enum, default_value_t = Field::Origin)]
        field: Field,
    },
}
