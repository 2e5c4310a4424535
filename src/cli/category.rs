//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::{PocketError, PocketResult};
use crate::models::{Category, CategoryType};
use crate::stores::DataStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    #[command(alias = "create")]
    Add {
        /// Category name
        name: String,
        /// Category type (income, expenses)
        #[arg(short = 't', long = "type")]
        category_type: String,
        /// Display color, e.g. "#ff8800"
        #[arg(long, default_value = "")]
        color: String,
        /// Icon name
        #[arg(long, default_value = "")]
        icon: String,
    },
    /// List all categories
    List,
}

impl CategoryCommands {
    /// Whether the command changes the ledger
    pub fn modifies_data(&self) -> bool {
        matches!(self, Self::Add { .. })
    }
}

/// Handle a category command
pub fn handle_category_command(data: &DataStore, cmd: CategoryCommands) -> PocketResult<()> {
    match cmd {
        CategoryCommands::Add {
            name,
            category_type,
            color,
            icon,
        } => {
            let kind = CategoryType::parse(&category_type).ok_or_else(|| {
                PocketError::Validation(format!(
                    "Invalid category type: '{}'. Valid types: income, expenses",
                    category_type
                ))
            })?;

            let category =
                data.add_category(Category::new(name.trim(), kind).with_style(color, icon))?;
            println!("Created category: {} ({})", category.name, category.category_type);
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(&data.categories()?));
        }
    }

    Ok(())
}
