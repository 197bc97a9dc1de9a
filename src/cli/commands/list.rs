//! `stock list` command - List products with filtering

use miette::Result;

use crate::cli::filters::SortField;
use crate::cli::helpers::open_ledger;
use crate::cli::output::print_products;
use crate::cli::GlobalOpts;
use crate::core::CommandError;
use crate::entities::Product;

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Only products below their low-stock threshold
    #[arg(long)]
    pub low: bool,

    /// Filter by location (case-insensitive)
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Filter by category (case-insensitive)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Search name, SKU and category (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort by field
    #[arg(long, value_enum, default_value = "created")]
    pub sort: SortField,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

impl ListArgs {
    fn keep(&self, product: &Product, default_min: u64) -> bool {
        if self.low && !product.is_low_stock(default_min) {
            return false;
        }
        if let Some(location) = &self.location {
            if !product.location.eq_ignore_ascii_case(location.trim()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.sku.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }

    /// Apply filters, sort and limit
    pub fn select(&self, products: Vec<Product>, default_min: u64) -> Vec<Product> {
        let mut products: Vec<Product> = products
            .into_iter()
            .filter(|p| self.keep(p, default_min))
            .collect();

        self.sort.sort(&mut products);
        if self.reverse {
            products.reverse();
        }
        if let Some(limit) = self.limit {
            products.truncate(limit);
        }
        products
    }
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (_, _, ledger) = open_ledger(global)?;
    let default_min = ledger.default_min_stock();

    let products = ledger.list_products().map_err(CommandError::from)?;
    let products = args.select(products, default_min);

    if args.count {
        println!("{}", products.len());
        return Ok(());
    }

    print_products(&products, global.format, default_min)
}
