//! CLI administration tool for product-catalog.
//!
//! Inspects the catalog and the product cache without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show table statistics
//! cargo run --bin admin -- db info
//!
//! # Show one product
//! cargo run --bin admin -- products show 42
//!
//! # List a restaurant's products by price
//! cargo run --bin admin -- products list --restaurant-id 1 --order high_to_low
//!
//! # Drop a product from the shared Redis cache
//! cargo run --bin admin -- cache evict 42
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `REDIS_URL` (or `REDIS_*` components): needed by `cache evict`

use product_catalog::api::dto::product::ProductResponse;
use product_catalog::config::{CacheBackend, Config, mask_connection_string};
use product_catalog::domain::entities::SortOrder;
use product_catalog::infrastructure::cache::{NullCache, ProductCache, RedisCache};
use product_catalog::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing product-catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Manage the shared product cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and catalog counts
    Info,
}

/// Product inspection subcommands.
#[derive(Subcommand)]
enum ProductAction {
    /// Show a single product (always read from the database)
    Show {
        /// Product ID
        id: i64,
    },

    /// List a restaurant's products ordered by price
    List {
        /// Restaurant ID
        #[arg(short, long)]
        restaurant_id: i64,

        /// `high_to_low` or `low_to_high`
        #[arg(short, long, default_value = "low_to_high", value_parser = parse_order)]
        order: SortOrder,
    },
}

/// Cache management subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Remove a product from the Redis cache
    Evict {
        /// Product ID
        id: i64,
    },
}

fn parse_order(value: &str) -> Result<SortOrder, String> {
    value
        .parse()
        .map_err(|_| "expected 'high_to_low' or 'low_to_high'".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Products { action } => handle_product_action(action, pool).await?,
        Commands::Cache { action } => handle_cache_action(action, pool, &config).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                .fetch_one(pool)
                .await?;

            let restaurants: i64 =
                sqlx::query_scalar("SELECT COUNT(DISTINCT restaurant_id) FROM products")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL:  {}", version.bright_white());
            println!(
                "  Products:    {}",
                products.to_string().bright_green().bold()
            );
            println!(
                "  Restaurants: {}",
                restaurants.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Dispatches product inspection commands.
///
/// Reads bypass any cache so the output reflects the current rows.
async fn handle_product_action(action: ProductAction, pool: PgPool) -> Result<()> {
    let state = server::build_state(pool, Arc::new(NullCache::new()));
    let service = state.product_service;

    match action {
        ProductAction::Show { id } => {
            let product = service
                .get_product(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load product {}: {}", id, e))?;

            print_products(std::slice::from_ref(&product));
        }
        ProductAction::List {
            restaurant_id,
            order,
        } => {
            println!(
                "{} {} ({})",
                "Products of restaurant".bright_blue().bold(),
                restaurant_id.to_string().bright_white().bold(),
                order
            );
            println!();

            let products = service
                .list_sorted(restaurant_id, order)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list products: {}", e))?;

            print_products(&products);
        }
    }

    Ok(())
}

/// Handles cache management commands.
async fn handle_cache_action(action: CacheAction, pool: PgPool, config: &Config) -> Result<()> {
    match action {
        CacheAction::Evict { id } => {
            if config.cache_backend != CacheBackend::Redis {
                println!(
                    "{}",
                    format!(
                        "Cache backend is '{}'; only the Redis cache is shared with this tool",
                        config.cache_backend
                    )
                    .yellow()
                );
                return Ok(());
            }

            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set to evict cache entries")?;

            println!(
                "Connecting to {}",
                mask_connection_string(redis_url).bright_black()
            );

            let cache: Arc<dyn ProductCache> = Arc::new(
                RedisCache::connect(redis_url, config.cache_ttl_seconds)
                    .await
                    .context("Failed to connect to Redis")?,
            );

            let service = server::build_state(pool, cache).product_service;
            service
                .invalidate_cached(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to evict product {}: {}", id, e))?;

            println!(
                "{} {}",
                "Evicted product".green().bold(),
                id.to_string().bright_white()
            );
        }
    }

    Ok(())
}

/// Prints products as a table.
///
/// ```text
///   ID     Name                           Price      Available
///   ────────────────────────────────────────────────────────────
///   2      Steak                          30.00      yes
/// ```
fn print_products(products: &[ProductResponse]) {
    println!(
        "  {:<6} {:<30} {:<10} {:<9}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold(),
        "Available".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for product in products {
        let available = if product.is_available {
            "yes".green()
        } else {
            "no".red()
        };

        println!(
            "  {:<6} {:<30} {:<10} {}",
            product.id.to_string().bright_black(),
            product.name.cyan(),
            format!("{:.2}", product.price),
            available
        );
    }

    println!();
    println!(
        "  Total: {}",
        products.len().to_string().bright_white().bold()
    );
    println!();
}
