use clap::{Parser, Subcommand};

pub mod formatters;

#[derive(Parser)]
#[command(name = "carteira")]
#[command(version, about = "Personal investment tracker terminal client")]
#[command(
    long_about = "Manage your investment portfolio (B3 equities, funds and fixed income) against the tracker backend: import brokerage reports, record operations, and view aggregate statistics and fixed income projections."
)]
pub struct Cli {
    /// Backend API base URL (overrides config file and CARTEIRA_API_URL)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a brokerage transaction report to the backend import pipeline
    Import {
        /// Path to the report file
        file: String,

        /// Broker format understood by the backend
        #[arg(long, default_value = "b3")]
        broker: String,
    },

    /// Portfolio-wide summary computed by the backend
    Dashboard,

    /// Current portfolio with live quotes and unrealized variation
    Portfolio,

    /// Asset management
    Assets {
        #[command(subcommand)]
        action: AssetsCommands,
    },

    /// Buy/sell operation management
    Operations {
        #[command(subcommand)]
        action: OperationsCommands,
    },

    /// Fixed income assets, operations and yield projections
    FixedIncome {
        #[command(subcommand)]
        action: FixedIncomeCommands,
    },

    /// Quote lookup and backend quote cache management
    Quotes {
        #[command(subcommand)]
        action: QuotesCommands,
    },
}

#[derive(Subcommand)]
pub enum AssetsCommands {
    /// List all assets with their positions
    List,

    /// Show one asset with its operations and per-market breakdown
    Show {
        /// Asset id
        id: i64,

        /// Skip the live quote lookup
        #[arg(long)]
        no_quotes: bool,
    },

    /// Register a new asset
    Add {
        /// Ticker symbol (e.g., PETR4)
        ticker: String,

        /// Asset class (e.g., AÇÕES, FII)
        #[arg(long = "class")]
        asset_class: String,

        /// Asset type (e.g., ON, PN, CI)
        #[arg(long = "type")]
        asset_type: String,

        /// Product display name
        #[arg(long)]
        name: String,
    },

    /// Edit an asset's identity fields (full replace)
    Edit {
        /// Asset id
        id: i64,

        /// New ticker symbol
        #[arg(long)]
        ticker: Option<String>,

        /// New asset class
        #[arg(long = "class")]
        asset_class: Option<String>,

        /// New asset type
        #[arg(long = "type")]
        asset_type: Option<String>,

        /// New product display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove an asset
    Remove {
        /// Asset id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum OperationsCommands {
    /// List all operations
    List,

    /// Show a single operation
    Show {
        /// Operation id
        id: i64,
    },

    /// Record a buy or sell operation
    Add {
        /// Asset id the operation belongs to
        #[arg(long = "asset")]
        asset_id: i64,

        /// Operation direction: buy or sell
        #[arg(value_parser = ["buy", "sell", "BUY", "SELL"])]
        movement: String,

        /// Quantity of shares/quotas
        quantity: i64,

        /// Price per unit
        price: String,

        /// Trade date (YYYY-MM-DD)
        date: String,

        /// Market tag (e.g., VISTA, FRACIONARIO)
        #[arg(long)]
        market: Option<String>,

        /// Brokerage institution
        #[arg(long)]
        institution: Option<String>,
    },

    /// Edit an operation. The backend cancels the old record and creates a
    /// replacement with a new id
    Edit {
        /// Operation id to supersede
        id: i64,

        /// New direction: buy or sell
        #[arg(long, value_parser = ["buy", "sell", "BUY", "SELL"])]
        movement: Option<String>,

        /// New quantity
        #[arg(long)]
        quantity: Option<i64>,

        /// New price per unit
        #[arg(long)]
        price: Option<String>,

        /// New trade date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New market tag
        #[arg(long)]
        market: Option<String>,

        /// New institution
        #[arg(long)]
        institution: Option<String>,
    },

    /// Remove an operation
    Remove {
        /// Operation id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum FixedIncomeCommands {
    /// Fixed income asset management
    Assets {
        #[command(subcommand)]
        action: FixedIncomeAssetsCommands,
    },

    /// Application/redemption/maturity records
    Operations {
        #[command(subcommand)]
        action: FixedIncomeOperationsCommands,
    },

    /// Projected yield at maturity, net of tax and fees
    Projection {
        /// Base asset id
        asset_id: i64,

        /// Annual CDI rate (%) to project with (defaults to config)
        #[arg(long = "cdi-rate")]
        cdi_rate: Option<String>,

        /// Annual IPCA rate (%) to project with (defaults to config)
        #[arg(long = "ipca-rate")]
        ipca_rate: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum FixedIncomeAssetsCommands {
    /// List fixed income assets with balances
    List,

    /// Show one fixed income asset with its operations
    Show {
        /// Base asset id
        asset_id: i64,
    },

    /// Register a fixed income position for an existing asset
    Add {
        /// Base asset id
        #[arg(long = "asset")]
        asset_id: i64,

        /// Issuing institution
        #[arg(long)]
        issuer: String,

        /// Product type (CDB, LCI, LCA, TESOURO_SELIC, TESOURO_IPCA, TESOURO_PREFIXADO)
        #[arg(long = "product-type")]
        product_type: String,

        /// Indexer (CDI, IPCA, PRE, SELIC)
        #[arg(long)]
        indexer: String,

        /// Contracted rate (for CDI: 110 = 110% of CDI)
        #[arg(long)]
        rate: String,

        /// Issue date (YYYY-MM-DD)
        #[arg(long = "issue-date")]
        issue_date: String,

        /// Maturity date (YYYY-MM-DD)
        #[arg(long = "maturity-date")]
        maturity_date: String,

        /// Annual custody fee (%), Tesouro Direto only
        #[arg(long = "custody-fee")]
        custody_fee: Option<String>,
    },

    /// Edit a fixed income asset (full replace)
    Edit {
        /// Base asset id
        asset_id: i64,

        /// New issuer
        #[arg(long)]
        issuer: Option<String>,

        /// New product type
        #[arg(long = "product-type")]
        product_type: Option<String>,

        /// New indexer
        #[arg(long)]
        indexer: Option<String>,

        /// New contracted rate
        #[arg(long)]
        rate: Option<String>,

        /// New issue date (YYYY-MM-DD)
        #[arg(long = "issue-date")]
        issue_date: Option<String>,

        /// New maturity date (YYYY-MM-DD)
        #[arg(long = "maturity-date")]
        maturity_date: Option<String>,

        /// New annual custody fee (%)
        #[arg(long = "custody-fee")]
        custody_fee: Option<String>,
    },

    /// Remove a fixed income asset
    Remove {
        /// Base asset id
        asset_id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum FixedIncomeOperationsCommands {
    /// List operations for a fixed income asset
    List {
        /// Base asset id
        asset_id: i64,
    },

    /// Record an application, redemption or maturity
    Add {
        /// Base asset id
        #[arg(long = "asset")]
        asset_id: i64,

        /// Operation type: aplicacao, resgate or vencimento
        #[arg(value_parser = ["aplicacao", "resgate", "vencimento", "APLICACAO", "RESGATE", "VENCIMENTO"])]
        operation_type: String,

        /// Gross amount
        amount: String,

        /// Trade date (YYYY-MM-DD)
        date: String,

        /// Net amount received (redemption/maturity only)
        #[arg(long = "net-amount")]
        net_amount: Option<String>,

        /// Withheld IR amount (redemption/maturity only)
        #[arg(long = "ir-amount")]
        ir_amount: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum QuotesCommands {
    /// Fetch a single quote
    Get {
        /// Ticker symbol (e.g., PETR4)
        ticker: String,
    },

    /// Fetch quotes for several tickers at once
    Batch {
        /// Ticker symbols
        #[arg(required = true)]
        tickers: Vec<String>,
    },

    /// Fetch quotes for every asset currently held
    Portfolio,

    /// Clear the backend quote cache (one ticker, or everything)
    ClearCache {
        /// Ticker symbol (omit to clear the whole cache)
        ticker: Option<String>,
    },
}
