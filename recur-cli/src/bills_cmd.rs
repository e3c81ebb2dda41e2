use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};
use recur_bills::{list_recurring_bills, ListError, ListQuery, RecurringBillsResponse, Summary};
use recur_core::{format_to_dollar, today_in_tz};
use recur_ingest::BillSource;
use tracing::{error, info};

use crate::config::Config;

#[derive(Subcommand, Debug)]
pub enum BillsCommand {
    /// List one page of recurring bills, categorized as paid / due soon / upcoming
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Print the JSON response instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Bucket totals and the monthly total for one page
    Summary {
        #[command(flatten)]
        args: ListArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Owner of the bills (default: config profile.user_id)
    #[arg(long)]
    pub user: Option<String>,

    /// Bill file or URL (default: config source.location)
    #[arg(long)]
    pub source: Option<String>,

    /// Case-insensitive recipient name fragment
    #[arg(long)]
    pub search: Option<String>,

    /// latest | oldest | a_to_z | z_to_a | highest | lowest
    #[arg(long)]
    pub sort_by: Option<String>,

    /// 1-based page number
    #[arg(long, allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Page size (default: config listing.default_limit)
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Reference date, YYYY-MM-DD (default: today in config profile.timezone)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

pub async fn run(cmd: BillsCommand, cfg: &Config) -> Result<()> {
    match cmd {
        BillsCommand::List { args, json } => {
            let resp = fetch_page(&args, cfg).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                print_table(&resp);
            }
        }
        BillsCommand::Summary { args } => {
            let resp = fetch_page(&args, cfg).await?;
            print_summary(&Summary::from_result(&resp.recurring_bills.result));
        }
    }
    Ok(())
}

/// Resolve flags against config into a query; flags win.
pub fn build_query(args: &ListArgs, cfg: &Config) -> ListQuery {
    let user = args
        .user
        .clone()
        .or_else(|| cfg.profile.user_id.clone())
        .unwrap_or_default();
    let limit = args
        .limit
        .clone()
        .unwrap_or_else(|| cfg.listing.default_limit.to_string());
    let sort = args
        .sort_by
        .clone()
        .unwrap_or_else(|| cfg.listing.default_sort.key().to_string());

    ListQuery::from_params(
        user,
        args.page.as_deref(),
        Some(limit.as_str()),
        args.search.as_deref(),
        Some(sort.as_str()),
    )
}

pub fn reference_date(args: &ListArgs, cfg: &Config) -> Result<NaiveDate> {
    match args.today {
        Some(d) => Ok(d),
        None => today_in_tz(Utc::now(), &cfg.profile.timezone),
    }
}

async fn fetch_page(args: &ListArgs, cfg: &Config) -> Result<RecurringBillsResponse> {
    let query = build_query(args, cfg);
    let today = reference_date(args, cfg)?;
    let source = BillSource::parse(args.source.as_deref().unwrap_or(&cfg.source.location));

    match load_and_list(&source, &query, today).await {
        Ok(resp) => Ok(resp),
        Err(e) => {
            error!(error = ?e, source = %source, "listing recurring bills failed");
            bail!("{}", e.message())
        }
    }
}

async fn load_and_list(
    source: &BillSource,
    query: &ListQuery,
    today: NaiveDate,
) -> Result<RecurringBillsResponse, ListError> {
    let store = source.load().await?;
    info!(source = %source, bills = store.len(), %today, "loaded bill store");
    list_recurring_bills(&store, query, today)
}

fn print_table(resp: &RecurringBillsResponse) {
    let page = &resp.recurring_bills;

    for a in &page.result.all_bills {
        let day = a
            .bill
            .recurrence_day
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<9} | day {:>2} | {:<28} | {:>12}",
            a.status.label(),
            day,
            a.bill.recipient_name(),
            format_to_dollar(a.bill.amount)
        );
    }

    println!();
    print_summary(&Summary::from_result(&page.result));
    println!(
        "\nPage {}/{} ({} bills, {} per page)",
        page.pagination.page,
        page.pagination.total_pages,
        page.pagination.total,
        page.pagination.limit
    );
}

fn print_summary(summary: &Summary) {
    for line in &summary.buckets {
        println!(
            "{:<9} count={:<3} total={}",
            line.status.label(),
            line.count,
            line.total
        );
    }
    println!("Monthly total: {}", summary.monthly_total);
}
