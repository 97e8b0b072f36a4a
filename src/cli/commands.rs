use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::app::{AppContext, Result, WeeklyTrackError};
use crate::domain::{format_price, DiscountLine, WeeklyUpdate};
use crate::resolver::{ResolveReport, VehicleResolver};
use crate::scraper::{CatalogPage, ChromeCatalog};
use crate::store::{JsonStore, Store, VehicleData};

fn store_with(
    ctx: &AppContext,
    weekly_update: Option<&Path>,
    vehicle_data: Option<&Path>,
) -> JsonStore {
    let mut store = ctx.store.as_ref().clone();
    if let Some(path) = weekly_update {
        store = store.with_weekly_update_path(path);
    }
    if let Some(path) = vehicle_data {
        store = store.with_vehicle_data_path(path);
    }
    store
}

pub async fn fetch_weekly_update(ctx: &AppContext, output: Option<&Path>) -> Result<WeeklyUpdate> {
    let post = ctx.fetcher.latest_post().await?;
    println!("Found post: {}", post.display_title());

    let update = ctx.extractor.extract(&post);
    let store = store_with(ctx, output, None);
    store.save_weekly_update(&update)?;

    println!(
        "Saved weekly update for {} to {}",
        update.week_of,
        store.weekly_update_path().display()
    );
    Ok(update)
}

pub fn extract_file(
    ctx: &AppContext,
    path: &Path,
    title: Option<&str>,
    output: Option<&Path>,
) -> Result<WeeklyUpdate> {
    let body = fs::read_to_string(path)?;
    let title = title.unwrap_or(ctx.config.source.title_phrase.as_str());

    let update = ctx.extractor.extract_body(title, &body);
    let store = store_with(ctx, output, None);
    store.save_weekly_update(&update)?;

    println!(
        "Extracted {} to {}",
        path.display(),
        store.weekly_update_path().display()
    );
    Ok(update)
}

/// Resolve with a freshly launched Chrome, closing it whatever the outcome.
pub async fn resolve_vehicles(
    ctx: &AppContext,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<ResolveReport> {
    let store = store_with(ctx, input, output);
    let update = load_update(&store)?;

    info!("Launching browser");
    let catalog = Arc::new(ChromeCatalog::launch(ctx.config.scraper.clone()).await?);

    let result = resolve_with(ctx, catalog.clone(), &store, &update).await;

    match Arc::try_unwrap(catalog) {
        Ok(catalog) => {
            if let Err(e) = catalog.close().await {
                warn!("Failed to close browser: {}", e);
            }
        }
        Err(_) => warn!("Browser still in use; not closing"),
    }

    result
}

/// Resolve every vehicle in `update` through `catalog`, save and print the results.
pub async fn resolve_with(
    ctx: &AppContext,
    catalog: Arc<dyn CatalogPage>,
    store: &JsonStore,
    update: &WeeklyUpdate,
) -> Result<ResolveReport> {
    let resolver = VehicleResolver::new(catalog, ctx.config.scraper.clone(), ctx.slug_overrides());
    let report = resolver.resolve_all(update).await;

    store.save_vehicle_data(&report.vehicles)?;
    print_report(&report);
    println!(
        "\nSaved {} vehicles to {}",
        report.vehicles.len(),
        store.vehicle_data_path().display()
    );

    Ok(report)
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    fetch_weekly_update(ctx, None).await?;
    resolve_vehicles(ctx, None, None).await?;
    Ok(())
}

pub async fn debug_post(ctx: &AppContext) -> Result<()> {
    let post = ctx.fetcher.latest_post().await?;
    let path = &ctx.config.output.debug_body;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &post.selftext)?;

    println!("Title: {}", post.display_title());
    println!("Body length: {} chars", post.selftext.chars().count());
    println!("Author: {}", post.author);
    println!("Score: {}", post.score);
    println!("URL: {}", post.permalink_url());
    if let Some(created) = post.created_at() {
        println!("Posted: {}", created.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("Saved body to {}", path.display());
    Ok(())
}

pub fn show(ctx: &AppContext) -> Result<()> {
    let Some(update) = ctx.store.load_weekly_update()? else {
        println!(
            "No weekly update at {}. Run `weekly-track fetch` first.",
            ctx.store.weekly_update_path().display()
        );
        return Ok(());
    };
    let vehicles = ctx.store.load_vehicle_data()?.unwrap_or_default();

    print!("{}", render_summary(&update, &vehicles));
    Ok(())
}

fn load_update(store: &JsonStore) -> Result<WeeklyUpdate> {
    store.load_weekly_update()?.ok_or_else(|| {
        WeeklyTrackError::Other(format!(
            "No weekly update at {}. Run `weekly-track fetch` first.",
            store.weekly_update_path().display()
        ))
    })
}

fn print_report(report: &ResolveReport) {
    println!("\n--- Results ---");
    for (name, record) in &report.vehicles {
        println!("\n{} ({}):", name, record.category);
        println!("  URL: {}", record.url);
        println!("  Image: {}", record.image_url);
        println!("  Original Price: {}", record.display_original_price());
        if record.is_free {
            println!("  Discounted Price: FREE");
        } else if let (Some(_), Some(pct)) = (record.discounted_price, record.discount_percent) {
            println!("  Discounted Price: {}", record.display_discounted_price());
            println!("  Discount: {}%", pct);
        }
    }

    if !report.failures.is_empty() {
        println!("\n--- Failed vehicles (add to [slug_overrides] in your config) ---");
        for failure in &report.failures {
            println!("{}", failure.override_hint());
        }
    }
}

fn vehicle_line(name: &str, vehicles: &VehicleData) -> String {
    match vehicles.get(name) {
        Some(record) if record.is_free => {
            format!("{} ({} -> FREE)", name, record.display_original_price())
        }
        Some(record) if record.discounted_price.is_some() => format!(
            "{} ({} -> {})",
            name,
            record.display_original_price(),
            record.display_discounted_price()
        ),
        Some(record) if record.original_price.is_some() => {
            format!("{} ({})", name, format_price(record.original_price))
        }
        _ => name.to_string(),
    }
}

/// Plain-text summary of a weekly update, with prices where known.
pub fn render_summary(update: &WeeklyUpdate, vehicles: &VehicleData) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(format!("Week of {}", update.week_of));
    for message in &update.intro_messages {
        line(format!("  {}", message));
    }

    line(String::new());
    line(format!(
        "Podium Vehicle: {}",
        vehicle_line(&update.podium_vehicle, vehicles)
    ));
    line(format!(
        "Prize Ride: {}",
        vehicle_line(&update.prize_ride_vehicle, vehicles)
    ));
    line(format!("Prize Ride Challenge: {}", update.prize_ride_challenge));
    line(format!("Time Trial: {}", update.time_trial));
    line(format!("HSW Time Trial: {}", update.hsw_time_trial));
    line(format!("Premium Race: {}", update.premium_race));
    line(format!("Weekly Challenge: {}", update.weekly_challenge));

    if !update.salvage_yard_robberies.is_empty() {
        line(String::new());
        line("Salvage Yard Robberies:".to_string());
        for robbery in &update.salvage_yard_robberies {
            line(format!(
                "  {}: {}",
                robbery.kind,
                vehicle_line(&robbery.vehicle, vehicles)
            ));
        }
    }

    line(String::new());
    line("Bonuses:".to_string());
    for bonus in &update.bonuses {
        line(format!("  {}", bonus));
    }

    line(String::new());
    line("Discounts:".to_string());
    for discount in &update.discounts {
        match DiscountLine::parse(discount) {
            Some(parsed) if vehicles.contains_key(&parsed.item) => line(format!(
                "  {}: {}",
                parsed.label,
                vehicle_line(&parsed.item, vehicles)
            )),
            _ => line(format!("  {}", discount)),
        }
    }

    out
}
