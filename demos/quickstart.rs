use chrono::Utc;
use tracing_subscriber::EnvFilter;
use zonewise::{
    estimate_jetlag, find_overlap, AgeBracket, OverlapConfig, TimeZoneId, ZoneError,
};

fn main() -> Result<(), ZoneError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cfg = OverlapConfig::load()?;
    if cfg.default_zones.is_empty() {
        cfg.default_zones = vec!["America/Los_Angeles".into(), "Europe/London".into()];
    }
    let zones = cfg.zones()?;
    let now = Utc::now();

    let summary = find_overlap(&zones, cfg.window()?, now);
    println!("Working hours {} for {} zones", summary.window, summary.zone_count);
    for slot in summary.top(cfg.top_n) {
        println!("  {} UTC  {}/{}", slot.label(), slot.score, summary.zone_count);
    }
    if !summary.perfect_match {
        println!("  no hour suits everyone");
    }

    let from: TimeZoneId = "America/Los_Angeles".parse()?;
    let to: TimeZoneId = "Asia/Tokyo".parse()?;
    let jetlag = estimate_jetlag(&from, &to, now, AgeBracket::Adult);
    println!(
        "{} -> {}: {} {} travel, about {} days",
        from.simplified_name(),
        to.simplified_name(),
        jetlag.severity,
        jetlag.direction,
        jetlag.recovery_days
    );
    Ok(())
}
