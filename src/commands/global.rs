use crate::commands::fetch;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::CovidDataProvider;
use crate::formatting::{format_delta, format_header, number_with_commas};
use crate::locale::Locale;
use crate::panel::GlobalStats;
use crate::types::GlobalRecord;
use anyhow::Result;

/// Worldwide totals: cases with today's increase, deaths and recoveries with their rates
pub fn render(global: &GlobalRecord, locale: Locale, display: &DisplayConfig) -> String {
    let strings = locale.strings();
    let stats = GlobalStats::from_record(global);

    let mut output = format_header(strings.tab_global, true, display);
    output.push_str(&format!(
        "{} {} ({}: {})\n",
        strings.cases,
        number_with_commas(stats.cases),
        strings.today,
        format_delta(global.today_cases)
    ));
    output.push_str(&format!(
        "{} {} ({}%)\n",
        strings.deaths,
        number_with_commas(stats.deaths),
        stats.death_rate_text()
    ));
    output.push_str(&format!(
        "{} {} ({}%)\n",
        strings.recovered,
        number_with_commas(stats.recovered),
        stats.recovered_rate_text()
    ));
    output
}

pub async fn run(client: &dyn CovidDataProvider, config: &Config) -> Result<()> {
    let snapshot = fetch(client).await?;
    print!("{}", render(&snapshot.global, config.locale, &config.display));
    Ok(())
}
