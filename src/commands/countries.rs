use crate::commands::fetch;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::CovidDataProvider;
use crate::formatting::{format_header, number_with_commas};
use crate::locale::Locale;
use crate::panel::{sorted_by_name, to_display};
use crate::types::{CountryRecord, DisplayCountry};
use anyhow::Result;

// Layout Constants
/// Width of the country name column
const NAME_COL_WIDTH: usize = 28;

/// Width of each number column
const NUMBER_COL_WIDTH: usize = 18;

/// Which countries to print and in what order
#[derive(Debug, Clone, Default)]
pub struct CountriesOptions {
    /// Only the configured own list
    pub own: bool,
    /// Alphabetical instead of received order
    pub sort: bool,
}

fn column_label(label: &str) -> &str {
    label.trim_end_matches(':')
}

fn format_row(name: &str, cases: &str, deaths: &str, recovered: &str) -> String {
    format!(
        "{:<name_w$}{:>num_w$}{:>num_w$}{:>num_w$}\n",
        name,
        cases,
        deaths,
        recovered,
        name_w = NAME_COL_WIDTH,
        num_w = NUMBER_COL_WIDTH
    )
}

fn select_rows(countries: &[CountryRecord], own_countries: &[String], options: &CountriesOptions, locale: Locale) -> Vec<DisplayCountry> {
    let mut rows = if options.sort {
        sorted_by_name(countries, locale)
    } else {
        to_display(countries, locale)
    };
    if options.own {
        rows.retain(|row| own_countries.contains(&row.record.country));
    }
    rows
}

/// Country table with cases, deaths and recoveries
pub fn render(
    countries: &[CountryRecord],
    own_countries: &[String],
    options: &CountriesOptions,
    locale: Locale,
    display: &DisplayConfig,
) -> String {
    let strings = locale.strings();
    let title = if options.own {
        strings.tab_own_list
    } else {
        strings.tab_countries
    };

    let rows = select_rows(countries, own_countries, options, locale);
    let mut output = format_header(title, true, display);
    if rows.is_empty() {
        output.push_str(strings.no_countries);
        output.push('\n');
        return output;
    }

    output.push_str(&format_row(
        "",
        column_label(strings.cases),
        column_label(strings.deaths),
        column_label(strings.recovered),
    ));
    for row in &rows {
        let name: String = row.display_name.chars().take(NAME_COL_WIDTH - 1).collect();
        output.push_str(&format_row(
            &name,
            &number_with_commas(row.record.cases),
            &number_with_commas(row.record.deaths),
            &number_with_commas(row.record.recovered),
        ));
    }
    output
}

pub async fn run(client: &dyn CovidDataProvider, config: &Config, options: CountriesOptions) -> Result<()> {
    let snapshot = fetch(client).await?;
    print!(
        "{}",
        render(&snapshot.countries, &config.own_countries, &options, config.locale, &config.display)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_countries;

    fn own() -> Vec<String> {
        vec!["Hungary".to_string(), "Austria".to_string()]
    }

    fn names(output: &str) -> Vec<String> {
        output
            .lines()
            .skip(3)
            .map(|line| line.split("  ").next().unwrap_or("").trim().to_string())
            .collect()
    }

    #[test]
    fn test_all_countries_in_received_order() {
        let output = render(
            &create_mock_countries(),
            &own(),
            &CountriesOptions::default(),
            Locale::En,
            &DisplayConfig::default(),
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Countries");
        assert_eq!(
            lines[2].trim_end(),
            format!("{:28}{:>18}{:>18}{:>18}", "", "Confirmed cases", "Deaths", "Recovered")
        );
        let names = names(&output);
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "USA");
        assert_eq!(names[9], "Croatia");
    }

    #[test]
    fn test_own_list_keeps_collection_order() {
        let options = CountriesOptions { own: true, sort: false };
        let output = render(&create_mock_countries(), &own(), &options, Locale::Hu, &DisplayConfig::default());
        assert!(output.starts_with("Saját lista\n"));
        assert_eq!(names(&output), vec!["Ausztria", "Magyarország"]);
    }

    #[test]
    fn test_sorted_by_name() {
        let options = CountriesOptions { own: false, sort: true };
        let output = render(&create_mock_countries(), &own(), &options, Locale::En, &DisplayConfig::default());
        let names = names(&output);
        assert_eq!(names[0], "Austria");
        assert_eq!(names[9], "USA");
    }

    #[test]
    fn test_row_formatting() {
        let options = CountriesOptions { own: true, sort: false };
        let output = render(&create_mock_countries(), &own(), &options, Locale::En, &DisplayConfig::default());
        let austria = output.lines().nth(3).unwrap_or_default();
        assert_eq!(
            austria,
            format!("{:<28}{:>18}{:>18}{:>18}", "Austria", "6,081,287", "22,534", "6,048,313")
        );
    }

    #[test]
    fn test_empty_own_list() {
        let options = CountriesOptions { own: true, sort: true };
        let output = render(&create_mock_countries(), &[], &options, Locale::En, &DisplayConfig::default());
        assert_eq!(output, "Own list\n════════\nNo countries to show.\n");
    }
}
