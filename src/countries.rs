use phf::phf_map;

/// Hungarian names keyed by the English country name the API reports
static HU_COUNTRY_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "Afghanistan" => "Afganisztán",
    "Albania" => "Albánia",
    "Algeria" => "Algéria",
    "Argentina" => "Argentína",
    "Armenia" => "Örményország",
    "Australia" => "Ausztrália",
    "Austria" => "Ausztria",
    "Azerbaijan" => "Azerbajdzsán",
    "Belarus" => "Fehéroroszország",
    "Belgium" => "Belgium",
    "Bosnia" => "Bosznia-Hercegovina",
    "Brazil" => "Brazília",
    "Bulgaria" => "Bulgária",
    "Canada" => "Kanada",
    "Chile" => "Chile",
    "China" => "Kína",
    "Colombia" => "Kolumbia",
    "Croatia" => "Horvátország",
    "Cuba" => "Kuba",
    "Cyprus" => "Ciprus",
    "Czechia" => "Csehország",
    "Denmark" => "Dánia",
    "Egypt" => "Egyiptom",
    "Estonia" => "Észtország",
    "Finland" => "Finnország",
    "France" => "Franciaország",
    "Georgia" => "Grúzia",
    "Germany" => "Németország",
    "Greece" => "Görögország",
    "Hungary" => "Magyarország",
    "Iceland" => "Izland",
    "India" => "India",
    "Indonesia" => "Indonézia",
    "Iran" => "Irán",
    "Iraq" => "Irak",
    "Ireland" => "Írország",
    "Israel" => "Izrael",
    "Italy" => "Olaszország",
    "Japan" => "Japán",
    "Kazakhstan" => "Kazahsztán",
    "Latvia" => "Lettország",
    "Lithuania" => "Litvánia",
    "Luxembourg" => "Luxemburg",
    "Malta" => "Málta",
    "Mexico" => "Mexikó",
    "Moldova" => "Moldova",
    "Montenegro" => "Montenegró",
    "Morocco" => "Marokkó",
    "Netherlands" => "Hollandia",
    "New Zealand" => "Új-Zéland",
    "North Macedonia" => "Észak-Macedónia",
    "Norway" => "Norvégia",
    "Pakistan" => "Pakisztán",
    "Peru" => "Peru",
    "Philippines" => "Fülöp-szigetek",
    "Poland" => "Lengyelország",
    "Portugal" => "Portugália",
    "Romania" => "Románia",
    "Russia" => "Oroszország",
    "S. Korea" => "Dél-Korea",
    "Saudi Arabia" => "Szaúd-Arábia",
    "Serbia" => "Szerbia",
    "Slovakia" => "Szlovákia",
    "Slovenia" => "Szlovénia",
    "South Africa" => "Dél-afrikai Köztársaság",
    "Spain" => "Spanyolország",
    "Sweden" => "Svédország",
    "Switzerland" => "Svájc",
    "Thailand" => "Thaiföld",
    "Turkey" => "Törökország",
    "UAE" => "Egyesült Arab Emírségek",
    "UK" => "Egyesült Királyság",
    "USA" => "Amerikai Egyesült Államok",
    "Ukraine" => "Ukrajna",
    "Vietnam" => "Vietnám",
};

/// Look up the Hungarian name of a country
///
/// Names without a translation are returned unchanged.
pub fn get_country_translation(country: &str) -> String {
    HU_COUNTRY_NAMES
        .get(country)
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| country.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_country_is_translated() {
        assert_eq!(get_country_translation("Hungary"), "Magyarország");
        assert_eq!(get_country_translation("Germany"), "Németország");
        assert_eq!(get_country_translation("USA"), "Amerikai Egyesült Államok");
    }

    #[test]
    fn test_unknown_country_falls_back_to_input() {
        assert_eq!(get_country_translation("Diamond Princess"), "Diamond Princess");
        assert_eq!(get_country_translation(""), "");
    }
}
