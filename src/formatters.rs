use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::constants::ICON_ASSET_DIR;
use crate::models::CityCard;

const EMPTY_LIST: &str = r#"<p id="empty-msg">No cities to show.</p>"#;

/// Maps a provider condition category to a weather icon file
pub fn icon_for(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "clear" => "sun.svg",
        "rain" => "cloud-rain.svg",
        // The provider reports "Clouds"; older payloads used the singular.
        "cloud" | "clouds" => "cloud.svg",
        _ => "sun.svg",
    }
}

pub fn icon_url(category: &str) -> String {
    format!("{}/{}", ICON_ASSET_DIR, icon_for(category))
}

/// Maps a compass code to one of eight arrow icons
pub fn arrow_for(direction: &str) -> &'static str {
    match direction.to_uppercase().as_str() {
        "N" => "arrow-up",
        "NNE" | "NE" | "ENE" => "arrow-up-right",
        "E" => "arrow-right",
        "ESE" | "SE" | "SSE" => "arrow-down-right",
        "S" => "arrow-down",
        "SSW" | "SW" | "WSW" => "arrow-down-left",
        "W" => "arrow-left",
        "WNW" | "NW" | "NNW" => "arrow-up-left",
        _ => "arrow-up",
    }
}

fn format_measure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{:.0}{}", value, unit),
        None => "-".to_string(),
    }
}

/// Renders the saved-city cards shown on the home page
pub fn render_city_cards(cards: &[CityCard]) -> String {
    if cards.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let mut output = String::from("<div class=\"city-cards\">\n");
    for card in cards {
        let id = card.id.map(|id| id.to_string()).unwrap_or_default();
        let city = card.city.as_deref().unwrap_or_default();
        let country = card.country.as_deref().unwrap_or_default();
        let icon = card.icon.as_deref().unwrap_or_default();
        let direction = card.wind_direction.as_deref().unwrap_or_default();
        let icon_key = icon.to_lowercase();
        output.push_str(&format!(
            concat!(
                "<div class=\"city-card\" data-id=\"{id}\">\n",
                "  <h3 class=\"city-name\">{city}, {country}</h3>\n",
                "  <img src=\"{icon_src}\" alt=\"{icon_alt}\" class=\"icon-weather\">\n",
                "  <p class=\"temp\">{temp}</p>\n",
                "  <p class=\"range\">{min} / {max}</p>\n",
                "  <p class=\"details\">Humidity {humidity} &middot; Visibility {visibility}</p>\n",
                "  <p class=\"wind\"><span class=\"wind-arrow {arrow}\" aria-hidden=\"true\"></span> {direction} {speed}</p>\n",
                "  <button type=\"button\" class=\"remove-city-btn\">&times;</button>\n",
                "</div>\n",
            ),
            id = encode_double_quoted_attribute(&id),
            city = encode_text(city),
            country = encode_text(country),
            icon_src = encode_double_quoted_attribute(&icon_url(icon)),
            icon_alt = encode_double_quoted_attribute(&icon_key),
            temp = format_measure(card.temp, "\u{00b0}C"),
            min = format_measure(card.temp_min, "\u{00b0}"),
            max = format_measure(card.temp_max, "\u{00b0}"),
            humidity = format_measure(card.humidity, "%"),
            visibility = format_measure(card.visibility, ""),
            arrow = arrow_for(direction),
            direction = encode_text(direction),
            speed = format_measure(card.wind_speed, " m/s"),
        ));
    }
    output.push_str("</div>\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wind::WindDirection;

    #[test]
    fn icon_lookup_ignores_case_and_plural() {
        assert_eq!(icon_for("Clouds"), icon_for("cloud"));
        assert_eq!(icon_for("Rain"), "cloud-rain.svg");
        assert_eq!(icon_for("CLEAR"), "sun.svg");
    }

    #[test]
    fn unknown_icon_falls_back_to_sun() {
        assert_eq!(icon_for("unknown"), icon_for("clear"));
        assert_eq!(icon_for(""), "sun.svg");
        assert_eq!(icon_url("Snow"), "/svg/sun.svg");
    }

    #[test]
    fn arrow_lookup_covers_every_direction() {
        assert_eq!(arrow_for("N"), "arrow-up");
        assert_eq!(arrow_for("nne"), "arrow-up-right");
        assert_eq!(arrow_for("E"), "arrow-right");
        assert_eq!(arrow_for("SSE"), "arrow-down-right");
        assert_eq!(arrow_for("S"), "arrow-down");
        assert_eq!(arrow_for("wsw"), "arrow-down-left");
        assert_eq!(arrow_for("W"), "arrow-left");
        assert_eq!(arrow_for("NNW"), "arrow-up-left");

        for direction in WindDirection::ALL {
            assert!(arrow_for(direction.code()).starts_with("arrow-"));
        }
    }

    #[test]
    fn unknown_arrow_falls_back_to_up() {
        assert_eq!(arrow_for("xx"), "arrow-up");
        assert_eq!(arrow_for(""), "arrow-up");
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_city_cards(&[]), EMPTY_LIST);
    }

    #[test]
    fn renders_card_fields() {
        let card = CityCard {
            id: Some(2988507),
            city: Some("Paris".into()),
            country: Some("FR".into()),
            temp: Some(12.4),
            humidity: Some(81.0),
            wind_speed: Some(4.6),
            wind_direction: Some("E".into()),
            icon: Some("Clouds".into()),
            ..CityCard::default()
        };

        let html = render_city_cards(&[card]);
        assert!(html.contains("data-id=\"2988507\""));
        assert!(html.contains("Paris, FR"));
        assert!(html.contains("src=\"/svg/cloud.svg\""));
        assert!(html.contains("alt=\"clouds\""));
        assert!(html.contains("12\u{00b0}C"));
        assert!(html.contains("wind-arrow arrow-right"));
        assert!(html.contains("Humidity 81%"));
        assert_eq!(html.matches("class=\"city-card\"").count(), 1);
    }

    #[test]
    fn blank_card_renders_placeholders() {
        let html = render_city_cards(&[CityCard::default()]);

        assert!(html.contains("src=\"/svg/sun.svg\""));
        assert!(html.contains("wind-arrow arrow-up"));
        assert!(html.contains("<p class=\"temp\">-</p>"));
    }

    #[test]
    fn escapes_client_supplied_text() {
        let card = CityCard {
            city: Some("<script>alert(1)</script>".into()),
            icon: Some("\"><img".into()),
            ..CityCard::default()
        };

        let html = render_city_cards(&[card]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("alt=\"\"><img"));
    }
}
