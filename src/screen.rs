//! Weather screen composition.
//!
//! Lays a weather report out on the two planes, top to bottom: temperature,
//! humidity, feels-like, wind (with optional gusts), sunset time and the
//! condition text. Each reading is checked against its comfort band and
//! drawn on the red plane when it falls outside, on the black plane
//! otherwise. Labels and the condition line are always black.
//!
//! All positions are in logical portrait coordinates; orientation is the
//! driver's concern.

use serde::{Deserialize, Serialize};

use crate::epd::WIDTH;
use crate::fonts::{SANS_10, SANS_35, SANS_50};
use crate::graphics::BitPlane;
use crate::layout::{centered, right_aligned, TextSink, Writer};
use crate::threshold::Limits;

/// Wind reading. `gust` is often absent from upstream data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f32,
    pub deg: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust: Option<f32>,
}

/// One observation, already reduced to the fields the screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: f32,
    pub feels_like: f32,
    pub humidity: f32,
    pub wind: Wind,
    /// Sunset in local wall-clock hours and minutes.
    pub sunset_hour: u8,
    pub sunset_minute: u8,
    /// Free-form condition text, e.g. "light snow".
    pub conditions: String,
}

/// Sixteen-sector compass name for a bearing in degrees.
pub fn degrees_to_compass(deg: f32) -> &'static str {
    const SECTORS: [&str; 17] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW", "N",
    ];
    let sector = ((deg.rem_euclid(360.0)) / 22.5).round() as usize;
    SECTORS[sector]
}

/// Compose the weather screen onto `black` and `red`.
///
/// Both planes are blanked first; readings outside their band in `limits`
/// land on the red plane. Rounded display values are what gets checked, so
/// the color always matches what the viewer reads.
pub fn draw_weather(black: &mut BitPlane, red: &mut BitPlane, report: &WeatherReport, limits: &Limits) {
    black.fill(0xFF);
    red.fill(0xFF);

    let mut line = 10;

    // Current temperature, large and centered
    let temp = report.temp.round();
    let text = format!("{}", temp as i32);
    let plane: &mut BitPlane = if limits.temp.in_range(temp) { &mut *black } else { &mut *red };
    let mut w = Writer::new(plane, &SANS_50);
    w.set_textpos(line, centered(&SANS_50, &text, WIDTH, 0));
    w.print(&text);
    line += 55;

    // Humidity
    let humidity = report.humidity.round();
    let text = format!("{}%", humidity as i32);
    let plane: &mut BitPlane = if limits.humidity.in_range(humidity) { &mut *black } else { &mut *red };
    let mut w = Writer::new(plane, &SANS_35);
    w.set_textpos(line, centered(&SANS_35, &text, WIDTH, 0));
    w.print(&text);
    line += 40;

    // Feels like: small label right-aligned in the left half, value beside it
    let label_width = WIDTH / 2 - 10;
    let mut w = Writer::new(black, &SANS_10);
    w.set_textpos(line + 10, right_aligned(&SANS_10, "Feels like", label_width, 0));
    w.print("Feels like");
    let text = format!("{}", report.feels_like.round() as i32);
    let mut w = Writer::new(black, &SANS_35);
    w.set_textpos(line, WIDTH / 2);
    w.print(&text);
    line += 40;

    // Wind speed, direction and gusts. With gusts present the columns
    // squeeze left to make room for the gust figure.
    let mut subcolw = (WIDTH as f32 / 2.0).round() as u32;
    if let Some(gust) = report.wind.gust {
        let colw = (WIDTH as f32 * 0.6).round() as u32;
        subcolw = (colw as f32 * 0.66).round() as u32;
        let gust = gust.round();
        let text = format!("{}", gust as i32);
        let plane: &mut BitPlane = if limits.gusts.in_range(gust) { &mut *black } else { &mut *red };
        let mut w = Writer::new(plane, &SANS_35);
        w.set_textpos(line, colw);
        w.print(&text);
    }

    let speed = report.wind.speed.round();
    let text = format!("{}", speed as i32);
    let plane: &mut BitPlane = if limits.wind.in_range(speed) { &mut *black } else { &mut *red };
    let mut w = Writer::new(plane, &SANS_35);
    w.set_textpos(line, right_aligned(&SANS_35, &text, subcolw, 0));
    w.print(&text);

    let mut w = Writer::new(black, &SANS_10);
    w.set_textpos(line, subcolw + 5);
    w.print("km/h");
    w.set_textpos(line + 15, subcolw + 5);
    w.print(degrees_to_compass(report.wind.deg));
    line += 40;

    // Sunset
    let text = format!("Sunset {}:{:02}", report.sunset_hour, report.sunset_minute);
    let mut w = Writer::new(black, &SANS_10);
    w.set_textpos(line, centered(&SANS_10, &text, WIDTH, 0));
    w.print(&text);
    line += 15;

    // Condition text fills whatever is left at the bottom
    let mut w = Writer::new(black, &SANS_35);
    w.set_textpos(line + 10, 0);
    w.print(&report.conditions);
}

/// Compose the failure screen: a red banner, the current date and time in
/// black when known, and the error detail in red.
pub fn draw_error(black: &mut BitPlane, red: &mut BitPlane, msg: Option<&str>, clock: Option<(&str, &str)>) {
    black.fill(0xFF);
    red.fill(0xFF);

    let mut w = Writer::new(red, &SANS_10);
    w.set_textpos(10, 0);
    w.print("Error :(");
    w.set_textpos(25, 0);
    w.print("Failed to load");

    if let Some((date, time)) = clock {
        let mut w = Writer::new(black, &SANS_10);
        w.set_textpos(40, 0);
        w.print(date);
        w.set_textpos(55, 0);
        w.print(time);
    }

    if let Some(msg) = msg {
        let mut w = Writer::new(red, &SANS_10);
        w.set_textpos(70, 0);
        w.print(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink_count(plane: &BitPlane) -> usize {
        plane.as_bytes().iter().map(|b| b.count_zeros() as usize).sum()
    }

    fn report() -> WeatherReport {
        WeatherReport {
            temp: 10.0,
            feels_like: 7.6,
            humidity: 55.0,
            wind: Wind { speed: 12.0, deg: 45.0, gust: Some(18.0) },
            sunset_hour: 17,
            sunset_minute: 5,
            conditions: "light snow".to_string(),
        }
    }

    #[test]
    fn compass_sectors() {
        assert_eq!(degrees_to_compass(0.0), "N");
        assert_eq!(degrees_to_compass(360.0), "N");
        assert_eq!(degrees_to_compass(359.0), "N");
        assert_eq!(degrees_to_compass(45.0), "NE");
        assert_eq!(degrees_to_compass(22.5), "NNE");
        assert_eq!(degrees_to_compass(90.0), "E");
        assert_eq!(degrees_to_compass(180.0), "S");
        assert_eq!(degrees_to_compass(270.0), "W");
        assert_eq!(degrees_to_compass(-45.0), "NW");
    }

    #[test]
    fn in_range_weather_stays_on_the_black_plane() {
        let mut black = BitPlane::for_panel();
        let mut red = BitPlane::for_panel();
        draw_weather(&mut black, &mut red, &report(), &Limits::default());
        assert!(ink_count(&black) > 0);
        assert_eq!(ink_count(&red), 0);
    }

    #[test]
    fn out_of_range_temperature_moves_to_the_red_plane() {
        let mut black = BitPlane::for_panel();
        let mut red = BitPlane::for_panel();
        let mut r = report();
        r.temp = 31.0;
        draw_weather(&mut black, &mut red, &r, &Limits::default());
        assert!(ink_count(&red) > 0);

        // red ink is confined to the temperature band at the top
        let stride = red.stride();
        let top = &red.as_bytes()[..stride * 70];
        assert!(top.iter().any(|&b| b != 0xFF));
        let below = &red.as_bytes()[stride * 70..];
        assert!(below.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn boundary_values_count_as_out_of_range() {
        let mut black = BitPlane::for_panel();
        let mut red = BitPlane::for_panel();
        let mut r = report();
        r.temp = 25.0;
        draw_weather(&mut black, &mut red, &r, &Limits::default());
        assert!(ink_count(&red) > 0);
    }

    #[test]
    fn gusts_narrow_the_wind_columns() {
        let mut black = BitPlane::for_panel();
        let mut red = BitPlane::for_panel();
        let mut r = report();
        r.wind.gust = None;
        draw_weather(&mut black, &mut red, &r, &Limits::default());
        let without = ink_count(&black);

        r.wind.gust = Some(18.0);
        draw_weather(&mut black, &mut red, &r, &Limits::default());
        let with = ink_count(&black);
        assert!(with > without, "gust figure adds ink: {with} vs {without}");
    }

    #[test]
    fn error_screen_uses_both_planes() {
        let mut black = BitPlane::for_panel();
        let mut red = BitPlane::for_panel();
        draw_error(&mut black, &mut red, Some("timeout"), Some(("2024-01-07", "06:30:00")));
        assert!(ink_count(&red) > 0);
        assert!(ink_count(&black) > 0);

        let mut b2 = BitPlane::for_panel();
        let mut r2 = BitPlane::for_panel();
        draw_error(&mut b2, &mut r2, None, None);
        assert!(ink_count(&r2) > 0);
        assert_eq!(ink_count(&b2), 0);
    }

    #[test]
    fn report_parses_from_json() {
        let json = r#"{
            "temp": -2.4,
            "feels_like": -7.1,
            "humidity": 81.0,
            "wind": { "speed": 6.2, "deg": 310.0 },
            "sunset_hour": 16,
            "sunset_minute": 48,
            "conditions": "overcast clouds"
        }"#;
        let r: WeatherReport = serde_json::from_str(json).unwrap();
        assert_eq!(r.wind.gust, None);
        assert_eq!(degrees_to_compass(r.wind.deg), "NW");
    }
}
