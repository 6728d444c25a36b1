//! Rendering of lookup reports.

use colored::Colorize;
use hostgeo::{CountryBorderList, HostReport, LocationRecord};
use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn field(field: &'static str, value: Option<&str>) -> FieldRow {
    FieldRow {
        field,
        value: value.unwrap_or("-").to_string(),
    }
}

/// Print a location as a two-column table.
pub fn print_location(location: &LocationRecord) {
    let ip = location.ip.to_string();
    let rows = vec![
        field("IP Address", Some(ip.as_str())),
        field("Country", location.country_name.as_deref()),
        field("City", location.city.as_deref()),
        field("Region", location.region.as_deref()),
        field("ISP", location.isp.as_deref()),
    ];

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

/// Print the neighbor list of a country.
pub fn print_borders(borders: &CountryBorderList) {
    println!(
        "{} {}",
        "Neighboring countries".bold().underline(),
        format!("({})", borders.country_name).dimmed()
    );

    if borders.neighbors.is_empty() {
        println!("  {}", "(unavailable)".dimmed());
        return;
    }

    for entry in &borders.neighbors {
        println!("  {} {}", "-".green(), entry);
    }
}

/// Print a complete host report under `title`.
pub fn print_report(title: &str, report: &HostReport) {
    println!(
        "{} {}",
        format!("{title}:").bold(),
        report.hostname.as_str().cyan().bold()
    );
    print_location(&report.location);

    if let Some(borders) = &report.borders {
        println!();
        print_borders(borders);
    }
    println!();
}

/// Write reports as CSV, one row per host.
pub fn write_csv<W: Write>(writer: W, rows: &[(&str, &HostReport)]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "role",
        "hostname",
        "ip",
        "country",
        "country_code",
        "city",
        "region",
        "isp",
        "neighbors",
    ])?;

    for (role, report) in rows {
        let location = &report.location;
        let ip = location.ip.to_string();
        let neighbors = report
            .borders
            .as_ref()
            .map(|b| {
                b.neighbors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .unwrap_or_default();

        csv.write_record([
            *role,
            report.hostname.as_str(),
            ip.as_str(),
            location.country_name.as_deref().unwrap_or(""),
            location.country_code.as_deref().unwrap_or(""),
            location.city.as_deref().unwrap_or(""),
            location.region.as_deref().unwrap_or(""),
            location.isp.as_deref().unwrap_or(""),
            neighbors.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostgeo::{BorderEntry, Hostname};
    use std::net::Ipv4Addr;

    fn report() -> HostReport {
        HostReport {
            hostname: Hostname::parse("example.ch").unwrap(),
            ip: Ipv4Addr::new(192, 0, 2, 1),
            location: LocationRecord {
                ip: Ipv4Addr::new(192, 0, 2, 1),
                country_name: Some("Switzerland".into()),
                country_code: Some("CH".into()),
                city: Some("Zurich".into()),
                region: None,
                isp: Some("Init7, AG".into()),
            },
            borders: Some(CountryBorderList {
                source_code: "CH".into(),
                country_name: "Switzerland".into(),
                neighbors: vec![
                    BorderEntry::Country("Austria".into()),
                    BorderEntry::Country("France".into()),
                ],
            }),
        }
    }

    #[test]
    fn test_write_csv() {
        let report = report();
        let mut out = Vec::new();
        write_csv(&mut out, &[("site", &report)]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("role,hostname,ip,country,country_code,city,region,isp,neighbors")
        );
        assert_eq!(
            lines.next(),
            Some("site,example.ch,192.0.2.1,Switzerland,CH,Zurich,,\"Init7, AG\",Austria;France")
        );
    }
}
