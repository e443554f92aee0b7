//! Plain-text rendering of the report.

use std::fmt;

use crate::config::REPORT_TOP_N;

use super::aggregate::{SiteReport, SiteSummary};

/// Formats seconds in shortest round-trip form, keeping one decimal place for
/// whole numbers (`1.0`, not `1`).
///
/// Magnitudes below `1e-4` or from `1e16` up switch to scientific notation
/// with a signed, two-digit exponent (`5e-05`, `1e+16`).
pub fn format_seconds(seconds: f64) -> String {
    let magnitude = seconds.abs();
    if seconds.is_finite() && seconds != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_scientific(seconds);
    }
    if seconds.is_finite() && seconds.fract() == 0.0 {
        format!("{seconds:.1}")
    } else {
        format!("{seconds}")
    }
}

fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

impl fmt::Display for SiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}kb {}s",
            self.site,
            self.size_kb,
            format_seconds(self.elapsed_seconds)
        )
    }
}

impl fmt::Display for SiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fastest {REPORT_TOP_N} Sites:")?;
        for site in &self.fastest {
            writeln!(f, "{site}")?;
        }
        writeln!(f)?;

        writeln!(f, "Slowest {REPORT_TOP_N} Sites:")?;
        for site in &self.slowest {
            writeln!(f, "{site}")?;
        }
        writeln!(f)?;

        writeln!(f, "Median Homepage Size: {}kb", self.median_size_kb)?;
        writeln!(
            f,
            "Median Homepage Download Time: {}s",
            format_seconds(self.median_elapsed_seconds)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;
    use crate::visit::VisitedSite;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.3), "0.3");
        assert_eq!(format_seconds(1.0), "1.0");
        assert_eq!(format_seconds(0.123456), "0.123456");
        assert_eq!(format_seconds(12.0), "12.0");
        assert_eq!(format_seconds(0.0), "0.0");
        assert_eq!(format_seconds(0.0001), "0.0001");
    }

    #[test]
    fn test_format_seconds_scientific_cutoffs() {
        assert_eq!(format_seconds(0.00005), "5e-05");
        assert_eq!(format_seconds(1.5e-5), "1.5e-05");
        assert_eq!(format_seconds(1.2e-10), "1.2e-10");
        assert_eq!(format_seconds(1e16), "1e+16");
        assert_eq!(format_seconds(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn test_render_five_site_report() {
        let sites: Vec<VisitedSite> = (1..=5)
            .map(|i| {
                VisitedSite::new(
                    format!("site{i}.com"),
                    "x".repeat(i * 1000),
                    i as f64 / 10.0,
                )
            })
            .collect();
        let report = build_report(&sites, 0).expect("five sites should report");

        let expected = "\
Fastest 5 Sites:
site1.com 1kb 0.1s
site2.com 2kb 0.2s
site3.com 3kb 0.3s
site4.com 4kb 0.4s
site5.com 5kb 0.5s

Slowest 5 Sites:
site1.com 1kb 0.1s
site2.com 2kb 0.2s
site3.com 3kb 0.3s
site4.com 4kb 0.4s
site5.com 5kb 0.5s

Median Homepage Size: 3kb
Median Homepage Download Time: 0.3s
";
        assert_eq!(report.to_string(), expected);
    }
}
