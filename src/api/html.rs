//! Color-coded HTML table for browser consumption.

use std::fmt::Write;

use crate::models::{Rating, ScoreRecord};

const STYLE: &str = r#"
        <style>
            table { border-collapse: collapse; width: 60%; margin: 20px auto; }
            th, td { border: 1px solid #ddd; padding: 8px; text-align: center; font-family: Arial; }
            th { background-color: #333; color: white; }
            .green { background-color: #4CAF50; color: white; }
            .orange { background-color: #FF9800; color: white; }
            .red { background-color: #F44336; color: white; }
            .gray { background-color: #9E9E9E; color: white; }
        </style>
"#;

/// Render the recommendations table. Each row shows the fixture, the
/// adjusted home-win probability, and its color rating.
pub fn render_table(records: &[ScoreRecord]) -> String {
    let mut html = String::new();
    html.push_str("<html>\n<head>");
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str("<h2 style=\"text-align:center;\">Premier League Recommendations</h2>\n");
    html.push_str("<table>\n<tr><th>Fixture</th><th>Win %</th><th>Rating</th></tr>\n");

    if records.is_empty() {
        html.push_str("<tr><td colspan=\"3\">No upcoming fixtures</td></tr>\n");
    }

    for record in records {
        let rating = Rating::from_probability(Some(record.adjusted.home));
        let _ = write!(
            html,
            "<tr><td>{} vs {}</td><td>{:.1}%</td><td class=\"{}\">{}</td></tr>\n",
            escape(&record.home.name),
            escape(&record.away.name),
            record.adjusted.home,
            rating,
            capitalize(rating.as_str()),
        );
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Minimal escaping; team names come from upstream and may contain '&'.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureBreakdown, ProbabilityTriple, TeamRef};
    use chrono::Utc;

    fn record(home: &str, away: &str, win: f64) -> ScoreRecord {
        let adjusted = ProbabilityTriple {
            home: win,
            draw: (100.0 - win) / 2.0,
            away: (100.0 - win) / 2.0,
        };
        ScoreRecord {
            fixture_id: 1,
            kickoff: Utc::now(),
            home: TeamRef {
                id: 1,
                name: home.into(),
            },
            away: TeamRef {
                id: 2,
                name: away.into(),
            },
            baseline: adjusted,
            adjusted,
            ratings: adjusted.ratings(),
            features: FeatureBreakdown::default(),
        }
    }

    #[test]
    fn test_render_rows_and_classes() {
        let records = vec![
            record("Liverpool", "Bournemouth", 73.1),
            record("Everton", "Brighton", 38.4),
        ];
        let html = render_table(&records);
        assert!(html.contains("Liverpool vs Bournemouth"));
        assert!(html.contains("73.1%"));
        assert!(html.contains("class=\"green\">Green"));
        assert!(html.contains("class=\"red\">Red"));
    }

    #[test]
    fn test_render_empty() {
        let html = render_table(&[]);
        assert!(html.contains("No upcoming fixtures"));
    }

    #[test]
    fn test_escape_team_name() {
        let records = vec![record("Brighton & Hove", "X", 50.0)];
        assert!(render_table(&records).contains("Brighton &amp; Hove"));
    }
}
