//! Plain-text rendering of command results.

use kundali_chart::{Chart, ChartPoint};
use kundali_vedic_base::{ActiveDasha, DashaPeriod, DashaTimeline};

pub fn chart(chart: &Chart) -> String {
    let meta = &chart.meta;
    let mut lines = vec![
        format!("Moment:     {}", meta.moment),
        format!("Location:   {}", meta.coordinate),
        format!("Julian day: {:.6}", meta.julian_day),
        format!("LST:        {:.4} h", meta.lst_hours.rem_euclid(24.0)),
        format!("Ayanamsa:   {:.4} deg", chart.ayanamsa),
        format!(
            "Ascendant:  {} ({:.4} deg sidereal, {:.4} deg tropical)",
            chart.ascendant_sign, meta.sidereal_ascendant_deg, meta.tropical_ascendant_deg
        ),
        format!("Ephemeris:  {}", meta.adapter),
        String::new(),
        format!(
            "{:<8} {:<10} {:>7} {:<18} {:<8} {:<8} {:<12} {:>3} {:<10} R",
            "Point", "Sign", "Deg", "Nakshatra", "N.Lord", "S.Lord", "Dignity", "H", "Navamsa"
        ),
    ];
    lines.extend(chart.points.iter().map(point_row));
    lines.join("\n").trim_end().to_string()
}

fn point_row(p: &ChartPoint) -> String {
    format!(
        "{:<8} {:<10} {:>7} {:<18} {:<8} {:<8} {:<12} {:>3} {:<10} {}",
        p.name(),
        p.sign.name(),
        p.degree_label(),
        format!("{} {}", p.nakshatra.name(), p.nakshatra_pada),
        p.nakshatra_lord.name(),
        p.sign_lord.name(),
        p.dignity.name(),
        p.house,
        p.navamsa_sign.name(),
        if p.is_retrograde { "R" } else { "" }
    )
}

fn period_line(p: &DashaPeriod) -> String {
    format!(
        "{:<28} {} -> {}  ({:.4} y, {})",
        p.label,
        p.start.datetime().format("%Y-%m-%d %H:%M"),
        p.end.datetime().format("%Y-%m-%d %H:%M"),
        p.duration_years,
        p.span
    )
}

pub fn timeline(timeline: &DashaTimeline) -> String {
    let mut out = format!("{} periods\n", timeline.level().name());
    for p in timeline {
        out.push_str(&period_line(p));
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn active(active: &ActiveDasha) -> String {
    format!(
        "At {}\n  Mahadasha:       {}\n  Antardasha:      {}\n  Pratyantardasha: {}",
        active.query,
        period_line(&active.mahadasha),
        period_line(&active.antardasha),
        period_line(&active.pratyantardasha)
    )
}
