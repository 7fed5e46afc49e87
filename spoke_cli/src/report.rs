//! Plain-text build report.

use std::fmt::Write;

use spoke_core::{BuildSpec, Side, SpokeResult};

/// Render the inputs and per-side results as a fixed-width report.
pub fn render(spec: &BuildSpec, result: &SpokeResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, spec, result);
    out
}

fn write_report(out: &mut String, spec: &BuildSpec, result: &SpokeResult) -> std::fmt::Result {
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  SPOKE CALCULATION RESULTS")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(out, "  ERD:          {:.1} mm", spec.erd)?;
    writeln!(out, "  Rim offset:   {:+.1} mm", spec.rim_offset)?;
    writeln!(out, "  Spoke hole:   {:.1} mm", spec.spoke_hole_diameter)?;
    writeln!(
        out,
        "  Spokes:       {} ({} per side)",
        spec.spoke_count,
        spec.spokes_per_side()
    )?;

    for side in Side::BOTH {
        let flange = spec.flange(side);
        let s = result.side(side);
        writeln!(out)?;
        writeln!(out, "{}:", side.label())?;
        writeln!(
            out,
            "  Flange:       {:.1} mm PCD, {:.1} mm offset, {}",
            flange.diameter,
            flange.offset,
            cross_label(flange.cross_pattern)
        )?;
        writeln!(
            out,
            "  Length:       {:.1} mm  (exact {:.3})",
            s.spoke_length_rounded, s.spoke_length
        )?;
        writeln!(out, "  Tension:      {:.1} %", s.tension_percent)?;
        writeln!(out, "  Bracing:      {:.2}°", s.bracing_angle)?;
        writeln!(out, "  Wrap:         {:.2}°", s.wrap_angle)?;
        writeln!(out, "  Total:        {:.2}°", s.total_angle)?;
        writeln!(out, "  Theta:        {:.2}°", s.theta_angle)?;
    }

    writeln!(out)?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(
        out,
        "  ORDER: {:.1} mm left, {:.1} mm right (Δ {:+.2} mm)",
        result.spoke_length_left_rounded,
        result.spoke_length_right_rounded,
        result.length_difference()
    )?;
    writeln!(out, "═══════════════════════════════════════")?;
    Ok(())
}

fn cross_label(cross: u32) -> String {
    match cross {
        0 => "radial".to_string(),
        n => format!("{}-cross", n),
    }
}
