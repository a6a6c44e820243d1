/// Returns "$1,234.56" with thousands separators.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// Returns "12.3%" to one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Returns the trend as an arrow plus magnitude, e.g. "↑ 2.0%" or "↓ 1.4%".
/// Values within ±0.05% render as flat.
pub fn format_trend(trend_percent: f64) -> String {
    if trend_percent >= 0.05 {
        format!("↑ {:.1}%", trend_percent)
    } else if trend_percent <= -0.05 {
        format!("↓ {:.1}%", trend_percent.abs())
    } else {
        "→ 0.0%".to_string()
    }
}

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a series of values as a block-glyph sparkline, scaled to its own
/// min/max. A flat series renders as a mid-height line.
pub fn sparkline(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span <= f64::EPSILON {
        return SPARK_GLYPHS[3].to_string().repeat(values.len());
    }
    values
        .iter()
        .map(|v| {
            let bucket = ((v - min) / span * 7.0).round() as usize;
            SPARK_GLYPHS[bucket.min(7)]
        })
        .collect()
}
