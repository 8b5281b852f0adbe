use crate::shared::format::format_money;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat card renders its number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Integer,
    Money,
}

pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Integer => format_thousands(value.round() as i64),
        ValueFormat::Money => format_money(value),
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0, ValueFormat::Integer), "0");
        assert_eq!(format_value(1234.0, ValueFormat::Integer), "1 234");
        assert_eq!(format_value(-1234567.0, ValueFormat::Integer), "-1 234 567");
        assert_eq!(format_value(1234.5, ValueFormat::Money), "1 234.50");
    }
}
