use yew::prelude::*;

use crate::content::STATS;
use crate::i18n::use_language;
use crate::visibility::use_animated_counter;

/// Whole-number display with thousands separators and a trailing `+`.
pub fn format_count(value: f64) -> String {
    let whole = value.max(0.0).floor() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push('+');
    out
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub active: bool,
    pub target: f64,
    pub delay_ms: u32,
    pub label_key: &'static str,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let lang = use_language();
    let value = use_animated_counter(props.active, props.target, props.delay_ms);
    html! {
        <div class="stat">
            <span class="stat-value">{format_count(value)}</span>
            <span class="stat-label">{lang.t(props.label_key)}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    /// Whether the enclosing section is in the visible set.
    pub active: bool,
}

/// Three counters sharing one trigger, started with staggered delays.
#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let lang = use_language();
    html! {
        <>
            <h2>{lang.t("stats.title")}</h2>
            <div class="stats-grid">
                {
                    STATS.iter().map(|(label_key, target, delay_ms)| html! {
                        <StatCounter
                            active={props.active}
                            target={*target}
                            delay_ms={*delay_ms}
                            label_key={*label_key}
                        />
                    }).collect::<Html>()
                }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_separators() {
        assert_eq!(format_count(0.0), "0+");
        assert_eq!(format_count(25.0), "25+");
        assert_eq!(format_count(12000.0), "12,000+");
        assert_eq!(format_count(1234567.9), "1,234,567+");
    }

    #[test]
    fn partial_ticks_round_down() {
        assert_eq!(format_count(0.5), "0+");
        assert_eq!(format_count(24.999), "24+");
    }
}
