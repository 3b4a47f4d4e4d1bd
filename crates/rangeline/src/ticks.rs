//! The ruler drawn under a track. Pure data; hosts decide how to paint it.

use std::num::NonZeroUsize;

use crate::{DomainRange, Step};

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub value: f64,
    pub label: Option<String>,
    pub first: bool,
    /// The closing mark at exactly `max`. It draws no interval of its own.
    pub last: bool,
}

/// `start, start + step, ...` while `< end`.
pub fn value_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(start < end) {
        return Vec::new();
    }
    (0..)
        .map(|k| start + step * k as f64)
        .take_while(|v| *v < end)
        .collect()
}

pub fn tick_strip(
    domain: &DomainRange,
    step: Step,
    mark_step: NonZeroUsize,
    format_label: impl Fn(f64) -> String,
) -> Vec<Tick> {
    let mut ticks: Vec<Tick> = value_range(domain.min(), domain.max(), step.get())
        .into_iter()
        .enumerate()
        .map(|(index, value)| Tick {
            index,
            value,
            label: (index % mark_step.get() == 0).then(|| format_label(value)),
            first: index == 0,
            last: false,
        })
        .collect();

    ticks.push(Tick {
        index: ticks.len(),
        value: domain.max(),
        label: Some(format_label(domain.max())),
        first: false,
        last: true,
    });
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;

    #[test]
    fn value_range_is_half_open() {
        assert_eq!(
            value_range(1.0, 10.0, 1.0),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(value_range(5.0, 8.0, 1.0), vec![5.0, 6.0, 7.0]);
        assert_eq!(
            value_range(-2.0, 12.0, 1.0),
            vec![
                -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0
            ]
        );
    }

    #[test]
    fn value_range_degenerate_inputs() {
        assert!(value_range(0.0, 10.0, 0.0).is_empty());
        assert!(value_range(0.0, 10.0, -1.0).is_empty());
        assert!(value_range(3.0, 3.0, 1.0).is_empty());
        assert!(value_range(0.0, 1.0, f64::NAN).is_empty());
    }

    fn strip(min: f64, max: f64, step: f64, mark: usize) -> String {
        let ticks = tick_strip(
            &DomainRange::new(min, max).unwrap(),
            Step::new(step).unwrap(),
            NonZeroUsize::new(mark).unwrap(),
            format::time_of_day,
        );
        ticks
            .iter()
            .map(|t| match (&t.label, t.last) {
                (Some(l), true) => format!("[{l}]"),
                (Some(l), false) => l.clone(),
                (None, _) => "|".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn hourly_strip_wraps_past_midnight() {
        insta::assert_snapshot!(
            strip(600.0, 1560.0, 60.0, 4),
            @"10:00 | | | 14:00 | | | 18:00 | | | 22:00 | | | [2:00]"
        );
    }

    #[test]
    fn quarter_hour_strip_labels_every_other_mark() {
        insta::assert_snapshot!(
            strip(600.0, 675.0, 15.0, 2),
            @"10:00 | 10:30 | 11:00 [11:15]"
        );
    }

    #[test]
    fn first_and_last_flags() {
        let ticks = tick_strip(
            &DomainRange::new(600.0, 810.0).unwrap(),
            Step::new(30.0).unwrap(),
            NonZeroUsize::new(3).unwrap(),
            format::plain,
        );
        assert_eq!(ticks.len(), 8);
        assert!(ticks[0].first && !ticks[0].last);
        assert!(ticks.iter().skip(1).all(|t| !t.first));
        let last = ticks.last().unwrap();
        assert!(last.last);
        assert_eq!(last.value, 810.0);
        assert_eq!(last.label.as_deref(), Some("810"));
        assert_eq!(ticks[3].label.as_deref(), Some("690"));
        assert_eq!(ticks[4].label, None);
    }
}
