//! Procurement timeline tab: risk summary, delivery bars and the schedule table

use crate::domain::a005_procurement_timeline::api;
use crate::shared::date_utils::{format_date, today};
use contracts::domain::a005_procurement_timeline::aggregate::{
    ProcurementTimeline, RiskStatus, TimelineEntry,
};
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Left offset and width, in percent of the window, of the span `start..=end`
pub fn bar_span(window: (NaiveDate, NaiveDate), start: NaiveDate, end: NaiveDate) -> (f64, f64) {
    let total = (window.1 - window.0).num_days().max(1) as f64;
    let left = (start - window.0).num_days() as f64 / total * 100.0;
    let width = (end - start).num_days().max(1) as f64 / total * 100.0;
    let left = left.clamp(0.0, 100.0);
    (left, width.min(100.0 - left))
}

/// Earliest order date to latest delivery end
fn window_of(timeline: &ProcurementTimeline) -> Option<(NaiveDate, NaiveDate)> {
    let start = timeline.entries.iter().map(|e| e.item.order_by).min()?;
    let end = timeline.entries.iter().map(|e| e.item.delivery_end).max()?;
    Some((start, end))
}

fn risk_color(status: RiskStatus) -> BadgeColor {
    match status {
        RiskStatus::Critical => BadgeColor::Danger,
        RiskStatus::Warning => BadgeColor::Warning,
        RiskStatus::OnTrack => BadgeColor::Success,
    }
}

#[component]
fn Overview(timeline: ProcurementTimeline, today: NaiveDate) -> impl IntoView {
    let summary = timeline.summary(today);
    let next_order = summary
        .days_to_next_order
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());
    let metrics = [
        (summary.critical.to_string(), "Critical Items", "metric__value--danger"),
        (summary.warning.to_string(), "At Risk", "metric__value--warning"),
        (summary.on_track.to_string(), "On Track", "metric__value--success"),
        (next_order, "Days to Next Order", "metric__value--primary"),
    ];

    view! {
        <div class="card">
            <h2 class="card__title">"Procurement Timeline Overview"</h2>
            <p class="card__subtitle">
                "Critical path analysis and delivery schedule for project materials"
            </p>
            <div class="metric-grid">
                {metrics
                    .into_iter()
                    .map(|(value, label, class)| view! {
                        <div class="metric">
                            <div class=format!("metric__value {}", class)>{value}</div>
                            <div class="metric__label">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DeliveryBars(entries: Vec<TimelineEntry>, window: (NaiveDate, NaiveDate), today: NaiveDate) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card__title">"Material Delivery Schedule"</h2>
            <p class="card__subtitle">"Order and delivery windows per material"</p>
            {entries
                .into_iter()
                .map(|entry| {
                    let item = entry.item.clone();
                    let status = item.status;
                    let (order_left, order_width) = bar_span(window, item.order_by, item.delivery_start);
                    let (delivery_left, delivery_width) =
                        bar_span(window, item.delivery_start, item.delivery_end);
                    let days = item.days_to_order(today);
                    let vendor = entry.vendor_name().to_string();
                    view! {
                        <div class="gantt-row">
                            <div class="gantt-row__head">
                                <div>
                                    <h4>{item.material.clone()}</h4>
                                    <p class="muted">{vendor}</p>
                                </div>
                                <Badge appearance=BadgeAppearance::Tint color=risk_color(status)>
                                    {status.label()}
                                </Badge>
                            </div>
                            <div class="gantt">
                                <div
                                    class="gantt__lead"
                                    style=format!("left: {:.1}%; width: {:.1}%", order_left, order_width)
                                ></div>
                                <div
                                    class=format!("gantt__delivery gantt__delivery--{}", item.status.as_str())
                                    style=format!("left: {:.1}%; width: {:.1}%", delivery_left, delivery_width)
                                ></div>
                            </div>
                            <div class="gantt-row__dates muted">
                                <span>{format!("Order by: {}", item.order_by.format("%b %d"))}</span>
                                <span>
                                    {format!(
                                        "Delivery: {} - {}",
                                        item.delivery_start.format("%b %d"),
                                        item.delivery_end.format("%b %d")
                                    )}
                                </span>
                                <span class:text-danger={days < 0}>{item.order_hint(today)}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ScheduleTable(entries: Vec<TimelineEntry>, today: NaiveDate) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card__title">"Detailed Schedule"</h2>
            <p class="card__subtitle">"Complete procurement timeline with key dates and milestones"</p>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Material"</th>
                        <th>"Vendor"</th>
                        <th>"Order By"</th>
                        <th>"Delivery Window"</th>
                        <th class="num">"Lead Time"</th>
                        <th>"Confirmed Delivery"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let item = entry.item.clone();
                            let status = item.status;
                            let confirmed = entry
                                .confirmed_delivery
                                .map(format_date)
                                .unwrap_or_else(|| "—".to_string());
                            let vendor = entry.vendor_name().to_string();
                            let finalized = entry.finalized_vendor.is_some();
                            view! {
                                <tr>
                                    <td class="strong">{item.material.clone()}</td>
                                    <td>
                                        {vendor}
                                        {finalized.then(|| view! {
                                            <span class="chip chip--success">"finalized"</span>
                                        })}
                                    </td>
                                    <td>
                                        {format_date(item.order_by)}
                                        <div class="muted">{item.order_hint(today)}</div>
                                    </td>
                                    <td>
                                        {format!(
                                            "{} → {} ({} days)",
                                            format_date(item.delivery_start),
                                            format_date(item.delivery_end),
                                            item.delivery_window_days()
                                        )}
                                    </td>
                                    <td class="num">{format!("{} days", item.lead_time_days())}</td>
                                    <td>{confirmed}</td>
                                    <td>
                                        <Badge appearance=BadgeAppearance::Tint color=risk_color(status)>
                                            {status.label()}
                                        </Badge>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ProcurementTimelineView() -> impl IntoView {
    let timeline = RwSignal::new(None::<ProcurementTimeline>);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_timeline().await {
            Ok(loaded) => timeline.set(Some(loaded)),
            Err(e) => {
                log::error!("Failed to load timeline: {}", e);
                error.set(Some(e));
            }
        }
    });

    view! {
        <div class="tab-page timeline">
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || match timeline.get() {
                None => view! { <div class="loading"><Spinner /></div> }.into_any(),
                Some(timeline) => {
                    let today = today();
                    let entries = timeline.entries.clone();
                    let bars = window_of(&timeline).map(|window| view! {
                        <DeliveryBars entries=entries.clone() window=window today=today />
                    });
                    view! {
                        <Overview timeline=timeline today=today />
                        {bars}
                        <ScheduleTable entries=entries today=today />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn bar_span_is_relative_to_window() {
        let window = (date(1, 1), date(1, 11));
        assert_eq!(bar_span(window, date(1, 1), date(1, 6)), (0.0, 50.0));
        assert_eq!(bar_span(window, date(1, 6), date(1, 11)), (50.0, 50.0));
    }

    #[test]
    fn bar_span_never_leaves_the_track() {
        let window = (date(1, 1), date(1, 11));
        let (left, width) = bar_span(window, date(1, 10), date(3, 1));
        assert_eq!(left, 90.0);
        assert!((left + width - 100.0).abs() < 1e-9);
        // Same-day spans stay visible
        let (_, width) = bar_span(window, date(1, 3), date(1, 3));
        assert!(width > 0.0);
    }
}
