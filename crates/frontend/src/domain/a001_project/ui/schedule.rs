//! Project roadmap: overall progress and the four phases

use crate::shared::date_utils::{format_date, format_month_year, today};
use contracts::domain::a001_project::aggregate::{PhaseStatus, Project};
use leptos::prelude::*;
use thaw::*;

fn phase_badge(status: PhaseStatus) -> BadgeColor {
    match status {
        PhaseStatus::Completed => BadgeColor::Success,
        PhaseStatus::InProgress => BadgeColor::Warning,
        PhaseStatus::Pending => BadgeColor::Subtle,
    }
}

#[component]
fn ProgressBar(percent: f64) -> impl IntoView {
    let width = format!("width: {:.1}%", percent.clamp(0.0, 100.0));
    view! {
        <div class="progress">
            <div class="progress__fill" style=width></div>
        </div>
    }
}

#[component]
pub fn ProjectSchedule(project: Project) -> impl IntoView {
    let today = today();
    let timeline = project.timeline;
    let overall = timeline.overall_progress(today);

    let metrics = [
        (
            timeline.count_with_status(PhaseStatus::Completed).to_string(),
            "Completed Phases",
        ),
        (
            timeline.count_with_status(PhaseStatus::InProgress).to_string(),
            "Active Phases",
        ),
        (timeline.total_days().to_string(), "Total Days"),
        (
            format_month_year(timeline.target_completion()),
            "Target Completion",
        ),
    ];

    let phases = timeline
        .phases()
        .into_iter()
        .map(|(kind, phase)| {
            let phase = phase.clone();
            let progress = phase.progress(today);
            let status = phase.status;
            view! {
                <div class="card phase-card" data-phase=kind.id()>
                    <div class="phase-card__head">
                        <div>
                            <h3>{kind.name()}</h3>
                            <p class="muted">{kind.description()}</p>
                            <div class="phase-card__dates">
                                <span>{format_date(phase.start)}</span>
                                <span>"→"</span>
                                <span>{format_date(phase.end)}</span>
                                <span>"•"</span>
                                <span>{format!("{} days", phase.duration_days())}</span>
                            </div>
                        </div>
                        <Badge appearance=BadgeAppearance::Tint color=phase_badge(status)>
                            {status.label()}
                        </Badge>
                    </div>
                    <div class="progress-row">
                        <span>"Progress"</span>
                        <span class="muted">{format!("{:.0}%", progress)}</span>
                    </div>
                    <ProgressBar percent=progress />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tab-page schedule">
            <div class="card">
                <h2 class="card__title">"Project Schedule Overview"</h2>
                <p class="card__subtitle">
                    "Track progress across all project phases with integrated procurement milestones"
                </p>
                <div class="progress-row">
                    <span>"Overall Progress"</span>
                    <span class="muted">{format!("{:.0}%", overall)}</span>
                </div>
                <ProgressBar percent=overall />
                <div class="metric-grid">
                    {metrics
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="metric">
                                    <div class="metric__value">{value}</div>
                                    <div class="metric__label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="phase-list">{phases}</div>
        </div>
    }
}
