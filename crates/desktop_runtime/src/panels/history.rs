use leptos::*;

struct Milestone {
    heading: &'static str,
    detail: &'static str,
}

const MILESTONES: [Milestone; 3] = [
    Milestone {
        heading: "Software Engineer at Compound",
        detail: "Building scalable financial applications",
    },
    Milestone {
        heading: "Data Science Studies",
        detail: "University of Helsinki - Current",
    },
    Milestone {
        heading: "Computer Science Degree",
        detail: "University of Helsinki - 2021",
    },
];

#[component]
pub(super) fn HistoryPanel() -> impl IntoView {
    view! {
        <div class="panel-history">
            <h3>"Professional Journey"</h3>
            {MILESTONES
                .iter()
                .map(|milestone| {
                    view! {
                        <div class="panel-history-entry">
                            <h4>{milestone.heading}</h4>
                            <p>{milestone.detail}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
