use leptos::*;

const PARAGRAPHS: [&str; 3] = [
    "I am a Computer Science undergraduate student with a strong interest in software \
     engineering and modern web development. I enjoy building practical, user-focused \
     applications and turning ideas into clean, functional products.",
    "My experience spans frontend and full-stack development. I have worked with React and \
     Tailwind CSS on the frontend, and with Spring Boot and JWT-based authentication on the \
     backend. I am also familiar with deploying and running applications using Docker and AWS.",
    "I am highly motivated to keep learning through hands-on projects, competitive programming, \
     and exploring new technologies. I am particularly interested in scalable systems, \
     real-world problem solving, and building software that is both reliable and enjoyable to \
     use.",
];

#[component]
pub(super) fn AboutPanel() -> impl IntoView {
    view! {
        <div class="panel-about">
            {PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
        </div>
    }
}
