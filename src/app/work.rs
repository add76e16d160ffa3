use leptos::prelude::*;

use crate::content::{Project, DESIGN_TRAINING, PROFESSIONAL_WORK};

#[component]
pub fn Work() -> impl IntoView {
    view! {
        <section id="work" class="py-24 bg-gray-50">
            <div class="max-w-6xl mx-auto px-6">
                <div class="mb-20">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-light text-gray-900 mb-6">
                            "Professional Experience"
                        </h2>
                        <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                            "Showcasing my expertise in modern web development and full-stack solutions"
                        </p>
                    </div>
                    <div class="grid lg:grid-cols-2 gap-8">
                        {PROFESSIONAL_WORK
                            .iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h3 class="text-3xl font-light text-gray-900 mb-12 text-center">
                        "UI/UX Design Training Projects"
                    </h3>
                    <div class="grid lg:grid-cols-2 gap-8">
                        {DESIGN_TRAINING
                            .iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="rounded-3xl bg-white border-0 shadow-lg hover:shadow-2xl transition-all duration-500 overflow-hidden hover:-translate-y-1">
            <div class="p-8 pb-4 space-y-3">
                <span class="inline-block rounded-full border border-gray-300 px-3 py-1 text-xs text-gray-600">
                    {project.role}
                </span>
                <h4 class="text-2xl font-semibold text-gray-900 leading-tight">{project.title}</h4>
                <div class="text-sm text-gray-500 space-y-1">
                    <div class="font-medium">{project.company}</div>
                    <div>{project.period}</div>
                </div>
                <p class="text-gray-600 leading-relaxed">{project.description}</p>
            </div>
            <div class="px-8 pb-8 space-y-6">
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-full px-3 py-1 text-xs bg-gray-100 text-gray-700">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {(!project.links.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex gap-3">
                                {project
                                    .links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-flex items-center gap-2 rounded-md border border-gray-300 px-3 py-1.5 text-sm hover:bg-gray-100 transition-colors"
                                            >
                                                "↗ "
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
