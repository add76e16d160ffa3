use leptos::prelude::*;

use crate::content::{ABOUT, PROFILE, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <h2 class="text-4xl md:text-5xl font-light text-gray-900">"About Me"</h2>
                        {ABOUT
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-lg text-gray-600 leading-relaxed">{*p}</p>
                                }
                            })
                            .collect_view()}
                        <div class="flex flex-wrap gap-3">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <span class="rounded-full px-4 py-2 text-sm bg-gray-100 text-gray-700 hover:bg-gray-200 transition-colors">
                                            {*skill}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex justify-center">
                        <div class="w-80 h-80 rounded-3xl overflow-hidden shadow-2xl">
                            <img
                                src=PROFILE.portrait
                                alt=format!("{} - Front-End Developer", PROFILE.full_name())
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
