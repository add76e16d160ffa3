use leptos::prelude::*;

use crate::content::PROFILE;

use super::nav::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let delays = ["0.6s", "1s"];
    view! {
        <section class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 via-white to-gray-50 pt-20 relative overflow-hidden">
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute top-20 left-10 text-6xl font-mono text-gray-100 animate-pulse opacity-20 select-none">
                    "</>"
                </div>
                <div
                    class="absolute top-40 right-20 text-4xl font-mono text-blue-100 animate-pulse opacity-30 select-none"
                    style="animation-delay: 1s"
                >
                    "{ }"
                </div>
                <div
                    class="absolute bottom-40 left-20 text-5xl font-mono text-purple-100 animate-pulse opacity-25 select-none"
                    style="animation-delay: 2s"
                >
                    "<div/>"
                </div>
                <div
                    class="absolute bottom-20 right-40 text-3xl font-mono text-green-100 animate-pulse opacity-20 select-none"
                    style="animation-delay: 3s"
                >
                    "function()"
                </div>
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-gradient-to-br from-blue-100 to-purple-100 rounded-full opacity-20 animate-pulse"></div>
                <div
                    class="absolute -bottom-40 -left-40 w-80 h-80 bg-gradient-to-tr from-green-100 to-blue-100 rounded-full opacity-20 animate-pulse"
                    style="animation-delay: 1s"
                ></div>
            </div>
            <div class="max-w-6xl mx-auto px-6 text-center relative z-10">
                <div class="space-y-12">
                    <div class="space-y-6">
                        <h1 class="text-5xl md:text-7xl font-thin tracking-tight text-gray-900">
                            <div class="flex flex-col md:flex-row items-center justify-center gap-4 md:gap-6">
                                <span class="relative overflow-hidden">
                                    <span
                                        class="inline-block bg-gradient-to-r from-blue-600 via-purple-600 to-emerald-600 bg-clip-text text-transparent font-semibold tracking-wide animate-slide-up"
                                        style="animation-delay: 0.2s"
                                    >
                                        {PROFILE.first_name}
                                    </span>
                                </span>
                                {PROFILE
                                    .other_names
                                    .iter()
                                    .zip(delays)
                                    .map(|(name, delay)| {
                                        view! {
                                            <span class="relative overflow-hidden">
                                                <span
                                                    class="inline-block animate-slide-up"
                                                    style=format!("animation-delay: {delay}")
                                                >
                                                    {*name}
                                                </span>
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </h1>
                        <div
                            class="h-1 w-32 bg-gradient-to-r from-blue-500 via-purple-500 to-emerald-500 mx-auto rounded-full animate-scale-x"
                            style="animation-delay: 1.4s"
                        ></div>
                    </div>
                    <p
                        class="text-xl md:text-2xl text-gray-600 max-w-4xl mx-auto leading-relaxed font-light animate-slide-up"
                        style="animation-delay: 1.6s"
                    >
                        {PROFILE.tagline}
                    </p>
                    <p
                        class="text-lg text-gray-500 font-light animate-slide-up"
                        style="animation-delay: 1.8s"
                    >
                        {PROFILE.location_line}
                    </p>
                    <div class="animate-slide-up" style="animation-delay: 2s">
                        <button
                            on:click=move |_| scroll_to_section("work")
                            class="bg-black hover:bg-gray-800 text-white px-10 py-4 text-lg rounded-full font-medium transition-all duration-300 hover:scale-105 shadow-xl"
                        >
                            "Explore My Work →"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
