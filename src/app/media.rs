use leptos::prelude::*;

use crate::content::MEDIA_CHANNELS;

#[component]
pub fn MediaChannels() -> impl IntoView {
    view! {
        <section class="py-24 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-light text-gray-900 mb-6">
                        "Media & Collaborations"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Connect with me across various platforms and follow my latest content, projects, and creative collaborations."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-6 max-w-4xl mx-auto">
                    {MEDIA_CHANNELS
                        .iter()
                        .map(|channel| {
                            view! {
                                <a
                                    href=channel.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="group flex items-center gap-5 p-6 rounded-2xl bg-gray-50 hover:bg-white hover:shadow-xl transition-all duration-300"
                                >
                                    <div class=format!(
                                        "w-14 h-14 bg-gradient-to-r {} rounded-xl flex items-center justify-center text-white font-bold text-lg shadow-lg group-hover:scale-110 transition-transform",
                                        channel.gradient,
                                    )>{channel.monogram()}</div>
                                    <div class="flex-1">
                                        <div class="font-semibold text-gray-900">{channel.platform}</div>
                                        <div class="text-sm text-gray-500">{channel.handle}</div>
                                        <div class="text-sm text-gray-600">{channel.description}</div>
                                    </div>
                                    <span class="text-gray-400 group-hover:text-gray-900">"↗"</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
