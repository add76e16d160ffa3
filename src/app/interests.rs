use leptos::prelude::*;

use crate::content::INTERESTS;

#[component]
pub fn Interests() -> impl IntoView {
    view! {
        <section id="interests" class="py-24 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-light text-gray-900 mb-6">
                        "Interests & Passions"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "Beyond coding, I'm passionate about exploring cultures through food, travel, and creative expression. These interests fuel my creativity and bring fresh perspectives to my work."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {INTERESTS
                        .iter()
                        .map(|interest| {
                            view! {
                                <div class=format!(
                                    "text-center border-2 shadow-lg hover:shadow-xl transition-all duration-500 rounded-3xl overflow-hidden hover:-translate-y-2 {}",
                                    interest.class,
                                )>
                                    <div class="pt-8 pb-4">
                                        <div class="text-4xl mb-4">{interest.icon}</div>
                                        <h3 class="text-2xl font-semibold text-gray-900">
                                            {interest.category}
                                        </h3>
                                    </div>
                                    <div class="px-6 pb-8 space-y-3">
                                        {interest
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <div class="text-gray-700 py-2 px-4 bg-white/60 rounded-xl">
                                                        {*item}
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
