use leptos::{ev::MouseEvent, prelude::*};

use crate::{
    contact::{Notification, Notifier},
    content::{PROFILE, SECTIONS},
};

use super::Toaster;

/// Scrolls the element with the given id into view, if there is one.
pub fn scroll_to_section(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.scroll_into_view();
    }
}

fn resume_pending() -> Notification {
    Notification::new(
        "Resume Download",
        "Resume download will be available soon. Please contact me directly for now.",
    )
}

#[component]
pub fn NavBar() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |id: &'static str| {
        scroll_to_section(id);
        set_menu_open.set(false);
    };
    let download_resume = move |_: MouseEvent| toaster.notify(resume_pending());

    view! {
        <nav class="fixed top-0 w-full bg-white/95 backdrop-blur-xl z-50 border-b border-gray-100 transition-all duration-300">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <div class="flex items-center transform hover:scale-105 transition-transform duration-200">
                        <img src=PROFILE.logo alt="Logo" class="h-10 w-auto" />
                    </div>
                    <div class="hidden md:flex items-center space-x-8">
                        {SECTIONS
                            .iter()
                            .map(|&(id, label)| {
                                view! {
                                    <button
                                        on:click=move |_| go(id)
                                        class="text-gray-600 hover:text-gray-900 transition-all duration-200 font-medium hover:scale-105"
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=download_resume
                            class="inline-flex items-center rounded-md px-3 py-1.5 text-sm bg-black text-white hover:bg-gray-900 border border-black transition-all duration-200 hover:scale-105 font-medium shadow-lg"
                        >
                            "⬇ Resume"
                        </button>
                    </div>
                    <button
                        class="md:hidden text-2xl transform hover:scale-110 transition-transform duration-200"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 pb-4 border-t border-gray-100 animate-fade-in">
                        <div class="flex flex-col space-y-4 pt-4">
                            {SECTIONS
                                .iter()
                                .map(|&(id, label)| {
                                    view! {
                                        <button
                                            on:click=move |_| go(id)
                                            class="text-left text-gray-600 hover:text-gray-900 transition-colors"
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <button
                                on:click=download_resume
                                class="w-fit inline-flex items-center rounded-md px-3 py-1.5 text-sm bg-black text-white hover:bg-gray-900 border border-black shadow-lg"
                            >
                                "⬇ Resume"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
