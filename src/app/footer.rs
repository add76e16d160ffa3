use leptos::prelude::*;

use crate::content::{build_year, PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 bg-white border-t border-gray-100">
            <div class="max-w-6xl mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <img src=PROFILE.logo alt="Logo" class="h-8 w-auto opacity-80" />
                    <div class="text-gray-500 text-sm text-center md:text-right">
                        {format!(
                            "© {} {}. Crafted with passion for technology and culture.",
                            build_year(),
                            PROFILE.full_name(),
                        )}
                    </div>
                </div>
            </div>
        </footer>
    }
}
