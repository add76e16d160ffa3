use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{Notification, Notifier};

const DISMISS_AFTER_MS: f64 = 5000.0;

/// Shows one notification at a time; a new one replaces whatever is on screen.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Notification>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        self.current.set(Some(notification));
    }
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| toaster.dismiss(), DISMISS_AFTER_MS);

    // restart the countdown on every notification, even a repeated one
    Effect::new(move |_| {
        if toaster.current.with(Option::is_some) {
            start(());
        } else {
            stop();
        }
    });

    view! {
        <div
            class="fixed bottom-4 right-4 z-[100] w-full max-w-sm px-4 sm:px-0"
            role="region"
            aria-label="Notifications"
        >
            {move || {
                toaster
                    .current
                    .get()
                    .map(|n| {
                        let class = if n.is_destructive() {
                            "border-red-600 bg-red-600 text-white"
                        } else {
                            "border-gray-200 bg-white text-gray-900"
                        };
                        view! {
                            <div
                                class=format!(
                                    "relative flex items-start justify-between gap-4 rounded-md border p-5 pr-8 shadow-lg animate-fade-in {class}",
                                )
                                role="status"
                                aria-live="polite"
                            >
                                <div class="grid gap-1">
                                    <div class="text-sm font-semibold">{n.title}</div>
                                    <div class="text-sm opacity-90">{n.description}</div>
                                </div>
                                <button
                                    class="absolute right-2 top-2 rounded-md p-1 opacity-70 hover:opacity-100"
                                    aria-label="Close"
                                    on:click=move |_| toaster.dismiss()
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
