use leptos::prelude::*;

use crate::{
    contact::{ContactForm, Field},
    content::PROFILE,
};

use super::Toaster;

const INPUT_CLASS: &str = "w-full rounded-xl border border-gray-200 bg-gray-50 px-4 py-3 text-base focus:outline-none focus:ring-2 focus:ring-gray-900 focus:bg-white transition-all duration-200";

#[component]
pub fn ContactSection() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let form = RwSignal::new(ContactForm::new(toaster));

    let value_of = move |field: Field| move || form.with(|f| f.state().get(field).to_string());

    view! {
        <section id="contact" class="py-24 bg-gray-50">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-light text-gray-900 mb-6">
                        "Let's Connect"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Whether you want to discuss a project, collaborate, or just say hello, I'd love to hear from you."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-16">
                    <form
                        class="space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            // the outcome reaches the user through the toaster
                            form.update(|f| {
                                let _ = f.submit();
                            });
                        }
                    >
                        <div>
                            <label
                                for=Field::Name.as_str()
                                class="block text-sm font-medium text-gray-700 mb-2"
                            >
                                "Name *"
                            </label>
                            <input
                                id=Field::Name.as_str()
                                name=Field::Name.as_str()
                                type="text"
                                required
                                class=INPUT_CLASS
                                prop:value=value_of(Field::Name)
                                on:input=move |ev| {
                                    form.update(|f| f.update_field(Field::Name, event_target_value(&ev)))
                                }
                            />
                        </div>
                        <div>
                            <label
                                for=Field::Email.as_str()
                                class="block text-sm font-medium text-gray-700 mb-2"
                            >
                                "Email *"
                            </label>
                            <input
                                id=Field::Email.as_str()
                                name=Field::Email.as_str()
                                type="email"
                                required
                                class=INPUT_CLASS
                                prop:value=value_of(Field::Email)
                                on:input=move |ev| {
                                    form.update(|f| f.update_field(Field::Email, event_target_value(&ev)))
                                }
                            />
                        </div>
                        <div>
                            <label
                                for=Field::Message.as_str()
                                class="block text-sm font-medium text-gray-700 mb-2"
                            >
                                "Message *"
                            </label>
                            <textarea
                                id=Field::Message.as_str()
                                name=Field::Message.as_str()
                                required
                                rows="6"
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=value_of(Field::Message)
                                on:input=move |ev| {
                                    form.update(|f| f.update_field(Field::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full inline-flex items-center justify-center gap-2 bg-black hover:bg-gray-800 text-white py-4 text-lg rounded-xl font-medium transition-all duration-300 hover:scale-[1.02] shadow-lg"
                        >
                            "Send Message ✉"
                        </button>
                    </form>
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-semibold text-gray-900 mb-4">"Get in Touch"</h3>
                            <p class="text-lg text-gray-600 leading-relaxed">
                                "I'm always open to discussing new opportunities, creative projects, or just having a conversation about technology, design, food, or travel."
                            </p>
                        </div>
                        <div class="space-y-4 text-gray-700">
                            <div class="flex items-center gap-4">
                                <span aria-hidden="true">"✉"</span>
                                <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                            </div>
                            <div class="flex items-center gap-4">
                                <span aria-hidden="true">"☎"</span>
                                <span>{PROFILE.phone}</span>
                            </div>
                            <div class="flex items-center gap-4">
                                <span aria-hidden="true">"📍"</span>
                                <span>{PROFILE.location}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
