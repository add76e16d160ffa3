use leptos::{prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::blog::get_previews;
use crate::{
    blog::{remember_previews, PostPreview, GLOBAL_PREVIEW_CACHE},
    content::FULL_BLOG_URL,
};

#[server(input = GetUrl)]
pub async fn get_previews_server() -> Result<Vec<PostPreview>, ServerFnError> {
    get_previews().map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn BlogPreview() -> impl IntoView {
    let posts = Resource::new(
        || (),
        |_| async move {
            let cache = &*GLOBAL_PREVIEW_CACHE;
            if let Some(p) = cache.get("") {
                return (*p).clone();
            }
            remember_previews(cache, get_previews_server().await)
        },
    );

    view! {
        <section id="blog" class="py-24 bg-gray-50">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-light text-gray-900 mb-6">
                        "SNR FoodleR Blog"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "Exploring the world through food, culture, and travel stories. Join me on a culinary journey that celebrates the art of cooking and the joy of discovery."
                    </p>
                </div>
                <Transition fallback=move || {
                    view! {
                        <div class="grid md:grid-cols-3 gap-8">
                            <div class="loading-skeleton h-96 rounded-3xl"></div>
                            <div class="loading-skeleton h-96 rounded-3xl"></div>
                            <div class="loading-skeleton h-96 rounded-3xl"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let posts = posts.await;
                        view! {
                            <div class="grid md:grid-cols-3 gap-8">
                                {posts
                                    .into_iter()
                                    .map(|post| view! { <PostCard post /> })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </Transition>
                <div class="text-center mt-12">
                    <a
                        href=FULL_BLOG_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 rounded-full border-2 border-gray-900 px-10 py-4 text-lg font-medium text-gray-900 hover:bg-gray-900 hover:text-white transition-all duration-300"
                    >
                        "Visit Full Blog ↗"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: PostPreview) -> impl IntoView {
    let date = post.display_date();
    view! {
        <article class="rounded-3xl bg-white shadow-lg hover:shadow-2xl transition-all duration-500 overflow-hidden hover:-translate-y-2">
            <div class="aspect-video overflow-hidden">
                <img
                    src=post.image
                    alt=post.title.clone()
                    class="w-full h-full object-cover hover:scale-110 transition-transform duration-700"
                />
            </div>
            <div class="p-6 space-y-3">
                <div class="flex items-center justify-between text-sm text-gray-500">
                    <span>"📅 " {date}</span>
                    <span>{post.read_time}</span>
                </div>
                <h3 class="text-xl font-semibold text-gray-900 leading-tight">{post.title}</h3>
                <p class="text-gray-600 leading-relaxed">{post.excerpt}</p>
            </div>
        </article>
    }
}
