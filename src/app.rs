mod about;
mod blog;
mod contact;
mod footer;
mod hero;
mod interests;
mod media;
mod nav;
mod toast;
mod work;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;

use about::About;
use blog::BlogPreview;
use contact::ContactSection;
use footer::Footer;
use hero::Hero;
use interests::Interests;
use media::MediaChannels;
use nav::NavBar;
pub use toast::Toaster;
use toast::ToastRegion;
use work::Work;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <meta name="description" content=PROFILE.tagline />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Toaster::new());

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name()) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
        <ToastRegion />
    }
}

/// The whole site: one page, navigated by scrolling.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-white">
            <NavBar />
            <Hero />
            <About />
            <Work />
            <Interests />
            <BlogPreview />
            <MediaChannels />
            <ContactSection />
            <Footer />
        </div>
    }
}
