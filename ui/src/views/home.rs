use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Home() -> Element {
    // Reading the shared locale signal re-renders this page when the navbar
    // switches languages.
    let locale = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string());

    rsx! {
        section { class: "page page-home", lang: "{locale}",
            header { class: "page-home__hero",
                h1 { {t!("home-title")} }
                p { class: "page-home__tagline", {t!("home-tagline-short")} }
            }
            p { {t!("home-intro-1")} }
            ul { class: "page-home__features",
                li { {t!("home-feature-sites")} }
                li { {t!("home-feature-errors")} }
                li { {t!("home-feature-sort")} }
            }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}
