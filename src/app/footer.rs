use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white py-8">
            <div class="container mx-auto px-4 text-center">
                <p>
                    {format!(
                        "© {} {}. All rights reserved.",
                        env!("BUILD_YEAR"),
                        PROFILE.identity.name,
                    )}
                </p>
            </div>
        </footer>
    }
}
