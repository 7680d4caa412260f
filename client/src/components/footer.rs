//! Page footer with course attribution.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__left">
                    <span class="footer__strong">"Ford Motor Company Strategy Analysis"</span>
                    <span class="footer__sep">"•"</span>
                    <span>"DSCI-5330 Business Analytics & Intelligence"</span>
                </div>
                <div class="footer__right">
                    <span>"University of North Texas"</span>
                    <span class="footer__sep">"•"</span>
                    <span>"Fall 2025"</span>
                </div>
            </div>
        </footer>
    }
}
