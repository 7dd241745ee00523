use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::blog::{Blog, BlogCreate, BlogPostPage};
use crate::components::book_search::BookSearch;
use crate::components::challenges::ReadingChallenges;
use crate::components::design_system::ToastContainer;
use crate::components::discussions::{DiscussionDetail, Discussions};
use crate::components::home::Home;
use crate::components::layout::{Footer, Header};
use crate::components::library::Library;
use crate::components::profile::Profile;
use crate::components::recommendations::Recommendations;
use crate::components::sign_in::SignIn;
use crate::services::notification_service::provide_notification_state;
use crate::services::session::provide_session_state;

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_session_state();
    provide_notification_state();

    view! {
        <Router>
            <div class="flex min-h-screen flex-col bg-stone-50 text-stone-900">
                <Header />
                <main class="flex-1">
                    <Routes fallback=|| {
                        view! {
                            <div class="container mx-auto px-4 py-20 text-center text-stone-500">
                                "404 - Page Not Found"
                            </div>
                        }
                    }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/search") view=BookSearch />
                        <Route path=path!("/library") view=Library />
                        <Route path=path!("/discussions") view=Discussions />
                        <Route path=path!("/discussions/:id") view=DiscussionDetail />
                        <Route path=path!("/blog") view=Blog />
                        <Route path=path!("/blog/create") view=BlogCreate />
                        <Route path=path!("/blog/:slug") view=BlogPostPage />
                        <Route path=path!("/reading-challenges") view=ReadingChallenges />
                        <Route path=path!("/recommendations") view=Recommendations />
                        <Route path=path!("/profile") view=Profile />
                        <Route path=path!("/sign-in") view=SignIn />
                    </Routes>
                </main>
                <Footer />
            </div>
            <ToastContainer />
        </Router>
    }
}
