use crate::components::{EmptyState, ErrorMessage, Footer, PageHeader, Spinner};
use crate::events::api::list_events;
use crate::events::components::EventCard;
use crate::events::feed::{EventFeed, EventFeedView, EVENT_PAGE_SIZE};
use crate::router::Route;
use crate::subscription::components::SubscriptionPanel;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let feed = use_mut_ref(EventFeed::new);
    let update = use_force_update();

    {
        let feed = feed.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            let ticket = feed.borrow_mut().begin_load();
            update.force_update();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = list_events(0, EVENT_PAGE_SIZE).await;
                if feed.borrow_mut().finish_load(ticket, outcome) {
                    update.force_update();
                }
            });
            || ()
        });
    }

    let feed = feed.borrow();

    let content = match feed.view() {
        EventFeedView::Loading => html! { <Spinner color="border-red-500" /> },
        EventFeedView::Failed(message) => html! {
            <ErrorMessage error_message={Some(message.to_string())} />
        },
        EventFeedView::NoEvents => html! {
            <EmptyState icon="📭" title="No events found" hint="Please check back later" />
        },
        EventFeedView::Events(events) => html! {
            <>
                <ErrorMessage error_message={feed.error().map(str::to_string)} />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for events.iter().map(|event| html! {
                        <EventCard key={event.id} event={event.clone()} />
                    })}
                </div>
            </>
        },
    };

    html! {
        <div class="min-h-screen bg-gradient-to-b from-blue-50 to-white">
            <PageHeader
                icon="🎮"
                title="Pokemon GO Tracker"
                subtitle="Pokemon GO events and battle videos"
                active={Route::Home}
                theme="bg-red-500"
            />

            <main class="container mx-auto px-4 py-8">
                <div class="mb-12">
                    <SubscriptionPanel />
                </div>

                <div class="mb-8">
                    <h2 class="text-2xl font-bold text-gray-800 mb-2">{"Latest Pokemon GO events"}</h2>
                    <p class="text-gray-600">
                        {"Community Days, Raid Hours and special events"}
                    </p>
                </div>

                { content }
            </main>

            <Footer />
        </div>
    }
}
