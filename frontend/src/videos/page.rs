use crate::components::{EmptyState, ErrorMessage, Footer, PageHeader, Spinner};
use crate::router::Route;
use crate::videos::api::list_videos;
use crate::videos::components::{FeaturedChannels, SortSelect, VideoCard};
use crate::videos::feed::{FeedView, SortOrder, VideoFeed, VIDEO_PAGE_SIZE};
use yew::prelude::*;

#[function_component(VideosPage)]
pub fn videos_page() -> Html {
    let feed = use_mut_ref(VideoFeed::new);
    let update = use_force_update();

    // Load videos on component mount
    {
        let feed = feed.clone();
        let update = update.clone();

        use_effect_with((), move |_| {
            let ticket = feed.borrow_mut().begin_load();
            update.force_update();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = list_videos(0, VIDEO_PAGE_SIZE).await;
                if feed.borrow_mut().finish_load(ticket, outcome) {
                    update.force_update();
                }
            });
            || ()
        });
    }

    let on_toggle_channel = {
        let feed = feed.clone();
        let update = update.clone();
        Callback::from(move |channel_name: String| {
            feed.borrow_mut().toggle_channel_filter(&channel_name);
            update.force_update();
        })
    };

    let on_clear_channel = {
        let feed = feed.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            feed.borrow_mut().clear_channel_filter();
            update.force_update();
        })
    };

    let on_sort_change = {
        let feed = feed.clone();
        let update = update.clone();
        Callback::from(move |order: SortOrder| {
            feed.borrow_mut().set_sort_order(order);
            update.force_update();
        })
    };

    let feed = feed.borrow();

    let content = match feed.view() {
        FeedView::Loading => html! { <Spinner color="border-purple-600" /> },
        FeedView::NoVideos => html! {
            <EmptyState icon="📹" title="No videos found" hint="Please check back later" />
        },
        FeedView::NoMatches { channel } => html! {
            <EmptyState
                icon="🔍"
                title={format!("No videos from {}", channel)}
                hint="Pick another channel or clear the filter"
            />
        },
        FeedView::Videos(videos) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for videos.iter().map(|video| html! {
                    <VideoCard key={video.id} video={video.clone()} />
                })}
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-gradient-to-b from-purple-50 to-white">
            <PageHeader
                icon="🎬"
                title="Battle Videos"
                subtitle="Latest videos from top Pokemon GO battle creators"
                active={Route::Videos}
                theme="bg-gradient-to-r from-purple-600 to-pink-600"
            />

            <main class="container mx-auto px-4 py-8">
                <div class="mb-8">
                    <h2 class="text-2xl font-bold text-gray-800 mb-2">{"Latest Pokemon GO battle videos"}</h2>
                    <p class="text-gray-600">
                        {"Catch up on the newest uploads from tournament-proven battle channels"}
                    </p>
                </div>

                <FeaturedChannels
                    channels={feed.featured_channels().to_vec()}
                    selected={feed.selected_channel().map(str::to_string)}
                    on_toggle={on_toggle_channel}
                    on_clear={on_clear_channel}
                />

                <div class="mb-6 flex items-center justify-between">
                    <div class="text-gray-700">
                        <span class="font-semibold">{ feed.visible().len().to_string() }</span>{" videos"}
                    </div>
                    <SortSelect sort_order={feed.sort_order()} on_change={on_sort_change} />
                </div>

                <ErrorMessage error_message={feed.error().map(str::to_string)} />

                { content }
            </main>

            <Footer />
        </div>
    }
}
