use crate::events::models::Event;
use crate::utils::format_published_date;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: Event,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let image_failed = use_state(|| false);
    let event = &props.event;

    let on_image_error = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: web_sys::Event| image_failed.set(true))
    };

    let banner = match &event.image_url {
        Some(image_url) if !*image_failed => html! {
            <img src={image_url.clone()} alt={event.title.clone()}
                 class="w-full h-full object-cover" onerror={on_image_error} />
        },
        _ => html! {
            <div class="w-full h-full flex items-center justify-center">
                <div class="text-center text-white">
                    <div class="text-6xl mb-2">{"🎮"}</div>
                    <p class="text-sm font-semibold opacity-90">{"Pokemon GO"}</p>
                </div>
            </div>
        },
    };

    html! {
        <div class="bg-white rounded-lg shadow-md hover:shadow-xl transition-shadow overflow-hidden">
            <div class="h-48 bg-gradient-to-br from-red-500 to-red-700 overflow-hidden relative">
                { banner }
            </div>
            <div class="p-6">
                {
                    match &event.category {
                        Some(category) => html! {
                            <span class="inline-block bg-red-500 text-white text-xs px-3 py-1 rounded-full mb-3">
                                { category }
                            </span>
                        },
                        None => html! {},
                    }
                }
                <h3 class="text-xl font-bold text-gray-800 mb-2 line-clamp-2">{ &event.title }</h3>
                {
                    match &event.summary {
                        Some(summary) => html! { <p class="text-gray-600 text-sm mb-4 line-clamp-3">{ summary }</p> },
                        None => html! {},
                    }
                }
                <div class="flex items-center justify-between">
                    <span class="text-xs text-gray-500">
                        { format_published_date(event.published_date.as_deref()) }
                    </span>
                    <a href={event.url.clone()} target="_blank" rel="noopener noreferrer"
                       class="text-blue-600 hover:text-blue-700 font-semibold text-sm transition-colors">
                        {"Details →"}
                    </a>
                </div>
            </div>
        </div>
    }
}
