use crate::utils::{format_published_date, format_view_count};
use crate::videos::feed::SortOrder;
use crate::videos::models::{ChannelAggregate, VideoRecord};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoRecord,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    {
        let video = props.video.clone();
        use_effect_with(video, |video| {
            for warning in video.link_warnings() {
                log::warn!("{}", warning);
            }
            || ()
        });
    }

    let video = &props.video;
    let href = video
        .watch_id()
        .and(video.video_url.clone())
        .unwrap_or_else(|| "#".to_string());

    html! {
        <a href={href} target="_blank" rel="noopener noreferrer"
           class="block bg-white rounded-lg shadow-md hover:shadow-xl transition-all overflow-hidden group">
            <div class="relative h-48 bg-gray-900 overflow-hidden">
                {
                    if let Some(thumbnail) = &video.thumbnail_url {
                        html! {
                            <img src={thumbnail.clone()} alt={video.title.clone()}
                                 class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300" />
                        }
                    } else {
                        html! {
                            <div class="w-full h-full flex items-center justify-center bg-gradient-to-br from-red-500 to-red-700">
                                <div class="text-white text-6xl">{"▶"}</div>
                            </div>
                        }
                    }
                }
            </div>
            <div class="p-4">
                <h3 class="text-base font-semibold text-gray-800 mb-2 line-clamp-2 group-hover:text-purple-600 transition-colors">
                    { &video.title }
                </h3>
                <div class="flex items-center justify-between text-sm text-gray-600 mb-2">
                    <span class="font-medium text-purple-600">{ &video.channel_name }</span>
                </div>
                <div class="flex items-center justify-between text-xs text-gray-500">
                    <span>{ format_view_count(video.view_count) }</span>
                    <span>{ format_published_date(video.published_at.as_deref()) }</span>
                </div>
                {
                    if let Some(description) = &video.description {
                        html! { <p class="mt-2 text-xs text-gray-600 line-clamp-2">{ description }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturedChannelsProps {
    pub channels: Vec<ChannelAggregate>,
    pub selected: Option<String>,
    pub on_toggle: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(FeaturedChannels)]
pub fn featured_channels(props: &FeaturedChannelsProps) -> Html {
    if props.channels.is_empty() {
        return html! {};
    }

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="mb-8 bg-gradient-to-r from-yellow-100 to-orange-100 rounded-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-bold text-gray-800 flex items-center">
                    <span class="text-2xl mr-2">{"🏆"}</span>
                    { format!("Featured channels ({})", props.channels.len()) }
                    {
                        if let Some(selected) = &props.selected {
                            html! {
                                <span class="ml-3 text-sm text-purple-600 font-normal">
                                    { format!("(filter: {})", selected) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </h3>
                {
                    if props.selected.is_some() {
                        html! {
                            <button onclick={on_clear}
                                    class="text-sm px-3 py-1 bg-white rounded-lg hover:bg-gray-100 transition">
                                {"Clear filter"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                { for props.channels.iter().map(|channel| {
                    let is_selected = props.selected.as_deref() == Some(channel.channel_name.as_str());
                    let onclick = {
                        let on_toggle = props.on_toggle.clone();
                        let name = channel.channel_name.clone();
                        Callback::from(move |_: MouseEvent| on_toggle.emit(name.clone()))
                    };
                    let button_class = if is_selected {
                        "rounded-lg p-3 text-center transition-all bg-purple-600 text-white shadow-lg"
                    } else {
                        "rounded-lg p-3 text-center transition-all bg-white text-gray-800 hover:bg-purple-50"
                    };
                    html! {
                        <button key={channel.channel_name.clone()} {onclick} class={button_class}>
                            <div class="font-semibold text-sm">{ &channel.channel_name }</div>
                            <div class={if is_selected { "text-xs text-purple-100" } else { "text-xs text-gray-600" }}>
                                { format!("{} videos", channel.count) }
                            </div>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct SortSelectProps {
    pub sort_order: SortOrder,
    pub on_change: Callback<SortOrder>,
}

#[function_component(SortSelect)]
pub fn sort_select(props: &SortSelectProps) -> Html {
    let on_change_cb = props.on_change.clone();
    let on_change = Callback::from(move |e: Event| {
        if let Some(order) = event_value(&e).as_deref().and_then(SortOrder::from_key) {
            on_change_cb.emit(order);
        }
    });

    html! {
        <div class="flex items-center space-x-2">
            <span class="text-sm text-gray-600">{"Sort:"}</span>
            <select value={props.sort_order.key()} onchange={on_change}
                    class="px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-600">
                { for SortOrder::all_variants().into_iter().map(|order| html! {
                    <option value={order.key()} selected={order == props.sort_order}>
                        { order.display_name() }
                    </option>
                })}
            </select>
        </div>
    }
}
