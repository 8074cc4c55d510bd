use crate::analyzer::models::{AnalysisResult, Recommendations, MAX_IV};
use crate::analyzer::workflow::{FileMeta, ACCEPT_ATTRIBUTE};
use crate::utils::{format_iso8601_date, or_not_available};
use web_sys::{DragEvent, File, FileList, HtmlInputElement};
use yew::prelude::*;

pub fn rating_badge_class(rating: Option<&str>) -> &'static str {
    match rating {
        None => "bg-gray-500",
        Some(r) if r.starts_with('A') => "bg-green-500",
        Some(r) if r.starts_with('B') => "bg-yellow-500",
        Some(_) => "bg-red-500",
    }
}

pub fn percentage_bar_width(percentage: Option<f64>) -> String {
    format!("width: {:.1}%", percentage.unwrap_or(0.0).clamp(0.0, 100.0))
}

fn collect_files(files: Option<FileList>) -> Vec<File> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

#[derive(Properties, PartialEq)]
pub struct UploadDropzoneProps {
    /// Receives the accepted image files of one drop or pick.
    pub on_files: Callback<Vec<File>>,
}

#[function_component(UploadDropzone)]
pub fn upload_dropzone(props: &UploadDropzoneProps) -> Html {
    let drag_active = use_state(|| false);

    let accept_images = |files: Vec<File>| -> Vec<File> {
        files
            .into_iter()
            .filter(|file| FileMeta::from_file(file).is_accepted_image())
            .collect()
    };

    let on_drag_over = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(true);
        })
    };

    let on_drag_leave = {
        let drag_active = drag_active.clone();
        Callback::from(move |_: DragEvent| drag_active.set(false))
    };

    let on_drop = {
        let drag_active = drag_active.clone();
        let on_files = props.on_files.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
            let files = collect_files(e.data_transfer().and_then(|dt| dt.files()));
            on_files.emit(accept_images(files));
        })
    };

    let on_change = {
        let on_files = props.on_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = collect_files(input.files());
            // Reset so picking the same file again still fires a change
            input.set_value("");
            on_files.emit(accept_images(files));
        })
    };

    let zone_class = if *drag_active {
        "block border-4 border-dashed rounded-lg p-12 text-center cursor-pointer transition-all border-blue-600 bg-blue-50"
    } else {
        "block border-4 border-dashed rounded-lg p-12 text-center cursor-pointer transition-all border-gray-300 hover:border-blue-600 hover:bg-gray-50"
    };

    html! {
        <label class={zone_class}
               ondragover={on_drag_over}
               ondragleave={on_drag_leave}
               ondrop={on_drop}>
            <input type="file" class="hidden" accept={ACCEPT_ATTRIBUTE} onchange={on_change} />
            <div class="text-6xl mb-4">{"📸"}</div>
            {
                if *drag_active {
                    html! { <p class="text-xl text-blue-600 font-semibold">{"Drop the screenshot here"}</p> }
                } else {
                    html! {
                        <div>
                            <p class="text-xl text-gray-700 mb-2">{"Drag and drop a Pokemon screenshot"}</p>
                            <p class="text-sm text-gray-500">{"or click to choose a file"}</p>
                            <p class="text-xs text-gray-400 mt-4">{"Supported: PNG, JPG, JPEG, WEBP (max 10MB)"}</p>
                        </div>
                    }
                }
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalysisResultPanelProps {
    pub analysis: AnalysisResult,
}

#[function_component(AnalysisResultPanel)]
pub fn analysis_result_panel(props: &AnalysisResultPanelProps) -> Html {
    let analysis = &props.analysis;

    let iv_box = |label: &str, value: Option<u8>, color: &str| {
        html! {
            <div class={classes!("p-4", "rounded-lg", "text-center", format!("bg-{color}-50"))}>
                <div class="text-sm text-gray-600 mb-1">{ label.to_string() }</div>
                <div class={classes!("text-2xl", "font-bold", format!("text-{color}-600"))}>
                    { value.unwrap_or(0).to_string() }
                </div>
                <div class="text-xs text-gray-500">{ format!("/ {}", MAX_IV) }</div>
            </div>
        }
    };

    let rating_box = |label: &str, rating: Option<&str>| {
        html! {
            <div class="border-2 border-gray-200 rounded-lg p-4">
                <div class="text-sm text-gray-600 mb-2">{ label.to_string() }</div>
                <span class={classes!("text-white", "px-4", "py-2", "rounded-lg", "font-bold", "text-xl", rating_badge_class(rating))}>
                    { rating.unwrap_or("N/A").to_string() }
                </span>
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow-xl overflow-hidden">
            <div class="bg-gradient-to-r from-red-500 to-red-600 text-white p-6">
                <h2 class="text-3xl font-bold mb-2">
                    { analysis.pokemon_name.clone().unwrap_or_else(|| "Unknown Pokemon".to_string()) }
                </h2>
                <div class="flex items-center space-x-4">
                    <div class="bg-white text-red-500 px-4 py-2 rounded-lg font-bold">
                        { format!("CP {}", or_not_available(analysis.cp)) }
                    </div>
                    <div class="bg-white text-red-500 px-4 py-2 rounded-lg font-bold">
                        { format!("HP {}", or_not_available(analysis.hp)) }
                    </div>
                    {
                        if let Some(level) = analysis.level {
                            html! {
                                <div class="bg-white text-red-500 px-4 py-2 rounded-lg font-bold">
                                    { format!("Level {}", level) }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>

            <div class="p-6">
                <div class="mb-6">
                    <div class="flex items-center justify-between mb-2">
                        <h3 class="text-xl font-bold text-gray-800">{"IV percentage"}</h3>
                        <span class="text-3xl font-bold text-blue-600">
                            { analysis.iv_percentage.map(|p| format!("{:.1}%", p)).unwrap_or_else(|| "N/A".to_string()) }
                        </span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-3">
                        <div class="bg-blue-600 h-3 rounded-full transition-all"
                             style={percentage_bar_width(analysis.iv_percentage)}></div>
                    </div>
                </div>

                <div class="grid grid-cols-3 gap-4 mb-6">
                    { iv_box("Attack", analysis.attack_iv, "red") }
                    { iv_box("Defense", analysis.defense_iv, "blue") }
                    { iv_box("Stamina", analysis.stamina_iv, "green") }
                </div>

                <div class="grid grid-cols-2 gap-4 mb-6">
                    { rating_box("Battle rating (PvP)", analysis.battle_rating.as_deref()) }
                    { rating_box("Raid rating", analysis.raid_rating.as_deref()) }
                </div>

                {
                    if let Some(recommendations) = &analysis.recommendations {
                        html! { <RecommendationsBlock recommendations={recommendations.clone()} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RecommendationsBlockProps {
    recommendations: Recommendations,
}

#[function_component(RecommendationsBlock)]
fn recommendations_block(props: &RecommendationsBlockProps) -> Html {
    let recommendations = &props.recommendations;

    let list = |title: &str, items: &[String]| {
        if items.is_empty() {
            return html! {};
        }
        html! {
            <div class="mb-4">
                <strong class="text-gray-700">{ title.to_string() }</strong>
                <ul class="list-disc list-inside mt-2 space-y-1">
                    { for items.iter().map(|item| html! { <li class="text-gray-600 text-sm">{ item }</li> }) }
                </ul>
            </div>
        }
    };

    html! {
        <div class="bg-yellow-50 border-2 border-yellow-200 rounded-lg p-6">
            <h3 class="text-lg font-bold text-gray-800 mb-4">{"💡 Recommendations"}</h3>
            <div class="mb-4">
                <strong class="text-gray-700">{"Power up: "}</strong>
                <span class={if recommendations.should_power_up { "text-green-600 font-semibold" } else { "text-gray-600" }}>
                    { if recommendations.should_power_up { "Recommended" } else { "Not recommended" } }
                </span>
            </div>
            {
                if recommendations.best_use_case.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="mb-4">
                            <strong class="text-gray-700">{"Best use: "}</strong>
                            <span class="text-gray-600">{ &recommendations.best_use_case }</span>
                        </div>
                    }
                }
            }
            { list("Recommended moves:", &recommendations.move_recommendations) }
            { list("Notes:", &recommendations.notes) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentAnalysesProps {
    pub analyses: Vec<AnalysisResult>,
}

#[function_component(RecentAnalyses)]
pub fn recent_analyses(props: &RecentAnalysesProps) -> Html {
    if props.analyses.is_empty() {
        return html! {};
    }

    html! {
        <div class="mt-12 bg-white rounded-lg shadow p-6">
            <h3 class="text-lg font-bold text-gray-800 mb-3">{"Recent analyses"}</h3>
            <ul class="divide-y divide-gray-200">
                { for props.analyses.iter().map(|analysis| html! {
                    <li key={analysis.id} class="py-2 flex justify-between text-sm">
                        <span class="font-semibold text-gray-800">
                            { analysis.pokemon_name.clone().unwrap_or_else(|| "Unknown Pokemon".to_string()) }
                        </span>
                        <span class="text-gray-600">
                            { format!(
                                "{} · CP {} · {}",
                                analysis.iv_percentage.map(|p| format!("{:.1}%", p)).unwrap_or_else(|| "N/A".to_string()),
                                or_not_available(analysis.cp),
                                format_iso8601_date(&analysis.analyzed_at)
                            ) }
                        </span>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_colour_follows_first_letter() {
        assert_eq!(rating_badge_class(Some("A+")), "bg-green-500");
        assert_eq!(rating_badge_class(Some("B-")), "bg-yellow-500");
        assert_eq!(rating_badge_class(Some("C")), "bg-red-500");
        assert_eq!(rating_badge_class(None), "bg-gray-500");
    }

    #[test]
    fn percentage_bar_is_clamped() {
        assert_eq!(percentage_bar_width(Some(97.8)), "width: 97.8%");
        assert_eq!(percentage_bar_width(None), "width: 0.0%");
        assert_eq!(percentage_bar_width(Some(140.0)), "width: 100.0%");
    }
}
