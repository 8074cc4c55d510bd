use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, "Event News"),
    (Route::Pokedex, "Pokédex"),
    (Route::Analyzer, "IV Analyzer"),
    (Route::Videos, "Battle Videos"),
];

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub active: Route,
    /// Tailwind background classes of the header bar.
    pub theme: AttrValue,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <header class={classes!("text-white", "shadow-lg", props.theme.to_string())}>
            <div class="container mx-auto px-4 py-6">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-4">
                        <div class="text-4xl">{ props.icon.clone() }</div>
                        <div>
                            <h1 class="text-3xl font-bold">{ props.title.clone() }</h1>
                            <p class="text-sm opacity-80">{ props.subtitle.clone() }</p>
                        </div>
                    </div>
                    <nav class="flex space-x-2">
                        { for NAV_ITEMS.iter().map(|(route, label)| {
                            let class = if *route == props.active {
                                "px-4 py-2 rounded-lg bg-white text-gray-800 font-semibold"
                            } else {
                                "px-4 py-2 rounded-lg bg-white/20 text-white font-semibold hover:bg-white/30 transition"
                            };
                            html! {
                                <Link<Route> to={route.clone()} classes={class}>
                                    { *label }
                                </Link<Route>>
                            }
                        })}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-800 text-white mt-16 py-8">
            <div class="container mx-auto px-4 text-center">
                <p class="text-sm">{"Pokemon GO Tracker - Unofficial fan-made tool"}</p>
                <p class="text-xs text-gray-400 mt-2">
                    {"Not affiliated with Niantic or The Pokemon Company"}
                </p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(AttrValue::Static("border-gray-600"))]
    pub color: AttrValue,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex justify-center items-center py-20">
            <div class={classes!(
                "animate-spin", "rounded-full", "h-16", "w-16", "border-t-4", "border-b-4",
                props.color.to_string()
            )}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="text-center py-20 text-gray-500">
            <div class="text-6xl mb-4">{ props.icon.clone() }</div>
            <p class="text-xl">{ props.title.clone() }</p>
            {
                if let Some(hint) = &props.hint {
                    html! { <p class="text-sm mt-2">{ hint.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
